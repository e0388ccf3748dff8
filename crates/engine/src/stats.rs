//! Balance and chart aggregation over a filtered entry subset.

use crate::{Money, Transaction, TransactionKind};

/// Per-kind totals for the two-bar chart.
///
/// Both totals are non-negative sums; the expense total is *not* negated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    pub income: Money,
    pub expense: Money,
}

impl CategoryTotals {
    /// The fixed chart category labels. Display names are a view concern;
    /// these tags are the data contract with the chart renderer.
    pub const INCOME_LABEL: &'static str = "Income";
    pub const EXPENSE_LABEL: &'static str = "Expense";

    /// Chart dataset: each label mapped to its total, income first.
    #[must_use]
    pub fn dataset(&self) -> [(&'static str, Money); 2] {
        [
            (Self::INCOME_LABEL, self.income),
            (Self::EXPENSE_LABEL, self.expense),
        ]
    }
}

/// Net balance: income adds, expense subtracts.
///
/// Folds in list order from zero; with integer cents the result is exact,
/// the fixed order just keeps it reproducible.
#[must_use]
pub fn balance(entries: &[Transaction]) -> Money {
    entries.iter().fold(Money::ZERO, |acc, tx| match tx.kind {
        TransactionKind::Income => acc + tx.amount,
        TransactionKind::Expense => acc - tx.amount,
    })
}

/// Independent income and expense sums over the subset.
#[must_use]
pub fn category_totals(entries: &[Transaction]) -> CategoryTotals {
    entries
        .iter()
        .fold(CategoryTotals::default(), |mut acc, tx| {
            match tx.kind {
                TransactionKind::Income => acc.income += tx.amount,
                TransactionKind::Expense => acc.expense += tx.amount,
            }
            acc
        })
}
