//! Transaction primitives.
//!
//! A `Transaction` is one recorded income or expense event with a calendar
//! date and a non-negative amount. Entries are immutable once created and
//! are never edited or deleted.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{EngineError, Money, ResultEngine};

/// The two entry categories. The serde tags double as the persisted string
/// tags (`"Income"` / `"Expense"`), so the variant names must not change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    /// Flips income to expense and back, for the form toggle.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Income => Self::Expense,
            Self::Expense => Self::Income,
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidAmount(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    // One-based position in the ledger. Stable only because entries are
    // never removed.
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: Money,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(id: u64, kind: TransactionKind, amount: Money, date: NaiveDate) -> ResultEngine<Self> {
        if amount.is_negative() {
            return Err(EngineError::InvalidAmount(
                "amount must be >= 0".to_string(),
            ));
        }
        Ok(Self {
            id,
            kind,
            amount,
            date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn new_rejects_negative_amount() {
        let err = Transaction::new(
            1,
            TransactionKind::Expense,
            Money::new(-100),
            date("2024-01-01"),
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::InvalidAmount(_)));
    }

    #[test]
    fn kind_round_trips_through_str() {
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            assert_eq!(TransactionKind::try_from(kind.as_str()).unwrap(), kind);
        }
        assert!(TransactionKind::try_from("Transfer").is_err());
    }

    #[test]
    fn serializes_to_the_persisted_record_shape() {
        let tx = Transaction::new(
            1,
            TransactionKind::Income,
            Money::new(10000),
            date("2024-01-01"),
        )
        .unwrap();

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "type": "Income",
                "amount": 100.0,
                "date": "2024-01-01",
            })
        );
    }

    #[test]
    fn deserializes_from_the_persisted_record_shape() {
        let tx: Transaction = serde_json::from_str(
            r#"{"id": 2, "type": "Expense", "amount": 30.5, "date": "2024-01-02"}"#,
        )
        .unwrap();

        assert_eq!(tx.id, 2);
        assert_eq!(tx.kind, TransactionKind::Expense);
        assert_eq!(tx.amount, Money::new(3050));
        assert_eq!(tx.date, date("2024-01-02"));
    }
}
