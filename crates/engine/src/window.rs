//! Time-window filtering.
//!
//! A [`Window`] narrows the visible ledger to a calendar range relative to a
//! reference date (normally "today" in the local time zone). Filtering is a
//! pure function over the entry list; it never reorders entries.

use chrono::{Datelike, Days, NaiveDate};

use crate::Transaction;

/// The time-window selector. Process-local view state, never persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Window {
    #[default]
    All,
    Today,
    ThisWeek,
    ThisMonth,
}

impl Window {
    /// Display order of the selector tabs.
    pub const ALL: [Window; 4] = [
        Window::All,
        Window::Today,
        Window::ThisWeek,
        Window::ThisMonth,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Today => "Today",
            Self::ThisWeek => "This Week",
            Self::ThisMonth => "This Month",
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Today,
            Self::Today => Self::ThisWeek,
            Self::ThisWeek => Self::ThisMonth,
            Self::ThisMonth => Self::All,
        }
    }

    #[must_use]
    pub fn previous(self) -> Self {
        match self {
            Self::All => Self::ThisMonth,
            Self::Today => Self::All,
            Self::ThisWeek => Self::Today,
            Self::ThisMonth => Self::ThisWeek,
        }
    }
}

/// Returns the inclusive lower bound of the window, if it has one.
///
/// `ThisWeek` starts on the most recent **Sunday** on or before the
/// reference date; `ThisMonth` starts on the 1st of the reference month.
#[must_use]
pub fn window_start(window: Window, reference: NaiveDate) -> Option<NaiveDate> {
    match window {
        Window::All | Window::Today => None,
        Window::ThisWeek => {
            let back = u64::from(reference.weekday().num_days_from_sunday());
            reference.checked_sub_days(Days::new(back))
        }
        Window::ThisMonth => reference.with_day(1),
    }
}

/// Filters entries by window, preserving ledger order.
///
/// `ThisWeek` and `ThisMonth` keep every entry with `date >= start`; there
/// is deliberately no upper bound, so future-dated entries stay visible.
#[must_use]
pub fn filter_by_window(
    entries: &[Transaction],
    window: Window,
    reference: NaiveDate,
) -> Vec<Transaction> {
    match window {
        Window::All => entries.to_vec(),
        Window::Today => entries
            .iter()
            .filter(|tx| tx.date == reference)
            .copied()
            .collect(),
        Window::ThisWeek | Window::ThisMonth => match window_start(window, reference) {
            Some(start) => entries
                .iter()
                .filter(|tx| tx.date >= start)
                .copied()
                .collect(),
            None => entries.to_vec(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Money, TransactionKind};

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn tx(id: u64, date_str: &str) -> Transaction {
        Transaction::new(id, TransactionKind::Income, Money::new(100), date(date_str)).unwrap()
    }

    #[test]
    fn all_is_the_identity() {
        let entries = vec![tx(1, "2024-01-05"), tx(2, "2023-06-01"), tx(3, "2025-12-31")];
        assert_eq!(
            filter_by_window(&entries, Window::All, date("2024-01-10")),
            entries
        );
    }

    #[test]
    fn today_keeps_only_the_reference_date() {
        let entries = vec![tx(1, "2024-01-10"), tx(2, "2024-01-09"), tx(3, "2024-01-10")];
        let kept = filter_by_window(&entries, Window::Today, date("2024-01-10"));
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id, 1);
        assert_eq!(kept[1].id, 3);
    }

    #[test]
    fn week_starts_on_the_most_recent_sunday() {
        // 2024-01-10 is a Wednesday; its week starts Sunday 2024-01-07.
        assert_eq!(
            window_start(Window::ThisWeek, date("2024-01-10")),
            Some(date("2024-01-07"))
        );
        // A Sunday is its own week start.
        assert_eq!(
            window_start(Window::ThisWeek, date("2024-01-07")),
            Some(date("2024-01-07"))
        );
    }

    #[test]
    fn this_week_drops_entries_before_sunday() {
        let entries = vec![tx(1, "2024-01-07"), tx(2, "2023-12-31")];
        let kept = filter_by_window(&entries, Window::ThisWeek, date("2024-01-10"));
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, 1);
    }

    #[test]
    fn this_month_starts_on_the_first() {
        assert_eq!(
            window_start(Window::ThisMonth, date("2024-02-20")),
            Some(date("2024-02-01"))
        );

        let entries = vec![tx(1, "2024-02-01"), tx(2, "2024-01-31"), tx(3, "2024-02-29")];
        let kept = filter_by_window(&entries, Window::ThisMonth, date("2024-02-20"));
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].id, 1);
        assert_eq!(kept[1].id, 3);
    }

    #[test]
    fn week_and_month_have_no_upper_bound() {
        // Future-dated entries pass the >= check on purpose.
        let entries = vec![tx(1, "2030-06-15")];
        assert_eq!(
            filter_by_window(&entries, Window::ThisWeek, date("2024-01-10")).len(),
            1
        );
        assert_eq!(
            filter_by_window(&entries, Window::ThisMonth, date("2024-01-10")).len(),
            1
        );
    }

    #[test]
    fn week_start_crosses_month_and_year_boundaries() {
        // 2024-01-03 is a Wednesday; the week began Sunday 2023-12-31.
        assert_eq!(
            window_start(Window::ThisWeek, date("2024-01-03")),
            Some(date("2023-12-31"))
        );
    }
}
