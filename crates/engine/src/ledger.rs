//! The transaction store.
//!
//! [`Ledger`] owns the authoritative in-memory entry list and keeps the
//! snapshot file in sync: the full list is rewritten after every successful
//! append. The in-memory state is the source of truth the moment `append`
//! returns; a failed write never rolls it back.

use chrono::NaiveDate;

use crate::{
    EngineError, Money, ResultEngine, SnapshotFile, Transaction, TransactionKind,
};

/// Outcome of a successful append.
///
/// `persisted` is `false` when the snapshot write failed; the entry is held
/// in memory only (already logged) and the caller should tell the user.
#[derive(Clone, Copy, Debug)]
pub struct Appended {
    pub transaction: Transaction,
    pub persisted: bool,
}

#[derive(Debug)]
pub struct Ledger {
    entries: Vec<Transaction>,
    snapshot: SnapshotFile,
    revision: u64,
}

impl Ledger {
    /// Opens the ledger from its snapshot file, once at process start.
    ///
    /// A missing snapshot means a first run: the ledger starts empty and
    /// nothing is written until the first entry exists. An unreadable or
    /// corrupt snapshot is an error — starting empty would overwrite the
    /// user's data on the next append.
    pub fn open(snapshot: SnapshotFile) -> ResultEngine<Self> {
        let entries = snapshot.load()?.unwrap_or_default();
        Ok(Self {
            entries,
            snapshot,
            revision: 0,
        })
    }

    /// Validates and appends a new entry from raw form input.
    ///
    /// The amount must parse as a non-negative decimal and the date as an
    /// ISO `YYYY-MM-DD` calendar date; on a validation error nothing is
    /// mutated. On success the entry is assigned `id = len + 1`, pushed in
    /// insertion order and the whole list is saved. A save failure is
    /// logged and reported through [`Appended::persisted`], never as an
    /// `Err`.
    pub fn append(
        &mut self,
        kind: TransactionKind,
        amount_raw: &str,
        date_raw: &str,
    ) -> ResultEngine<Appended> {
        let amount: Money = amount_raw.parse()?;
        let date = parse_date(date_raw)?;

        let transaction = Transaction::new(self.entries.len() as u64 + 1, kind, amount, date)?;
        self.entries.push(transaction);
        self.revision += 1;

        let persisted = match self.snapshot.save(&self.entries) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(
                    path = %self.snapshot.path().display(),
                    "failed to persist ledger: {err}"
                );
                false
            }
        };

        Ok(Appended {
            transaction,
            persisted,
        })
    }

    /// Read-only view of the entries, in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bumps on every successful append. The view re-derives its filtered
    /// and aggregated state whenever this changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Location of the snapshot mirror, for display.
    #[must_use]
    pub fn snapshot_path(&self) -> &std::path::Path {
        self.snapshot.path()
    }
}

fn parse_date(raw: &str) -> ResultEngine<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidDate("empty date".to_string()));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|_| EngineError::InvalidDate(format!("not a calendar date: {trimmed}")))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn open_in(dir: &tempfile::TempDir) -> Ledger {
        Ledger::open(SnapshotFile::new(dir.path().join("ledger.json"))).unwrap()
    }

    #[test]
    fn starts_empty_without_a_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = open_in(&dir);
        assert!(ledger.is_empty());
        assert_eq!(ledger.revision(), 0);
    }

    #[test]
    fn append_assigns_one_based_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = open_in(&dir);

        let first = ledger
            .append(TransactionKind::Income, "100", "2024-01-01")
            .unwrap();
        let second = ledger
            .append(TransactionKind::Expense, "30", "2024-01-02")
            .unwrap();

        assert_eq!(first.transaction.id, 1);
        assert_eq!(second.transaction.id, 2);
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.revision(), 2);
        assert!(first.persisted && second.persisted);
    }

    #[test]
    fn invalid_amount_mutates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = open_in(&dir);

        for bad in ["", "   ", "abc", "-5", "1.234"] {
            let err = ledger
                .append(TransactionKind::Income, bad, "2024-01-01")
                .unwrap_err();
            assert!(matches!(err, EngineError::InvalidAmount(_)), "input {bad:?}");
        }

        assert!(ledger.is_empty());
        assert_eq!(ledger.revision(), 0);
        assert!(!ledger.snapshot_path().exists());
    }

    #[test]
    fn invalid_date_mutates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = open_in(&dir);

        for bad in ["", "2024-13-01", "2024-02-30", "01/02/2024", "tomorrow"] {
            let err = ledger
                .append(TransactionKind::Expense, "10", bad)
                .unwrap_err();
            assert!(matches!(err, EngineError::InvalidDate(_)), "input {bad:?}");
        }

        assert!(ledger.is_empty());
    }

    #[test]
    fn zero_amount_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = open_in(&dir);
        let appended = ledger
            .append(TransactionKind::Expense, "0", "2024-01-01")
            .unwrap();
        assert_eq!(appended.transaction.amount, Money::ZERO);
    }

    #[test]
    fn no_snapshot_is_written_before_the_first_append() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = open_in(&dir);
        drop(ledger);
        assert!(!dir.path().join("ledger.json").exists());
    }

    #[test]
    fn entries_survive_a_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = open_in(&dir);
        ledger
            .append(TransactionKind::Income, "100", "2024-01-01")
            .unwrap();
        ledger
            .append(TransactionKind::Expense, "30.5", "2024-01-02")
            .unwrap();
        let before = ledger.entries().to_vec();
        drop(ledger);

        let reopened = open_in(&dir);
        assert_eq!(reopened.entries(), before.as_slice());
    }

    #[test]
    fn every_append_rewrites_the_full_list() {
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = open_in(&dir);
        ledger
            .append(TransactionKind::Income, "100", "2024-01-01")
            .unwrap();
        ledger
            .append(TransactionKind::Expense, "30", "2024-01-02")
            .unwrap();

        let persisted: Vec<Transaction> =
            serde_json::from_str(&fs::read_to_string(dir.path().join("ledger.json")).unwrap())
                .unwrap();
        assert_eq!(persisted, ledger.entries());
    }

    #[test]
    fn corrupt_snapshot_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "{ not json").unwrap();

        let err = Ledger::open(SnapshotFile::new(path)).unwrap_err();
        assert!(matches!(err, EngineError::Snapshot(_)));
    }

    #[test]
    fn save_failure_keeps_the_in_memory_entry() {
        let dir = tempfile::tempdir().unwrap();
        // Turn the snapshot's parent into a plain file after opening, so
        // that create_dir_all fails and the save cannot succeed.
        let parent = dir.path().join("state");
        let snapshot = SnapshotFile::new(parent.join("ledger.json"));
        let mut ledger = Ledger::open(snapshot).unwrap();
        fs::write(&parent, "x").unwrap();
        let appended = ledger
            .append(TransactionKind::Income, "100", "2024-01-01")
            .unwrap();

        assert!(!appended.persisted);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.revision(), 1);
    }
}
