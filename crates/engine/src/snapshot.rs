//! JSON snapshot persistence.
//!
//! The whole ledger is mirrored to a single JSON file: an ordered array of
//! transaction records. Every save rewrites the complete list; there is no
//! incremental append and no schema version field.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::Transaction;

/// Errors of the snapshot layer.
#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle to the snapshot file backing a ledger.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted transaction list.
    ///
    /// Returns `Ok(None)` when no snapshot exists yet (first run).
    pub fn load(&self) -> Result<Option<Vec<Transaction>>, SnapshotError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Overwrites the snapshot with the complete current list.
    pub fn save(&self, entries: &[Transaction]) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let payload = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, payload)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{Money, TransactionKind};

    fn tx(id: u64, kind: TransactionKind, cents: i64, date: &str) -> Transaction {
        Transaction::new(id, kind, Money::new(cents), date.parse::<NaiveDate>().unwrap()).unwrap()
    }

    #[test]
    fn missing_file_loads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotFile::new(dir.path().join("ledger.json"));
        assert!(snapshot.load().unwrap().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotFile::new(dir.path().join("ledger.json"));

        let entries = vec![
            tx(1, TransactionKind::Income, 10000, "2024-01-01"),
            tx(2, TransactionKind::Expense, 3000, "2024-01-02"),
        ];
        snapshot.save(&entries).unwrap();

        assert_eq!(snapshot.load().unwrap().unwrap(), entries);
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotFile::new(dir.path().join("ledger.json"));

        snapshot
            .save(&[tx(1, TransactionKind::Income, 100, "2024-01-01")])
            .unwrap();
        let replacement = vec![
            tx(1, TransactionKind::Income, 100, "2024-01-01"),
            tx(2, TransactionKind::Expense, 50, "2024-01-02"),
        ];
        snapshot.save(&replacement).unwrap();

        assert_eq!(snapshot.load().unwrap().unwrap(), replacement);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = SnapshotFile::new(dir.path().join("nested/state/ledger.json"));
        snapshot.save(&[]).unwrap();
        assert!(snapshot.path().exists());
    }

    #[test]
    fn corrupt_content_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.json");
        fs::write(&path, "not json").unwrap();

        let err = SnapshotFile::new(path).load().unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }
}
