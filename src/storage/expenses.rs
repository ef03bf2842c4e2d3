//! Expense store backed by expenses.json
//!
//! The file holds a bare JSON array of records in insertion order. Every
//! successful append rewrites the whole file before returning.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ExpenseDraft, ExpenseRecord};

use super::file_io::{quarantine, read_json, write_json_atomic};

/// Append-only list of expense records
#[derive(Debug)]
pub struct ExpenseStore {
    path: PathBuf,
    records: Vec<ExpenseRecord>,
}

impl ExpenseStore {
    /// Load the store from `path`
    ///
    /// A missing file gives an empty store. A file that cannot be decoded is
    /// moved to `<path>.corrupt` and the store starts empty.
    pub fn load(path: PathBuf) -> BudgetResult<Self> {
        let records: Vec<ExpenseRecord> = match read_json(&path) {
            Ok(records) => records,
            Err(BudgetError::Parse(msg)) => {
                warn!("{msg}; starting with an empty expense list");
                match quarantine(&path) {
                    Ok(moved) => warn!("Unreadable data kept at {}", moved.display()),
                    Err(e) => warn!("{e}"),
                }
                Vec::new()
            }
            Err(e) => return Err(e),
        };

        debug!("Loaded {} expenses from {}", records.len(), path.display());
        Ok(Self { path, records })
    }

    /// Validate a draft, append it, and persist
    ///
    /// A rejected draft leaves the store untouched. If the write fails the
    /// record is removed again so memory matches disk.
    pub fn append(&mut self, draft: &ExpenseDraft) -> BudgetResult<&ExpenseRecord> {
        let record = draft.validate().inspect_err(|e| {
            warn!("Rejected expense: {e}");
        })?;

        self.records.push(record);

        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        let index = self.records.len() - 1;
        let record = &self.records[index];
        info!(
            category = %record.category,
            amount = record.amount.units(),
            month = %record.month,
            "Expense added"
        );
        Ok(record)
    }

    /// Write the full list to disk
    pub fn persist(&self) -> BudgetResult<()> {
        write_json_atomic(&self.path, &self.records)?;
        debug!("Saved {} expenses to {}", self.records.len(), self.path.display());
        Ok(())
    }

    /// All records in insertion order
    pub fn all(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Amount;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::load(temp_dir.path().join("expenses.json")).unwrap();
        (temp_dir, store)
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_valid_draft() {
        let (_temp_dir, mut store) = create_test_store();

        let record = store
            .append(&ExpenseDraft::new("2025-06-10", "식비/생활비", "50000", "6"))
            .unwrap()
            .clone();

        assert_eq!(store.len(), 1);
        assert_eq!(record.amount, Amount::new(50000));
        assert_eq!(store.all()[0], record);
    }

    #[test]
    fn test_append_truncates_fractional_amount() {
        let (_temp_dir, mut store) = create_test_store();

        store
            .append(&ExpenseDraft::new("", "기타", "1500.75", "3"))
            .unwrap();

        assert_eq!(store.all()[0].amount, Amount::new(1500));
    }

    #[test]
    fn test_rejected_draft_leaves_store_unchanged() {
        let (temp_dir, mut store) = create_test_store();
        store
            .append(&ExpenseDraft::new("", "교통비", "1000", "1"))
            .unwrap();

        for draft in [
            ExpenseDraft::new("", "", "100", "1"),
            ExpenseDraft::new("", "기타", "", "1"),
            ExpenseDraft::new("", "기타", "100", ""),
            ExpenseDraft::new("", "기타", "many", "1"),
        ] {
            let err = store.append(&draft).unwrap_err();
            assert!(err.is_validation());
        }

        assert_eq!(store.len(), 1);
        let reloaded = ExpenseStore::load(temp_dir.path().join("expenses.json")).unwrap();
        assert_eq!(reloaded.len(), 1);
    }

    #[test]
    fn test_insertion_order_and_duplicates_kept() {
        let (_temp_dir, mut store) = create_test_store();
        let draft = ExpenseDraft::new("", "교통비", "1250", "2");

        store.append(&draft).unwrap();
        store
            .append(&ExpenseDraft::new("", "기타", "10", "1"))
            .unwrap();
        store.append(&draft).unwrap();

        let categories: Vec<_> = store.all().iter().map(|r| r.category.as_str()).collect();
        assert_eq!(categories, vec!["교통비", "기타", "교통비"]);
    }

    #[test]
    fn test_persist_then_load_round_trip() {
        let (temp_dir, mut store) = create_test_store();
        store
            .append(&ExpenseDraft::new("2025-06-10", "식비/생활비", "50000", "6"))
            .unwrap();
        store
            .append(&ExpenseDraft::new("", "교통비", "20000", "6"))
            .unwrap();
        store.persist().unwrap();

        let reloaded = ExpenseStore::load(temp_dir.path().join("expenses.json")).unwrap();
        assert_eq!(reloaded.all(), store.all());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, "{ this is not a list").unwrap();

        let store = ExpenseStore::load(path.clone()).unwrap();

        assert!(store.is_empty());
        assert!(!path.exists());
        assert!(temp_dir.path().join("expenses.json.corrupt").exists());
    }

    #[test]
    fn test_wrong_record_shape_falls_back_to_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.json");
        fs::write(&path, r#"[{"category":"기타","amount":null,"month":"1"}]"#).unwrap();

        let store = ExpenseStore::load(path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_write_rolls_back_append() {
        let (temp_dir, mut store) = create_test_store();

        // A non-empty directory where the data file should be makes the rename fail
        let path = temp_dir.path().join("expenses.json");
        fs::create_dir(&path).unwrap();
        fs::write(path.join("occupied"), "x").unwrap();

        let err = store
            .append(&ExpenseDraft::new("", "기타", "100", "1"))
            .unwrap_err();

        assert!(err.is_storage());
        assert!(store.is_empty());
    }
}
