//! Expense store
//!
//! JSON-file backed collection of expense records for one user. The
//! analytics engine never touches this directly: it receives the snapshot
//! returned by [`ExpenseStore::load`].

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseId};

use super::file_io::{load_json, save_json_atomic};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseData {
    #[serde(default)]
    expenses: Vec<Expense>,
}

/// Repository for expense persistence
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the full expense snapshot (unordered)
    pub fn load(&self) -> TrackerResult<Vec<Expense>> {
        let data: ExpenseData = load_json(&self.path)?;
        Ok(data.expenses)
    }

    /// Add an expense and persist the collection
    pub fn add(&self, expense: Expense) -> TrackerResult<()> {
        expense.validate()?;

        let mut data: ExpenseData = load_json(&self.path)?;
        data.expenses.push(expense);
        save_json_atomic(&self.path, &data)
    }

    /// Remove an expense by ID; returns whether a record was removed
    pub fn remove(&self, id: &ExpenseId) -> TrackerResult<bool> {
        let mut data: ExpenseData = load_json(&self.path)?;
        let before = data.expenses.len();
        data.expenses.retain(|e| &e.id != id);

        if data.expenses.len() == before {
            return Ok(false);
        }

        save_json_atomic(&self.path, &data)?;
        Ok(true)
    }

    /// Resolve a full UUID or a short `exp-` prefix against the stored records
    ///
    /// The CLI prints IDs in the short `exp-XXXXXXXX` form, so this accepts
    /// any unique prefix of the UUID. Errors on no match or an ambiguous one.
    pub fn resolve_id(&self, input: &str) -> TrackerResult<ExpenseId> {
        let needle = input.strip_prefix("exp-").unwrap_or(input).to_lowercase();
        if needle.is_empty() {
            return Err(TrackerError::Validation("Expense ID cannot be empty".into()));
        }

        let matches: Vec<ExpenseId> = self
            .load()?
            .iter()
            .map(|e| e.id)
            .filter(|id| id.as_uuid().to_string().starts_with(&needle))
            .collect();

        match matches.as_slice() {
            [] => Err(TrackerError::expense_not_found(input)),
            [id] => Ok(*id),
            _ => Err(TrackerError::Validation(format!(
                "Ambiguous expense ID prefix: {}",
                input
            ))),
        }
    }

    /// Number of stored expenses
    pub fn count(&self) -> TrackerResult<usize> {
        Ok(self.load()?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, ExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        (temp_dir, store)
    }

    fn sample_expense(amount: i64) -> Expense {
        Expense::new(
            "Sample",
            Money::from_cents(amount),
            Category::Food,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_empty_load() {
        let (_temp_dir, store) = create_test_store();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_and_load() {
        let (_temp_dir, store) = create_test_store();

        let expense = sample_expense(1250);
        store.add(expense.clone()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], expense);
    }

    #[test]
    fn test_add_rejects_invalid() {
        let (_temp_dir, store) = create_test_store();

        let expense = sample_expense(-100);
        assert!(store.add(expense).is_err());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, store) = create_test_store();

        let expense = sample_expense(500);
        let id = expense.id;
        store.add(expense).unwrap();

        assert!(store.remove(&id).unwrap());
        assert_eq!(store.count().unwrap(), 0);

        // Removing again finds nothing
        assert!(!store.remove(&id).unwrap());
    }

    #[test]
    fn test_resolve_id_accepts_displayed_short_form() {
        let (_temp_dir, store) = create_test_store();

        let expense = sample_expense(500);
        let id = expense.id;
        store.add(expense).unwrap();

        // The short form printed by the CLI round-trips back to the record
        let resolved = store.resolve_id(&id.to_string()).unwrap();
        assert_eq!(resolved, id);

        // As does the full UUID
        let resolved = store.resolve_id(&id.as_uuid().to_string()).unwrap();
        assert_eq!(resolved, id);
    }

    #[test]
    fn test_resolve_id_unknown_prefix_is_not_found() {
        let (_temp_dir, store) = create_test_store();
        store.add(sample_expense(500)).unwrap();

        let err = store.resolve_id("exp-zzzzzzzz").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_resolve_id_rejects_ambiguous_prefix() {
        let (_temp_dir, store) = create_test_store();

        let uuid_a = uuid::Uuid::parse_str("aaaa1111-0000-0000-0000-000000000001").unwrap();
        let uuid_b = uuid::Uuid::parse_str("aaaa2222-0000-0000-0000-000000000002").unwrap();
        for uuid in [uuid_a, uuid_b] {
            let mut expense = sample_expense(100);
            expense.id = ExpenseId::from_uuid(uuid);
            store.add(expense).unwrap();
        }

        assert!(store.resolve_id("aaaa").is_err());
        // A longer prefix disambiguates
        assert_eq!(
            store.resolve_id("aaaa1111").unwrap(),
            ExpenseId::from_uuid(uuid_a)
        );
    }

    #[test]
    fn test_persists_across_instances() {
        let (temp_dir, store) = create_test_store();
        store.add(sample_expense(100)).unwrap();
        store.add(sample_expense(200)).unwrap();

        let store2 = ExpenseStore::new(temp_dir.path().join("expenses.json"));
        assert_eq!(store2.count().unwrap(), 2);
    }
}
