//! Budget store
//!
//! Holds the per-category spending limits. The persistence mechanism is an
//! injected backend so the store has no ambient global state and tests can
//! run entirely in memory. Every successful edit writes the full mapping
//! through to the backend (last-write-wins, atomic replace-on-write).

use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budgets, Category, Money};

use super::file_io::{load_json, save_json_atomic};

/// Persistence boundary for the budget mapping
pub trait BudgetBackend {
    /// Load the stored mapping, or `None` if nothing has been stored yet
    fn load(&self) -> TrackerResult<Option<Budgets>>;

    /// Replace the stored mapping with the given one
    fn save(&self, budgets: &Budgets) -> TrackerResult<()>;
}

/// JSON-file backed budget persistence
pub struct JsonBudgetBackend {
    path: PathBuf,
}

impl JsonBudgetBackend {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BudgetBackend for JsonBudgetBackend {
    fn load(&self) -> TrackerResult<Option<Budgets>> {
        if !self.path.exists() {
            return Ok(None);
        }
        Ok(Some(load_json(&self.path)?))
    }

    fn save(&self, budgets: &Budgets) -> TrackerResult<()> {
        save_json_atomic(&self.path, budgets)
    }
}

/// In-memory budget persistence for tests
#[derive(Default)]
pub struct MemoryBudgetBackend {
    stored: Mutex<Option<Budgets>>,
}

impl MemoryBudgetBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BudgetBackend for MemoryBudgetBackend {
    fn load(&self) -> TrackerResult<Option<Budgets>> {
        let stored = self
            .stored
            .lock()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire lock: {}", e)))?;
        Ok(stored.clone())
    }

    fn save(&self, budgets: &Budgets) -> TrackerResult<()> {
        let mut stored = self
            .stored
            .lock()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire lock: {}", e)))?;
        *stored = Some(budgets.clone());
        Ok(())
    }
}

/// The budget store: defaults on first use, clamped write-through edits
pub struct BudgetStore<B: BudgetBackend> {
    backend: B,
}

impl<B: BudgetBackend> BudgetStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Current budget mapping, initializing (and persisting) the defaults
    /// if none exist yet
    pub fn budgets(&self) -> TrackerResult<Budgets> {
        match self.backend.load()? {
            Some(budgets) => Ok(budgets),
            None => {
                let defaults = Budgets::defaults();
                self.backend.save(&defaults)?;
                Ok(defaults)
            }
        }
    }

    /// Set one category's limit and write the whole mapping through
    ///
    /// Negative limits are clamped to zero. Returns the updated mapping.
    pub fn set_budget(&self, category: Category, limit: Money) -> TrackerResult<Budgets> {
        let mut budgets = self.budgets()?;
        budgets.set(category, limit);
        self.backend.save(&budgets)?;
        Ok(budgets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_first_use_initializes_defaults() {
        let store = BudgetStore::new(MemoryBudgetBackend::new());

        let budgets = store.budgets().unwrap();
        assert_eq!(budgets.limit(&Category::Food).cents(), 50000);

        // Defaults were persisted, not just returned
        let budgets_again = store.budgets().unwrap();
        assert_eq!(budgets, budgets_again);
    }

    #[test]
    fn test_set_budget_clamps_negative() {
        let store = BudgetStore::new(MemoryBudgetBackend::new());

        let updated = store
            .set_budget(Category::Food, Money::from_cents(-500))
            .unwrap();
        assert!(updated.limit(&Category::Food).is_zero());
    }

    #[test]
    fn test_set_budget_writes_through() {
        let store = BudgetStore::new(MemoryBudgetBackend::new());

        store
            .set_budget(Category::Shopping, Money::from_units(450))
            .unwrap();

        let reloaded = store.budgets().unwrap();
        assert_eq!(reloaded.limit(&Category::Shopping).cents(), 45000);
        // The untouched entries survived the full-mapping write
        assert_eq!(reloaded.limit(&Category::Bills).cents(), 100000);
    }

    #[test]
    fn test_json_backend_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budgets.json");

        let store = BudgetStore::new(JsonBudgetBackend::new(path.clone()));
        store
            .set_budget(Category::Transport, Money::from_units(250))
            .unwrap();

        // A fresh store over the same file sees the edit
        let store2 = BudgetStore::new(JsonBudgetBackend::new(path));
        let budgets = store2.budgets().unwrap();
        assert_eq!(budgets.limit(&Category::Transport).cents(), 25000);
    }

    #[test]
    fn test_custom_category_limit() {
        let store = BudgetStore::new(MemoryBudgetBackend::new());

        let custom = Category::Custom("gadgets".into());
        let updated = store
            .set_budget(custom.clone(), Money::from_units(100))
            .unwrap();
        assert_eq!(updated.limit(&custom).cents(), 10000);
    }
}
