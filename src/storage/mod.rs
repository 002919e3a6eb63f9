//! JSON file storage layer

pub mod budgets;
pub mod expenses;
pub mod file_io;

pub use budgets::{BudgetBackend, BudgetStore, JsonBudgetBackend, MemoryBudgetBackend};
pub use expenses::ExpenseStore;
