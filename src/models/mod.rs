//! Core data models

pub mod budget;
pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod window;

pub use budget::Budgets;
pub use category::Category;
pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::Money;
pub use window::TimeWindow;
