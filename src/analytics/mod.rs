//! Analytics and budgeting engine
//!
//! Pure, synchronous transformations over an in-memory expense snapshot.
//! There are no fatal error conditions here: degenerate inputs produce
//! empty or zero-filled results.

pub mod aggregation;
pub mod evaluator;

pub use aggregation::{
    category_shares, category_totals, monthly_trend, CategoryShare, CategoryTotal, MonthlyBucket,
    TrendSeries,
};
pub use evaluator::{evaluate, evaluate_totals, BudgetLine};
