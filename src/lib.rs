//! spentrack - Expense tracking with budgets and spending analytics
//!
//! The core of the crate is the analytics and budgeting engine: pure
//! functions that turn an unordered expense snapshot into per-category
//! budget utilization and a month-bucketed trend series over a rolling
//! window. Everything else is plumbing around it.
//!
//! # Architecture
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, categories, budgets, money)
//! - `storage`: JSON file storage layer
//! - `analytics`: Pure aggregation engine and budget evaluator
//! - `reports`: Terminal/CSV presentation over analytics output
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use spentrack::analytics::{evaluate, monthly_trend};
//! use spentrack::models::{Budgets, Category, Expense, Money, TimeWindow};
//!
//! let expenses = vec![Expense::new(
//!     "Lunch",
//!     Money::from_cents(1250),
//!     Category::Food,
//!     NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
//! )];
//!
//! let today = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();
//! let series = monthly_trend(&expenses, TimeWindow::SixMonths, today);
//! let lines = evaluate(&expenses, &Budgets::defaults());
//! assert!(!lines[0].over_budget);
//! assert_eq!(series.buckets.len(), 7);
//! ```

pub mod analytics;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
