//! Expense record model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use crate::error::{TrackerError, TrackerResult};

/// A single expense record
///
/// The analytics engine receives these as a read-only snapshot and assumes
/// nothing about their order. Dates are date-only values with no time zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (non-negative)
    pub amount: Money,

    /// Spending category
    pub category: Category,

    /// Calendar date of the expense
    pub date: NaiveDate,
}

impl Expense {
    /// Create a new expense with a fresh ID
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into(),
            amount,
            category,
            date,
        }
    }

    /// Validate the expense
    pub fn validate(&self) -> TrackerResult<()> {
        if self.description.trim().is_empty() {
            return Err(TrackerError::Validation(
                "Expense description cannot be empty".into(),
            ));
        }

        if self.amount.is_negative() {
            return Err(TrackerError::Validation(format!(
                "Expense amount cannot be negative: {}",
                self.amount
            )));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.date, self.description, self.amount, self.category
        )
    }
}
