//! Budget evaluator
//!
//! Combines category totals with stored budget limits to produce one
//! utilization line per category. Pure and infallible: missing limits are
//! zero, zero-limit overspend uses an infinity sentinel instead of a
//! division fault.

use std::collections::BTreeMap;

use crate::models::{Budgets, Category, Expense, Money};

use super::aggregation::{category_totals, CategoryTotal};

/// Budget utilization for one category
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetLine {
    pub category: Category,
    /// Total spent in the category (zero when it has no expenses)
    pub spent: Money,
    /// The stored limit (zero when the category has no budget entry)
    pub limit: Money,
    /// Spend as a percent of the limit
    ///
    /// `f64::INFINITY` when the limit is zero but money was spent; `0.0`
    /// when both are zero.
    pub percentage: f64,
    /// Whether spend exceeds the limit
    pub over_budget: bool,
    /// `limit - spent`; negative when over budget
    pub remaining: Money,
}

impl BudgetLine {
    /// How far over the limit the spend is (zero when within budget)
    pub fn over_by(&self) -> Money {
        (self.spent - self.limit).clamp_non_negative()
    }
}

/// Evaluate budget utilization from a raw expense snapshot
pub fn evaluate(expenses: &[Expense], budgets: &Budgets) -> Vec<BudgetLine> {
    evaluate_totals(&category_totals(expenses), budgets)
}

/// Evaluate budget utilization from pre-aggregated category totals
///
/// Produces one line per registered category in canonical order, each with
/// `spent = 0` when the category has no expenses, followed by lines for any
/// custom categories that do have spend.
pub fn evaluate_totals(totals: &[CategoryTotal], budgets: &Budgets) -> Vec<BudgetLine> {
    let spent_by: BTreeMap<&Category, Money> =
        totals.iter().map(|t| (&t.category, t.total)).collect();

    let mut lines: Vec<BudgetLine> = Category::registered()
        .into_iter()
        .map(|category| {
            let spent = spent_by.get(&category).copied().unwrap_or_else(Money::zero);
            build_line(category, spent, budgets)
        })
        .collect();

    for total in totals {
        if !total.category.is_registered() {
            lines.push(build_line(total.category.clone(), total.total, budgets));
        }
    }

    lines
}

fn build_line(category: Category, spent: Money, budgets: &Budgets) -> BudgetLine {
    let limit = budgets.limit(&category);

    let percentage = if limit.is_zero() {
        if spent.is_positive() {
            f64::INFINITY
        } else {
            0.0
        }
    } else {
        spent.cents() as f64 / limit.cents() as f64 * 100.0
    };

    BudgetLine {
        remaining: limit - spent,
        over_budget: percentage > 100.0,
        category,
        spent,
        limit,
        percentage,
    }
}
