//! Aggregation engine
//!
//! Pure transformations over an expense snapshot: per-category totals,
//! percentage-of-total shares, and the month-bucketed trend series for a
//! rolling time window. Everything is recomputed from scratch on each call;
//! the caller decides when data changed.

use std::collections::BTreeMap;

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{Category, Expense, Money, TimeWindow};

/// Total spend for one category
///
/// Only categories actually present in the expense set appear; consumers
/// must handle absence explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// A category's share of the grand total
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// Percent of the grand total; 0.0 when the grand total is zero
    pub percent: f64,
}

/// One calendar month of the trend series
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyBucket {
    pub year: i32,
    pub month: u32,
    /// Formatted month label, e.g. "Jan 2024"
    pub label: String,
    /// Exact total of all expenses dated within the month
    pub total: Money,
    /// The matching expense subset, sorted by date
    pub expenses: Vec<Expense>,
}

/// Chronologically ascending monthly buckets, one per month in the window
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrendSeries {
    pub buckets: Vec<MonthlyBucket>,
}

impl TrendSeries {
    /// The largest bucket total in the series
    pub fn max_total(&self) -> Money {
        self.buckets
            .iter()
            .map(|b| b.total)
            .max()
            .unwrap_or_else(Money::zero)
    }

    /// Each bucket's total relative to the series maximum, in `0.0..=1.0`
    ///
    /// When every total is zero, every width is zero.
    pub fn relative_widths(&self) -> Vec<f64> {
        let max = self.max_total();
        if max.is_zero() {
            return vec![0.0; self.buckets.len()];
        }
        self.buckets
            .iter()
            .map(|b| b.total.cents() as f64 / max.cents() as f64)
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Group expenses by category, summing amounts exactly
///
/// The result is in canonical category order and its totals sum to exactly
/// the sum of all expense amounts.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<Category, Money> = BTreeMap::new();
    for expense in expenses {
        *totals
            .entry(expense.category.clone())
            .or_insert_with(Money::zero) += expense.amount;
    }

    totals
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect()
}

/// Percentage-of-grand-total per category
pub fn category_shares(totals: &[CategoryTotal]) -> Vec<CategoryShare> {
    let grand: Money = totals.iter().map(|t| t.total).sum();

    totals
        .iter()
        .map(|t| {
            let percent = if grand.is_zero() {
                0.0
            } else {
                t.total.cents() as f64 / grand.cents() as f64 * 100.0
            };
            CategoryShare {
                category: t.category.clone(),
                total: t.total,
                percent,
            }
        })
        .collect()
}

/// Build the monthly trend series for a time window ending at `today`
///
/// Every calendar month in the window gets a bucket, including months with
/// no expenses, so the series shows gaps instead of skipping them. For
/// `AllTime` the window starts at the earliest expense date. A degenerate
/// window (start after end) yields an empty series.
pub fn monthly_trend(expenses: &[Expense], window: TimeWindow, today: NaiveDate) -> TrendSeries {
    let start = match window.months_back() {
        Some(n) => today
            .checked_sub_months(Months::new(n))
            .unwrap_or(today),
        None => expenses.iter().map(|e| e.date).min().unwrap_or(today),
    };

    let start_month = (start.year(), start.month());
    let end_month = (today.year(), today.month());
    if start_month > end_month {
        return TrendSeries::default();
    }

    // One pass over the expenses, bucketed by (year, month). Month bounds
    // are inclusive on both ends, which at month granularity is exactly a
    // (year, month) match.
    let mut by_month: BTreeMap<(i32, u32), Vec<Expense>> = BTreeMap::new();
    for expense in expenses {
        let key = (expense.date.year(), expense.date.month());
        if key >= start_month && key <= end_month {
            by_month.entry(key).or_default().push(expense.clone());
        }
    }

    let mut buckets = Vec::new();
    let mut current = start_month;
    loop {
        let (year, month) = current;
        let mut month_expenses = by_month.remove(&current).unwrap_or_default();
        month_expenses.sort_by_key(|e| e.date);
        let total: Money = month_expenses.iter().map(|e| e.amount).sum();

        buckets.push(MonthlyBucket {
            year,
            month,
            label: month_label(year, month),
            total,
            expenses: month_expenses,
        });

        if current == end_month {
            break;
        }
        current = next_month(year, month);
    }

    TrendSeries { buckets }
}

fn month_label(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.format("%b %Y").to_string(),
        None => format!("{}-{:02}", year, month),
    }
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}
