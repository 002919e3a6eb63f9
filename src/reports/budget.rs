//! Budget Overview Report
//!
//! One line per category showing spent, limit, remaining, and a utilization
//! bar, with over-budget lines flagged.

use std::io::Write;

use crate::analytics::{evaluate, BudgetLine};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Budgets, Expense};

const BAR_WIDTH: usize = 20;

/// Budget utilization overview
#[derive(Debug, Clone)]
pub struct BudgetOverviewReport {
    /// One line per registered category, then customs with spend
    pub lines: Vec<BudgetLine>,
}

impl BudgetOverviewReport {
    /// Generate the report from an expense snapshot and stored budgets
    pub fn generate(expenses: &[Expense], budgets: &Budgets) -> Self {
        Self {
            lines: evaluate(expenses, budgets),
        }
    }

    /// Count of over-budget categories
    pub fn over_budget_count(&self) -> usize {
        self.lines.iter().filter(|l| l.over_budget).count()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Budget Overview\n");
        output.push_str(&"=".repeat(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>12} {:>12} {:>12}\n",
            "Category", "Spent", "Budget", "Remaining"
        ));
        output.push_str(&"-".repeat(72));
        output.push('\n');

        for line in &self.lines {
            // Bar shows utilization capped at the full width
            let ratio = if line.limit.is_zero() {
                if line.spent.is_positive() {
                    1.0
                } else {
                    0.0
                }
            } else {
                (line.spent.cents() as f64 / line.limit.cents() as f64).min(1.0)
            };
            let filled = (ratio * BAR_WIDTH as f64).round() as usize;
            let bar = format!("[{}{}]", "#".repeat(filled), " ".repeat(BAR_WIDTH - filled));

            output.push_str(&format!(
                "{:<16} {:>12} {:>12} {:>12} {}{}\n",
                line.category.label(),
                line.spent.format_with_symbol(currency),
                line.limit.format_with_symbol(currency),
                line.remaining.format_with_symbol(currency),
                bar,
                if line.over_budget { " !" } else { "" },
            ));

            if line.over_budget {
                output.push_str(&format!(
                    "  Over budget by {}\n",
                    line.over_by().format_with_symbol(currency)
                ));
            }
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        writeln!(writer, "Category,Spent,Budget,Remaining,Over Budget")
            .map_err(|e| TrackerError::Export(e.to_string()))?;

        for line in &self.lines {
            writeln!(
                writer,
                "{},{},{},{},{}",
                super::escape_csv_field(line.category.key()),
                line.spent,
                line.limit,
                line.remaining,
                line.over_budget
            )
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;

    fn expense(amount: i64, category: Category) -> Expense {
        Expense::new(
            "test",
            Money::from_cents(amount),
            category,
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        )
    }

    #[test]
    fn test_terminal_format_within_budget() {
        let report =
            BudgetOverviewReport::generate(&[expense(15000, Category::Food)], &Budgets::defaults());
        let output = report.format_terminal("Rs");

        assert!(output.contains("Budget Overview"));
        assert!(output.contains("Food"));
        assert!(output.contains("Rs 150.00"));
        assert!(output.contains("Rs 500.00"));
        assert!(!output.contains("Over budget"));
        assert_eq!(report.over_budget_count(), 0);
    }

    #[test]
    fn test_terminal_format_over_budget() {
        let report =
            BudgetOverviewReport::generate(&[expense(60000, Category::Food)], &Budgets::defaults());
        let output = report.format_terminal("Rs");

        assert!(output.contains("!"));
        assert!(output.contains("Over budget by Rs 100.00"));
        assert_eq!(report.over_budget_count(), 1);
    }

    #[test]
    fn test_all_registered_categories_listed_with_no_expenses() {
        let report = BudgetOverviewReport::generate(&[], &Budgets::defaults());
        let output = report.format_terminal("Rs");

        for category in crate::models::Category::registered() {
            assert!(output.contains(&category.label()));
        }
    }

    #[test]
    fn test_csv_export() {
        let report =
            BudgetOverviewReport::generate(&[expense(15000, Category::Food)], &Budgets::defaults());

        let mut csv = Vec::new();
        report.export_csv(&mut csv).unwrap();
        let csv = String::from_utf8(csv).unwrap();

        assert!(csv.contains("Category,Spent,Budget,Remaining,Over Budget"));
        assert!(csv.contains("food,150.00,500.00,350.00,false"));
    }

    #[test]
    fn test_csv_export_quotes_comma_in_category_key() {
        let custom = Category::Custom("gadgets, misc".into());
        let report = BudgetOverviewReport::generate(&[expense(1000, custom)], &Budgets::defaults());

        let mut csv = Vec::new();
        report.export_csv(&mut csv).unwrap();
        let csv = String::from_utf8(csv).unwrap();

        // The custom category line keeps five columns despite the comma
        assert!(csv.contains("\"gadgets, misc\",10.00,0.00,-10.00,true"));
    }
}
