//! Category Breakdown Report
//!
//! Category-wise spending with each category's share of the grand total.

use std::io::Write;

use crate::analytics::{category_shares, category_totals, CategoryShare};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Money};

const BAR_WIDTH: usize = 30;

/// Per-category spending breakdown
#[derive(Debug, Clone)]
pub struct CategoryBreakdownReport {
    /// Categories with spend, canonical order, with percent of grand total
    pub shares: Vec<CategoryShare>,
    /// Grand total across all categories
    pub grand_total: Money,
}

impl CategoryBreakdownReport {
    /// Generate the report from an expense snapshot
    pub fn generate(expenses: &[Expense]) -> Self {
        let totals = category_totals(expenses);
        let grand_total = totals.iter().map(|t| t.total).sum();
        Self {
            shares: category_shares(&totals),
            grand_total,
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str("Category-wise Spending\n");
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.shares.is_empty() {
            output.push_str("No expenses recorded.\n");
            return output;
        }

        let max = self
            .shares
            .iter()
            .map(|s| s.total)
            .max()
            .unwrap_or_else(Money::zero);

        for share in &self.shares {
            let width = if max.is_zero() {
                0.0
            } else {
                share.total.cents() as f64 / max.cents() as f64
            };
            let filled = (width * BAR_WIDTH as f64).round() as usize;

            output.push_str(&format!(
                "{:<16} {:>12} {:>6.1}%  {}\n",
                share.category.label(),
                share.total.format_with_symbol(currency),
                share.percent,
                "#".repeat(filled),
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<16} {:>12}\n",
            "TOTAL",
            self.grand_total.format_with_symbol(currency)
        ));

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        writeln!(writer, "Category,Total,Percent of Total")
            .map_err(|e| TrackerError::Export(e.to_string()))?;

        for share in &self.shares {
            writeln!(
                writer,
                "{},{},{:.1}",
                super::escape_csv_field(share.category.key()),
                share.total,
                share.percent
            )
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
