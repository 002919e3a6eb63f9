//! Monthly Trend Report
//!
//! Renders the trend series for terminal display with bars scaled against
//! the busiest month, and exports it as CSV.

use std::io::Write;

use chrono::NaiveDate;

use crate::analytics::{monthly_trend, TrendSeries};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, TimeWindow};

const BAR_WIDTH: usize = 30;

/// Monthly spending trend report
#[derive(Debug, Clone)]
pub struct TrendReport {
    /// The window the report covers
    pub window: TimeWindow,
    /// Ascending monthly buckets
    pub series: TrendSeries,
}

impl TrendReport {
    /// Generate the report for a window ending at `today`
    pub fn generate(expenses: &[Expense], window: TimeWindow, today: NaiveDate) -> Self {
        Self {
            window,
            series: monthly_trend(expenses, window, today),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Spending Trends ({})\n", self.window));
        output.push_str(&"=".repeat(64));
        output.push('\n');

        if self.series.is_empty() {
            output.push_str("No months in range.\n");
            return output;
        }

        let widths = self.series.relative_widths();
        for (bucket, width) in self.series.buckets.iter().zip(widths) {
            let filled = (width * BAR_WIDTH as f64).round() as usize;
            output.push_str(&format!(
                "{:<10} {:>12} {}\n",
                bucket.label,
                bucket.total.format_with_symbol(currency),
                "#".repeat(filled),
            ));
        }

        output
    }

    /// Export the report to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        writeln!(writer, "Month,Total,Expense Count")
            .map_err(|e| TrackerError::Export(e.to_string()))?;

        for bucket in &self.series.buckets {
            writeln!(
                writer,
                "{},{},{}",
                super::escape_csv_field(&bucket.label),
                bucket.total,
                bucket.expenses.len()
            )
            .map_err(|e| TrackerError::Export(e.to_string()))?;
        }

        Ok(())
    }
}
