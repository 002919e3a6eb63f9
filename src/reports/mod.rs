//! Presentation-layer reports over the analytics engine
//!
//! Reports carry plain structured data; currency formatting happens only
//! when rendering, using the symbol from `Settings`.

pub mod breakdown;
pub mod budget;
pub mod trend;

pub use breakdown::CategoryBreakdownReport;
pub use budget::BudgetOverviewReport;
pub use trend::TrendReport;

/// Escape a string for CSV format
///
/// Custom category keys are arbitrary user input, so fields containing a
/// comma, quote, or newline must be quoted to keep the column structure.
pub(crate) fn escape_csv_field(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
