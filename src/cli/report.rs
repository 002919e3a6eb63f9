//! Analytics report CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::TimeWindow;
use crate::reports::{CategoryBreakdownReport, TrendReport};
use crate::storage::ExpenseStore;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Monthly spending trend over a rolling window
    Trend {
        /// Time window: 6m, 1y, or all (defaults to the configured window)
        #[arg(short, long)]
        window: Option<String>,
        /// Output CSV instead of the terminal format
        #[arg(long)]
        csv: bool,
    },

    /// Category-wise spending with percent of total
    Categories {
        /// Output CSV instead of the terminal format
        #[arg(long)]
        csv: bool,
    },
}

/// Handle a report command
pub fn handle_report_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let expenses = store.load()?;

    match cmd {
        ReportCommands::Trend { window, csv } => {
            let window = match window {
                Some(s) => s.parse::<TimeWindow>()?,
                None => settings.default_window,
            };
            let today = chrono::Local::now().date_naive();
            let report = TrendReport::generate(&expenses, window, today);

            if csv {
                let mut stdout = std::io::stdout();
                report.export_csv(&mut stdout)?;
            } else {
                print!("{}", report.format_terminal(&settings.currency_symbol));
            }
        }

        ReportCommands::Categories { csv } => {
            let report = CategoryBreakdownReport::generate(&expenses);

            if csv {
                let mut stdout = std::io::stdout();
                report.export_csv(&mut stdout)?;
            } else {
                print!("{}", report.format_terminal(&settings.currency_symbol));
            }
        }
    }

    Ok(())
}
