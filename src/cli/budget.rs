//! Budget CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::TrackerResult;
use crate::models::{Category, Money};
use crate::reports::BudgetOverviewReport;
use crate::storage::{BudgetBackend, BudgetStore, ExpenseStore};

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show budget utilization per category
    Show {
        /// Output CSV instead of the terminal format
        #[arg(long)]
        csv: bool,
    },

    /// Set the spending limit for a category
    Set {
        /// Category (food, transport, shopping, bills, other)
        category: String,
        /// New limit (e.g., "500" or "500.00"); negative values clamp to 0
        #[arg(allow_negative_numbers = true)]
        amount: String,
    },
}

/// Handle a budget command
pub fn handle_budget_command<B: BudgetBackend>(
    budget_store: &BudgetStore<B>,
    expense_store: &ExpenseStore,
    settings: &Settings,
    cmd: BudgetCommands,
) -> TrackerResult<()> {
    match cmd {
        BudgetCommands::Show { csv } => {
            let expenses = expense_store.load()?;
            let budgets = budget_store.budgets()?;
            let report = BudgetOverviewReport::generate(&expenses, &budgets);

            if csv {
                let mut stdout = std::io::stdout();
                report.export_csv(&mut stdout)?;
            } else {
                print!("{}", report.format_terminal(&settings.currency_symbol));
            }
        }

        BudgetCommands::Set { category, amount } => {
            let category = Category::from(category);
            // Non-numeric input coerces to zero rather than failing
            let amount = Money::parse(&amount).unwrap_or_else(|_| Money::zero());

            let updated = budget_store.set_budget(category.clone(), amount)?;
            println!(
                "Budget for {} set to {}",
                category.label(),
                updated
                    .limit(&category)
                    .format_with_symbol(&settings.currency_symbol)
            );
        }
    }

    Ok(())
}
