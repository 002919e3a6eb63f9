use anyhow::Result;
use clap::{Parser, Subcommand};

use spentrack::cli::{
    handle_budget_command, handle_expense_command, handle_report_command, BudgetCommands,
    ExpenseCommands, ReportCommands,
};
use spentrack::config::{paths::AppPaths, settings::Settings};
use spentrack::storage::{BudgetStore, ExpenseStore, JsonBudgetBackend};

#[derive(Parser)]
#[command(
    name = "spentrack",
    version,
    about = "Expense tracking with per-category budgets and spending analytics",
    long_about = "spentrack records expenses, keeps per-category budget limits, \
                  and reports spending analytics: budget utilization with \
                  overflow detection and monthly trends over a rolling window."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Analytics reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = AppPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let expense_store = ExpenseStore::new(paths.expenses_file());
    let budget_store = BudgetStore::new(JsonBudgetBackend::new(paths.budgets_file()));

    match cli.command {
        Commands::Expense(cmd) => {
            handle_expense_command(&expense_store, &settings, cmd)?;
        }
        Commands::Budget(cmd) => {
            handle_budget_command(&budget_store, &expense_store, &settings, cmd)?;
        }
        Commands::Report(cmd) => {
            handle_report_command(&expense_store, &settings, cmd)?;
        }
        Commands::Config => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!("Budgets file:   {}", paths.budgets_file().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Currency:       {}", settings.currency_symbol);
            println!("Default window: {}", settings.default_window);
        }
    }

    Ok(())
}
