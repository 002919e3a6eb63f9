//! Expense CLI commands

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Category, Expense, Money};
use crate::storage::ExpenseStore;

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "100" or "100.50")
        amount: String,
        /// Category (food, transport, shopping, bills, other)
        #[arg(short, long, default_value = "other")]
        category: String,
        /// Expense date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List recorded expenses, newest first
    List {
        /// Filter by category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Remove an expense by ID
    Remove {
        /// Expense ID as shown by `list` (exp- prefixed), or a full UUID
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    store: &ExpenseStore,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
            date,
        } => {
            let amount = Money::parse(&amount)?;
            let category = Category::from(category);
            let date = match date {
                Some(s) => chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d").map_err(|_| {
                    TrackerError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s))
                })?,
                None => chrono::Local::now().date_naive(),
            };

            let expense = Expense::new(description, amount, category, date);
            let id = expense.id;
            store.add(expense)?;
            println!("Added expense {}", id);
        }

        ExpenseCommands::List { category, limit } => {
            let mut expenses = store.load()?;

            if let Some(key) = category {
                let category = Category::from(key);
                expenses.retain(|e| e.category == category);
            }

            expenses.sort_by(|a, b| b.date.cmp(&a.date));

            if expenses.is_empty() {
                println!("No expenses recorded.");
                return Ok(());
            }

            for expense in expenses.iter().take(limit) {
                println!(
                    "{}  {}  {:<24} {:>12}  {}",
                    expense.id,
                    expense.date.format(&settings.date_format),
                    expense.description,
                    expense.amount.format_with_symbol(&settings.currency_symbol),
                    expense.category,
                );
            }
        }

        ExpenseCommands::Remove { id } => {
            let id = store.resolve_id(&id)?;

            if store.remove(&id)? {
                println!("Removed expense {}", id);
            } else {
                return Err(TrackerError::expense_not_found(id.to_string()));
            }
        }
    }

    Ok(())
}
