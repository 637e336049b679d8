//! Expense CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_list, format_expense_row};
use crate::error::TrackerResult;
use crate::models::Expense;
use crate::services::Ledger;

use super::{parse_amount, parse_date};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// What the money was spent on
        description: String,

        /// Amount (e.g., "4.50" or "$12")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Expense category
        #[arg(short, long, default_value = "Uncategorized")]
        category: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all expenses
    #[command(alias = "ls")]
    List,
}

/// Handle an expense command
pub fn handle_expense_command(
    ledger: &Ledger,
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
            let amount = parse_amount(&amount)?;
            let date = parse_date(date.as_deref().unwrap_or_default())?;
            let expense = Expense::new(description, amount, date, category);
            let row = format_expense_row(&expense, &settings.currency_symbol, &settings.date_format);

            ledger.add_expense(expense)?;
            println!("Recorded expense: {}", row);
        }

        ExpenseCommands::List => {
            let expenses = ledger.list_expenses();
            print!(
                "{}",
                format_expense_list(&expenses, &settings.currency_symbol, &settings.date_format)
            );
            if !expenses.is_empty() {
                println!(
                    "Total: {}",
                    ledger
                        .total_expenses()
                        .format_with_symbol(&settings.currency_symbol)
                );
            }
        }
    }

    Ok(())
}
