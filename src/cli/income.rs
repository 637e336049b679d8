//! Income CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_income_list, format_income_row};
use crate::error::TrackerResult;
use crate::models::Income;
use crate::services::Ledger;

use super::{parse_amount, parse_date};

/// Income subcommands
#[derive(Subcommand, Debug)]
pub enum IncomeCommands {
    /// Record an income
    Add {
        /// Where the money came from
        source: String,

        /// Amount (e.g., "2000" or "2000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List all incomes
    #[command(alias = "ls")]
    List,
}

/// Handle an income command
pub fn handle_income_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: IncomeCommands,
) -> TrackerResult<()> {
    match cmd {
        IncomeCommands::Add {
            source,
            amount,
            date,
        } => {
            let amount = parse_amount(&amount)?;
            let date = parse_date(date.as_deref().unwrap_or_default())?;
            let income = Income::new(source, amount, date);
            let row = format_income_row(&income, &settings.currency_symbol, &settings.date_format);

            ledger.add_income(income)?;
            println!("Recorded income: {}", row);
        }

        IncomeCommands::List => {
            let incomes = ledger.list_incomes();
            print!(
                "{}",
                format_income_list(&incomes, &settings.currency_symbol, &settings.date_format)
            );
            if !incomes.is_empty() {
                println!(
                    "Total: {}",
                    ledger
                        .total_income()
                        .format_with_symbol(&settings.currency_symbol)
                );
            }
        }
    }

    Ok(())
}
