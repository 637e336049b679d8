//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_all_transactions, format_savings, separator};
use crate::error::{TrackerError, TrackerResult};
use crate::models::MonthPeriod;
use crate::services::Ledger;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Total income, expenses and savings
    Summary,

    /// Income, expenses and savings for one month
    Monthly {
        /// Month (e.g., "2025-01"; defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Every recorded expense and income
    All,
}

/// Handle a report command
pub fn handle_report_command(
    ledger: &Ledger,
    settings: &Settings,
    cmd: ReportCommands,
) -> TrackerResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ReportCommands::Summary => {
            println!("{}", format_savings(&ledger.totals(), symbol));
        }

        ReportCommands::Monthly { period } => {
            let period = match period {
                Some(p) => MonthPeriod::parse(&p)
                    .map_err(|e| TrackerError::Validation(e.to_string()))?,
                None => MonthPeriod::current(),
            };
            println!("{}", ledger.monthly_report(period).render(symbol));
        }

        ReportCommands::All => {
            let data = ledger.snapshot();
            println!("All Transactions");
            println!("{}", separator(40));
            print!(
                "{}",
                format_all_transactions(&data.expenses, &data.incomes, symbol, &settings.date_format)
            );
        }
    }

    Ok(())
}
