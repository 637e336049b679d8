//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger service.

pub mod console;
pub mod expense;
pub mod export;
pub mod income;
pub mod report;
pub mod serve;

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

pub use console::Console;
pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportCommands, ExportFormat};
pub use income::{handle_income_command, IncomeCommands};
pub use report::{handle_report_command, ReportCommands};
pub use serve::{handle_serve_command, ServeArgs};

/// Parse a `YYYY-MM-DD` date; empty input means today
pub fn parse_date(input: &str) -> TrackerResult<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(chrono::Local::now().date_naive());
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| {
        TrackerError::Validation(format!(
            "Invalid date '{}': {} (expected YYYY-MM-DD)",
            input, e
        ))
    })
}

pub(crate) fn parse_amount(input: &str) -> TrackerResult<Money> {
    Money::parse(input)
        .map_err(|e| TrackerError::Validation(format!("Invalid amount '{}': {}", input, e)))
}
