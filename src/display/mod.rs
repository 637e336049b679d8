//! Display formatting for terminal output
//!
//! Provides utilities for formatting ledger data for the console and the
//! one-shot CLI commands.

pub mod report;
pub mod transaction;

pub use report::{format_savings, separator};
pub use transaction::{
    format_all_transactions, format_expense_list, format_expense_row, format_income_list,
    format_income_row,
};
