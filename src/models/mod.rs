//! Core data models for the expense tracker
//!
//! This module contains the value types of the ledger: money amounts,
//! expense and income records, and calendar month periods.

pub mod expense;
pub mod income;
pub mod money;
pub mod period;

pub use expense::Expense;
pub use income::Income;
pub use money::{Money, MoneyParseError};
pub use period::{MonthPeriod, PeriodParseError};
