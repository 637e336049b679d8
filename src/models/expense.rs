//! Expense record
//!
//! An expense is money going out: what it was for, how much, when, and
//! which category it belongs to. Records are immutable once built.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    description: String,
    amount: Money,
    date: NaiveDate,
    category: String,
}

impl Expense {
    /// Create a new expense
    ///
    /// No validation is applied: negative amounts and empty strings are kept as given.
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            date,
            category: category.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} ({})",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.amount,
            self.category
        )
    }
}
