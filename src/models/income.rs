//! Income record
//!
//! Money coming in, tagged with where it came from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A single recorded income
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Income {
    source: String,
    amount: Money,
    date: NaiveDate,
}

impl Income {
    /// Create a new income record
    pub fn new(source: impl Into<String>, amount: Money, date: NaiveDate) -> Self {
        Self {
            source: source.into(),
            amount,
            date,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Income {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {}",
            self.date.format("%Y-%m-%d"),
            self.source,
            self.amount
        )
    }
}
