//! Business logic layer
//!
//! The ledger service sits between the storage layer and the front-ends
//! (console, CLI, HTTP API).

pub mod ledger;

pub use ledger::{Ledger, MonthlySummary, Totals};
