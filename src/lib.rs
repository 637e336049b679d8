//! Expense Tracker - record expenses and income, see where the money goes
//!
//! This library provides the core of the expense tracker: an append-only
//! ledger of expenses and incomes persisted as JSON, monthly and overall
//! aggregates, and three front-ends over it (an interactive console, one-shot
//! CLI commands and a small HTTP API).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Money, expense and income records, month periods
//! - `storage`: JSON ledger file with atomic rewrites
//! - `services`: The shared ledger and its aggregates
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers and the interactive console
//! - `api`: HTTP routes over the ledger
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,no_run
//! use expense_tracker::config::{Settings, TrackerPaths};
//! use expense_tracker::services::Ledger;
//!
//! # fn main() -> Result<(), expense_tracker::TrackerError> {
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let ledger = Ledger::open(paths.transactions_file());
//! println!("{}", ledger.totals().savings.format_with_symbol(&settings.currency_symbol));
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::TrackerError;
