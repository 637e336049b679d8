//! Ledger file repository
//!
//! Persists both transaction sequences to a single JSON document. Every save
//! rewrites the whole file through an atomic temp-file rename.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;
use crate::models::{Expense, Income};

use super::file_io::{read_json, write_json_atomic};

/// On-disk shape of the ledger: expenses first, then incomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerData {
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub incomes: Vec<Income>,
}

/// Reads and writes the ledger file
#[derive(Debug, Clone)]
pub struct LedgerFile {
    path: PathBuf,
}

impl LedgerFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the ledger strictly: a missing file is empty, a corrupt one is an error
    pub fn read(&self) -> Result<LedgerData, TrackerError> {
        read_json(&self.path)
    }

    /// Restore the ledger for startup
    ///
    /// Never fails. A missing file starts an empty ledger; an unreadable or
    /// corrupt file is logged and also starts empty.
    pub fn load(&self) -> LedgerData {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "no previous data found, starting fresh");
            return LedgerData::default();
        }

        match self.read() {
            Ok(data) => {
                tracing::info!(
                    path = %self.path.display(),
                    expenses = data.expenses.len(),
                    incomes = data.incomes.len(),
                    "loaded transactions"
                );
                data
            }
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "error loading transactions, starting with an empty ledger"
                );
                LedgerData::default()
            }
        }
    }

    /// Rewrite the whole file with the given data
    pub fn save(&self, data: &LedgerData) -> Result<(), TrackerError> {
        write_json_atomic(&self.path, data)
    }
}
