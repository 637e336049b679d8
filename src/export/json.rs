//! JSON Export functionality
//!
//! Exports the complete ledger to JSON format with schema versioning.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Income};
use crate::services::Totals;
use crate::storage::LedgerData;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full ledger export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses in insertion order
    pub expenses: Vec<Expense>,

    /// All incomes in insertion order
    pub incomes: Vec<Income>,

    /// Overall figures, in cents
    pub totals: Totals,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,
    pub income_count: usize,

    /// Earliest transaction date across both sequences
    pub earliest_transaction: Option<String>,

    /// Latest transaction date across both sequences
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Build an export document from a ledger snapshot
    pub fn from_data(data: &LedgerData) -> Self {
        let dates = || {
            data.expenses
                .iter()
                .map(Expense::date)
                .chain(data.incomes.iter().map(Income::date))
        };

        let metadata = ExportMetadata {
            expense_count: data.expenses.len(),
            income_count: data.incomes.len(),
            earliest_transaction: dates().min().map(|d| d.to_string()),
            latest_transaction: dates().max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            expenses: data.expenses.clone(),
            incomes: data.incomes.clone(),
            totals: Totals::from_data(data),
            metadata,
        }
    }

    /// Validate a parsed export document
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        if self.metadata.expense_count != self.expenses.len()
            || self.metadata.income_count != self.incomes.len()
        {
            return Err("Record counts do not match metadata".to_string());
        }

        let data = LedgerData {
            expenses: self.expenses.clone(),
            incomes: self.incomes.clone(),
        };
        if Totals::from_data(&data) != self.totals {
            return Err("Totals do not match the exported records".to_string());
        }

        Ok(())
    }
}

/// Export the full ledger to JSON
pub fn export_full_json<W: Write>(
    data: &LedgerData,
    writer: &mut W,
    pretty: bool,
) -> TrackerResult<()> {
    let export = FullExport::from_data(data);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a JSON export
pub fn import_from_json(json_str: &str) -> TrackerResult<FullExport> {
    let export: FullExport =
        serde_json::from_str(json_str).map_err(|e| TrackerError::Export(e.to_string()))?;

    export.validate().map_err(TrackerError::Export)?;

    Ok(export)
}
