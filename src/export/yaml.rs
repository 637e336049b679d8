//! YAML Export functionality
//!
//! Exports the complete ledger to YAML format for human-readable backup.

use crate::error::{TrackerError, TrackerResult};
use crate::export::json::FullExport;
use crate::storage::LedgerData;
use std::io::Write;

/// Export the full ledger to YAML format
pub fn export_full_yaml<W: Write>(data: &LedgerData, writer: &mut W) -> TrackerResult<()> {
    let export = FullExport::from_data(data);
    let err = |e: std::io::Error| TrackerError::Export(e.to_string());

    writeln!(writer, "# Expense Tracker Full Ledger Export").map_err(err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(err)?;
    writeln!(writer, "# Amounts are in cents.").map_err(err)?;
    writeln!(writer).map_err(err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| TrackerError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a YAML export
pub fn import_from_yaml(yaml_str: &str) -> TrackerResult<FullExport> {
    let export: FullExport =
        serde_yaml::from_str(yaml_str).map_err(|e| TrackerError::Export(e.to_string()))?;

    export.validate().map_err(TrackerError::Export)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Income, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let data = LedgerData {
            expenses: vec![Expense::new(
                "Coffee",
                Money::from_cents(450),
                NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
                "Food",
            )],
            incomes: vec![Income::new(
                "Salary",
                Money::from_cents(300000),
                NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            )],
        };

        let mut output = Vec::new();
        export_full_yaml(&data, &mut output).unwrap();
        let yaml = String::from_utf8(output).unwrap();

        assert!(yaml.starts_with("# Expense Tracker Full Ledger Export"));
        assert!(yaml.contains("schema_version"));
        assert!(yaml.contains("Coffee"));

        let export = import_from_yaml(&yaml).unwrap();
        assert_eq!(export.expenses, data.expenses);
        assert_eq!(export.incomes, data.incomes);
    }
}
