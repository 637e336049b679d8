//! CLI commands for data export
//!
//! Provides commands for exporting the ledger in various formats.

use crate::error::{TrackerError, TrackerResult};
use crate::export::{csv, json, yaml};
use crate::services::Ledger;
use clap::{Subcommand, ValueEnum};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (both sequences with a type column)
    Csv,
    /// JSON format (full ledger)
    Json,
    /// YAML format (full ledger, human-readable)
    Yaml,
}

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export the whole ledger to a file
    All {
        /// Output file path
        output: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export expenses to CSV
    Expenses {
        /// Output file path
        output: PathBuf,
    },

    /// Export incomes to CSV
    Incomes {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(ledger: &Ledger, cmd: ExportCommands) -> TrackerResult<()> {
    match cmd {
        ExportCommands::All {
            output,
            format,
            pretty,
        } => {
            let data = ledger.snapshot();
            let mut writer = create_output(&output)?;
            match format {
                ExportFormat::Csv => csv::export_ledger_csv(&data, &mut writer)?,
                ExportFormat::Json => json::export_full_json(&data, &mut writer, pretty)?,
                ExportFormat::Yaml => yaml::export_full_yaml(&data, &mut writer)?,
            }
            finish(writer, &output)?;
            println!(
                "Exported {} expenses and {} incomes to: {}",
                data.expenses.len(),
                data.incomes.len(),
                output.display()
            );
        }

        ExportCommands::Expenses { output } => {
            let expenses = ledger.list_expenses();
            let mut writer = create_output(&output)?;
            csv::export_expenses_csv(&expenses, &mut writer)?;
            finish(writer, &output)?;
            println!("Exported {} expenses to: {}", expenses.len(), output.display());
        }

        ExportCommands::Incomes { output } => {
            let incomes = ledger.list_incomes();
            let mut writer = create_output(&output)?;
            csv::export_incomes_csv(&incomes, &mut writer)?;
            finish(writer, &output)?;
            println!("Exported {} incomes to: {}", incomes.len(), output.display());
        }
    }

    Ok(())
}

fn create_output(output: &Path) -> TrackerResult<BufWriter<File>> {
    let file = File::create(output).map_err(|e| {
        TrackerError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>, output: &Path) -> TrackerResult<()> {
    writer.flush().map_err(|e| {
        TrackerError::Export(format!("Failed to write {}: {}", output.display(), e))
    })?;
    tracing::info!(path = %output.display(), "Export written");
    Ok(())
}
