//! CSV Export functionality
//!
//! Exports expenses and incomes to spreadsheet-compatible CSV.

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Income};
use crate::storage::LedgerData;
use std::io::Write;

fn export_err(e: impl std::fmt::Display) -> TrackerError {
    TrackerError::Export(e.to_string())
}

/// Export expenses to CSV: `Date,Description,Category,Amount`
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> TrackerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Date", "Description", "Category", "Amount"])
        .map_err(export_err)?;

    for expense in expenses {
        csv.write_record([
            expense.date().format("%Y-%m-%d").to_string(),
            expense.description().to_string(),
            expense.category().to_string(),
            expense.amount().to_decimal_string(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export incomes to CSV: `Date,Source,Amount`
pub fn export_incomes_csv<W: Write>(incomes: &[Income], writer: W) -> TrackerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Date", "Source", "Amount"])
        .map_err(export_err)?;

    for income in incomes {
        csv.write_record([
            income.date().format("%Y-%m-%d").to_string(),
            income.source().to_string(),
            income.amount().to_decimal_string(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

/// Export both sequences to a single CSV with a `Type` column
///
/// Incomes have an empty category.
pub fn export_ledger_csv<W: Write>(data: &LedgerData, writer: W) -> TrackerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["Type", "Date", "Description", "Category", "Amount"])
        .map_err(export_err)?;

    for expense in &data.expenses {
        csv.write_record([
            "expense".to_string(),
            expense.date().format("%Y-%m-%d").to_string(),
            expense.description().to_string(),
            expense.category().to_string(),
            expense.amount().to_decimal_string(),
        ])
        .map_err(export_err)?;
    }

    for income in &data.incomes {
        csv.write_record([
            "income".to_string(),
            income.date().format("%Y-%m-%d").to_string(),
            income.source().to_string(),
            String::new(),
            income.amount().to_decimal_string(),
        ])
        .map_err(export_err)?;
    }

    csv.flush().map_err(export_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_export_expenses() {
        let expenses = vec![
            Expense::new("Coffee", Money::from_cents(450), date(2024, 1, 15), "Food"),
            Expense::new("Lunch, with team", Money::from_cents(-1200), date(2024, 1, 16), "Food"),
        ];

        let mut output = Vec::new();
        export_expenses_csv(&expenses, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], "Date,Description,Category,Amount");
        assert_eq!(lines[1], "2024-01-15,Coffee,Food,4.50");
        assert_eq!(lines[2], "2024-01-16,\"Lunch, with team\",Food,-12.00");
    }

    #[test]
    fn test_export_incomes() {
        let incomes = vec![Income::new("Salary", Money::from_cents(300000), date(2024, 1, 31))];

        let mut output = Vec::new();
        export_incomes_csv(&incomes, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        assert_eq!(csv, "Date,Source,Amount\n2024-01-31,Salary,3000.00\n");
    }

    #[test]
    fn test_export_ledger() {
        let data = LedgerData {
            expenses: vec![Expense::new("Rent", Money::from_cents(90000), date(2024, 2, 1), "Home")],
            incomes: vec![Income::new("Salary", Money::from_cents(300000), date(2024, 2, 1))],
        };

        let mut output = Vec::new();
        export_ledger_csv(&data, &mut output).unwrap();
        let csv = String::from_utf8(output).unwrap();

        assert!(csv.contains("expense,2024-02-01,Rent,Home,900.00"));
        assert!(csv.contains("income,2024-02-01,Salary,,3000.00"));
    }
}
