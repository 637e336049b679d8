//! Interactive console
//!
//! A numbered menu loop over any line reader and writer. Invalid numbers,
//! amounts and dates are re-prompted; end of input ends the session.

use std::io::{BufRead, Write};

use chrono::NaiveDate;

use crate::config::Settings;
use crate::display::{format_all_transactions, format_savings};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Income, Money, MonthPeriod};
use crate::services::Ledger;

const MENU: &str = "\n=== Expense Tracker Menu ===
1. Add Expense
2. Add Income
3. View Monthly Summary
4. View Total Savings
5. View All Transactions
6. Exit
============================";

/// Console session bound to a ledger and an input/output pair
pub struct Console<'a, R, W> {
    ledger: &'a Ledger,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Console<'a, R, W> {
    pub fn new(ledger: &'a Ledger, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            ledger,
            settings,
            input,
            output,
        }
    }

    /// Run the menu loop until the user exits or input ends
    pub fn run(&mut self) -> TrackerResult<()> {
        writeln!(self.output, "Welcome to the Expense Tracker!")?;

        loop {
            writeln!(self.output, "{}", MENU)?;
            let Some(choice) = self.prompt_int("Enter your choice: ")? else {
                break;
            };

            let keep_going = match choice {
                1 => self.add_expense()?,
                2 => self.add_income()?,
                3 => self.view_monthly_summary()?,
                4 => self.view_savings()?,
                5 => self.view_all_transactions()?,
                6 => {
                    writeln!(self.output, "Thank you for using Expense Tracker!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Please try again.")?;
                    true
                }
            };

            if !keep_going {
                break;
            }
        }

        tracing::debug!("Console input closed");
        writeln!(self.output)?;
        Ok(())
    }

    fn add_expense(&mut self) -> TrackerResult<bool> {
        writeln!(self.output, "\n--- Add New Expense ---")?;
        let Some(description) = self.prompt_line("Description: ")? else {
            return Ok(false);
        };
        let Some(amount) = self.prompt_amount("Amount: ")? else {
            return Ok(false);
        };
        let Some(date) = self.prompt_date("Date (yyyy-MM-dd, empty for today): ")? else {
            return Ok(false);
        };
        let Some(category) = self.prompt_line("Category: ")? else {
            return Ok(false);
        };

        let result = self
            .ledger
            .add_expense(Expense::new(description, amount, date, category));
        self.report_append("Expense", result)?;
        Ok(true)
    }

    fn add_income(&mut self) -> TrackerResult<bool> {
        writeln!(self.output, "\n--- Add New Income ---")?;
        let Some(source) = self.prompt_line("Source: ")? else {
            return Ok(false);
        };
        let Some(amount) = self.prompt_amount("Amount: ")? else {
            return Ok(false);
        };
        let Some(date) = self.prompt_date("Date (yyyy-MM-dd, empty for today): ")? else {
            return Ok(false);
        };

        let result = self.ledger.add_income(Income::new(source, amount, date));
        self.report_append("Income", result)?;
        Ok(true)
    }

    fn view_monthly_summary(&mut self) -> TrackerResult<bool> {
        writeln!(self.output, "\n--- Monthly Summary ---")?;
        let Some(year) = self.prompt_int("Enter year (e.g., 2024): ")? else {
            return Ok(false);
        };
        let period = loop {
            let Some(month) = self.prompt_int("Enter month (1-12): ")? else {
                return Ok(false);
            };
            let period = u32::try_from(month)
                .ok()
                .and_then(|m| MonthPeriod::from_human(year as i32, m).ok());
            match period {
                Some(period) => break period,
                None => writeln!(self.output, "Month must be between 1 and 12.")?,
            }
        };

        let summary = self.ledger.monthly_report(period);
        writeln!(
            self.output,
            "{}",
            summary.render(&self.settings.currency_symbol)
        )?;
        Ok(true)
    }

    fn view_savings(&mut self) -> TrackerResult<bool> {
        writeln!(self.output, "\n--- Total Savings ---")?;
        let totals = self.ledger.totals();
        writeln!(
            self.output,
            "{}",
            format_savings(&totals, &self.settings.currency_symbol)
        )?;
        Ok(true)
    }

    fn view_all_transactions(&mut self) -> TrackerResult<bool> {
        writeln!(self.output, "\n--- All Transactions ---\n")?;
        let data = self.ledger.snapshot();
        write!(
            self.output,
            "{}",
            format_all_transactions(
                &data.expenses,
                &data.incomes,
                &self.settings.currency_symbol,
                &self.settings.date_format,
            )
        )?;
        Ok(true)
    }

    fn report_append(&mut self, what: &str, result: TrackerResult<()>) -> TrackerResult<()> {
        match result {
            Ok(()) => writeln!(self.output, "{} added successfully!", what)?,
            Err(e) => writeln!(
                self.output,
                "{} recorded for this session, but saving failed: {}",
                what, e
            )?,
        }
        Ok(())
    }

    /// Read one trimmed line; `None` at end of input
    fn prompt_line(&mut self, prompt: &str) -> TrackerResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_int(&mut self, prompt: &str) -> TrackerResult<Option<i64>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(n) if i32::try_from(n).is_ok() => return Ok(Some(n)),
                _ => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    fn prompt_amount(&mut self, prompt: &str) -> TrackerResult<Option<Money>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match Money::parse(&line) {
                Ok(amount) => return Ok(Some(amount)),
                Err(_) => writeln!(self.output, "Please enter a valid amount.")?,
            }
        }
    }

    fn prompt_date(&mut self, prompt: &str) -> TrackerResult<Option<NaiveDate>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match super::parse_date(&line) {
                Ok(date) => return Ok(Some(date)),
                Err(TrackerError::Validation(_)) => writeln!(
                    self.output,
                    "Invalid date format. Please use yyyy-MM-dd."
                )?,
                Err(e) => return Err(e),
            }
        }
    }
}
