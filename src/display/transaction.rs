//! Transaction display formatting
//!
//! Formats expense and income listings for terminal display.

use crate::models::{Expense, Income};

/// Format a single expense: `2024-01-15 - Coffee: $4.50 (Food)`
pub fn format_expense_row(expense: &Expense, symbol: &str, date_format: &str) -> String {
    format!(
        "{} - {}: {} ({})",
        expense.date().format(date_format),
        expense.description(),
        expense.amount().format_with_symbol(symbol),
        expense.category()
    )
}

/// Format a single income: `2024-01-31 - Salary: $3000.00`
pub fn format_income_row(income: &Income, symbol: &str, date_format: &str) -> String {
    format!(
        "{} - {}: {}",
        income.date().format(date_format),
        income.source(),
        income.amount().format_with_symbol(symbol)
    )
}

/// Format the expenses section of a listing
pub fn format_expense_list(expenses: &[Expense], symbol: &str, date_format: &str) -> String {
    let mut output = String::from("Expenses:\n");
    if expenses.is_empty() {
        output.push_str("No expenses recorded.\n");
    }
    for expense in expenses {
        output.push_str(&format_expense_row(expense, symbol, date_format));
        output.push('\n');
    }
    output
}

/// Format the income section of a listing
pub fn format_income_list(incomes: &[Income], symbol: &str, date_format: &str) -> String {
    let mut output = String::from("Income:\n");
    if incomes.is_empty() {
        output.push_str("No income recorded.\n");
    }
    for income in incomes {
        output.push_str(&format_income_row(income, symbol, date_format));
        output.push('\n');
    }
    output
}

/// Format both sequences, expenses first
pub fn format_all_transactions(
    expenses: &[Expense],
    incomes: &[Income],
    symbol: &str,
    date_format: &str,
) -> String {
    format!(
        "{}\n{}",
        format_expense_list(expenses, symbol, date_format),
        format_income_list(incomes, symbol, date_format)
    )
}
