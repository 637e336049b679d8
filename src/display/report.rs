//! Report formatting utilities for terminal output

use crate::services::Totals;

/// Format overall totals with a verdict line
pub fn format_savings(totals: &Totals, symbol: &str) -> String {
    let verdict = if totals.savings.is_negative() {
        "You're spending more than you earn!"
    } else {
        "You're saving money!"
    };

    format!(
        "Total Income: {}\nTotal Expenses: {}\nTotal Savings: {}\n{}",
        totals.income.format_with_symbol(symbol),
        totals.expenses.format_with_symbol(symbol),
        totals.savings.format_with_symbol(symbol),
        verdict
    )
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}
