//! Request and response shapes of the HTTP API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::models::{Expense, Income, Money};
use crate::services::Totals;
use crate::storage::LedgerData;

/// A money amount written as a JSON number with exactly two decimals (`4.50`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount(pub Money);

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw = RawValue::from_string(self.0.to_decimal_string())
            .map_err(serde::ser::Error::custom)?;
        raw.serialize(serializer)
    }
}

#[derive(Debug, Serialize)]
pub struct ExpenseView {
    pub description: String,
    pub amount: Amount,
    pub date: String,
    pub category: String,
}

impl From<&Expense> for ExpenseView {
    fn from(expense: &Expense) -> Self {
        Self {
            description: expense.description().to_string(),
            amount: Amount(expense.amount()),
            date: expense.date().format("%Y-%m-%d").to_string(),
            category: expense.category().to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct IncomeView {
    pub source: String,
    pub amount: Amount,
    pub date: String,
}

impl From<&Income> for IncomeView {
    fn from(income: &Income) -> Self {
        Self {
            source: income.source().to_string(),
            amount: Amount(income.amount()),
            date: income.date().format("%Y-%m-%d").to_string(),
        }
    }
}

/// Body of `GET /api/transactions`
#[derive(Debug, Serialize)]
pub struct TransactionsResponse {
    pub expenses: Vec<ExpenseView>,
    pub incomes: Vec<IncomeView>,
}

impl From<&LedgerData> for TransactionsResponse {
    fn from(data: &LedgerData) -> Self {
        Self {
            expenses: data.expenses.iter().map(ExpenseView::from).collect(),
            incomes: data.incomes.iter().map(IncomeView::from).collect(),
        }
    }
}

/// Body of `GET /api/summary`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub total_income: Amount,
    pub total_expenses: Amount,
    pub savings: Amount,
}

impl From<Totals> for SummaryResponse {
    fn from(totals: Totals) -> Self {
        Self {
            total_income: Amount(totals.income),
            total_expenses: Amount(totals.expenses),
            savings: Amount(totals.savings),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self { status: "success" }
    }
}

/// An amount as sent by clients: a JSON number or a numeric string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    Number(serde_json::Number),
    Text(String),
}

impl AmountInput {
    pub fn to_money(&self) -> Result<Money, String> {
        let text = match self {
            AmountInput::Number(n) => n.to_string(),
            AmountInput::Text(s) => s.trim().to_string(),
        };
        Money::parse(&text).map_err(|e| format!("Invalid amount '{}': {}", text, e))
    }
}

/// Body of `POST /api/transactions` with `"type":"expense"`
#[derive(Debug, Deserialize)]
pub struct NewExpense {
    pub description: String,
    pub amount: AmountInput,
    pub date: NaiveDate,
    pub category: String,
}

impl NewExpense {
    pub fn into_expense(self) -> Result<Expense, String> {
        let amount = self.amount.to_money()?;
        Ok(Expense::new(self.description, amount, self.date, self.category))
    }
}

/// Body of `POST /api/transactions` with `"type":"income"`
#[derive(Debug, Deserialize)]
pub struct NewIncome {
    pub source: String,
    pub amount: AmountInput,
    pub date: NaiveDate,
}

impl NewIncome {
    pub fn into_income(self) -> Result<Income, String> {
        let amount = self.amount.to_money()?;
        Ok(Income::new(self.source, amount, self.date))
    }
}
