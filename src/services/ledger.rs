//! Ledger service
//!
//! Owns the expense and income sequences, computes aggregates, and keeps the
//! ledger file in step with memory.
//!
//! All appends hold the write lock across the file rewrite, so concurrent
//! writers are serialized and the file always holds a complete ledger. Reads
//! share the read lock and see a consistent snapshot.

use std::fmt;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock, RwLockReadGuard};

use serde::{Deserialize, Serialize};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, Income, Money, MonthPeriod};
use crate::storage::{LedgerData, LedgerFile};

/// Overall income, expenses and savings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Totals {
    pub income: Money,
    pub expenses: Money,
    pub savings: Money,
}

impl Totals {
    /// Compute the overall figures of a ledger snapshot
    pub fn from_data(data: &LedgerData) -> Self {
        let income: Money = data.incomes.iter().map(Income::amount).sum();
        let expenses: Money = data.expenses.iter().map(Expense::amount).sum();
        Self {
            income,
            expenses,
            savings: income - expenses,
        }
    }
}

/// Income, expenses and savings for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlySummary {
    pub period: MonthPeriod,
    pub income: Money,
    pub expenses: Money,
    pub savings: Money,
}

impl MonthlySummary {
    /// Multi-line report using the given currency symbol
    pub fn render(&self, symbol: &str) -> String {
        format!(
            "Monthly Summary for {}:\nTotal Income: {}\nTotal Expenses: {}\nSavings: {}",
            self.period.label(),
            self.income.format_with_symbol(symbol),
            self.expenses.format_with_symbol(symbol),
            self.savings.format_with_symbol(symbol)
        )
    }
}

impl fmt::Display for MonthlySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render("$"))
    }
}

/// The transaction ledger
pub struct Ledger {
    file: Option<LedgerFile>,
    data: RwLock<LedgerData>,
}

impl Ledger {
    /// Open the ledger backed by the file at `path`, restoring any saved data
    pub fn open(path: PathBuf) -> Self {
        let file = LedgerFile::new(path);
        let data = file.load();
        Self {
            file: Some(file),
            data: RwLock::new(data),
        }
    }

    /// A ledger that lives only in memory and is never persisted
    pub fn in_memory() -> Self {
        Self {
            file: None,
            data: RwLock::new(LedgerData::default()),
        }
    }

    /// Path of the backing file, if any
    pub fn file_path(&self) -> Option<&std::path::Path> {
        self.file.as_ref().map(LedgerFile::path)
    }

    /// Append an expense and rewrite the ledger file
    ///
    /// The expense stays recorded in memory even when the rewrite fails; the
    /// failure is logged and returned as a storage error.
    pub fn add_expense(&self, expense: Expense) -> TrackerResult<()> {
        self.append(|data| data.expenses.push(expense))
    }

    /// Append an income and rewrite the ledger file
    ///
    /// Same persistence semantics as [`Ledger::add_expense`].
    pub fn add_income(&self, income: Income) -> TrackerResult<()> {
        self.append(|data| data.incomes.push(income))
    }

    pub fn total_expenses(&self) -> Money {
        self.read().expenses.iter().map(Expense::amount).sum()
    }

    pub fn total_income(&self) -> Money {
        self.read().incomes.iter().map(Income::amount).sum()
    }

    /// Total income minus total expenses
    pub fn savings(&self) -> Money {
        self.totals().savings
    }

    /// All three overall figures from a single snapshot
    pub fn totals(&self) -> Totals {
        Totals::from_data(&self.read())
    }

    /// Sum of expenses dated in `month` (0-based) of `year`
    ///
    /// An out-of-range month matches nothing and yields zero.
    pub fn monthly_expenses(&self, month: u32, year: i32) -> Money {
        self.monthly_report_raw(month, year).1
    }

    /// Sum of incomes dated in `month` (0-based) of `year`
    pub fn monthly_income(&self, month: u32, year: i32) -> Money {
        self.monthly_report_raw(month, year).0
    }

    /// Monthly income minus monthly expenses
    pub fn monthly_savings(&self, month: u32, year: i32) -> Money {
        self.monthly_report_raw(month, year).2
    }

    /// Monthly figures for a validated period
    pub fn monthly_report(&self, period: MonthPeriod) -> MonthlySummary {
        let (income, expenses, savings) = self.period_figures(period);
        MonthlySummary {
            period,
            income,
            expenses,
            savings,
        }
    }

    /// Human-readable monthly report; `month` is 0-based
    pub fn monthly_summary(&self, month: u32, year: i32) -> TrackerResult<String> {
        let period = MonthPeriod::new(year, month)
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        Ok(self.monthly_report(period).to_string())
    }

    /// Owned copy of the expenses in insertion order
    pub fn list_expenses(&self) -> Vec<Expense> {
        self.read().expenses.clone()
    }

    /// Owned copy of the incomes in insertion order
    pub fn list_incomes(&self) -> Vec<Income> {
        self.read().incomes.clone()
    }

    /// Owned copy of both sequences taken under one lock
    pub fn snapshot(&self) -> LedgerData {
        self.read().clone()
    }

    fn monthly_report_raw(&self, month: u32, year: i32) -> (Money, Money, Money) {
        match MonthPeriod::new(year, month) {
            Ok(period) => self.period_figures(period),
            Err(_) => (Money::zero(), Money::zero(), Money::zero()),
        }
    }

    fn period_figures(&self, period: MonthPeriod) -> (Money, Money, Money) {
        let data = self.read();
        let income: Money = data
            .incomes
            .iter()
            .filter(|i| period.contains(i.date()))
            .map(Income::amount)
            .sum();
        let expenses: Money = data
            .expenses
            .iter()
            .filter(|e| period.contains(e.date()))
            .map(Expense::amount)
            .sum();
        (income, expenses, income - expenses)
    }

    fn append(&self, push: impl FnOnce(&mut LedgerData)) -> TrackerResult<()> {
        let mut data = self
            .data
            .write()
            .map_err(|e| TrackerError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        push(&mut *data);
        tracing::debug!(
            expenses = data.expenses.len(),
            incomes = data.incomes.len(),
            "transaction appended"
        );

        let Some(file) = &self.file else {
            return Ok(());
        };

        file.save(&data).map_err(|e| {
            tracing::error!(path = %file.path().display(), error = %e, "error saving transactions");
            e
        })
    }

    // Poisoning is ignored: appends are single pushes, so records stay whole.
    fn read(&self) -> RwLockReadGuard<'_, LedgerData> {
        self.data.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Arc;
    use std::thread;
    use tempfile::TempDir;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(cents: i64, on: NaiveDate) -> Expense {
        Expense::new("Item", Money::from_cents(cents), on, "General")
    }

    fn income(cents: i64, on: NaiveDate) -> Income {
        Income::new("Job", Money::from_cents(cents), on)
    }

    fn create_test_ledger() -> (TempDir, Ledger) {
        let temp_dir = TempDir::new().unwrap();
        let ledger = Ledger::open(temp_dir.path().join("transactions.json"));
        (temp_dir, ledger)
    }

    #[test]
    fn test_empty_ledger_totals_are_zero() {
        let ledger = Ledger::in_memory();
        assert_eq!(ledger.total_expenses(), Money::zero());
        assert_eq!(ledger.total_income(), Money::zero());
        assert_eq!(ledger.savings(), Money::zero());
        assert_eq!(ledger.totals(), Totals::default());
    }

    #[test]
    fn test_totals_with_interleaved_appends() {
        let ledger = Ledger::in_memory();
        let day = date(2024, 3, 10);

        ledger.add_expense(expense(1050, day)).unwrap();
        ledger.add_income(income(200000, day)).unwrap();
        ledger.add_expense(expense(-250, day)).unwrap();
        ledger.add_income(income(1, day)).unwrap();
        ledger.add_expense(expense(9999, day)).unwrap();

        assert_eq!(ledger.total_expenses().cents(), 1050 - 250 + 9999);
        assert_eq!(ledger.total_income().cents(), 200001);
        assert_eq!(
            ledger.savings(),
            ledger.total_income() - ledger.total_expenses()
        );
    }

    #[test]
    fn test_monthly_aggregation_uses_zero_based_month() {
        let ledger = Ledger::in_memory();
        ledger.add_expense(expense(15000, date(2023, 10, 1))).unwrap();

        assert_eq!(ledger.monthly_expenses(9, 2023).cents(), 15000);
        for month in (0..12).filter(|m| *m != 9) {
            assert!(ledger.monthly_expenses(month, 2023).is_zero());
        }
        assert!(ledger.monthly_expenses(9, 2022).is_zero());
        assert!(ledger.monthly_expenses(9, 2024).is_zero());
        assert!(ledger.monthly_expenses(12, 2023).is_zero());
    }

    #[test]
    fn test_monthly_year_boundary() {
        let ledger = Ledger::in_memory();
        ledger.add_income(income(100, date(2023, 12, 31))).unwrap();
        ledger.add_income(income(200, date(2024, 1, 1))).unwrap();
        ledger.add_expense(expense(50, date(2023, 12, 31))).unwrap();

        assert_eq!(ledger.monthly_income(11, 2023).cents(), 100);
        assert_eq!(ledger.monthly_income(0, 2024).cents(), 200);
        assert_eq!(ledger.monthly_savings(11, 2023).cents(), 50);
        assert_eq!(ledger.monthly_savings(0, 2024).cents(), 200);
    }

    #[test]
    fn test_monthly_summary_text() {
        let ledger = Ledger::in_memory();
        ledger.add_expense(expense(15000, date(2023, 10, 1))).unwrap();
        ledger.add_income(income(200000, date(2023, 10, 1))).unwrap();

        let summary = ledger.monthly_summary(9, 2023).unwrap();
        assert_eq!(
            summary,
            "Monthly Summary for October 2023:\n\
             Total Income: $2000.00\n\
             Total Expenses: $150.00\n\
             Savings: $1850.00"
        );
    }

    #[test]
    fn test_monthly_summary_negative_savings_sign_leads() {
        let ledger = Ledger::in_memory();
        ledger.add_expense(expense(500, date(2023, 10, 3))).unwrap();

        let summary = ledger.monthly_summary(9, 2023).unwrap();
        assert!(summary.ends_with("Savings: -$5.00"), "{}", summary);
    }

    #[test]
    fn test_monthly_summary_rejects_bad_month() {
        let ledger = Ledger::in_memory();
        let err = ledger.monthly_summary(12, 2023).unwrap_err();
        assert!(err.is_validation());

        let err = ledger.monthly_summary(u32::MAX, 2023).unwrap_err();
        assert!(err.is_validation());
        assert!(ledger.monthly_expenses(u32::MAX, 2023).is_zero());
        assert!(ledger.monthly_savings(u32::MAX, 2023).is_zero());
    }

    #[test]
    fn test_monthly_report_render_with_symbol() {
        let ledger = Ledger::in_memory();
        ledger.add_expense(expense(500, date(2025, 2, 3))).unwrap();

        let report = ledger.monthly_report(MonthPeriod::from_human(2025, 2).unwrap());
        assert_eq!(report.expenses.cents(), 500);
        assert!(report.render("€").contains("Savings: -€5.00"));
    }

    #[test]
    fn test_list_returns_snapshot() {
        let ledger = Ledger::in_memory();
        ledger.add_expense(expense(100, date(2024, 1, 1))).unwrap();

        let mut listed = ledger.list_expenses();
        listed.push(expense(900, date(2024, 1, 2)));
        listed.clear();

        assert_eq!(ledger.list_expenses().len(), 1);
        assert_eq!(ledger.total_expenses().cents(), 100);
    }

    #[test]
    fn test_persistence_round_trip() {
        let (temp_dir, ledger) = create_test_ledger();
        let path = temp_dir.path().join("transactions.json");

        let expenses = vec![
            Expense::new("Rent", Money::from_cents(90000), date(2024, 5, 1), "Housing"),
            Expense::new("Bus", Money::from_cents(275), date(2024, 5, 2), "Transport"),
            Expense::new("Refund", Money::from_cents(-1000), date(2024, 5, 3), "Misc"),
        ];
        let incomes = vec![
            Income::new("Salary", Money::from_cents(450000), date(2024, 5, 31)),
            Income::new("Interest", Money::from_cents(37), date(2024, 5, 31)),
        ];

        for e in &expenses {
            ledger.add_expense(e.clone()).unwrap();
        }
        for i in &incomes {
            ledger.add_income(i.clone()).unwrap();
        }
        drop(ledger);

        let restored = Ledger::open(path);
        assert_eq!(restored.list_expenses(), expenses);
        assert_eq!(restored.list_incomes(), incomes);
    }

    #[test]
    fn test_in_memory_ledger_writes_nothing() {
        let ledger = Ledger::in_memory();
        ledger.add_income(income(100, date(2024, 1, 1))).unwrap();
        assert!(ledger.file_path().is_none());
    }

    #[test]
    fn test_write_failure_keeps_append() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "a file, not a directory").unwrap();

        let ledger = Ledger::open(blocker.join("transactions.json"));
        let err = ledger
            .add_expense(expense(700, date(2024, 6, 1)))
            .unwrap_err();

        assert!(err.is_storage());
        assert_eq!(ledger.list_expenses().len(), 1);
        assert_eq!(ledger.total_expenses().cents(), 700);
    }

    #[test]
    fn test_concurrent_appends_are_serialized() {
        let (temp_dir, ledger) = create_test_ledger();
        let ledger = Arc::new(ledger);

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let ledger = Arc::clone(&ledger);
                thread::spawn(move || {
                    let on = date(2024, 1, 1 + (i % 28));
                    ledger.add_expense(expense(100, on)).unwrap();
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(ledger.total_expenses(), Money::from_cents(5000));

        let restored = Ledger::open(temp_dir.path().join("transactions.json"));
        assert_eq!(restored.list_expenses().len(), 50);
        assert_eq!(restored.total_expenses(), Money::from_cents(5000));
    }
}
