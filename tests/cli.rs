use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense-tracker").unwrap();
    cmd.env("TRACKER_DATA_DIR", dir.path())
        .env_remove("RUST_LOG")
        .env_remove("TRACKER_LOG_FORMAT");
    cmd
}

#[test]
fn add_and_list_expenses() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["expense", "add", "Coffee", "4.50", "--category", "Food", "--date", "2024-01-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded expense: 2024-01-15 - Coffee: $4.50 (Food)"));

    tracker(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-15 - Coffee: $4.50 (Food)"))
        .stdout(predicate::str::contains("Total: $4.50"));

    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn empty_listing() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["income", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No income recorded."));
}

#[test]
fn invalid_amount_fails() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["income", "add", "Salary", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn monthly_report() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["income", "add", "Salary", "2000", "--date", "2023-10-01"])
        .assert()
        .success();
    tracker(&dir)
        .args(["expense", "add", "Groceries", "150", "-c", "Food", "-d", "2023-10-01"])
        .assert()
        .success();

    tracker(&dir)
        .args(["report", "monthly", "--period", "2023-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Summary for October 2023:"))
        .stdout(predicate::str::contains("Total Income: $2000.00"))
        .stdout(predicate::str::contains("Total Expenses: $150.00"))
        .stdout(predicate::str::contains("Savings: $1850.00"));

    tracker(&dir)
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Savings: $1850.00"))
        .stdout(predicate::str::contains("You're saving money!"));
}

#[test]
fn bad_period_fails() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["report", "monthly", "--period", "2023-13"])
        .assert()
        .failure();
}

#[test]
fn export_expenses_csv() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("expenses.csv");

    tracker(&dir)
        .args(["expense", "add", "Coffee", "4.50", "-c", "Food", "-d", "2024-01-15"])
        .assert()
        .success();
    tracker(&dir)
        .args(["export", "expenses"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses"));

    let csv = std::fs::read_to_string(&output).unwrap();
    assert_eq!(csv, "Date,Description,Category,Amount\n2024-01-15,Coffee,Food,4.50\n");
}

#[test]
fn export_all_yaml() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("ledger.yaml");

    tracker(&dir)
        .args(["export", "all", "--format", "yaml"])
        .arg(&output)
        .assert()
        .success();

    let yaml = std::fs::read_to_string(&output).unwrap();
    assert!(yaml.starts_with("# Expense Tracker Full Ledger Export"));
}

#[test]
fn console_reads_stdin() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .write_stdin("1\nCoffee\n4.50\n2024-01-15\nFood\n5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense added successfully!"))
        .stdout(predicate::str::contains("2024-01-15 - Coffee: $4.50 (Food)"))
        .stdout(predicate::str::contains("Thank you for using Expense Tracker!"));

    tracker(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"));
}

#[test]
fn in_memory_console_saves_nothing() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .args(["console", "--in-memory"])
        .write_stdin("2\nSalary\n2000\n2024-01-31\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Income added successfully!"));

    assert!(!dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    tracker(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions file:"))
        .stdout(predicate::str::contains("0.0.0.0:8080"));
}
