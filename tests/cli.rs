//! End-to-end tests for the spendvista binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendvista(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendvista").unwrap();
    cmd.env("SPENDVISTA_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn dashboard_is_default_command() {
    let dir = TempDir::new().unwrap();

    spendvista(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current balance:   R0.00"))
        .stdout(predicate::str::contains("No transactions yet."));
}

#[test]
fn income_feeds_emergency_fund() {
    let dir = TempDir::new().unwrap();

    spendvista(&dir)
        .args(["transaction", "add", "income", "Salary", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction added successfully!"))
        .stdout(predicate::str::contains(
            "Added R100.00 to your emergency fund (10% of income).",
        ));

    spendvista(&dir)
        .args(["emergency", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved:       R100.00"));

    spendvista(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current balance:   R1000.00"))
        .stdout(predicate::str::contains("Salary"));
}

#[test]
fn budget_warning_after_spending() {
    let dir = TempDir::new().unwrap();

    spendvista(&dir)
        .args(["budget", "set", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget updated successfully!"));

    spendvista(&dir)
        .args(["transaction", "add", "expense", "Groceries Woolworths", "850"])
        .assert()
        .success();

    spendvista(&dir)
        .args(["budget", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You've used 85.0% of your budget."));

    spendvista(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("R850.00"));
}

#[test]
fn goal_lifecycle() {
    let dir = TempDir::new().unwrap();

    spendvista(&dir)
        .args(["goal", "add", "Holiday", "2000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Savings goal created successfully!"));

    spendvista(&dir)
        .args(["goal", "contribute", "Holiday", "1500"])
        .assert()
        .success();

    spendvista(&dir)
        .args(["goal", "contribute", "holiday", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added R500.00 to Holiday"))
        .stdout(predicate::str::contains("Goal reached!"));

    spendvista(&dir)
        .args(["goal", "contribute", "Holiday", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    spendvista(&dir)
        .args(["goal", "contribute", "Car", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Savings goal not found: Car"));

    spendvista(&dir)
        .args(["goal", "delete", "Holiday", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted goal: Holiday"));

    spendvista(&dir)
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No savings goals yet."));
}

#[test]
fn rejects_invalid_amount() {
    let dir = TempDir::new().unwrap();

    spendvista(&dir)
        .args(["transaction", "add", "expense", "Coffee", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    spendvista(&dir)
        .args(["transaction", "add", "expense", "Coffee", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    spendvista(&dir)
        .args(["transaction", "add", "income", "Lottery", "90000000000000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds the maximum"));
}

#[test]
fn delete_requires_force_and_tolerates_unknown_ids() {
    let dir = TempDir::new().unwrap();

    spendvista(&dir)
        .args(["transaction", "add", "expense", "Coffee", "35.50"])
        .assert()
        .success();

    let json = spendvista(&dir)
        .args(["dashboard", "--json"])
        .output()
        .unwrap();
    let snapshot: serde_json::Value = serde_json::from_slice(&json.stdout).unwrap();
    let id = snapshot["recent"][0]["id"].as_str().unwrap().to_string();

    spendvista(&dir)
        .args(["transaction", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    spendvista(&dir)
        .args(["transaction", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction"));

    spendvista(&dir)
        .args(["transaction", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted."));
}

#[test]
fn reset_requires_force() {
    let dir = TempDir::new().unwrap();

    spendvista(&dir)
        .args(["transaction", "add", "income", "Salary", "500"])
        .assert()
        .success();

    spendvista(&dir)
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNING"));

    spendvista(&dir)
        .args(["reset", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All data has been reset."))
        .stdout(predicate::str::contains("Removed 1 transactions and 0 savings goals."));

    spendvista(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Current balance:   R0.00"));

    spendvista(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "reset all data: 1 transactions and 0 goals removed",
        ))
        .stdout(predicate::str::contains("emergency savings 50.00 cleared"));
}

#[test]
fn malformed_data_file_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    std::fs::create_dir_all(&data).unwrap();
    std::fs::write(data.join("transactions.json"), "{ definitely not json").unwrap();

    spendvista(&dir)
        .assert()
        .success()
        .stderr(predicate::str::contains("could not be read; using defaults"))
        .stdout(predicate::str::contains("No transactions yet."));
}

#[test]
fn currency_setting_changes_output() {
    let dir = TempDir::new().unwrap();

    spendvista(&dir)
        .args(["settings", "currency", "$"])
        .assert()
        .success();

    spendvista(&dir)
        .args(["budget", "set", "250"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly budget:  $250.00"));
}

#[test]
fn malformed_settings_warn_and_use_defaults() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), "{ broken").unwrap();

    spendvista(&dir)
        .args(["budget", "set", "100"])
        .assert()
        .success()
        .stderr(predicate::str::contains("config.json could not be read"))
        .stdout(predicate::str::contains("Monthly budget:  R100.00"));
}

#[test]
fn unusable_date_format_is_replaced() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    spendvista(&dir)
        .args([
            "transaction", "add", "expense", "Coffee", "35", "--date", "2026-10-15",
        ])
        .assert()
        .success();

    spendvista(&dir)
        .args(["transaction", "list"])
        .assert()
        .success()
        .stderr(predicate::str::contains("date format '%Q'"))
        .stdout(predicate::str::contains("2026-10-15"))
        .stdout(predicate::str::contains("Coffee"));
}
