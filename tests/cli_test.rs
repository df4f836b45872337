//! Integration tests for the ledger CLI.
//!
//! Each test runs the real binary against its own temporary data directory.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// A `ledger` command pointed at `dir`
fn ledger(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ledger").unwrap();
    cmd.env("LEDGER_CLI_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

/// Run a command that must succeed and return its stdout
fn run(dir: &TempDir, args: &[&str]) -> String {
    let assert = ledger(dir).args(args).assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

#[test]
fn test_init_seeds_demo_data_once() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 expenses"))
        .stdout(predicate::str::contains("Initialization complete!"));
    assert!(dir.path().join("data").join("ledger.db").exists());
    assert!(dir.path().join("config.json").exists());

    ledger(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing seeded"));
}

#[test]
fn test_list_shows_seeded_expenses() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["expense", "list"]);

    assert!(output.contains("Tesco shopping"));
    assert!(output.contains("Dinner with friends"));
    assert!(output.contains("£50.00"));
}

#[test]
fn test_add_then_show() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["expense", "add", "2024-05-04", "bus TICKET", "transport", "2.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added expense #4"));

    let output = run(&dir, &["expense", "show", "4"]);
    assert!(output.contains("Description: Bus ticket"));
    assert!(output.contains("Category:    Transport"));
    assert!(output.contains("Amount:      £2.50"));
}

#[test]
fn test_invalid_input_is_rejected() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["expense", "add", "2024-02-30", "x", "Food", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));

    ledger(&dir)
        .args(["income", "add", "2024-05-01", "x", "Job", "-10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be negative"));

    ledger(&dir)
        .args(["expense", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expense not found: 99"));
}

#[test]
fn test_edit_amount() {
    let dir = TempDir::new().unwrap();

    run(&dir, &["expense", "edit", "3", "--field", "amount", "--value", "42.50"]);

    let output = run(&dir, &["expense", "show", "3"]);
    assert!(output.contains("£42.50"));
}

#[test]
fn test_delete_requires_confirmation() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["income", "delete", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --yes to confirm deletion"));
    run(&dir, &["income", "show", "2"]);

    ledger(&dir)
        .args(["income", "delete", "2", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted income #2"));

    ledger(&dir).args(["income", "show", "2"]).assert().failure();
}

#[test]
fn test_rename_category() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["expense", "rename-category", "food", "groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Moved 1 expense entries"));

    let output = run(&dir, &["expense", "categories"]);
    assert!(output.contains("Groceries"));
    assert!(!output.contains("Food"));
}

#[test]
fn test_summary() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["summary"]);

    assert!(output.contains("Total expenses: £125.00"));
    assert!(output.contains("Total income:   £3800.00"));
    assert!(output.contains("Net income:     £3675.00"));
}

#[test]
fn test_totals_unavailable_without_seed_data() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config.json"),
        r#"{"seed_demo_data": false, "currency_symbol": "$"}"#,
    )
    .unwrap();

    let output = run(&dir, &["expense", "total"]);
    assert!(output.contains("unavailable"));

    run(&dir, &["expense", "add", "2024-05-01", "a", "Food", "10.00"]);
    run(&dir, &["expense", "add", "2024-05-02", "b", "Food", "20.00"]);
    let output = run(&dir, &["expense", "total"]);
    assert!(output.contains("$30.00"));
}

#[test]
fn test_budget_show_for_month() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["budget", "show", "FOOD", "--month", "2024-05"]);

    assert!(output.contains("Budget: Food (May 2024)"));
    assert!(output.contains("Spent:     £50.00"));
    assert!(output.contains("Status:    UNDER"));

    ledger(&dir)
        .args(["budget", "show", "Gardening"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Budget not found"));
}

#[test]
fn test_budget_set_prompts_before_replacing() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["budget", "set", "food", "400"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget unchanged: Food stays at £300.00"));

    ledger(&dir)
        .args(["budget", "set", "food", "400"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Budget updated: Food from £300.00 to £400.00 per month",
        ));

    ledger(&dir)
        .args(["budget", "set", "food", "500", "--keep"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stays at £400.00"));

    ledger(&dir)
        .args(["budget", "set", "food", "1", "--keep", "--replace"])
        .assert()
        .failure();
}

#[test]
fn test_budget_status_lists_every_budget() {
    let dir = TempDir::new().unwrap();

    let output = run(&dir, &["budget", "status", "--month", "2024-05"]);

    assert!(output.contains("Budget status: May 2024"));
    for category in ["Food", "Entertainment", "Transportation", "Housing"] {
        assert!(output.contains(category), "missing {}", category);
    }
}

#[test]
fn test_goals() {
    let dir = TempDir::new().unwrap();

    ledger(&dir)
        .args(["goal", "add", "house deposit", "2030-01-01", "30000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added goal #4: House Deposit"));

    run(&dir, &["goal", "edit", "4", "--field", "target-amount", "--value", "35000"]);

    let output = run(&dir, &["goal", "progress"]);
    assert!(output.contains("Net income:     £3675.00"));
    assert!(output.contains("Italy (Holiday)"));
    assert!(output.contains("£35000.00"));
}

#[test]
fn test_history_records_changes() {
    let dir = TempDir::new().unwrap();

    run(&dir, &["expense", "add", "2024-05-04", "coffee", "Food", "3"]);
    run(&dir, &["expense", "edit", "4", "--field", "amount", "--value", "3.20"]);

    let output = run(&dir, &["history"]);
    assert!(output.contains("CREATE Expense #4 (Food)"));
    assert!(output.contains("UPDATE Expense #4"));
    assert!(output.contains("amount: 300 -> 320"));
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env_dir = TempDir::new().unwrap();
    let flag_dir = TempDir::new().unwrap();

    ledger(&env_dir)
        .args(["--data-dir"])
        .arg(flag_dir.path())
        .arg("init")
        .assert()
        .success();

    assert!(flag_dir.path().join("data").join("ledger.db").exists());
    assert!(!env_dir.path().join("data").exists());
}
