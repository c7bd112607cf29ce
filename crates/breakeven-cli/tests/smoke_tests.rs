//! Smoke tests for the breakeven CLI
//!
//! These tests run the real binary and check its stdout, stderr, and exit code.

#![allow(deprecated)] // Allow deprecated Command::cargo_bin until assert_cmd is updated
#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a command for the breakeven binary
fn breakeven() -> Command {
    let mut cmd = Command::cargo_bin("breakeven").expect("breakeven binary should exist");
    cmd.env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Basic CLI Tests
// ============================================================================

#[test]
fn test_version_flag() {
    breakeven()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.2.0"));
}

#[test]
fn test_help_flag() {
    breakeven()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("evaluate"))
        .stdout(predicate::str::contains("chart"))
        .stdout(predicate::str::contains("sensitivity"));
}

#[test]
fn test_missing_subcommand_fails() {
    breakeven().assert().failure();
}

// ============================================================================
// Evaluate Tests
// ============================================================================

#[test]
fn test_evaluate_default_scenario() {
    breakeven()
        .args(["--color", "never", "evaluate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2,000,000"))
        .stdout(predicate::str::contains("$1,500,000"))
        .stdout(predicate::str::contains("$500,000"))
        .stdout(predicate::str::contains("500 units"))
        .stderr(predicate::str::contains(
            "OK Break-even point exceeded! The bakery is profitable.",
        ));
}

#[test]
fn test_evaluate_below_break_even_warns() {
    breakeven()
        .args(["--color", "never", "evaluate", "--quantity", "200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$-300,000"))
        .stderr(predicate::str::contains("WARN Break-even point not reached yet."));
}

#[test]
fn test_evaluate_degenerate_margin() {
    breakeven()
        .args(["--color", "never", "evaluate", "--price", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("0 units"))
        .stderr(predicate::str::contains("does not exceed variable cost"));
}

#[test]
fn test_evaluate_quiet_hides_status() {
    breakeven()
        .args(["-q", "evaluate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$2,000,000"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_evaluate_json() {
    let output = breakeven()
        .args(["evaluate", "--format", "json", "--quantity", "250"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["revenue"], 500_000.0);
    assert_eq!(value["break_even_quantity"], 500.0);
    assert_eq!(value["is_profitable"], false);
}

#[test]
fn test_evaluate_rejects_negative_input() {
    breakeven()
        .args(["evaluate", "--fixed-cost", "-100"])
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("Error: Invalid scenario"))
        .stderr(predicate::str::contains("must not be negative"));
}

#[test]
fn test_evaluate_accepts_negative_with_flag() {
    breakeven()
        .args(["-q", "evaluate", "--fixed-cost", "-100", "--allow-negative"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,000,100"));
}

#[test]
fn test_evaluate_rejects_quantity_over_limit() {
    breakeven()
        .args(["evaluate", "--quantity", "6000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));

    breakeven()
        .args(["-q", "evaluate", "--quantity", "6000", "--no-quantity-limit"])
        .assert()
        .success();
}

#[test]
fn test_evaluate_rejects_non_numeric_input() {
    breakeven()
        .args(["evaluate", "--price", "lots"])
        .assert()
        .failure();
}

// ============================================================================
// Table, Chart, Sensitivity Tests
// ============================================================================

#[test]
fn test_table_default_rows() {
    let output = breakeven().arg("table").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 52);
}

#[test]
fn test_table_json_custom_domain() {
    let output = breakeven()
        .args(["table", "--max-quantity", "1000", "--step", "250", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[4]["quantity"], 1_000);
}

#[test]
fn test_chart_outputs_svg() {
    breakeven()
        .arg("chart")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains("<svg"))
        .stdout(predicate::str::contains("BE: 500 units"))
        .stdout(predicate::str::contains("units sold"))
        .stdout(predicate::str::contains("currency amount"));
}

#[test]
fn test_chart_rejects_tiny_canvas() {
    breakeven().args(["chart", "--width", "10"]).assert().failure();
}

#[test]
fn test_chart_rejects_oversized_grid() {
    breakeven()
        .args(["chart", "--max-quantity", "4294967295", "--step", "1"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: Invalid argument"));
}

#[test]
fn test_table_rejects_oversized_grid() {
    breakeven()
        .args(["table", "--max-quantity", "4294967295", "--step", "1"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Invalid argument"));

    breakeven()
        .args(["-q", "table", "--max-quantity", "4294967295", "--step", "100000"])
        .assert()
        .success();
}

#[test]
fn test_sensitivity_text() {
    breakeven()
        .arg("sensitivity")
        .assert()
        .success()
        .stdout(predicate::str::contains("Break-even vs sale price"))
        .stdout(predicate::str::contains("Break-even vs variable cost"));
}

// ============================================================================
// Report and Config Tests
// ============================================================================

#[test]
fn test_report_markdown() {
    breakeven()
        .args(["report", "--format", "markdown"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("# Break-Even Report - Artisan Bakery"))
        .stdout(predicate::str::contains("**Break-even point in units:** 500.00"));
}

#[test]
fn test_report_zero_max_quantity_fails() {
    breakeven()
        .args(["report", "--max-quantity", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid argument"));
}

#[test]
fn test_config_json() {
    let output = breakeven().args(["-vv", "config"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["verbosity"], "Debug");
    assert_eq!(value["scenario"]["fixed_cost"], 500_000.0);
}

#[test]
fn test_tui_without_terminal_fails() {
    breakeven()
        .arg("tui")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Terminal UI error"));
}
