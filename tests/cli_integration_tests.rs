//! CLI Integration Tests
//!
//! Tests the binary directly using assert_cmd to exercise main.rs code paths.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn keywords() -> Command {
    let mut cmd = Command::cargo_bin("excel-keywords").unwrap();
    cmd.env_remove("EXCEL_KEYWORDS_WORKBOOK").env_remove("RUST_LOG");
    cmd
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    keywords()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("excel-keywords"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    keywords()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("excel-keywords"));
}

#[test]
fn test_cli_requires_workbook() {
    keywords()
        .args(["sheet", "--sheet", "Data"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--workbook"));
}

// ═══════════════════════════════════════════════════════════════════════════
// READER COMMANDS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_sheet_prints_rows_as_json() {
    let dir = TempDir::new().unwrap();
    let path = workbook(&dir, "basic.xlsx", &[("Data", basic_sheet())]);

    let output = keywords()
        .arg("--workbook")
        .arg(&path)
        .args(["sheet", "--sheet", "Data"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!([["a", "b"], [1, 2], [3, null]])
    );
}

#[test]
fn test_workbook_from_env_var() {
    let dir = TempDir::new().unwrap();
    let path = workbook(&dir, "envs.xlsx", &[("Targets", env_sheet())]);

    keywords()
        .env("EXCEL_KEYWORDS_WORKBOOK", &path)
        .args(["env-row", "--sheet", "Targets", "prod"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://prod"));
}

#[test]
fn test_env_row_not_found_exits_with_failure() {
    let dir = TempDir::new().unwrap();
    let path = workbook(&dir, "envs.xlsx", &[("Targets", env_sheet())]);

    keywords()
        .arg("-w")
        .arg(&path)
        .args(["env-row", "-s", "Targets", "staging"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("null"))
        .stderr(predicate::str::contains("Environment 'staging' not found"));
}

#[test]
fn test_missing_file_diagnostic() {
    let dir = TempDir::new().unwrap();

    keywords()
        .arg("-w")
        .arg(missing(&dir))
        .args(["first-row", "-s", "Data"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_data1_all_sheets() {
    let dir = TempDir::new().unwrap();
    let path = workbook(
        &dir,
        "book.xlsx",
        &[("Targets", env_sheet()), ("Empty", vec![])],
    );

    let output = keywords()
        .arg("-w")
        .arg(&path)
        .arg("data1")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "Targets": {"env": "prod", "url": "http://prod-2", "user": "carol"}
        })
    );
}

#[test]
fn test_row_command() {
    let dir = TempDir::new().unwrap();
    let path = workbook(&dir, "basic.xlsx", &[("Data", basic_sheet())]);

    keywords()
        .arg("-w")
        .arg(&path)
        .args(["row", "-s", "Data", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Row number 5 not found"));
}

// ═══════════════════════════════════════════════════════════════════════════
// WRITER COMMANDS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_write_then_read_back() {
    let dir = TempDir::new().unwrap();
    let path = workbook(&dir, "status.xlsx", &[("Runs", status_sheet())]);

    keywords()
        .arg("-w")
        .arg(&path)
        .args(["write", "-s", "Runs", "Status", "DONE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cell updated"));

    keywords()
        .arg("-w")
        .arg(&path)
        .args(["first-data-row", "-s", "Runs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"Status\": \"DONE\""));
}

#[test]
fn test_write_all_number_kind() {
    let dir = TempDir::new().unwrap();
    let path = workbook(&dir, "status.xlsx", &[("Runs", status_sheet())]);

    keywords()
        .arg("-w")
        .arg(&path)
        .args(["write-all", "-s", "Runs", "Status", "5", "--kind", "number"])
        .assert()
        .success();

    let output = keywords()
        .arg("-w")
        .arg(&path)
        .args(["data", "-s", "Runs"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["Status"], serde_json::json!(5));
}

#[test]
fn test_write_missing_column_fails() {
    let dir = TempDir::new().unwrap();
    let path = workbook(&dir, "status.xlsx", &[("Runs", status_sheet())]);

    keywords()
        .arg("-w")
        .arg(&path)
        .args(["write", "-s", "Runs", "Result", "DONE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Column Result not found in sheet Runs"));
}
