//! Integration tests for the `conflicts` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the detect, check
//! and validate subcommands through the actual binary, including stdin/stdout
//! piping, file I/O, exit codes and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).expect("fixture must exist")
}

fn conflicts() -> Command {
    Command::cargo_bin("conflicts").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// detect
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn detect_stdin_to_stdout() {
    let output = conflicts()
        .arg("detect")
        .write_stdin(read_fixture("conflicting.json"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
    let list = value.as_array().unwrap();
    assert_eq!(list.len(), 2);

    assert_eq!(list[0]["type"], "regular-regular");
    assert_eq!(list[0]["regId1"], "REG-A");
    assert_eq!(list[0]["regId2"], "REG-B");
    assert_eq!(list[0]["dayOfWeek"], 2);
    assert_eq!(list[0]["overlappingWeeks"].as_array().unwrap().len(), 14);

    assert_eq!(list[1]["type"], "makeup-regular");
    assert_eq!(list[1]["date"], "2024-10-02");
    assert_eq!(list[1]["makeupWeek"], 5);
    assert_eq!(list[1]["time1"], "14:00 - 15:30");
    assert_eq!(list[1]["time2"], "14:30 - 15:00");
}

#[test]
fn detect_file_to_file_pretty() {
    let dir = std::env::temp_dir().join(format!("conflicts-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let output_path = dir.join("conflicts.json");
    let _ = std::fs::remove_file(&output_path);

    conflicts()
        .args(["detect", "--pretty", "-i", fixture("conflicting.json").as_str(), "-o"])
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    assert!(content.contains("\n  {"), "output should be pretty-printed");
    let value: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 2);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn detect_clean_selection_prints_empty_array() {
    conflicts()
        .args(["detect", "-i", fixture("clean.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn detect_malformed_time_fails() {
    conflicts()
        .args(["detect", "-i", fixture("malformed.json").as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse classroom selection"))
        .stderr(predicate::str::contains("8am"));
}

#[test]
fn detect_missing_file_fails() {
    conflicts()
        .args(["detect", "-i", "/nonexistent/selection.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn detect_strict_rejects_invalid_selection() {
    conflicts()
        .args(["detect", "--strict", "-i", fixture("invalid.json").as_str()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Selection failed strict validation"))
        .stderr(predicate::str::contains("Invalid dayOfWeek for REG-A: 9"));
}

#[test]
fn detect_without_strict_accepts_invalid_selection() {
    conflicts()
        .args(["detect", "-i", fixture("invalid.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let output = conflicts()
        .args(["--verbose", "detect", "-i", fixture("conflicting.json").as_str()])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("schedule conflict detected"), "stderr: {}", stderr);
    let value: Value = serde_json::from_slice(&output.stdout).expect("stdout stays pure JSON");
    assert_eq!(value.as_array().unwrap().len(), 2);
}

// ─────────────────────────────────────────────────────────────────────────────
// check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_clean_selection_exits_zero() {
    conflicts()
        .args(["check", "-i", fixture("clean.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No conflicts among 3 classrooms."));
}

#[test]
fn check_conflicting_selection_exits_two() {
    conflicts()
        .arg("check")
        .write_stdin(read_fixture("conflicting.json"))
        .assert()
        .code(2)
        .stdout(predicate::str::contains(
            "regular-regular  REG-A <-> REG-B  day 2  08:00 - 09:30 (A-101) / 09:00 - 10:00 (B-202)  weeks 1-7,9-15",
        ))
        .stdout(predicate::str::contains(
            "makeup-regular  REG-A <-> REG-B  2024-10-02 (week 5)",
        ))
        .stdout(predicate::str::contains(
            "2 conflict(s): 1 regular-regular, 1 makeup-regular, 0 makeup-makeup",
        ))
        .stdout(predicate::str::contains("Conflicting classrooms: REG-A, REG-B"));
}

// ─────────────────────────────────────────────────────────────────────────────
// validate
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn validate_clean_selection() {
    conflicts()
        .args(["validate", "-i", fixture("clean.json").as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection is valid (3 classrooms)."));
}

#[test]
fn validate_lists_every_issue() {
    conflicts()
        .args(["validate", "-i", fixture("invalid.json").as_str()])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Invalid dayOfWeek for REG-A: 9 (expected 1-7)"))
        .stdout(predicate::str::contains("Duplicate regId: REG-A"));
}

#[test]
fn missing_subcommand_shows_usage() {
    conflicts()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
