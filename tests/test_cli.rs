//! Command line tests.
//!
//! These tests run the built `sphone` binary against files in a scratch
//! directory and check its output and exit status.

use std::process::Command;
use tempfile::{tempdir, TempDir};

/// Run the binary inside `dir` and return (stdout, stderr, exit code).
fn run_cli(dir: &TempDir, envs: &[(&str, &str)], args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_sphone"))
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("SPHONE_CONTACTS_FILE", dir.path().join("contact_list.json"))
        .env("SPHONE_CALL_HISTORY_FILE", dir.path().join("call_history_db.json"))
        .env("SPHONE_EXPORT_FILE", dir.path().join("exported_contacts.txt"))
        .envs(envs.iter().copied())
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_config_error_reported_once() {
    let dir = tempdir().unwrap();

    let (stdout, stderr, code) = run_cli(&dir, &[("SPHONE_CONTACTS_FILE", "  ")], &["history"]);

    assert_eq!(code, 1);
    let combined = format!("{}{}", stdout, stderr);
    assert_eq!(combined.matches("Failed to load configuration").count(), 1);
    assert_eq!(combined.matches("Cannot be empty").count(), 1);
}

#[test]
fn test_add_existing_name_reaches_same_contact() {
    let dir = tempdir().unwrap();

    let (_, _, code) = run_cli(&dir, &[], &["contacts", "add", "Ana", "5551234567"]);
    assert_eq!(code, 0);

    let (stdout, _, code) = run_cli(&dir, &[], &["contacts", "add", "ana", "555-999-0000"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("already exists"), "stdout: {}", stdout);

    let (stdout, _, code) = run_cli(&dir, &[], &["contacts", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("1. Ana (2 number(s))"), "stdout: {}", stdout);
    assert!(!stdout.contains("2. "));

    let (stdout, _, code) = run_cli(&dir, &[], &["contacts", "call", "ana", "--entry", "2"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Dialing 5559990000..."), "stdout: {}", stdout);
}

#[test]
fn test_invalid_number_exits_with_error() {
    let dir = tempdir().unwrap();

    let (stdout, _, code) = run_cli(&dir, &[], &["dial", "12345"]);

    assert_eq!(code, 1);
    assert!(stdout.contains("Error: Invalid phone number! Please enter exactly 10 digits."));
    assert!(!dir.path().join("call_history_db.json").exists());
}
