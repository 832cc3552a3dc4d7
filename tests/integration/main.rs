//! Integration tests for the qna CLI
//!
//! These tests drive the binary against a data file in a temporary
//! directory: register → ask → answer → delete → inspect.


use assert_cmd::cargo;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a qna command bound to `dir`
///
/// `QNA_CONFIG` points at a file that does not exist so the user's own
/// config never leaks into the tests.
fn qna(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("qna"));
    cmd.env("QNA_CONFIG", dir.join("config.toml"))
        .env("RUST_LOG", "warn")
        .arg("--data")
        .arg(dir.join("qna.json"));
    cmd
}

/// Register a user
fn add_user(dir: &Path, handle: &str) {
    qna(dir)
        .args(["user", "add", handle, "--password", "password", "--name", handle])
        .assert()
        .success();
}

/// Read a JSON document from stdout
fn json_output(cmd: &mut assert_cmd::Command) -> serde_json::Value {
    let output = cmd.arg("--json").output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// BASIC COMMANDS
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    qna(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("qna v"));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    let json = json_output(qna(temp.path()).arg("version"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_no_command_shows_hint() {
    let temp = TempDir::new().unwrap();
    qna(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("qna --help"));
}

#[test]
fn test_user_add_and_list() {
    let temp = TempDir::new().unwrap();
    add_user(temp.path(), "javajigi");

    qna(temp.path())
        .args(["user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("javajigi"));
    assert!(temp.path().join("qna.json").exists());
}

#[test]
fn test_duplicate_user_fails() {
    let temp = TempDir::new().unwrap();
    add_user(temp.path(), "javajigi");

    qna(temp.path())
        .args(["user", "add", "javajigi", "--password", "x", "--name", "again"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already taken"));
}

#[test]
fn test_ask_requires_acting_user() {
    let temp = TempDir::new().unwrap();
    qna(temp.path())
        .args(["question", "ask", "--title", "title1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--as"));
}

#[test]
fn test_unknown_acting_user() {
    let temp = TempDir::new().unwrap();
    qna(temp.path())
        .args(["--as", "nobody", "question", "ask", "--title", "title1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_invalid_id() {
    let temp = TempDir::new().unwrap();
    qna(temp.path())
        .args(["question", "show", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid id"));
}

#[test]
fn test_show_missing_question() {
    let temp = TempDir::new().unwrap();
    qna(temp.path())
        .args(["question", "show", "99"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("question #99"));
}

#[test]
fn test_empty_lists() {
    let temp = TempDir::new().unwrap();
    qna(temp.path())
        .args(["question", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No questions found."));
    qna(temp.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing deleted."));
}
