//! Tests for the binary's output and exit status.
//!
//! The binary resolves its database under `$HOME`, so each test points `HOME`
//! at a scratch directory and runs the binary from another one.

#![cfg(unix)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

#[path = "helpers.rs"]
mod helpers;

use helpers::create_labels_db;

fn client_db_path(home: &Path) -> PathBuf {
    home.join("AppData")
        .join("Roaming")
        .join("electron-labelpilot")
        .join("client_data.db")
}

fn run_binary(home: &Path, cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_labels_dump"))
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .current_dir(cwd)
        .output()
        .expect("Failed to run labels_dump")
}

#[test]
fn test_missing_database_exits_one() {
    let home = TempDir::new().expect("Failed to create home dir");
    let cwd = TempDir::new().expect("Failed to create work dir");
    let previous = cwd.path().join("labels_db_dump.json");
    std::fs::write(&previous, "[]\n").expect("Failed to seed previous output");

    let output = run_binary(home.path(), cwd.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("DB not found at "), "stdout: {stdout}");
    assert!(stdout.contains("electron-labelpilot"));
    // An earlier dump is neither replaced nor removed
    assert_eq!(
        std::fs::read_to_string(&previous).expect("previous output still present"),
        "[]\n"
    );
}

#[tokio::test]
async fn test_successful_export_exits_zero() {
    let home = TempDir::new().expect("Failed to create home dir");
    let cwd = TempDir::new().expect("Failed to create work dir");
    let db_path = client_db_path(home.path());
    std::fs::create_dir_all(db_path.parent().expect("parent")).expect("create dirs");
    create_labels_db(&db_path, &[(1, "Invoice", Some(r#"{"a":1}"#))]).await;

    let output = run_binary(home.path(), cwd.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        "Successfully dumped 1 labels to labels_db_dump.json"
    );
    let dumped = std::fs::read_to_string(cwd.path().join("labels_db_dump.json"))
        .expect("output written to the working directory");
    assert!(dumped.contains("\"name\": \"Invoice\""));
}

#[tokio::test]
async fn test_malformed_structure_exits_zero() {
    let home = TempDir::new().expect("Failed to create home dir");
    let cwd = TempDir::new().expect("Failed to create work dir");
    let db_path = client_db_path(home.path());
    std::fs::create_dir_all(db_path.parent().expect("parent")).expect("create dirs");
    create_labels_db(&db_path, &[(1, "Broken", Some("not json"))]).await;

    let output = run_binary(home.path(), cwd.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("Label 1 has malformed structure JSON"),
        "stdout: {stdout}"
    );
    assert!(!cwd.path().join("labels_db_dump.json").exists());
}
