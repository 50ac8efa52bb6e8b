//! Tests for CLI argument parsing against the built binary.
//!
//! Only paths that exit before the terminal UI starts are exercised here.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn nirakshak_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_nirakshak"))
}

#[test]
fn test_help_lists_options() {
    let output = nirakshak_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--language"));
    assert!(stdout.contains("--log-file"));
}

#[test]
fn test_unknown_language_is_rejected() {
    let output = nirakshak_cmd()
        .args(["--language", "fr"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fr"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, "[defaults]\nbanner_timeout_seconds = 0\n").unwrap();

    let output = nirakshak_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not load"));
    assert!(stderr.contains("banner_timeout_seconds"));
}
