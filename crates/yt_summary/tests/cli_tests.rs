//! # CLI Credential Tests
//!
//! Runs the `yt-summary` binary without a Gemini key and checks that the
//! batch entry reports the problem and does no work.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

fn yt_summary(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("yt-summary").unwrap();
    cmd.current_dir(dir)
        .env_remove("GEMINI_API_KEY")
        .env_remove("SENTRY_DSN")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_run_without_api_key_does_no_work() {
    let temp_dir = tempdir().unwrap();
    let output = temp_dir.path().join("summary.json");

    yt_summary(temp_dir.path())
        .arg("run")
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Error: GEMINI_API_KEY environment variable not set.",
        ))
        .stdout(predicate::str::contains("Generated Summary").not());

    assert!(!output.exists(), "No summary should be written without a key");
}

#[test]
fn test_default_command_with_blank_api_key_does_no_work() {
    let temp_dir = tempdir().unwrap();

    yt_summary(temp_dir.path())
        .env("GEMINI_API_KEY", "")
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Error: GEMINI_API_KEY environment variable not set.",
        ));

    assert!(!temp_dir.path().join("summary.json").exists());
}
