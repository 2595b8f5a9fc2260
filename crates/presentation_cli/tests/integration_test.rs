//! Integration tests for CLI
//!
//! These tests run the built binary for commands that need no video server.

#![allow(clippy::expect_used)]

use std::{io::Write, process::Command};

fn cli() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ridevibe-cli"));
    command.env_remove("RIDEVIBE_CONFIG").env_remove("RUST_LOG");
    command
}

fn stdout_of(args: &[&str]) -> String {
    let output = cli().args(args).output().expect("failed to run cli");
    assert!(output.status.success(), "cli failed: {output:?}");
    String::from_utf8(output.stdout).expect("utf-8 output")
}

#[test]
fn format_time_whole_seconds() {
    assert_eq!(stdout_of(&["format-time", "65"]).trim(), "1:05");
}

#[test]
fn format_time_floors_fractions() {
    assert_eq!(stdout_of(&["format-time", "599.9"]).trim(), "9:59");
}

#[test]
fn format_time_negative_is_zero() {
    assert_eq!(stdout_of(&["format-time", "-3"]).trim(), "0:00");
}

#[test]
fn format_time_needs_no_config() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    let stdout = stdout_of(&[
        "--config",
        path.to_str().expect("utf-8 path"),
        "format-time",
        "83",
    ]);

    assert_eq!(stdout.trim(), "1:23");
}

#[test]
fn help_lists_commands() {
    let help = stdout_of(&["--help"]);
    for command in ["ask", "videos", "video", "status", "format-time"] {
        assert!(help.contains(command), "missing {command} in help");
    }
}

#[test]
fn missing_config_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    let output = cli()
        .args(["--config", path.to_str().expect("utf-8 path"), "status"])
        .output()
        .expect("failed to run cli");

    assert!(!output.status.success());
}

#[test]
fn invalid_config_is_rejected() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("tempfile");
    writeln!(file, "[backend]\ntimeout_secs = 0").expect("write config");

    let output = cli()
        .args(["--config", file.path().to_str().expect("utf-8 path"), "videos"])
        .output()
        .expect("failed to run cli");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("timeout_secs"), "unexpected stderr: {stderr}");
}

#[test]
fn blank_query_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let output = cli()
        .current_dir(dir.path())
        .args(["ask", "   "])
        .output()
        .expect("failed to run cli");

    assert!(!output.status.success());
}
