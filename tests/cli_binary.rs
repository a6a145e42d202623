//! Smoke tests spawning the duolog binary.

use std::fs;
use std::process::Command;

fn binary_output(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_duolog"))
        .args(args)
        .output()
        .unwrap_or_else(|error| panic!("failed to run duolog: {error}"))
}

#[test]
fn help_lists_usage() {
    let output = binary_output(&["--help"]);
    assert!(output.status.success(), "--help should succeed");
    assert!(
        output.stderr.is_empty(),
        "help output should not write to stderr"
    );
    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("duolog"));
}

#[test]
fn without_a_command_shows_usage() {
    let output = binary_output(&[]);
    assert!(
        !output.status.success(),
        "running without a command should fail so the caller sees the usage"
    );
    let stderr = String::from_utf8(output.stderr).expect("stderr is UTF-8");
    assert!(stderr.contains("Usage:"));
}

#[test]
fn log_command_writes_the_log_file() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let log_dir = scratch.path().join("log");

    let output = binary_output(&[
        "log",
        "spawned from a test",
        "--log-dir",
        log_dir.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success(), "log command should succeed");

    let content = fs::read_to_string(log_dir.join("log.log")).expect("log file readable");
    assert!(content.contains("[interactive session]"));
    assert!(content.ends_with("Message: spawned from a test\n"));
}

#[test]
fn archive_command_names_the_created_archive() {
    let scratch = tempfile::tempdir().expect("tempdir");
    let log_dir = scratch.path().join("log");
    fs::create_dir(&log_dir).expect("log dir");
    fs::write(log_dir.join("log.log"), "a line\n").expect("seed");
    let dest = scratch.path().join("backups");

    let output = binary_output(&[
        "archive",
        "--log-dir",
        log_dir.to_str().expect("utf-8 path"),
        "--into",
        dest.to_str().expect("utf-8 path"),
    ]);
    assert!(output.status.success(), "archive command should succeed");

    let stdout = String::from_utf8(output.stdout).expect("stdout is UTF-8");
    assert!(stdout.contains("archived log directory to"));
    assert!(stdout.contains(".tar.gz"));
}
