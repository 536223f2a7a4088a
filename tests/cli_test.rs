//! Integration tests for the `did` binary: process exit codes and output streams.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

use did::config::Config;
use did::exitcode;

const OVERRIDES: [&str; 5] = [
    "DID_EMAIL",
    "DID_WIDTH",
    "DID_SEPARATOR",
    "DID_SEPARATOR_WIDTH",
    "RUST_LOG",
];

fn did(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_did"));
    for key in OVERRIDES {
        cmd.env_remove(key);
    }
    cmd.env("DID_DIR", dir)
        .env("NO_COLOR", "1")
        .envs(env.iter().copied())
        .args(args)
        .output()
        .expect("did binary runs")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn given_missing_config_when_run_then_logs_one_line_and_exits_one() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing").to_string_lossy().to_string();

    let output = did(dir.path(), &["--config", &missing], &[]);

    assert_eq!(output.status.code(), Some(exitcode::FAILURE));
    let err = stderr(&output);
    assert_eq!(err.lines().count(), 1, "stderr: {err}");
    assert!(err.contains("ERROR"));
    assert!(err.contains("Unable to read the config file"));
    assert!(!err.contains("Caused by"));
    assert!(stdout(&output).is_empty());
}

#[test]
fn given_missing_config_with_debug_when_run_then_prints_cause_chain_and_exits_config() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing").to_string_lossy().to_string();

    let output = did(dir.path(), &["--config", &missing, "--debug"], &[]);

    assert_eq!(output.status.code(), Some(exitcode::CONFIG));
    let err = stderr(&output);
    assert!(err.contains("Error: Unable to read the config file"));
    assert!(err.contains("Caused by:"));
    assert!(err.contains("ConfigFile"));
}

#[test]
fn given_example_when_run_then_prints_config_and_exits_zero() {
    let dir = TempDir::new().unwrap();

    let output = did(dir.path(), &["--example"], &[]);

    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(stdout(&output), Config::example());
    assert!(stderr(&output).is_empty());
}

#[test]
fn given_config_in_did_dir_when_run_then_prints_header() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("config"),
        "[general]\nemail = \"some@email.org\"\nwidth = 3\n",
    )
    .unwrap();

    let output = did(dir.path(), &["--since", "2015-10-03"], &[]);

    assert_eq!(output.status.code(), Some(exitcode::OK));
    assert_eq!(
        stdout(&output),
        "Status report for 2015-10-03.\n\n~~~\n\n* some@email.org\n"
    );
    assert!(stderr(&output).is_empty());
}

#[test]
fn given_invalid_width_in_environment_when_run_then_names_variable_and_exits_one() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config"), Config::example()).unwrap();

    let output = did(dir.path(), &[], &[("DID_WIDTH", "abc")]);

    assert_eq!(output.status.code(), Some(exitcode::FAILURE));
    assert!(stderr(&output).contains("Invalid DID_WIDTH 'abc' in the environment"));
    assert!(stdout(&output).is_empty());
}
