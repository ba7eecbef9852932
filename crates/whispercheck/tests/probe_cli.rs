//! Integration tests for the whispercheck binary.
//!
//! Each test spawns the built binary and verifies the six-line stdout
//! report contract.

use std::process::{Command, Output};

fn run_binary(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_whispercheck"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("LOG_LEVEL")
        .output()
        .expect("failed to spawn whispercheck")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout is not valid UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_six_lines_in_fixed_order() {
    let output = run_binary(&[]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Whisper test script");
    assert!(lines[1].starts_with("Rust version: "));
    assert!(lines[1].len() > "Rust version: ".len());
    assert!(lines[2].starts_with("Whisper version: "));
    assert!(lines[2].len() > "Whisper version: ".len());
    assert!(lines[3].starts_with("Working directory: "));
    assert!(lines[4].starts_with("Available models: ["));
    assert!(lines[4].contains("\"base\""));
    assert_eq!(lines[5], "Whisper seems to be working correctly!");
}

#[test]
fn reports_the_actual_working_directory() {
    let output = run_binary(&[]);
    assert!(output.status.success());

    let cwd = std::env::current_dir().unwrap();
    let lines = stdout_lines(&output);
    assert_eq!(lines[3], format!("Working directory: {}", cwd.display()));
}

#[test]
fn arguments_are_ignored() {
    let output = run_binary(&["--help", "extra", "-v"]);
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Whisper test script");
    assert_eq!(lines[5], "Whisper seems to be working correctly!");
}

#[test]
fn output_is_identical_across_runs() {
    let first = run_binary(&[]);
    let second = run_binary(&[]);
    assert!(first.status.success());
    assert!(second.status.success());

    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn logs_stay_off_stdout() {
    let output = Command::new(env!("CARGO_BIN_EXE_whispercheck"))
        .env_remove("LOG_LEVEL")
        .env("RUST_LOG", "debug")
        .output()
        .expect("failed to spawn whispercheck");
    assert!(output.status.success());

    // Verbose logging goes to stderr; the report contract does not change.
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 6);
    assert!(!output.stderr.is_empty());
}
