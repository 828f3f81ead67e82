// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Flag and environment surface of the rinless binary.

mod common;

use common::{write_fixture, BACKLOG_FIXTURE};
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rinless() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rinless"))
}

#[test]
fn test_fixture_flag_seeds_printable_state() {
    let fixture = write_fixture(BACKLOG_FIXTURE);

    rinless()
        .args(["--fixture", fixture.path().to_str().unwrap(), "print", "101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title: Implement registration form"))
        .stdout(predicate::str::contains("ID: f47ac10b-58cc-4372-a567-0e02b2c3d479"))
        .stdout(predicate::str::contains("sprint: Sprint 42"));
}

#[test]
fn test_input_flags_answer_interactive_prompts() {
    let fixture = write_fixture(BACKLOG_FIXTURE);

    rinless()
        .args(["--fixture", fixture.path().to_str().unwrap()])
        .args(["--input", "1", "--input", "Registration form v2"])
        .args(["update", "101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Work Item: 101"))
        .stdout(predicate::str::contains("Field updated successfully"));
}

#[test]
fn test_comma_separated_input_value() {
    rinless()
        .args(["--input", "1,Renamed", "update", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Field updated successfully"));
}

#[test]
fn test_piped_stdin_lines_stage_answers() {
    rinless()
        .args(["update", "5"])
        .write_stdin("2\nA description from stdin\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Field updated successfully"));
}

#[test]
fn test_input_flags_take_precedence_over_stdin() {
    rinless()
        .args(["--input", "0", "update", "5"])
        .write_stdin("1\nignored\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Update cancelled"));
}

#[test]
fn test_empty_stdin_reads_as_cancel() {
    rinless()
        .args(["update", "5"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Update cancelled"));
}

#[test]
fn test_environment_variables_mirror_flags() {
    let fixture = write_fixture(BACKLOG_FIXTURE);

    rinless()
        .env("RINLESS_FIXTURE", fixture.path())
        .env("RINLESS_INPUT", "5,carol")
        .args(["update", "101"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Field updated successfully"));
}

#[test]
fn test_capture_flag_writes_a_jsonl_trace() {
    let dir = TempDir::new().unwrap();
    let trace = dir.path().join("trace.jsonl");

    rinless()
        .args(["--capture", trace.to_str().unwrap(), "list", "p"])
        .assert()
        .success();

    let text = std::fs::read_to_string(&trace).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 1, "Expected one trace line: {}", text);

    let record: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(record["command"], "rin");
    assert_eq!(record["args"], "list p");
    assert_eq!(record["outcome"]["type"], "completed");
}

#[test]
fn test_version_flag() {
    rinless()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rin"));
}
