// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_parse_basic_command() {
    let cli = Cli::try_parse_from(["rin", "list", "p"]).unwrap();
    assert_eq!(cli.command, vec!["list", "p"]);
    assert!(cli.fixture.is_none());
    assert!(cli.capture.is_none());
    assert!(cli.input.is_empty());
}

#[test]
fn test_parse_repeated_inputs() {
    let cli =
        Cli::try_parse_from(["rin", "--input", "2", "--input", "new title", "update", "5"])
            .unwrap();
    assert_eq!(cli.input, vec!["2", "new title"]);
    assert_eq!(cli.command, vec!["update", "5"]);
}

#[test]
fn test_parse_comma_separated_inputs() {
    let cli = Cli::try_parse_from(["rin", "--input", "2,newtitle", "update", "5"]).unwrap();
    assert_eq!(cli.input, vec!["2", "newtitle"]);
}

#[test]
fn test_parse_fixture_and_capture_paths() {
    let cli = Cli::try_parse_from([
        "rin",
        "--fixture",
        "backlog.toml",
        "--capture",
        "/tmp/trace.jsonl",
        "list",
    ])
    .unwrap();
    assert_eq!(cli.fixture, Some(PathBuf::from("backlog.toml")));
    assert_eq!(cli.capture, Some(PathBuf::from("/tmp/trace.jsonl")));
}

#[test]
fn test_parse_command_swallows_trailing_flags() {
    let cli = Cli::try_parse_from(["rin", "makechildren", "101", "--title=Custom"]).unwrap();
    assert_eq!(cli.command, vec!["makechildren", "101", "--title=Custom"]);
}

#[test]
fn test_parse_options_after_command_are_command_words() {
    let cli = Cli::try_parse_from(["rin", "update", "5", "--input", "2"]).unwrap();
    assert_eq!(cli.command, vec!["update", "5", "--input", "2"]);
    assert!(cli.input.is_empty());
}

#[test]
fn test_parse_requires_a_command() {
    assert!(Cli::try_parse_from(["rin"]).is_err());
    assert!(Cli::try_parse_from(["rin", "--fixture", "backlog.toml"]).is_err());
}
