// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing matching the rin tool's interface.

use clap::Parser;
use std::path::PathBuf;

/// Rin CLI Simulator
#[derive(Parser, Debug, Clone)]
#[command(name = "rin", version, about = "Rin CLI Simulator")]
pub struct Cli {
    /// Fixture file seeding the scenario state (TOML or JSON)
    #[arg(long, env = "RINLESS_FIXTURE", value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    /// Answer staged for an interactive prompt (repeatable or comma-separated)
    #[arg(
        long = "input",
        env = "RINLESS_INPUT",
        value_delimiter = ',',
        value_name = "ANSWER"
    )]
    pub input: Vec<String>,

    /// Write a JSONL trace of the invocation to this file
    #[arg(long, env = "RINLESS_CAPTURE", value_name = "FILE")]
    pub capture: Option<PathBuf>,

    /// Command line to simulate, e.g. `list p` or `update WI-1`
    #[arg(value_name = "COMMAND", required = true, trailing_var_arg = true)]
    pub command: Vec<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
