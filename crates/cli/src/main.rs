// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rin CLI Simulator binary entry point.

use std::io::{BufRead, IsTerminal};
use std::process::ExitCode;

use clap::Parser;

use rinless::capture::CaptureLog;
use rinless::cli::Cli;
use rinless::context::ScenarioContext;
use rinless::fixture::Fixture;
use rinless::handlers::TOOL_COMMAND;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut context = match build_context(&cli) {
        Ok(context) => context,
        Err(error) => {
            eprintln!("Error: {error}");
            return ExitCode::from(2);
        }
    };
    if let Err(error) = stage_inputs(&cli, &context) {
        eprintln!("Error: {error}");
        return ExitCode::from(2);
    }

    let invocation = cli.command.join(" ");
    match context.run_command(TOOL_COMMAND, &invocation) {
        Ok(result) => {
            print!("{}", result.stdout);
            eprint!("{}", result.stderr);
            if result.is_error() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::from(2)
        }
    }
}

fn build_context(cli: &Cli) -> Result<ScenarioContext, Box<dyn std::error::Error>> {
    let mut context = match &cli.capture {
        Some(path) => ScenarioContext::new().with_capture_log(CaptureLog::with_file(path)?),
        None => ScenarioContext::new(),
    };
    if let Some(path) = &cli.fixture {
        Fixture::load(path)?.apply(&mut context);
    }
    Ok(context)
}

/// Stage interactive answers from `--input` flags, falling back to
/// piped stdin lines when no flag was given.
fn stage_inputs(cli: &Cli, context: &ScenarioContext) -> std::io::Result<()> {
    if !cli.input.is_empty() {
        for answer in &cli.input {
            context.stage_input(answer.clone());
        }
        return Ok(());
    }

    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Ok(());
    }
    for line in stdin.lock().lines() {
        context.stage_input(line?);
    }
    Ok(())
}
