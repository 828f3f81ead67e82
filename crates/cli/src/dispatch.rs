// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command dispatch over an explicit (family, subcommand) registry.

use crate::state::StateStore;
use rinless_capture::CaptureScope;
use std::collections::HashMap;
use std::io::{self, Write};

/// Simulated command handler.
///
/// A handler reads its flat argument string, may consume staged input
/// from the scope one line per prompt, and writes results to the
/// scope's captured streams. Caller-visible failures are `Error:`
/// lines on the captured stderr, not `Err` returns.
pub type Handler = fn(&mut StateStore, &str, &mut CaptureScope) -> io::Result<()>;

/// How one dispatch concluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A family matched and a handler (or the family fallback) ran
    Handled,
    /// No family matched the top-level command
    UnknownCommand,
}

/// One top-level command and its named subcommand handlers.
#[derive(Default)]
pub struct CommandFamily {
    subcommands: HashMap<&'static str, Handler>,
}

impl CommandFamily {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subcommand handler, replacing any previous one
    pub fn register(&mut self, subcommand: &'static str, handler: Handler) {
        self.subcommands.insert(subcommand, handler);
    }

    pub fn handler(&self, subcommand: &str) -> Option<Handler> {
        self.subcommands.get(subcommand).copied()
    }
}

/// Registry mapping (command, subcommand) to handlers.
///
/// Built once at startup; dispatch resolves the family from the
/// top-level command, splits the first argument token off as the
/// subcommand, and passes the remainder to the handler verbatim.
#[derive(Default)]
pub struct CommandRegistry {
    families: HashMap<&'static str, CommandFamily>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler family under a top-level command name
    pub fn register_family(&mut self, command: &'static str, family: CommandFamily) {
        self.families.insert(command, family);
    }

    /// Resolve and run the handler for one invocation.
    ///
    /// Unknown top-level commands write the unknown-command pair to the
    /// captured streams and touch nothing else. A family with no handler
    /// for the subcommand falls back to an echo of the invocation.
    pub fn dispatch(
        &self,
        store: &mut StateStore,
        command: &str,
        args: &str,
        scope: &mut CaptureScope,
    ) -> io::Result<DispatchOutcome> {
        let Some(family) = self.families.get(command) else {
            writeln!(scope.stdout(), "Unknown command: {command}")?;
            writeln!(scope.stderr(), "Error: Command not found: {command}")?;
            return Ok(DispatchOutcome::UnknownCommand);
        };

        let (subcommand, rest) = split_subcommand(args);
        match family.handler(subcommand) {
            Some(handler) => handler(store, rest, scope)?,
            None => writeln!(scope.stdout(), "Simulated output for command: {command} {args}")?,
        }
        Ok(DispatchOutcome::Handled)
    }
}

/// Split the subcommand token from the argument remainder.
///
/// The first maximal whitespace run separates the two; the remainder
/// keeps its internal spacing.
fn split_subcommand(args: &str) -> (&str, &str) {
    match args.find(char::is_whitespace) {
        Some(idx) => (&args[..idx], args[idx..].trim_start()),
        None => (args, ""),
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
