// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated handlers for the `rin` command family.
//!
//! Each handler reproduces the observable behavior of one subcommand of
//! the administrative tool: it renders from the state store when the
//! scenario has saved work items, and falls back to the tool's sample
//! output when the store is empty.

mod children;
mod list;
mod print;
mod update;

use crate::dispatch::{CommandFamily, CommandRegistry};
use regex::Regex;
use std::sync::{LazyLock, OnceLock};

/// Top-level command the simulated tool answers to
pub const TOOL_COMMAND: &str = "rin";

/// Static regex for the id shape the real tool rejects
static LETTER_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new("[a-zA-Z]").ok());

/// Whether an id argument contains a letter (and so is not numeric)
fn contains_letter(text: &str) -> bool {
    LETTER_REGEX
        .as_ref()
        .is_some_and(|re| re.is_match(text))
}

static REGISTRY: OnceLock<CommandRegistry> = OnceLock::new();

/// Registry of simulated handlers, built once per process.
pub fn standard_registry() -> &'static CommandRegistry {
    REGISTRY.get_or_init(|| {
        let mut family = CommandFamily::new();
        family.register("list", list::run);
        family.register("update", update::run);
        family.register("print", print::run);
        family.register("makechildren", children::run);

        let mut registry = CommandRegistry::new();
        registry.register_family(TOOL_COMMAND, family);
        registry
    })
}
