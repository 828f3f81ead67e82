// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Record of one dispatched command invocation.

use serde::{Deserialize, Serialize};
use std::time::{Duration, SystemTime};

/// One dispatched command and its captured result
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Sequence number
    pub seq: u64,

    /// Wall-clock timestamp
    pub timestamp: SystemTime,

    /// Elapsed time since the log was created
    #[serde(with = "crate::duration_serde")]
    pub elapsed: Duration,

    /// Top-level command name
    pub command: String,

    /// Verbatim argument string
    pub args: String,

    /// Captured standard output
    pub stdout: String,

    /// Captured standard error
    pub stderr: String,

    /// How the invocation concluded
    pub outcome: RecordedOutcome,
}

/// Outcome of a dispatched command
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordedOutcome {
    /// A handler ran and reported no failure
    Completed,
    /// A handler wrote an `Error:` line to the captured stderr
    ErrorReported { message: String },
    /// No handler family matched the command
    UnknownCommand,
}

impl RecordedOutcome {
    /// Whether this outcome carries a caller-visible failure
    pub fn is_failure(&self) -> bool {
        !matches!(self, RecordedOutcome::Completed)
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
