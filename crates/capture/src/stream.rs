// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped capture of a command's output, error, and input streams.

use crate::queue::InputQueue;
use std::collections::VecDeque;
use std::fmt;

/// Error raised when the capture protocol is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureError {
    /// A capture scope is already open on this controller.
    AlreadyActive,
}

impl fmt::Display for CaptureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureError::AlreadyActive => {
                write!(f, "a stream capture is already active on this context")
            }
        }
    }
}

impl std::error::Error for CaptureError {}

/// Buffer-backed replacement streams for one command invocation.
///
/// Writes land in the scope's buffers instead of the process streams.
/// Input staged when the scope was opened is read back line by line,
/// in the order it was queued.
#[derive(Debug)]
pub struct CaptureScope {
    out: Vec<u8>,
    err: Vec<u8>,
    input: VecDeque<String>,
}

impl CaptureScope {
    fn new(input: Vec<String>) -> Self {
        Self {
            out: Vec::new(),
            err: Vec::new(),
            input: input.into(),
        }
    }

    /// Replacement standard output
    pub fn stdout(&mut self) -> &mut Vec<u8> {
        &mut self.out
    }

    /// Replacement standard error
    pub fn stderr(&mut self) -> &mut Vec<u8> {
        &mut self.err
    }

    /// Read the next staged input line; `None` once input is exhausted.
    ///
    /// Never blocks. Each staged line is consumed exactly once.
    pub fn read_line(&mut self) -> Option<String> {
        self.input.pop_front()
    }

    /// Number of staged input lines not yet read
    pub fn pending_input(&self) -> usize {
        self.input.len()
    }
}

/// Captured text from one closed scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedStreams {
    pub stdout: String,
    pub stderr: String,
}

/// Controller owning at most one capture scope at a time.
///
/// `begin` hands out a scope whose buffers stand in for the process
/// streams; `end` closes it and returns the captured text. Opening a
/// second scope before closing the first is a protocol violation and
/// fails rather than nesting.
#[derive(Debug, Default)]
pub struct StreamCapture {
    active: bool,
}

impl StreamCapture {
    /// Create an idle controller
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Open a capture scope, draining `queue` into its staged input.
    ///
    /// The queue is emptied even when it holds no entries the handler
    /// will read; staged input belongs to exactly one invocation.
    pub fn begin(&mut self, queue: &InputQueue) -> Result<CaptureScope, CaptureError> {
        if self.active {
            return Err(CaptureError::AlreadyActive);
        }
        self.active = true;
        Ok(CaptureScope::new(queue.drain()))
    }

    /// Close a scope and return its captured text.
    ///
    /// The controller accepts a new `begin` afterwards; the scope's
    /// buffers are dropped with it.
    pub fn end(&mut self, scope: CaptureScope) -> CapturedStreams {
        self.active = false;
        CapturedStreams {
            stdout: String::from_utf8_lossy(&scope.out).into_owned(),
            stderr: String::from_utf8_lossy(&scope.err).into_owned(),
        }
    }

    /// Whether a scope is currently open
    pub fn is_active(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
