// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ordered queue of pre-staged input lines.

use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Thread-safe FIFO of pending input strings.
///
/// Test steps stage the answers an interactive command will ask for;
/// the command consumes them front-to-back, one per prompt. Reads never
/// block: an exhausted queue yields `None`.
pub struct InputQueue {
    entries: Arc<Mutex<VecDeque<String>>>,
}

impl InputQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Append one input line
    pub fn push(&self, value: impl Into<String>) {
        self.entries.lock().push_back(value.into());
    }

    /// Append several input lines, preserving their order
    pub fn push_all<I, S>(&self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries = self.entries.lock();
        for value in values {
            entries.push_back(value.into());
        }
    }

    /// Remove and return the front entry, if any
    pub fn pop(&self) -> Option<String> {
        self.entries.lock().pop_front()
    }

    /// Remove and return every entry in queue order
    pub fn drain(&self) -> Vec<String> {
        self.entries.lock().drain(..).collect()
    }

    /// Number of pending entries
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check whether the queue has no pending entries
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop all pending entries
    pub fn clear(&self) {
        self.entries.lock().clear();
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InputQueue {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
