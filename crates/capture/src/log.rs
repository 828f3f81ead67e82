// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Capture log implementation.

use crate::record::{CommandRecord, RecordedOutcome};
use parking_lot::Mutex;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::sync::Arc;
use std::time::{Instant, SystemTime};

/// Capture log for recording dispatched commands
pub struct CaptureLog {
    start: Instant,
    records: Arc<Mutex<Vec<CommandRecord>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl CaptureLog {
    /// Create a new in-memory capture log
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: None,
        }
    }

    /// Create a capture log that writes to a file (JSONL format)
    pub fn with_file(path: &Path) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self {
            start: Instant::now(),
            records: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Record one dispatched command
    pub fn record(
        &self,
        command: &str,
        args: &str,
        stdout: &str,
        stderr: &str,
        outcome: RecordedOutcome,
    ) {
        let mut records = self.records.lock();
        let seq = records.len() as u64;
        let record = CommandRecord {
            seq,
            timestamp: SystemTime::now(),
            elapsed: self.start.elapsed(),
            command: command.to_string(),
            args: args.to_string(),
            stdout: stdout.to_string(),
            stderr: stderr.to_string(),
            outcome,
        };

        records.push(record.clone());

        // Write to file if configured
        if let Some(ref writer) = self.file_writer {
            use std::io::Write;
            let mut w = writer.lock();
            if let Ok(json) = serde_json::to_string(&record) {
                let _ = writeln!(w, "{}", json);
                let _ = w.flush();
            }
        }
    }

    /// Get all captured records
    pub fn records(&self) -> Vec<CommandRecord> {
        self.records.lock().clone()
    }

    /// Get the last N records
    pub fn last(&self, n: usize) -> Vec<CommandRecord> {
        let all = self.records.lock();
        all.iter().rev().take(n).rev().cloned().collect()
    }

    /// Count records matching a predicate
    pub fn count<F: Fn(&CommandRecord) -> bool>(&self, pred: F) -> usize {
        self.records.lock().iter().filter(|r| pred(r)).count()
    }

    /// Find records whose command or argument string contains a pattern
    pub fn find_by_command(&self, pattern: &str) -> Vec<CommandRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| r.command.contains(pattern) || r.args.contains(pattern))
            .cloned()
            .collect()
    }

    /// Find records that reported a caller-visible error
    pub fn find_errors(&self) -> Vec<CommandRecord> {
        self.records
            .lock()
            .iter()
            .filter(|r| matches!(r.outcome, RecordedOutcome::ErrorReported { .. }))
            .cloned()
            .collect()
    }

    /// Get the total number of records
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Clear all recorded commands
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Default for CaptureLog {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CaptureLog {
    fn clone(&self) -> Self {
        Self {
            start: self.start,
            records: Arc::clone(&self.records),
            file_writer: self.file_writer.as_ref().map(Arc::clone),
        }
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
