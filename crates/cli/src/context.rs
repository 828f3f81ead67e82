// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-scenario context tying the store, capture, and dispatch together.
//!
//! One [`ScenarioContext`] is created per test scenario and dropped at
//! its end; nothing persists across scenarios. Step code stages input,
//! runs commands, and asserts on the returned [`CommandResult`].

use crate::dispatch::DispatchOutcome;
use crate::handlers::standard_registry;
use crate::state::StateStore;
use rinless_capture::{CaptureError, CaptureLog, InputQueue, RecordedOutcome, StreamCapture};
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::io;
use thiserror::Error;

/// Errors that can occur while driving a command through the context
#[derive(Debug, Error)]
pub enum ContextError {
    #[error("Failed to begin stream capture: {0}")]
    Capture(#[from] CaptureError),

    #[error("Failed to write captured output: {0}")]
    Io(#[from] io::Error),
}

/// Captured stdout and stderr of one command invocation.
///
/// Returned from every dispatch, including unrecognized commands; the
/// `Error:` stderr convention marks caller-visible failure.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    /// First `Error:` line on stderr, if any
    pub fn error_line(&self) -> Option<&str> {
        self.stderr.lines().find(|line| line.starts_with("Error:"))
    }

    /// Whether stderr carries a caller-visible failure
    pub fn is_error(&self) -> bool {
        self.error_line().is_some()
    }
}

/// Capability-keyed service instances shared across step code.
///
/// Each capability type holds at most one instance; registering again
/// replaces the previous one.
#[derive(Default)]
pub struct ServiceRegistry {
    services: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<T: Any + Send + Sync>(&mut self, service: T) {
        self.services.insert(TypeId::of::<T>(), Box::new(service));
    }

    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.services
            .get(&TypeId::of::<T>())
            .and_then(|service| service.downcast_ref())
    }

    pub fn get_mut<T: Any + Send + Sync>(&mut self) -> Option<&mut T> {
        self.services
            .get_mut(&TypeId::of::<T>())
            .and_then(|service| service.downcast_mut())
    }

    /// Remove and return the instance registered for `T`
    pub fn remove<T: Any + Send + Sync>(&mut self) -> Option<T> {
        self.services
            .remove(&TypeId::of::<T>())
            .and_then(|service| service.downcast::<T>().ok())
            .map(|service| *service)
    }

    pub fn contains<T: Any + Send + Sync>(&self) -> bool {
        self.services.contains_key(&TypeId::of::<T>())
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

/// Scenario-scoped harness state: store, staged input, capture, and
/// the result slots step code asserts against.
pub struct ScenarioContext {
    state: StateStore,
    input: InputQueue,
    capture: StreamCapture,
    log: CaptureLog,
    services: ServiceRegistry,
    last_output: Option<CommandResult>,
    last_error: Option<String>,
    status_code: i32,
    user_role: Option<String>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self {
            state: StateStore::new(),
            input: InputQueue::new(),
            capture: StreamCapture::new(),
            log: CaptureLog::new(),
            services: ServiceRegistry::new(),
            last_output: None,
            last_error: None,
            status_code: 0,
            user_role: None,
        }
    }

    /// Use a pre-built log, e.g. one writing a JSONL trace file
    pub fn with_capture_log(mut self, log: CaptureLog) -> Self {
        self.log = log;
        self
    }

    pub fn state(&self) -> &StateStore {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut StateStore {
        &mut self.state
    }

    /// Queue of staged answers consumed by interactive commands
    pub fn input(&self) -> &InputQueue {
        &self.input
    }

    /// Stage one input line for the next interactive command
    pub fn stage_input(&self, line: impl Into<String>) {
        self.input.push(line);
    }

    pub fn services(&self) -> &ServiceRegistry {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut ServiceRegistry {
        &mut self.services
    }

    pub fn log(&self) -> &CaptureLog {
        &self.log
    }

    /// Run one simulated command invocation to completion.
    ///
    /// Captures the streams around dispatch, records the invocation on
    /// the log, and fills the result slots. Handler write failures are
    /// surfaced after the capture scope has been restored.
    pub fn run_command(&mut self, command: &str, args: &str) -> Result<CommandResult, ContextError> {
        let mut scope = self.capture.begin(&self.input)?;
        let dispatched =
            standard_registry().dispatch(&mut self.state, command, args, &mut scope);
        let streams = self.capture.end(scope);

        let result = CommandResult {
            stdout: streams.stdout,
            stderr: streams.stderr,
        };
        let outcome = match (&dispatched, result.error_line()) {
            (Err(error), _) => RecordedOutcome::ErrorReported {
                message: error.to_string(),
            },
            (Ok(DispatchOutcome::UnknownCommand), _) => RecordedOutcome::UnknownCommand,
            (Ok(DispatchOutcome::Handled), Some(line)) => RecordedOutcome::ErrorReported {
                message: line.to_string(),
            },
            (Ok(DispatchOutcome::Handled), None) => RecordedOutcome::Completed,
        };
        self.log
            .record(command, args, &result.stdout, &result.stderr, outcome);

        self.status_code = if dispatched.is_err() || result.is_error() { 1 } else { 0 };
        self.last_error = match &dispatched {
            Err(error) => Some(error.to_string()),
            Ok(_) => result.error_line().map(str::to_string),
        };
        self.last_output = Some(result.clone());

        dispatched?;
        Ok(result)
    }

    /// Result of the most recent invocation
    pub fn last_output(&self) -> Option<&CommandResult> {
        self.last_output.as_ref()
    }

    /// First failure message of the most recent invocation, or one
    /// recorded explicitly by step code
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn clear_error(&mut self) {
        self.last_error = None;
    }

    pub fn status_code(&self) -> i32 {
        self.status_code
    }

    pub fn set_status_code(&mut self, code: i32) {
        self.status_code = code;
    }

    pub fn user_role(&self) -> Option<&str> {
        self.user_role.as_deref()
    }

    pub fn set_user_role(&mut self, role: impl Into<String>) {
        self.user_role = Some(role.into());
    }
}

impl Default for ScenarioContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
