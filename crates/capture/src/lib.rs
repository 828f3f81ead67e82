// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stream capture and invocation recording for test assertions.
//!
//! This crate provides the stream-level building blocks of the rinless
//! harness: a queue of pre-staged input lines, a scoped capture of a
//! command's output and error streams, and a log of dispatched commands
//! for post-run inspection.

mod duration_serde;
mod log;
mod queue;
mod record;
mod stream;

pub use log::CaptureLog;
pub use queue::InputQueue;
pub use record::{CommandRecord, RecordedOutcome};
pub use stream::{CaptureError, CaptureScope, CapturedStreams, StreamCapture};
