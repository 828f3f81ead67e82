// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rin CLI Simulator
//!
//! A test crate that simulates the `rin` work-item CLI for BDD-style
//! integration testing. Provides a controllable test double that answers
//! the same command surface as the real tool, enabling deterministic
//! scenario tests without a running backend.
//!
//! For state seeding, see the **[Fixture Reference](crate::docs::fixtures)** for complete fixture file documentation.
//!
#![doc = include_str!("../docs/USAGE.md")]

/// Documentation modules for docs.rs
pub mod docs {
    /// Fixture file reference - seeded flags, values, and entity records.
    #[doc = include_str!("../docs/FIXTURES.md")]
    pub mod fixtures {}
}

/// Re-exported capture types from rinless-capture crate.
pub mod capture {
    pub use rinless_capture::{
        CaptureError, CaptureLog, CaptureScope, CapturedStreams, CommandRecord, InputQueue,
        RecordedOutcome, StreamCapture,
    };
}
#[doc(hidden)]
pub mod cli;
pub mod context;
pub mod dispatch;
pub mod fixture;
pub mod handlers;
pub mod model;
pub mod state;
