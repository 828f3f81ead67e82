// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::io::Write;
use tempfile::NamedTempFile;

/// Create a temporary fixture file
/// Detects JSON vs TOML content and uses the appropriate extension
pub fn write_fixture(content: &str) -> NamedTempFile {
    let is_json = content.trim().starts_with('{');

    let mut file = if is_json {
        tempfile::Builder::new().suffix(".json").tempfile().unwrap()
    } else {
        tempfile::Builder::new().suffix(".toml").tempfile().unwrap()
    };

    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Fixture used by tests that need a stable seeded backlog
pub const BACKLOG_FIXTURE: &str = r#"
name = "seeded backlog"
user_role = "admin"

[[work_items]]
key = "101"
title = "Implement registration form"
description = "Create a new registration form with validation"
priority = "high"
state = "in_progress"
assignee = "bob"
reporter = "alice"
id = "f47ac10b-58cc-4372-a567-0e02b2c3d479"
created_at = "2025-04-05T14:32:10Z"
updated_at = "2025-04-06T09:15:22Z"

[work_items.metadata]
sprint = "Sprint 42"

[[work_items]]
key = "102"
title = "Login form"
reporter = "alice"
parent_key = "101"
"#;
