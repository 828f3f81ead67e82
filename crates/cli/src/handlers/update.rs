// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `update` handler: the interactive field-edit flow.
//!
//! Prompt sequence: field menu → selector → new value. Each prompt
//! consumes exactly one staged input line; an exhausted queue reads as
//! selector `0`, which cancels.

use crate::model::{EditableField, HistoryEntry, WorkItem};
use crate::state::StateStore;
use chrono::Utc;
use rinless_capture::CaptureScope;
use std::io::{self, Write};

const SAMPLE_MENU: [&str; 5] = [
    "[1] Title: Implement registration form",
    "[2] Description: Create a new registration form with validation",
    "[3] Priority: MEDIUM",
    "[4] State: IN_PROGRESS",
    "[5] Assignee: bob",
];

pub(super) fn run(store: &mut StateStore, args: &str, scope: &mut CaptureScope) -> io::Result<()> {
    if args.is_empty() {
        writeln!(scope.stderr(), "Error: No work item ID provided")?;
        return Ok(());
    }

    present_menu(store, args, scope)?;

    let selection = scope.read_line().unwrap_or_else(|| "0".to_string());
    let field = match selection.parse::<i64>() {
        Ok(0) => {
            writeln!(scope.stdout(), "Update cancelled")?;
            return Ok(());
        }
        Ok(selector) => match EditableField::from_selector(selector) {
            Some(field) => field,
            None => {
                writeln!(scope.stderr(), "Error: Invalid selection")?;
                return Ok(());
            }
        },
        Err(_) => {
            writeln!(scope.stderr(), "Error: Invalid selection")?;
            return Ok(());
        }
    };

    writeln!(scope.stdout(), "Enter new value: ")?;
    let value = scope.read_line().unwrap_or_default();
    if value.is_empty() {
        writeln!(scope.stderr(), "Error: Empty value not allowed")?;
        return Ok(());
    }

    apply_update(store, args, field, &value);
    writeln!(scope.stdout(), "Field updated successfully")?;
    Ok(())
}

fn present_menu(store: &StateStore, key: &str, scope: &mut CaptureScope) -> io::Result<()> {
    let w = scope.stdout();
    writeln!(w, "Work Item: {key}")?;

    match store.work_item(key) {
        Some(item) => {
            for (i, field) in EditableField::ALL.iter().enumerate() {
                writeln!(w, "[{}] {}: {}", i + 1, field.label(), field.current_value(item))?;
            }
        }
        None => {
            for line in SAMPLE_MENU {
                writeln!(w, "{line}")?;
            }
        }
    }

    writeln!(w, "[0] Cancel")?;
    writeln!(w)?;
    writeln!(w, "Enter the number of the field to update: ")?;
    Ok(())
}

/// Apply a selected edit to a stored item, recording history.
///
/// Unknown keys are a no-op: the flow still reports success because the
/// simulated tool accepts any id it was shown.
fn apply_update(store: &mut StateStore, key: &str, field: EditableField, value: &str) {
    let Some(item) = store.work_item_mut(key) else {
        return;
    };
    let old = field.apply(item, value);
    push_history(item, field, &old, value);
    item.updated_at = Utc::now();
}

fn push_history(item: &mut WorkItem, field: EditableField, old: &str, new: &str) {
    let actor = if item.reporter.is_empty() {
        "unknown".to_string()
    } else {
        item.reporter.clone()
    };
    item.history.push(HistoryEntry::new(
        field.history_kind(),
        actor,
        format!("{old} → {new}"),
    ));
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
