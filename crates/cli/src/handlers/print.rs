// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `print` handler: single-item detail dump.

use crate::model::WorkItem;
use crate::state::StateStore;
use chrono::SecondsFormat;
use rinless_capture::CaptureScope;
use std::io::{self, Write};
use uuid::Uuid;

pub(super) fn run(store: &mut StateStore, args: &str, scope: &mut CaptureScope) -> io::Result<()> {
    if args.is_empty() {
        writeln!(scope.stderr(), "Error: No work item ID provided")?;
        return Ok(());
    }

    if super::contains_letter(args) {
        writeln!(scope.stderr(), "Error: Invalid work item ID")?;
        return Ok(());
    }

    match store.work_item(args) {
        Some(item) => render_item(store, item, scope),
        None => render_sample(scope),
    }
}

fn render_item(store: &StateStore, item: &WorkItem, scope: &mut CaptureScope) -> io::Result<()> {
    let parent_line = match item.parent {
        Some(parent_id) => match store.find_work_item_by_id(parent_id) {
            Some(parent) => format!("Parent: {} ({})", parent_id, parent.title),
            None => format!("Parent: {parent_id}"),
        },
        None => "Parent: None".to_string(),
    };
    let children_line = if item.children.is_empty() {
        "Children: None".to_string()
    } else {
        let ids: Vec<String> = item.children.iter().map(Uuid::to_string).collect();
        format!("Children: {}", ids.join(", "))
    };

    let w = scope.stdout();
    writeln!(w, "Work Item Details")?;
    writeln!(w, "----------------")?;
    writeln!(w, "ID: {}", item.id)?;
    writeln!(w, "Title: {}", item.title)?;
    writeln!(w, "Description: {}", item.description)?;
    writeln!(w, "Type: {}", item.item_type)?;
    writeln!(w, "Priority: {}", item.priority)?;
    writeln!(w, "State: {}", item.state)?;
    writeln!(w, "Assignee: {}", item.assignee)?;
    writeln!(w, "Reporter: {}", item.reporter)?;
    writeln!(
        w,
        "Created: {}",
        item.created_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(
        w,
        "Updated: {}",
        item.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(w)?;
    writeln!(w, "{parent_line}")?;
    writeln!(w, "{children_line}")?;
    writeln!(w)?;
    writeln!(w, "History:")?;
    for entry in &item.history {
        writeln!(w, "{entry}")?;
    }
    writeln!(w)?;
    writeln!(w, "Metadata:")?;
    if let Some(metadata) = store.metadata(item.id) {
        for (key, value) in metadata {
            writeln!(w, "{key}: {value}")?;
        }
    }
    Ok(())
}

fn render_sample(scope: &mut CaptureScope) -> io::Result<()> {
    let w = scope.stdout();
    writeln!(w, "Work Item Details")?;
    writeln!(w, "----------------")?;
    writeln!(w, "ID: {}", Uuid::new_v4())?;
    writeln!(w, "Title: Implement registration form")?;
    writeln!(w, "Description: Create a new registration form with validation")?;
    writeln!(w, "Type: TASK")?;
    writeln!(w, "Priority: MEDIUM")?;
    writeln!(w, "State: IN_PROGRESS")?;
    writeln!(w, "Assignee: bob")?;
    writeln!(w, "Reporter: alice")?;
    writeln!(w, "Created: 2025-04-05T14:32:10Z")?;
    writeln!(w, "Updated: 2025-04-06T09:15:22Z")?;
    writeln!(w)?;
    writeln!(w, "Parent: {} (User Authentication Feature)", Uuid::new_v4())?;
    writeln!(w, "Children: None")?;
    writeln!(w)?;
    writeln!(w, "History:")?;
    writeln!(w, "2025-04-05T14:32:10Z: STATE_CHANGE by alice: READY → IN_PROGRESS")?;
    writeln!(w, "2025-04-06T09:15:22Z: ASSIGNMENT_CHANGE by alice: alice → bob")?;
    writeln!(w)?;
    writeln!(w, "Metadata:")?;
    writeln!(w, "estimated_hours: 8")?;
    writeln!(w, "actual_hours: 6")?;
    writeln!(w, "sprint: Sprint 42")?;
    writeln!(w, "story_points: 5")?;
    writeln!(w, "test_coverage: 87.5%")?;
    Ok(())
}

#[cfg(test)]
#[path = "print_tests.rs"]
mod tests;
