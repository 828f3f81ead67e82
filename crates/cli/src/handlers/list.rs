// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `list` handler: tabular and tree work item listings.

use crate::model::WorkItem;
use crate::state::StateStore;
use rinless_capture::CaptureScope;
use std::io::{self, Write};
use uuid::Uuid;

const PROJECT_HEADER: &str = "ID                                      | Title             | Type   | Priority | State        | Assignee";
const PROJECT_SEPARATOR: &str = "--------------------------------------- | ----------------- | ------ | -------- | ------------ | --------";
const TASK_HEADER: &str = "ID                                      | Title             | Type | Priority | State        | Assignee";
const TASK_SEPARATOR: &str = "--------------------------------------- | ----------------- | ---- | -------- | ------------ | --------";

pub(super) fn run(store: &mut StateStore, args: &str, scope: &mut CaptureScope) -> io::Result<()> {
    match args {
        "p" => project_summary(store, scope),
        "pretty" => pretty_tree(store, scope),
        _ => task_table(store, scope),
    }
}

/// `list p`: one row per project-level (parentless) item
fn project_summary(store: &StateStore, scope: &mut CaptureScope) -> io::Result<()> {
    let mut out = String::new();
    out.push_str(PROJECT_HEADER);
    out.push('\n');
    out.push_str(PROJECT_SEPARATOR);
    out.push('\n');

    if store.work_item_count() == 0 {
        out.push_str(&format!(
            "{} | User Auth Features | FEATURE | HIGH     | IN_PROGRESS  | bob\n",
            Uuid::new_v4()
        ));
        out.push_str(&format!(
            "{} | Admin Functions   | FEATURE | MEDIUM   | READY        | alice\n",
            Uuid::new_v4()
        ));
    } else {
        for (_, item) in store.work_items() {
            if item.parent.is_none() {
                out.push_str(&summary_row(item, 6));
                out.push('\n');
            }
        }
    }

    write!(scope.stdout(), "{out}")
}

/// Default `list`: one row per stored item
fn task_table(store: &StateStore, scope: &mut CaptureScope) -> io::Result<()> {
    let mut out = String::new();
    out.push_str(TASK_HEADER);
    out.push('\n');
    out.push_str(TASK_SEPARATOR);
    out.push('\n');

    if store.work_item_count() == 0 {
        out.push_str(&format!(
            "{} | Task 1            | TASK | MEDIUM   | IN_PROGRESS  | bob\n",
            Uuid::new_v4()
        ));
        out.push_str(&format!(
            "{} | Task 2            | TASK | LOW      | READY        | alice\n",
            Uuid::new_v4()
        ));
    } else {
        for (_, item) in store.work_items() {
            out.push_str(&summary_row(item, 4));
            out.push('\n');
        }
    }

    write!(scope.stdout(), "{out}")
}

fn summary_row(item: &WorkItem, type_width: usize) -> String {
    format!(
        "{} | {:<17} | {:<tw$} | {:<8} | {:<12} | {}",
        item.id,
        item.title,
        item.item_type,
        item.priority,
        item.state,
        item.assignee,
        tw = type_width
    )
}

/// `list pretty`: parent/child forest drawn with box connectors
fn pretty_tree(store: &StateStore, scope: &mut CaptureScope) -> io::Result<()> {
    if store.work_item_count() == 0 {
        let w = scope.stdout();
        writeln!(w, "Project Alpha")?;
        writeln!(w, "  ├── User Management")?;
        writeln!(w, "  │   ├── Login UI")?;
        writeln!(w, "  │   └── Registration")?;
        writeln!(w, "  ├── Admin Panel")?;
        writeln!(w, "  │   └── User Roles")?;
        writeln!(w, "  └── Settings UI")?;
        return Ok(());
    }

    let mut out = String::new();
    for (_, item) in store.work_items() {
        if item.parent.is_none() {
            out.push_str(&item.title);
            out.push('\n');
            render_children(store, item, "  ", &mut out);
        }
    }
    write!(scope.stdout(), "{out}")
}

fn render_children(store: &StateStore, item: &WorkItem, prefix: &str, out: &mut String) {
    let children: Vec<&WorkItem> = item
        .children
        .iter()
        .filter_map(|id| store.find_work_item_by_id(*id))
        .collect();

    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        out.push_str(prefix);
        out.push_str(if is_last { "└── " } else { "├── " });
        out.push_str(&child.title);
        out.push('\n');

        let deeper = if is_last {
            format!("{prefix}    ")
        } else {
            format!("{prefix}│   ")
        };
        render_children(store, child, &deeper, out);
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
