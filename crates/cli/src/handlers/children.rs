// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `makechildren` handler: group items under a freshly created parent.

use crate::model::{WorkItem, WorkItemType};
use crate::state::StateStore;
use rinless_capture::CaptureScope;
use std::io::{self, Write};
use uuid::Uuid;

const DEFAULT_TITLE: &str = "Parent of child items";

pub(super) fn run(store: &mut StateStore, args: &str, scope: &mut CaptureScope) -> io::Result<()> {
    if args.is_empty() {
        writeln!(scope.stderr(), "Error: No work item IDs provided")?;
        return Ok(());
    }

    if super::contains_letter(args) && !args.contains("--title=") {
        writeln!(scope.stderr(), "Error: Invalid work item ID format")?;
        return Ok(());
    }

    let (id_part, title) = extract_title(args);
    let parent_id = link_children(store, id_part, &title);

    writeln!(
        scope.stdout(),
        "Successfully created parent work item with title: {title}"
    )?;
    writeln!(scope.stdout(), "Parent ID: {parent_id}")?;
    Ok(())
}

/// Split the id tokens from an optional `--title=` remainder.
///
/// A title wrapped in single quotes is unquoted; without a closing
/// quote the remainder is taken verbatim.
fn extract_title(args: &str) -> (&str, String) {
    match args.split_once("--title=") {
        None => (args, DEFAULT_TITLE.to_string()),
        Some((ids, title_part)) => {
            let title = match title_part.strip_prefix('\'') {
                Some(rest) => match rest.find('\'') {
                    Some(end) => rest[..end].to_string(),
                    None => title_part.to_string(),
                },
                None => title_part.to_string(),
            };
            (ids, title)
        }
    }
}

/// Create the parent item and wire any stored children to it.
///
/// The parent is only saved when at least one id token names a stored
/// item; a pure sample invocation leaves the store untouched.
fn link_children(store: &mut StateStore, id_part: &str, title: &str) -> Uuid {
    let mut parent = WorkItem::new(title);
    parent.item_type = WorkItemType::Feature;
    let parent_id = parent.id;

    let mut child_ids = Vec::new();
    for key in id_part.split(|c: char| c == ',' || c.is_whitespace()) {
        if key.is_empty() {
            continue;
        }
        if let Some(child) = store.work_item_mut(key) {
            child.parent = Some(parent_id);
            child_ids.push(child.id);
        }
    }

    if !child_ids.is_empty() {
        parent.children = child_ids;
        store.save_work_item(parent_id.to_string(), parent);
    }
    parent_id
}

#[cfg(test)]
#[path = "children_tests.rs"]
mod tests;
