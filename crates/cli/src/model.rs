// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Simulated entity model: work items and their companion records.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a field value does not name a known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {field}: {value}")]
pub struct ParseFieldError {
    field: &'static str,
    value: String,
}

/// Kind of a simulated work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkItemType {
    #[default]
    Task,
    Bug,
    Feature,
    Chore,
    Epic,
}

impl WorkItemType {
    /// Canonical uppercase form used by listings
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkItemType::Task => "TASK",
            WorkItemType::Bug => "BUG",
            WorkItemType::Feature => "FEATURE",
            WorkItemType::Chore => "CHORE",
            WorkItemType::Epic => "EPIC",
        }
    }
}

impl fmt::Display for WorkItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for WorkItemType {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "TASK" => Ok(WorkItemType::Task),
            "BUG" => Ok(WorkItemType::Bug),
            "FEATURE" => Ok(WorkItemType::Feature),
            "CHORE" => Ok(WorkItemType::Chore),
            "EPIC" => Ok(WorkItemType::Epic),
            _ => Err(ParseFieldError {
                field: "work item type",
                value: s.to_string(),
            }),
        }
    }
}

/// Priority of a work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            "CRITICAL" => Ok(Priority::Critical),
            _ => Err(ParseFieldError {
                field: "priority",
                value: s.to_string(),
            }),
        }
    }
}

/// Workflow state of a work item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkItemState {
    Backlog,
    #[default]
    Ready,
    InProgress,
    InTest,
    Done,
    Blocked,
}

impl WorkItemState {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkItemState::Backlog => "BACKLOG",
            WorkItemState::Ready => "READY",
            WorkItemState::InProgress => "IN_PROGRESS",
            WorkItemState::InTest => "IN_TEST",
            WorkItemState::Done => "DONE",
            WorkItemState::Blocked => "BLOCKED",
        }
    }
}

impl fmt::Display for WorkItemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for WorkItemState {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "BACKLOG" => Ok(WorkItemState::Backlog),
            "READY" => Ok(WorkItemState::Ready),
            "IN_PROGRESS" => Ok(WorkItemState::InProgress),
            "IN_TEST" => Ok(WorkItemState::InTest),
            "DONE" => Ok(WorkItemState::Done),
            "BLOCKED" => Ok(WorkItemState::Blocked),
            _ => Err(ParseFieldError {
                field: "state",
                value: s.to_string(),
            }),
        }
    }
}

/// Kind of change recorded in a work item's history
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryKind {
    StateChange,
    AssignmentChange,
    FieldChange,
}

impl fmt::Display for HistoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HistoryKind::StateChange => "STATE_CHANGE",
            HistoryKind::AssignmentChange => "ASSIGNMENT_CHANGE",
            HistoryKind::FieldChange => "FIELD_CHANGE",
        })
    }
}

/// One change applied to a work item
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: HistoryKind,
    pub actor: String,
    pub detail: String,
}

impl HistoryEntry {
    /// Record a change happening now
    pub fn new(kind: HistoryKind, actor: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            kind,
            actor: actor.into(),
            detail: detail.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} by {}: {}",
            self.timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.kind,
            self.actor,
            self.detail
        )
    }
}

/// Simulated work item record
#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub item_type: WorkItemType,
    pub priority: Priority,
    pub state: WorkItemState,
    pub assignee: String,
    pub reporter: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub parent: Option<Uuid>,
    pub children: Vec<Uuid>,
    pub history: Vec<HistoryEntry>,
}

impl WorkItem {
    /// Create a task with defaults and a fresh id
    pub fn new(title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: String::new(),
            item_type: WorkItemType::Task,
            priority: Priority::Medium,
            state: WorkItemState::Ready,
            assignee: String::new(),
            reporter: String::new(),
            created_at: now,
            updated_at: now,
            parent: None,
            children: Vec::new(),
            history: Vec::new(),
        }
    }
}

/// Fields of a work item the interactive update flow can change.
///
/// Selectors shown in the field menu are 1-based positions in `ALL`;
/// selector 0 is reserved for cancel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    Title,
    Description,
    Priority,
    State,
    Assignee,
}

impl EditableField {
    /// Menu order
    pub const ALL: [EditableField; 5] = [
        EditableField::Title,
        EditableField::Description,
        EditableField::Priority,
        EditableField::State,
        EditableField::Assignee,
    ];

    /// Field named by a 1-based menu selector, if any
    pub fn from_selector(selector: i64) -> Option<Self> {
        usize::try_from(selector)
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Label shown in the field menu
    pub fn label(&self) -> &'static str {
        match self {
            EditableField::Title => "Title",
            EditableField::Description => "Description",
            EditableField::Priority => "Priority",
            EditableField::State => "State",
            EditableField::Assignee => "Assignee",
        }
    }

    /// Current value of this field on an item, as menu text
    pub fn current_value(&self, item: &WorkItem) -> String {
        match self {
            EditableField::Title => item.title.clone(),
            EditableField::Description => item.description.clone(),
            EditableField::Priority => item.priority.to_string(),
            EditableField::State => item.state.to_string(),
            EditableField::Assignee => item.assignee.clone(),
        }
    }

    /// Apply a new value, returning the replaced value's text.
    ///
    /// Typed fields keep their current value when the text does not
    /// parse as a known variant.
    pub fn apply(&self, item: &mut WorkItem, value: &str) -> String {
        match self {
            EditableField::Title => std::mem::replace(&mut item.title, value.to_string()),
            EditableField::Description => {
                std::mem::replace(&mut item.description, value.to_string())
            }
            EditableField::Priority => {
                let old = item.priority.to_string();
                if let Ok(priority) = value.parse() {
                    item.priority = priority;
                }
                old
            }
            EditableField::State => {
                let old = item.state.to_string();
                if let Ok(state) = value.parse() {
                    item.state = state;
                }
                old
            }
            EditableField::Assignee => std::mem::replace(&mut item.assignee, value.to_string()),
        }
    }

    /// History kind recorded when this field changes
    pub fn history_kind(&self) -> HistoryKind {
        match self {
            EditableField::State => HistoryKind::StateChange,
            EditableField::Assignee => HistoryKind::AssignmentChange,
            _ => HistoryKind::FieldChange,
        }
    }
}

/// Simulated project record
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    pub description: String,
}

impl Project {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            description: String::new(),
        }
    }
}

/// Simulated release record
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub id: Uuid,
    pub version: String,
    pub description: String,
}

impl Release {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            version: version.into(),
            description: String::new(),
        }
    }
}

/// Simulated API token record
#[derive(Debug, Clone, PartialEq)]
pub struct ApiToken {
    pub token: String,
    pub project: String,
    pub created_at: DateTime<Utc>,
    pub valid: bool,
}

impl ApiToken {
    pub fn new(token: impl Into<String>, project: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            project: project.into(),
            created_at: Utc::now(),
            valid: true,
        }
    }
}

/// Simulated webhook configuration record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    pub project: String,
    pub url: String,
    pub secret: String,
    pub enabled: bool,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
