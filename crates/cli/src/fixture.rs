// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixture files that pre-seed a scenario context.
//!
//! A fixture declares flags, configuration values, and entity records
//! in TOML or JSON; loading validates ids and timestamps up front so
//! `apply` cannot fail halfway through seeding a store.

use crate::context::ScenarioContext;
use crate::model::{Priority, Project, Release, WorkItem, WorkItemState, WorkItemType};
use crate::state::ConfigValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur when working with fixture files
#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level fixture configuration
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct FixtureConfig {
    /// Name for logging/debugging
    #[serde(default)]
    pub name: String,

    /// Role reported by the context's user-role slot
    #[serde(default)]
    pub user_role: Option<String>,

    /// Configuration flags switched on before the scenario starts
    #[serde(default)]
    pub flags: Vec<String>,

    /// Typed configuration values
    #[serde(default)]
    pub values: HashMap<String, ConfigValue>,

    /// Work items saved under their keys
    #[serde(default)]
    pub work_items: Vec<WorkItemSeed>,

    /// Projects saved under their keys
    #[serde(default)]
    pub projects: Vec<ProjectSeed>,

    /// Releases saved under their keys
    #[serde(default)]
    pub releases: Vec<ReleaseSeed>,
}

/// One work item record in a fixture file
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct WorkItemSeed {
    /// Store key the item is saved under
    pub key: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Item type (default: "task")
    #[serde(default)]
    pub item_type: WorkItemType,

    /// Priority (default: "medium")
    #[serde(default)]
    pub priority: Priority,

    /// Workflow state (default: "ready")
    #[serde(default)]
    pub state: WorkItemState,

    #[serde(default)]
    pub assignee: String,

    #[serde(default)]
    pub reporter: String,

    /// Fixed UUID for deterministic assertions (default: random)
    #[serde(default)]
    pub id: Option<String>,

    /// Creation time as ISO 8601 (default: load time)
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last-update time as ISO 8601 (default: load time)
    #[serde(default)]
    pub updated_at: Option<String>,

    /// Key of another seeded item to attach this one under
    #[serde(default)]
    pub parent_key: Option<String>,

    /// Metadata key/value pairs attached to the item's id
    #[serde(default)]
    pub metadata: HashMap<String, String>,
}

/// One project record in a fixture file
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSeed {
    pub key: String,
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Fixed UUID for deterministic assertions (default: random)
    #[serde(default)]
    pub id: Option<String>,
}

/// One release record in a fixture file
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReleaseSeed {
    pub key: String,
    pub version: String,

    #[serde(default)]
    pub description: String,
}

/// Validated fixture ready to seed contexts
#[derive(Debug, Clone)]
pub struct Fixture {
    config: FixtureConfig,
    items: Vec<(String, WorkItem)>,
    metadata: Vec<(Uuid, String, String)>,
    projects: Vec<(String, Project)>,
    releases: Vec<(String, Release)>,
}

impl Fixture {
    /// Load a fixture from a TOML or JSON file
    ///
    /// ```toml
    /// name = "seeded backlog"
    /// user_role = "admin"
    /// flags = ["strict-validation"]
    ///
    /// [[work_items]]
    /// key = "101"
    /// title = "Implement registration form"
    /// priority = "high"
    ///
    /// [[work_items]]
    /// key = "102"
    /// title = "Login form"
    /// parent_key = "101"
    /// ```
    pub fn load(path: &Path) -> Result<Self, FixtureError> {
        let content = std::fs::read_to_string(path)?;
        let config: FixtureConfig = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        Self::from_config(config)
    }

    /// Create a fixture from a config object
    pub fn from_config(config: FixtureConfig) -> Result<Self, FixtureError> {
        let mut seen_keys = HashSet::new();
        let mut seen_ids = HashSet::new();
        let mut items: Vec<(String, WorkItem)> = Vec::new();
        let mut metadata = Vec::new();

        for seed in &config.work_items {
            if !seen_keys.insert(seed.key.clone()) {
                return Err(FixtureError::Validation(format!(
                    "Duplicate work item key '{}'",
                    seed.key
                )));
            }

            let id = parse_id(seed.id.as_deref())?;
            if !seen_ids.insert(id) {
                return Err(FixtureError::Validation(format!(
                    "Duplicate work item id '{id}'"
                )));
            }

            let mut item = WorkItem::new(seed.title.clone());
            item.id = id;
            item.description = seed.description.clone();
            item.item_type = seed.item_type;
            item.priority = seed.priority;
            item.state = seed.state;
            item.assignee = seed.assignee.clone();
            item.reporter = seed.reporter.clone();
            if let Some(created) = parse_timestamp(seed.created_at.as_deref(), "created_at")? {
                item.created_at = created;
            }
            if let Some(updated) = parse_timestamp(seed.updated_at.as_deref(), "updated_at")? {
                item.updated_at = updated;
            }

            for (key, value) in &seed.metadata {
                metadata.push((id, key.clone(), value.clone()));
            }
            items.push((seed.key.clone(), item));
        }

        wire_parents(&config.work_items, &mut items)?;

        let mut projects = Vec::new();
        let mut project_keys = HashSet::new();
        for seed in &config.projects {
            if !project_keys.insert(seed.key.clone()) {
                return Err(FixtureError::Validation(format!(
                    "Duplicate project key '{}'",
                    seed.key
                )));
            }
            let mut project = Project::new(seed.name.clone());
            project.id = parse_id(seed.id.as_deref())?;
            project.description = seed.description.clone();
            projects.push((seed.key.clone(), project));
        }

        let mut releases = Vec::new();
        let mut release_keys = HashSet::new();
        for seed in &config.releases {
            if !release_keys.insert(seed.key.clone()) {
                return Err(FixtureError::Validation(format!(
                    "Duplicate release key '{}'",
                    seed.key
                )));
            }
            let mut release = Release::new(seed.version.clone());
            release.description = seed.description.clone();
            releases.push((seed.key.clone(), release));
        }

        Ok(Self {
            config,
            items,
            metadata,
            projects,
            releases,
        })
    }

    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Seed one context with everything the fixture declares.
    ///
    /// Saving goes through the store's ordinary accessors, so applying
    /// on top of existing state overwrites key by key.
    pub fn apply(&self, context: &mut ScenarioContext) {
        if let Some(role) = &self.config.user_role {
            context.set_user_role(role.clone());
        }

        let store = context.state_mut();
        for flag in &self.config.flags {
            store.set_flag(flag.clone(), true);
        }
        for (key, value) in &self.config.values {
            store.set_value(key.clone(), value.clone());
        }
        for (key, item) in &self.items {
            store.save_work_item(key.clone(), item.clone());
        }
        for (id, key, value) in &self.metadata {
            store.save_metadata(*id, key.clone(), value.clone());
        }
        for (key, project) in &self.projects {
            store.save_project(key.clone(), project.clone());
        }
        for (key, release) in &self.releases {
            store.save_release(key.clone(), release.clone());
        }
    }
}

fn parse_id(raw: Option<&str>) -> Result<Uuid, FixtureError> {
    match raw {
        None => Ok(Uuid::new_v4()),
        Some(text) => Uuid::parse_str(text).map_err(|_| {
            FixtureError::Validation(format!("Invalid id '{text}': must be a valid UUID"))
        }),
    }
}

fn parse_timestamp(raw: Option<&str>, field: &str) -> Result<Option<DateTime<Utc>>, FixtureError> {
    match raw {
        None => Ok(None),
        Some(text) => match DateTime::parse_from_rfc3339(text) {
            Ok(parsed) => Ok(Some(parsed.with_timezone(&Utc))),
            Err(_) => Err(FixtureError::Validation(format!(
                "Invalid {field} '{text}': must be ISO 8601 format (e.g., 2025-01-15T10:30:00Z)"
            ))),
        },
    }
}

/// Attach each seeded item with a `parent_key` under its parent and
/// record the back-reference on the parent's children list.
fn wire_parents(
    seeds: &[WorkItemSeed],
    items: &mut [(String, WorkItem)],
) -> Result<(), FixtureError> {
    for (child_index, seed) in seeds.iter().enumerate() {
        let Some(parent_key) = &seed.parent_key else {
            continue;
        };
        if *parent_key == seed.key {
            return Err(FixtureError::Validation(format!(
                "Work item '{}' cannot be its own parent",
                seed.key
            )));
        }
        let Some(parent_index) = items.iter().position(|(key, _)| key == parent_key) else {
            return Err(FixtureError::Validation(format!(
                "Unknown parent_key '{}' on work item '{}'",
                parent_key, seed.key
            )));
        };

        let child_id = items[child_index].1.id;
        let parent_id = items[parent_index].1.id;
        items[child_index].1.parent = Some(parent_id);
        items[parent_index].1.children.push(child_id);
    }
    Ok(())
}

#[cfg(test)]
#[path = "fixture_tests.rs"]
mod tests;
