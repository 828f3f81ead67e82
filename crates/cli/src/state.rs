// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario-scoped simulated application state.

use crate::model::{ApiToken, Project, Release, WebhookConfig, WorkItem};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use uuid::Uuid;

/// Configuration value staged by a scenario.
///
/// Values keep the type they were staged with. String values that parse
/// as UUIDs deserialize as identifiers, so id-valued settings survive a
/// round-trip through fixture files.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawConfigValue")]
pub enum ConfigValue {
    Bool(bool),
    Number(i64),
    Str(String),
    Id(Uuid),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawConfigValue {
    Bool(bool),
    Number(i64),
    Str(String),
}

impl From<RawConfigValue> for ConfigValue {
    fn from(raw: RawConfigValue) -> Self {
        match raw {
            RawConfigValue::Bool(value) => ConfigValue::Bool(value),
            RawConfigValue::Number(value) => ConfigValue::Number(value),
            RawConfigValue::Str(value) => match Uuid::parse_str(&value) {
                Ok(id) => ConfigValue::Id(id),
                Err(_) => ConfigValue::Str(value),
            },
        }
    }
}

impl Serialize for ConfigValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ConfigValue::Bool(value) => serializer.serialize_bool(*value),
            ConfigValue::Number(value) => serializer.serialize_i64(*value),
            ConfigValue::Str(value) => serializer.serialize_str(value),
            ConfigValue::Id(id) => serializer.serialize_str(&id.to_string()),
        }
    }
}

impl ConfigValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            ConfigValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_id(&self) -> Option<Uuid> {
        match self {
            ConfigValue::Id(id) => Some(*id),
            _ => None,
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Bool(value) => write!(f, "{value}"),
            ConfigValue::Number(value) => write!(f, "{value}"),
            ConfigValue::Str(value) => f.write_str(value),
            ConfigValue::Id(id) => write!(f, "{id}"),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Number(value)
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<Uuid> for ConfigValue {
    fn from(id: Uuid) -> Self {
        ConfigValue::Id(id)
    }
}

/// Simulated application state owned by one scenario context.
///
/// Entities are keyed by strings the test author chooses. Every getter
/// is total: a missing key is `None` (or `false` for flags), never a
/// failure. Saves overwrite unconditionally.
#[derive(Default)]
pub struct StateStore {
    work_items: HashMap<String, WorkItem>,
    work_item_ids: HashMap<String, Uuid>,
    metadata: HashMap<Uuid, BTreeMap<String, String>>,
    projects: HashMap<String, Project>,
    releases: HashMap<String, Release>,
    api_tokens: HashMap<String, ApiToken>,
    webhooks: HashMap<String, WebhookConfig>,
    json_payloads: HashMap<String, String>,
    client_reports: HashMap<String, BTreeMap<String, String>>,
    values: HashMap<String, ConfigValue>,
    flags: HashSet<String>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- work items ----

    /// Save a work item under a key, indexing its id
    pub fn save_work_item(&mut self, key: impl Into<String>, item: WorkItem) {
        let key = key.into();
        self.work_item_ids.insert(key.clone(), item.id);
        self.work_items.insert(key, item);
    }

    pub fn work_item(&self, key: &str) -> Option<&WorkItem> {
        self.work_items.get(key)
    }

    pub fn work_item_mut(&mut self, key: &str) -> Option<&mut WorkItem> {
        self.work_items.get_mut(key)
    }

    /// Id recorded for a saved key
    pub fn work_item_id(&self, key: &str) -> Option<Uuid> {
        self.work_item_ids.get(key).copied()
    }

    /// Saved work items in key order
    pub fn work_items(&self) -> Vec<(&str, &WorkItem)> {
        let mut items: Vec<(&str, &WorkItem)> = self
            .work_items
            .iter()
            .map(|(key, item)| (key.as_str(), item))
            .collect();
        items.sort_unstable_by_key(|(key, _)| *key);
        items
    }

    pub fn work_item_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.work_items.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn work_item_count(&self) -> usize {
        self.work_items.len()
    }

    /// Find a saved work item by its id
    pub fn find_work_item_by_id(&self, id: Uuid) -> Option<&WorkItem> {
        self.work_items.values().find(|item| item.id == id)
    }

    // ---- per-item metadata ----

    pub fn save_metadata(
        &mut self,
        item_id: Uuid,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.metadata
            .entry(item_id)
            .or_default()
            .insert(key.into(), value.into());
    }

    pub fn metadata_value(&self, item_id: Uuid, key: &str) -> Option<&str> {
        self.metadata
            .get(&item_id)
            .and_then(|map| map.get(key))
            .map(String::as_str)
    }

    /// All metadata for an item, in key order
    pub fn metadata(&self, item_id: Uuid) -> Option<&BTreeMap<String, String>> {
        self.metadata.get(&item_id)
    }

    // ---- companion entities ----

    pub fn save_project(&mut self, key: impl Into<String>, project: Project) {
        self.projects.insert(key.into(), project);
    }

    pub fn project(&self, key: &str) -> Option<&Project> {
        self.projects.get(key)
    }

    pub fn save_release(&mut self, key: impl Into<String>, release: Release) {
        self.releases.insert(key.into(), release);
    }

    pub fn release(&self, key: &str) -> Option<&Release> {
        self.releases.get(key)
    }

    pub fn save_api_token(&mut self, key: impl Into<String>, token: ApiToken) {
        self.api_tokens.insert(key.into(), token);
    }

    pub fn api_token(&self, key: &str) -> Option<&ApiToken> {
        self.api_tokens.get(key)
    }

    pub fn save_webhook_config(&mut self, key: impl Into<String>, config: WebhookConfig) {
        self.webhooks.insert(key.into(), config);
    }

    pub fn webhook_config(&self, key: &str) -> Option<&WebhookConfig> {
        self.webhooks.get(key)
    }

    pub fn save_json_payload(&mut self, key: impl Into<String>, payload: impl Into<String>) {
        self.json_payloads.insert(key.into(), payload.into());
    }

    pub fn json_payload(&self, key: &str) -> Option<&str> {
        self.json_payloads.get(key).map(String::as_str)
    }

    pub fn save_client_report(
        &mut self,
        key: impl Into<String>,
        report: BTreeMap<String, String>,
    ) {
        self.client_reports.insert(key.into(), report);
    }

    pub fn client_report(&self, key: &str) -> Option<&BTreeMap<String, String>> {
        self.client_reports.get(key)
    }

    // ---- configuration ----

    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<ConfigValue>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn value(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Insert or remove a flag; membership is the flag's value
    pub fn set_flag(&mut self, flag: impl Into<String>, enabled: bool) {
        let flag = flag.into();
        if enabled {
            self.flags.insert(flag);
        } else {
            self.flags.remove(&flag);
        }
    }

    pub fn flag(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
