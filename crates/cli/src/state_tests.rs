// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_flag_set_then_get_is_true() {
    let mut store = StateStore::new();
    store.set_flag("feature-x", true);
    assert!(store.flag("feature-x"));
}

#[test]
fn test_flag_cleared_then_get_is_false() {
    let mut store = StateStore::new();
    store.set_flag("feature-x", true);
    store.set_flag("feature-x", false);
    assert!(!store.flag("feature-x"));
}

#[test]
fn test_flag_never_set_defaults_to_false() {
    let store = StateStore::new();
    assert!(!store.flag("never-set"));
}

#[test]
fn test_getters_are_total_over_missing_keys() {
    let store = StateStore::new();

    assert!(store.work_item("missing").is_none());
    assert!(store.work_item_id("missing").is_none());
    assert!(store.project("missing").is_none());
    assert!(store.release("missing").is_none());
    assert!(store.api_token("missing").is_none());
    assert!(store.webhook_config("missing").is_none());
    assert!(store.json_payload("missing").is_none());
    assert!(store.client_report("missing").is_none());
    assert!(store.value("missing").is_none());
    assert!(store.metadata_value(Uuid::new_v4(), "missing").is_none());
}

#[test]
fn test_save_work_item_indexes_its_id() {
    let mut store = StateStore::new();
    let item = WorkItem::new("Login form");
    let id = item.id;

    store.save_work_item("WI-1", item);

    assert_eq!(store.work_item_id("WI-1"), Some(id));
    assert_eq!(store.work_item("WI-1").unwrap().title, "Login form");
    assert_eq!(store.find_work_item_by_id(id).unwrap().title, "Login form");
}

#[test]
fn test_save_overwrites_last_writer_wins() {
    let mut store = StateStore::new();
    store.save_work_item("WI-1", WorkItem::new("first"));
    let replacement = WorkItem::new("second");
    let replacement_id = replacement.id;

    store.save_work_item("WI-1", replacement);

    assert_eq!(store.work_item_count(), 1);
    assert_eq!(store.work_item("WI-1").unwrap().title, "second");
    assert_eq!(store.work_item_id("WI-1"), Some(replacement_id));
}

#[test]
fn test_work_items_and_keys_are_sorted() {
    let mut store = StateStore::new();
    store.save_work_item("b", WorkItem::new("second"));
    store.save_work_item("a", WorkItem::new("first"));
    store.save_work_item("c", WorkItem::new("third"));

    assert_eq!(store.work_item_keys(), vec!["a", "b", "c"]);
    let titles: Vec<&str> = store
        .work_items()
        .iter()
        .map(|(_, item)| item.title.as_str())
        .collect();
    assert_eq!(titles, vec!["first", "second", "third"]);
}

#[test]
fn test_metadata_accumulates_per_item() {
    let mut store = StateStore::new();
    let id = Uuid::new_v4();

    store.save_metadata(id, "sprint", "Sprint 42");
    store.save_metadata(id, "estimated_hours", "8");

    assert_eq!(store.metadata_value(id, "sprint"), Some("Sprint 42"));
    let all = store.metadata(id).unwrap();
    assert_eq!(all.len(), 2);
    // BTreeMap iterates in key order
    let keys: Vec<&str> = all.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["estimated_hours", "sprint"]);
}

#[test]
fn test_metadata_overwrite_replaces_value() {
    let mut store = StateStore::new();
    let id = Uuid::new_v4();

    store.save_metadata(id, "story_points", "3");
    store.save_metadata(id, "story_points", "5");

    assert_eq!(store.metadata_value(id, "story_points"), Some("5"));
}

#[test]
fn test_client_report_round_trip() {
    let mut store = StateStore::new();
    let mut report = BTreeMap::new();
    report.insert("status".to_string(), "healthy".to_string());

    store.save_client_report("acme", report);

    assert_eq!(
        store.client_report("acme").unwrap().get("status"),
        Some(&"healthy".to_string())
    );
}

#[test]
fn test_config_value_accessors() {
    let mut store = StateStore::new();
    let id = Uuid::new_v4();
    store.set_value("enabled", true);
    store.set_value("retries", 3i64);
    store.set_value("name", "alpha");
    store.set_value("project-id", id);

    assert_eq!(store.value("enabled").unwrap().as_bool(), Some(true));
    assert_eq!(store.value("retries").unwrap().as_number(), Some(3));
    assert_eq!(store.value("name").unwrap().as_str(), Some("alpha"));
    assert_eq!(store.value("project-id").unwrap().as_id(), Some(id));
    assert_eq!(store.value("enabled").unwrap().as_str(), None);
}

#[test]
fn test_config_value_overwrite() {
    let mut store = StateStore::new();
    store.set_value("mode", "draft");
    store.set_value("mode", "final");

    assert_eq!(store.value("mode").unwrap().as_str(), Some("final"));
}

#[test]
fn test_config_value_deserializes_uuid_strings_as_ids() {
    let value: ConfigValue =
        serde_json::from_str("\"c56a4180-65aa-42ec-a945-5fd21dec0538\"").unwrap();
    assert!(matches!(value, ConfigValue::Id(_)));

    let value: ConfigValue = serde_json::from_str("\"plain text\"").unwrap();
    assert_eq!(value, ConfigValue::Str("plain text".to_string()));

    let value: ConfigValue = serde_json::from_str("true").unwrap();
    assert_eq!(value, ConfigValue::Bool(true));

    let value: ConfigValue = serde_json::from_str("42").unwrap();
    assert_eq!(value, ConfigValue::Number(42));
}

#[test]
fn test_config_value_serializes_ids_as_strings() {
    let id = Uuid::parse_str("c56a4180-65aa-42ec-a945-5fd21dec0538").unwrap();
    let json = serde_json::to_string(&ConfigValue::Id(id)).unwrap();
    assert_eq!(json, "\"c56a4180-65aa-42ec-a945-5fd21dec0538\"");
}

#[test]
fn test_config_value_display() {
    assert_eq!(ConfigValue::Bool(false).to_string(), "false");
    assert_eq!(ConfigValue::Number(7).to_string(), "7");
    assert_eq!(ConfigValue::Str("x".to_string()).to_string(), "x");
}
