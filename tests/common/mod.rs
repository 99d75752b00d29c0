//! Shared test utilities and fixture layouts.

#![allow(dead_code, unused_imports)]

pub mod mock_layout_server;

use sdui_runtime::layout::FixtureLayoutSource;
use sdui_runtime::model::ComponentNode;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

pub const HOME: &str = r#"{
  "id": "home-root", "type": "container",
  "children": [
    { "id": "title", "type": "text", "properties": { "text": "Hello World" } },
    { "id": "go", "type": "button", "properties": { "text": "Profile" },
      "onInteraction": [ { "event": "onClick",
        "action": [ { "type": "navigate", "properties": { "target": "profile" } } ] } ] },
    { "id": "reload", "type": "button", "properties": { "text": "Refresh" },
      "onInteraction": [ { "event": "onClick", "action": [ { "type": "refresh" } ] } ] },
    { "id": "noisy", "type": "button",
      "onInteraction": [ { "event": "onClick",
        "action": [ { "type": "vibrate" }, { "type": "navigate", "properties": { "target": "settings" } } ] } ] }
  ]
}"#;

pub const PROFILE: &str = r#"{
  "id": "profile-root", "type": "container",
  "properties": { "state": { "user": { "name": "Ada" } } },
  "children": [
    { "id": "name", "type": "text", "properties": { "text": "@@user.name" } },
    { "id": "gate", "type": "_if",
      "properties": { "condition": { "type": "getState", "properties": { "fromPath": "@@user.confirmed" } } },
      "children": [
        { "id": "yes", "type": "_then", "children": [ { "id": "confirmed", "type": "text", "properties": { "text": "@@user.confirmed" } } ] },
        { "id": "no", "type": "_else", "children": [ { "id": "unconfirmed", "type": "text", "properties": { "text": "not confirmed" } } ] }
      ] },
    { "id": "confirm", "type": "button",
      "onInteraction": [ { "event": "onClick",
        "action": [ { "type": "setState", "properties": { "fromPath": "@@user.name", "toPath": "@@user.confirmed" } } ] } ] }
  ]
}"#;

pub const SETTINGS: &str = r#"{
  "id": "settings-root", "type": "container",
  "properties": { "state": { "settings": { "theme": "system" } } },
  "children": [
    { "id": "theme", "type": "singleSelect",
      "properties": { "options": ["light", "dark", "system"], "selected": "@@settings.theme" } }
  ]
}"#;

/// Fixture source serving home, profile and settings.
pub fn fixture_source() -> Arc<FixtureLayoutSource> {
    Arc::new(
        FixtureLayoutSource::new()
            .with_layout("home", HOME)
            .with_layout("profile", PROFILE)
            .with_layout("settings", SETTINGS),
    )
}

pub fn parse(json: &str) -> ComponentNode {
    ComponentNode::from_json_str(json).expect("fixture layout must parse")
}

/// Write `content` to a temporary `config.toml`.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Upper bound for any single settle in async tests.
pub const SETTLE_TIMEOUT: Duration = Duration::from_secs(5);
