//! Store-level properties: merge, last write, reset idempotence, JSON round trip.

mod fixtures;
use fixtures::*;

use teamskin::models::overrides::keys;
use teamskin::models::{ElementId, OverrideValue, Page, ProjectConfig};
use teamskin::store::{OverrideCommand, OverrideStore};

fn id(raw: &str) -> ElementId {
    ElementId::new(raw)
}

#[test]
fn test_disjoint_writes_merge_and_commute() {
    let target = id("home_hero_title");

    let mut forward = OverrideStore::new();
    forward.write(&target, keys::TEXT_COLOR, "#fff".into());
    forward.write(&target, keys::FONT_SIZE, "lg".into());

    let mut backward = OverrideStore::new();
    backward.write(&target, keys::FONT_SIZE, "lg".into());
    backward.write(&target, keys::TEXT_COLOR, "#fff".into());

    assert_eq!(forward.read(&target, keys::TEXT_COLOR), Some(OverrideValue::from("#fff")));
    assert_eq!(forward.read(&target, keys::FONT_SIZE), Some(OverrideValue::from("lg")));
    assert_eq!(forward, backward);
}

#[test]
fn test_same_key_last_write_wins() {
    let target = id("roster_title");
    let mut store = OverrideStore::new();
    store.write(&target, keys::TEXT, "First".into());
    store.write(&target, keys::TEXT, "Second".into());
    assert_eq!(store.read_text(&target, keys::TEXT).as_deref(), Some("Second"));
    assert_eq!(store.entry(&target).unwrap().entries().len(), 1);
}

#[test]
fn test_reset_twice_equals_reset_once() {
    let target = id("shop_card_2");
    let mut store = OverrideStore::new();
    store.write(&target, keys::BACKGROUND_COLOR, "#222".into());
    store.write(&id("shop_card_1"), keys::PADDING, "1".into());

    store.reset(&target);
    let once = store.clone();
    store.reset(&target);

    assert!(!store.contains(&target));
    assert_eq!(store, once);
    assert!(store.same_snapshot(&once));
}

#[test]
fn test_every_write_is_a_new_snapshot() {
    let mut store = OverrideStore::new();
    let before = store.clone();
    store.apply(&id("home_cta_button"), OverrideCommand::update(keys::TEXT, "Go"));
    assert!(!store.same_snapshot(&before));
    assert!(before.is_empty());
}

#[test]
fn test_store_json_round_trip() {
    let mut store = OverrideStore::new();
    store.write(&id("header_main"), keys::GRADIENT_START, "#112233".into());
    store.write(&id("shop_add_0"), keys::VISIBLE, false.into());
    store.write(&id("shop_card_0"), keys::GLASS_OPACITY, "40".into());

    let json = serde_json::to_string(&store).unwrap();
    let parsed: OverrideStore = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, store);

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["shop_add_0"]["visible"], serde_json::Value::Bool(false));
    assert_eq!(value["header_main"]["customGradientStart"], "#112233");
}

#[test]
fn test_project_file_round_trip() {
    let mut project = test_project(Page::Shop);
    project
        .component_overrides
        .write(&id("shop_price_1"), keys::TEXT_COLOR, "#10b981".into());
    project.quick_access_menu = true;

    let (_dir, path) = project_file(&project);
    let loaded = reload(&path);
    assert_eq!(loaded, project);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("componentOverrides"));
    assert!(raw.contains("quickAccessMenu"));
}

#[test]
fn test_missing_fields_default_on_load() {
    let json = r#"{
        "id": "00000000-0000-0000-0000-000000000000",
        "name": "Minimal",
        "modified": "2025-01-01T00:00:00Z"
    }"#;
    let project: ProjectConfig = serde_json::from_str(json).unwrap();
    assert!(project.component_overrides.is_empty());
    assert!(project.header_tabs);
    assert_eq!(project.page, Page::Home);
}
