mod common;

use common::parse;
use sdui_runtime::actions::{ActionDispatcher, Directive};
use sdui_runtime::model::{Action, ComponentNode, Interaction};
use sdui_runtime::navigation::NavigationController;
use sdui_runtime::state::{Resolution, StateStore};
use sdui_runtime::value::{PrimitiveValue, ValueMap};

#[test]
fn nested_values_survive_json_round_trip() {
    let mut inner = ValueMap::new();
    inner.insert("tags".into(), PrimitiveValue::List(vec!["a".into(), PrimitiveValue::Null]));
    inner.insert("ratio".into(), PrimitiveValue::Float(2.0));
    let value = PrimitiveValue::List(vec![
        PrimitiveValue::Map(inner),
        PrimitiveValue::Integer(-7),
        PrimitiveValue::Boolean(true),
        PrimitiveValue::from(""),
    ]);

    let json = value.to_json_string().unwrap();
    assert_eq!(PrimitiveValue::from_json_str(&json).unwrap(), value);
}

#[test]
fn seeded_binding_resolves_and_miss_is_distinct() {
    let tree = parse(r#"{"id":"root","type":"container","properties":{"state":{"a":{"b":"X"}}}}"#);
    let mut store = StateStore::new();
    store.seed_from_tree("s1", &tree);

    assert_eq!(
        store.resolve("s1", "@@a.b"),
        Resolution::Value(PrimitiveValue::from("X"))
    );
    let miss = store.resolve("s1", "@@missing.path");
    assert!(miss.is_unresolved());
    assert_ne!(miss, Resolution::Value(PrimitiveValue::from("")));
}

#[test]
fn back_stack_push_pop() {
    let mut nav = NavigationController::new();
    nav.push("home");
    nav.push("profile");
    assert!(nav.can_go_back());
    assert_eq!(nav.pop(), Some("home"));
    assert_eq!(nav.peek(), Some("home"));
    assert!(!nav.can_go_back());
}

#[test]
fn set_state_copies_between_paths() {
    let mut store = StateStore::new();
    store.write("s1", "a.b", PrimitiveValue::Integer(42));
    let interactions = vec![Interaction::new(
        "onClick",
        vec![Action::new("setState")
            .with_property("fromPath", "@@a.b")
            .with_property("toPath", "c.d")],
    )];

    let directives =
        ActionDispatcher::default().dispatch("s1", "btn", "onClick", &interactions, &mut store);

    assert_eq!(directives, vec![Directive::Recompose]);
    assert_eq!(store.resolve("s1", "@@c.d"), store.resolve("s1", "@@a.b"));
}

#[test]
fn unmatched_event_is_a_no_op() {
    let mut store = StateStore::new();
    store.write("s1", "k", "v".into());
    let interactions = vec![Interaction::new("onClick", vec![Action::new("refresh")])];

    let directives =
        ActionDispatcher::default().dispatch("s1", "btn", "onSwipe", &interactions, &mut store);

    assert!(directives.is_empty());
    assert_eq!(store.len(), 1);
}

#[test]
fn deep_copy_is_isolated() {
    let tree = ComponentNode::new("root", "column")
        .with_child(ComponentNode::new("label", "text").with_property("text", "before"));
    let mut copy = tree.deep_copy();

    if let Some(label) = copy.find_by_id_mut("label") {
        label.properties.insert("text".into(), "after".into());
    }

    assert_eq!(
        tree.find_by_id("label").and_then(|n| n.property("text")),
        Some(&PrimitiveValue::from("before"))
    );
    assert_eq!(
        copy.find_by_id("label").and_then(|n| n.property("text")),
        Some(&PrimitiveValue::from("after"))
    );
}
