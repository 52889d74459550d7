//! Tests for attribute bags and merging.

use std::sync::{Arc, Mutex};

use armature::attrs::{Attrs, merge_attrs, names};
use armature::events::{Event, EventHandler, EventResult};

#[test]
fn test_set_and_get() {
    let mut attrs = Attrs::new();
    attrs.set(names::ROLE, "searchbox");
    attrs.set(names::ARIA_EXPANDED, false);

    assert_eq!(attrs.str_value(names::ROLE), Some("searchbox"));
    assert_eq!(attrs.bool_value(names::ARIA_EXPANDED), Some(false));
    assert_eq!(attrs.str_value(names::ARIA_EXPANDED), None);
    assert!(!attrs.contains(names::ID));
}

#[test]
fn test_set_replaces_in_place() {
    let mut attrs = Attrs::new();
    attrs.set(names::ID, "first");
    attrs.set(names::ROLE, "button");
    attrs.set(names::ID, "second");

    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs.str_value(names::ID), Some("second"));
    // Replacing keeps the original position
    let order: Vec<&str> = attrs.names().collect();
    assert_eq!(order, vec![names::ID, names::ROLE]);
}

#[test]
fn test_merge_right_bias_for_plain_values() {
    let mut a = Attrs::new();
    a.set(names::ROLE, "searchbox");
    a.set(names::VALUE, "abc");

    let mut b = Attrs::new();
    b.set(names::ROLE, "combobox");

    let merged = merge_attrs(&a, &b);
    assert_eq!(merged.str_value(names::ROLE), Some("combobox"));
    assert_eq!(merged.str_value(names::VALUE), Some("abc"));
}

#[test]
fn test_merge_keeps_left_order_then_right_extras() {
    let mut a = Attrs::new();
    a.set(names::ID, "input");
    a.set(names::ROLE, "searchbox");

    let mut b = Attrs::new();
    b.set(names::ARIA_EXPANDED, true);
    b.set(names::ROLE, "combobox");

    let merged = merge_attrs(&a, &b);
    let order: Vec<&str> = merged.names().collect();
    assert_eq!(order, vec![names::ID, names::ROLE, names::ARIA_EXPANDED]);
}

#[test]
fn test_merge_union_contains_all_names() {
    let mut a = Attrs::new();
    a.set(names::ID, "input");
    a.set(names::VALUE, "abc");

    let mut b = Attrs::new();
    b.set(names::ARIA_AUTOCOMPLETE, "list");
    b.set(names::ARIA_EXPANDED, false);

    let merged = merge_attrs(&a, &b);
    for name in [
        names::ID,
        names::VALUE,
        names::ARIA_AUTOCOMPLETE,
        names::ARIA_EXPANDED,
    ] {
        assert!(merged.contains(name), "missing {name}");
    }
}

#[test]
fn test_merge_chains_handlers_left_first() {
    let calls: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(Vec::new()));

    let log = Arc::clone(&calls);
    let mut a = Attrs::new();
    a.set(
        names::ON_FOCUS,
        EventHandler::new(move |_| {
            log.lock().unwrap().push("left");
            EventResult::Ignored
        }),
    );

    let log = Arc::clone(&calls);
    let mut b = Attrs::new();
    b.set(
        names::ON_FOCUS,
        EventHandler::new(move |_| {
            log.lock().unwrap().push("right");
            EventResult::Consumed
        }),
    );

    let merged = merge_attrs(&a, &b);
    let result = merged.dispatch(names::ON_FOCUS, &Event::Focus);

    // Both handlers ran, left side first, and either consumption sticks
    assert_eq!(*calls.lock().unwrap(), vec!["left", "right"]);
    assert_eq!(result, EventResult::Consumed);
}

#[test]
fn test_merge_handler_ignored_when_both_ignore() {
    let mut a = Attrs::new();
    a.set(names::ON_BLUR, EventHandler::new(|_| EventResult::Ignored));
    let mut b = Attrs::new();
    b.set(names::ON_BLUR, EventHandler::new(|_| EventResult::Ignored));

    let merged = merge_attrs(&a, &b);
    assert_eq!(
        merged.dispatch(names::ON_BLUR, &Event::Blur),
        EventResult::Ignored
    );
}

#[test]
fn test_handler_loses_to_plain_value() {
    let mut a = Attrs::new();
    a.set(names::ON_PRESS, EventHandler::new(|_| EventResult::Consumed));
    let mut b = Attrs::new();
    b.set(names::ON_PRESS, "noop");

    let merged = merge_attrs(&a, &b);
    assert_eq!(merged.str_value(names::ON_PRESS), Some("noop"));
    assert_eq!(
        merged.dispatch(names::ON_PRESS, &Event::Press),
        EventResult::Ignored
    );
}

#[test]
fn test_dispatch_without_handler_is_ignored() {
    let attrs = Attrs::new();
    assert_eq!(
        attrs.dispatch(names::ON_KEY_DOWN, &Event::Focus),
        EventResult::Ignored
    );
}

#[test]
fn test_merge_empty_bags() {
    let empty = Attrs::new();
    let mut a = Attrs::new();
    a.set(names::ID, "input");

    assert_eq!(merge_attrs(&a, &empty).len(), 1);
    assert_eq!(merge_attrs(&empty, &a).len(), 1);
    assert!(merge_attrs(&empty, &empty).is_empty());
}
