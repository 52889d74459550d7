//! Tests for the standalone search field behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use armature::attrs::names;
use armature::element::ElementId;
use armature::events::{Event, EventResult};
use armature::keys::{Key, KeyCombo};
use armature::search_field::{SearchFieldConfig, ValueBinding, search_field_behavior};

fn key_down(key: Key) -> Event {
    Event::KeyDown(KeyCombo::key(key))
}

/// Binding backed by a shared store, so tests can observe writes.
fn store_binding(text: &str) -> (ValueBinding, Arc<Mutex<String>>) {
    let store = Arc::new(Mutex::new(text.to_string()));
    let writer = Arc::clone(&store);
    let binding = ValueBinding::new(text, move |value| {
        *writer.lock().unwrap() = value.to_string();
    });
    (binding, store)
}

#[test]
fn test_enter_submits_value() {
    let submitted = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&submitted);
    let config = SearchFieldConfig::new().on_submit(move |value| {
        log.lock().unwrap().push(value.to_string());
    });
    let (binding, _store) = store_binding("rust patterns");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);
    let result = attrs.input.dispatch(names::ON_KEY_DOWN, &key_down(Key::Enter));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(*submitted.lock().unwrap(), vec!["rust patterns".to_string()]);
}

#[test]
fn test_enter_without_callback_is_noop() {
    let config = SearchFieldConfig::new();
    let (binding, store) = store_binding("query");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);
    let result = attrs.input.dispatch(names::ON_KEY_DOWN, &key_down(Key::Enter));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(*store.lock().unwrap(), "query");
}

#[test]
fn test_escape_clears_non_empty() {
    let cleared = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&cleared);
    let config = SearchFieldConfig::new().on_clear(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let (binding, store) = store_binding("hello");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);
    let result = attrs
        .input
        .dispatch(names::ON_KEY_DOWN, &key_down(Key::Escape));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(*store.lock().unwrap(), "");
    assert_eq!(cleared.load(Ordering::SeqCst), 1);
}

#[test]
fn test_escape_ignored_when_empty() {
    let cleared = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&cleared);
    let config = SearchFieldConfig::new().on_clear(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let (binding, _store) = store_binding("");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);
    let result = attrs
        .input
        .dispatch(names::ON_KEY_DOWN, &key_down(Key::Escape));

    assert_eq!(result, EventResult::Ignored);
    assert_eq!(cleared.load(Ordering::SeqCst), 0);
}

#[test]
fn test_clear_button_resets_before_notifying() {
    let store = Arc::new(Mutex::new("draft".to_string()));
    let writer = Arc::clone(&store);
    let binding = ValueBinding::new("draft", move |value| {
        *writer.lock().unwrap() = value.to_string();
    });

    // The callback must observe the already-reset value
    let seen = Arc::new(Mutex::new(None));
    let observed = Arc::clone(&seen);
    let reader = Arc::clone(&store);
    let config = SearchFieldConfig::new().on_clear(move || {
        *observed.lock().unwrap() = Some(reader.lock().unwrap().clone());
    });
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);
    let result = attrs.clear_button.dispatch(names::ON_PRESS, &Event::Press);

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(*seen.lock().unwrap(), Some(String::new()));
}

#[test]
fn test_change_routes_binding_then_callback() {
    let changed = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&changed);
    let config = SearchFieldConfig::new().on_change(move |value| {
        log.lock().unwrap().push(value.to_string());
    });
    let (binding, store) = store_binding("");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);
    let result = attrs
        .input
        .dispatch(names::ON_CHANGE, &Event::Change("abc".into()));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(*store.lock().unwrap(), "abc");
    assert_eq!(*changed.lock().unwrap(), vec!["abc".to_string()]);
}

#[test]
fn test_value_snapshot_in_bag() {
    let config = SearchFieldConfig::new().placeholder("Search...");
    let (binding, _store) = store_binding("partial");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);

    assert_eq!(attrs.input.str_value(names::VALUE), Some("partial"));
    assert_eq!(attrs.input.str_value(names::PLACEHOLDER), Some("Search..."));
    assert_eq!(attrs.input.str_value(names::ROLE), Some("searchbox"));
}

#[test]
fn test_described_by_joins_description_and_error() {
    let config = SearchFieldConfig::new()
        .description("Type to search")
        .error_message("Too short");
    let (binding, _store) = store_binding("");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);

    assert_eq!(
        attrs.input.str_value(names::ARIA_DESCRIBEDBY),
        Some("search-description search-error")
    );
    assert_eq!(attrs.description.str_value(names::ID), Some("search-description"));
    assert_eq!(attrs.error_message.str_value(names::ID), Some("search-error"));
    assert_eq!(attrs.input.bool_value(names::ARIA_INVALID), Some(true));
}

#[test]
fn test_described_by_with_description_only() {
    let config = SearchFieldConfig::new().description("Type to search");
    let (binding, _store) = store_binding("");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);

    assert_eq!(
        attrs.input.str_value(names::ARIA_DESCRIBEDBY),
        Some("search-description")
    );
    assert!(!attrs.input.contains(names::ARIA_INVALID));
    assert!(attrs.error_message.is_empty());
}

#[test]
fn test_described_by_absent_without_satellites() {
    let config = SearchFieldConfig::new();
    let (binding, _store) = store_binding("");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);

    assert!(!attrs.input.contains(names::ARIA_DESCRIBEDBY));
    assert!(attrs.description.is_empty());
}

#[test]
fn test_label_wiring() {
    let config = SearchFieldConfig::new().label("Search");
    let (binding, _store) = store_binding("");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);

    assert_eq!(attrs.label.str_value(names::ID), Some("search-label"));
    assert_eq!(attrs.label.str_value(names::FOR), Some("search"));
    assert_eq!(
        attrs.input.str_value(names::ARIA_LABELLEDBY),
        Some("search-label")
    );
}

#[test]
fn test_clear_button_attrs() {
    let config = SearchFieldConfig::new();
    let (binding, _store) = store_binding("");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);

    assert_eq!(attrs.clear_button.str_value(names::ID), Some("search-clear"));
    assert_eq!(attrs.clear_button.str_value(names::ROLE), Some("button"));
    assert_eq!(
        attrs.clear_button.str_value(names::ARIA_LABEL),
        Some("Clear search")
    );
    assert_eq!(
        attrs.clear_button.bool_value(names::EXCLUDE_FROM_TAB_ORDER),
        Some(true)
    );
}

#[test]
fn test_raw_hook_suppresses_submit() {
    let submitted = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&submitted);
    let config = SearchFieldConfig::new()
        .on_submit(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .on_key_down(|combo| {
            if combo.key == Key::Enter {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            }
        });
    let (binding, _store) = store_binding("query");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);
    let result = attrs.input.dispatch(names::ON_KEY_DOWN, &key_down(Key::Enter));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(submitted.load(Ordering::SeqCst), 0);
}

#[test]
fn test_raw_hook_ignored_lets_builtins_run() {
    let submitted = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&submitted);
    let config = SearchFieldConfig::new()
        .on_submit(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .on_key_down(|_| EventResult::Ignored);
    let (binding, _store) = store_binding("query");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);
    attrs.input.dispatch(names::ON_KEY_DOWN, &key_down(Key::Enter));

    assert_eq!(submitted.load(Ordering::SeqCst), 1);
}

#[test]
fn test_key_up_hook_routed() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&seen);
    let config = SearchFieldConfig::new().on_key_up(move |combo| {
        log.lock().unwrap().push(combo.key);
        EventResult::Consumed
    });
    let (binding, _store) = store_binding("");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);
    let result = attrs
        .input
        .dispatch(names::ON_KEY_UP, &Event::KeyUp(KeyCombo::key(Key::Char('a'))));

    assert_eq!(result, EventResult::Consumed);
    assert_eq!(*seen.lock().unwrap(), vec![Key::Char('a')]);
}

#[test]
fn test_modified_keys_pass_through() {
    let submitted = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&submitted);
    let config = SearchFieldConfig::new().on_submit(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let (binding, _store) = store_binding("query");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);
    let event = Event::KeyDown(KeyCombo::key(Key::Enter).ctrl());
    let result = attrs.input.dispatch(names::ON_KEY_DOWN, &event);

    assert_eq!(result, EventResult::Ignored);
    assert_eq!(submitted.load(Ordering::SeqCst), 0);
}

#[test]
fn test_focus_and_blur_callbacks() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let focus_log = Arc::clone(&log);
    let blur_log = Arc::clone(&log);
    let change_log = Arc::clone(&log);
    let config = SearchFieldConfig::new()
        .on_focus(move || focus_log.lock().unwrap().push("focus".to_string()))
        .on_blur(move || blur_log.lock().unwrap().push("blur".to_string()))
        .on_focus_change(move |focused| {
            change_log.lock().unwrap().push(format!("change:{focused}"));
        });
    let (binding, _store) = store_binding("");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);
    attrs.input.dispatch(names::ON_FOCUS, &Event::Focus);
    attrs.input.dispatch(names::ON_BLUR, &Event::Blur);

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "focus".to_string(),
            "change:true".to_string(),
            "blur".to_string(),
            "change:false".to_string(),
        ]
    );
}

#[test]
fn test_disabled_omits_handlers() {
    let config = SearchFieldConfig::new().disabled();
    let (binding, _store) = store_binding("query");
    let input_id = ElementId::new("search");

    let attrs = search_field_behavior(&config, &binding, &input_id);

    assert_eq!(attrs.input.bool_value(names::DISABLED), Some(true));
    assert_eq!(attrs.clear_button.bool_value(names::DISABLED), Some(true));
    assert!(!attrs.input.contains(names::ON_KEY_DOWN));
    assert!(!attrs.input.contains(names::ON_CHANGE));
    assert!(!attrs.clear_button.contains(names::ON_PRESS));
}
