//! Search field behavior: attribute bags for the input and its satellites.

use std::sync::Arc;

use log::debug;

use crate::attrs::{Attrs, names};
use crate::element::ElementId;
use crate::events::{Callback, Event, EventHandler, EventResult};
use crate::keys::Key;

use super::config::{SearchFieldConfig, ValueBinding};

/// Attribute bags produced by [`search_field_behavior`].
#[derive(Debug, Clone)]
pub struct SearchFieldAttrs {
    /// Attributes for the label element
    pub label: Attrs,
    /// Attributes for the text input
    pub input: Attrs,
    /// Attributes for the clear button
    pub clear_button: Attrs,
    /// Attributes for the help text element
    pub description: Attrs,
    /// Attributes for the error message element
    pub error_message: Attrs,
}

/// Build the attribute bags for a search field.
///
/// The input bag carries the search key handling: Enter submits the current
/// value, Escape clears a non-empty field. Clearing resets the value through
/// the binding first and then invokes the configured clear callback. The
/// clear button's press handler runs the same path. A raw `on_key_down` hook
/// from the config runs first and suppresses the built-ins when it consumes
/// the key.
///
/// Related element ids derive from `input_id`: the label is `{id}-label`,
/// the description `{id}-description`, the error `{id}-error` and the clear
/// button `{id}-clear`.
///
/// When the config is disabled the bags carry no event handlers.
pub fn search_field_behavior(
    config: &SearchFieldConfig,
    binding: &ValueBinding,
    input_id: &ElementId,
) -> SearchFieldAttrs {
    let label_id = input_id.child("label");
    let description_id = input_id.child("description");
    let error_id = input_id.child("error");
    let clear_id = input_id.child("clear");

    let mut label = Attrs::new();
    label.set(names::ID, label_id.as_str());
    label.set(names::FOR, input_id.as_str());

    let mut description = Attrs::new();
    if config.description.is_some() {
        description.set(names::ID, description_id.as_str());
    }

    let mut error_message = Attrs::new();
    if config.error_message.is_some() {
        error_message.set(names::ID, error_id.as_str());
    }

    let mut input = Attrs::new();
    input.set(names::ID, input_id.as_str());
    input.set(names::ROLE, "searchbox");
    input.set(names::VALUE, binding.value.as_str());
    if let Some(placeholder) = &config.placeholder {
        input.set(names::PLACEHOLDER, placeholder.as_str());
    }
    if let Some(auto_complete) = &config.auto_complete {
        input.set(names::AUTOCOMPLETE, auto_complete.as_str());
    }
    if config.label.is_some() {
        input.set(names::ARIA_LABELLEDBY, label_id.as_str());
    }
    let mut described_by = Vec::new();
    if config.description.is_some() {
        described_by.push(description_id.as_str());
    }
    if config.error_message.is_some() {
        described_by.push(error_id.as_str());
    }
    if !described_by.is_empty() {
        input.set(names::ARIA_DESCRIBEDBY, described_by.join(" "));
    }
    if config.error_message.is_some() {
        input.set(names::ARIA_INVALID, true);
    }

    let mut clear_button = Attrs::new();
    clear_button.set(names::ID, clear_id.as_str());
    clear_button.set(names::ROLE, "button");
    clear_button.set(names::ARIA_LABEL, "Clear search");
    clear_button.set(names::EXCLUDE_FROM_TAB_ORDER, true);

    if config.is_disabled {
        input.set(names::DISABLED, true);
        clear_button.set(names::DISABLED, true);
        return SearchFieldAttrs {
            label,
            input,
            clear_button,
            description,
            error_message,
        };
    }

    // The clear path: reset the value first, then notify
    let clear: Callback = {
        let set_value = binding.set_value.clone();
        let on_clear = config.on_clear.clone();
        Arc::new(move || {
            set_value("");
            if let Some(callback) = &on_clear {
                callback();
            }
        })
    };

    input.set(
        names::ON_KEY_DOWN,
        key_down_handler(config, binding, clear.clone()),
    );
    if let Some(raw) = &config.on_key_up {
        let raw = Arc::clone(raw);
        input.set(
            names::ON_KEY_UP,
            EventHandler::new(move |event| match event {
                Event::KeyUp(combo) => raw(combo),
                _ => EventResult::Ignored,
            }),
        );
    }
    input.set(names::ON_CHANGE, change_handler(config, binding));
    input.set(names::ON_FOCUS, focus_handler(config));
    input.set(names::ON_BLUR, blur_handler(config));

    let press = {
        let clear = clear.clone();
        EventHandler::new(move |event| {
            if !matches!(event, Event::Press) {
                return EventResult::Ignored;
            }
            clear();
            EventResult::Consumed
        })
    };
    clear_button.set(names::ON_PRESS, press);

    SearchFieldAttrs {
        label,
        input,
        clear_button,
        description,
        error_message,
    }
}

fn key_down_handler(
    config: &SearchFieldConfig,
    binding: &ValueBinding,
    clear: Callback,
) -> EventHandler {
    let raw = config.on_key_down.clone();
    let on_submit = config.on_submit.clone();
    let value = binding.value.clone();

    EventHandler::new(move |event| {
        let Event::KeyDown(combo) = event else {
            return EventResult::Ignored;
        };

        if let Some(raw) = &raw
            && raw(combo).is_handled()
        {
            return EventResult::Consumed;
        }

        // Leave ctrl/alt shortcuts to the embedder
        if combo.modifiers.ctrl || combo.modifiers.alt {
            return EventResult::Ignored;
        }

        match combo.key {
            Key::Enter => {
                debug!("Submitting search value {value:?}");
                if let Some(submit) = &on_submit {
                    submit(&value);
                }
                EventResult::Consumed
            }
            Key::Escape => {
                if value.is_empty() {
                    EventResult::Ignored
                } else {
                    clear();
                    EventResult::Consumed
                }
            }
            _ => EventResult::Ignored,
        }
    })
}

fn change_handler(config: &SearchFieldConfig, binding: &ValueBinding) -> EventHandler {
    let set_value = binding.set_value.clone();
    let on_change = config.on_change.clone();
    EventHandler::new(move |event| {
        let Event::Change(value) = event else {
            return EventResult::Ignored;
        };
        set_value(value);
        if let Some(callback) = &on_change {
            callback(value);
        }
        EventResult::Consumed
    })
}

fn focus_handler(config: &SearchFieldConfig) -> EventHandler {
    let on_focus = config.on_focus.clone();
    let on_focus_change = config.on_focus_change.clone();
    EventHandler::new(move |event| {
        if !matches!(event, Event::Focus) {
            return EventResult::Ignored;
        }
        if let Some(callback) = &on_focus {
            callback();
        }
        if let Some(callback) = &on_focus_change {
            callback(true);
        }
        EventResult::Consumed
    })
}

fn blur_handler(config: &SearchFieldConfig) -> EventHandler {
    let on_blur = config.on_blur.clone();
    let on_focus_change = config.on_focus_change.clone();
    EventHandler::new(move |event| {
        if !matches!(event, Event::Blur) {
            return EventResult::Ignored;
        }
        if let Some(callback) = &on_blur {
            callback();
        }
        if let Some(callback) = &on_focus_change {
            callback(false);
        }
        EventResult::Consumed
    })
}
