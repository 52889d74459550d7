//! Combo box behavior: attribute bags for the input, label and listbox.

use std::sync::Arc;

use log::debug;

use crate::attrs::{Attrs, names};
use crate::element::item_element_id;
use crate::events::{Event, EventHandler, EventResult};
use crate::keys::Key;

use super::config::ComboBoxConfig;
use super::delegate::{KeyboardDelegate, ListKeyboardDelegate};
use super::state::ComboBoxState;

/// Attribute bags produced by [`combo_box_behavior`].
#[derive(Debug, Clone)]
pub struct ComboBoxAttrs {
    /// Attributes for the label element
    pub label: Attrs,
    /// Attributes for the text input
    pub input: Attrs,
    /// Attributes for the listbox inside the popover
    pub listbox: Attrs,
}

/// Build the attribute bags for a combo box over the given state.
///
/// The input bag carries the combo box key handling: arrow keys move virtual
/// focus through the suggestions (opening the menu first if needed), Home and
/// End jump to the edges while the menu is open, Enter commits the focused
/// suggestion, Escape closes the menu. A raw `on_key_down` hook from the
/// config runs first and suppresses the built-ins when it consumes the key.
///
/// When the config is disabled the bags carry no event handlers.
///
/// Bags snapshot the state they were built from. Rebuild them after state
/// changes, the embedder's render loop typically keys this off
/// [`ComboBoxState::is_dirty`].
pub fn combo_box_behavior(config: &ComboBoxConfig, state: &ComboBoxState) -> ComboBoxAttrs {
    let label_id = config.input_id.child("label");

    let mut label = Attrs::new();
    label.set(names::ID, label_id.as_str());
    label.set(names::FOR, config.input_id.as_str());

    let mut listbox = Attrs::new();
    listbox.set(names::ID, config.listbox_id.as_str());
    listbox.set(names::ROLE, "listbox");
    if config.label.is_some() {
        listbox.set(names::ARIA_LABELLEDBY, label_id.as_str());
    }
    listbox.set(names::VIRTUAL_FOCUS, true);

    let mut input = Attrs::new();
    input.set(names::ID, config.input_id.as_str());
    input.set(names::ROLE, "combobox");
    input.set(names::ARIA_AUTOCOMPLETE, "list");
    input.set(names::ARIA_EXPANDED, state.is_open());
    if config.label.is_some() {
        input.set(names::ARIA_LABELLEDBY, label_id.as_str());
    }
    if state.is_open() {
        input.set(names::ARIA_CONTROLS, config.listbox_id.as_str());
        input.set(names::ARIA_OWNS, config.popover_id.as_str());
        if let Some(focused) = state.selection_manager().focused_key() {
            input.set(
                names::ARIA_ACTIVEDESCENDANT,
                item_element_id(&config.listbox_id, &focused).as_str(),
            );
        }
    }
    if config.is_disabled {
        input.set(names::DISABLED, true);
        return ComboBoxAttrs {
            label,
            input,
            listbox,
        };
    }

    let delegate: Arc<dyn KeyboardDelegate> = match &config.keyboard_delegate {
        Some(delegate) => Arc::clone(delegate),
        None => Arc::new(ListKeyboardDelegate::new(state)),
    };

    input.set(names::ON_KEY_DOWN, key_down_handler(config, state, delegate));
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
    input.set(names::ON_CHANGE, change_handler(state));
    input.set(names::ON_FOCUS, focus_handler(config, state));
    input.set(names::ON_BLUR, blur_handler(config, state));

    ComboBoxAttrs {
        label,
        input,
        listbox,
    }
}

fn key_down_handler(
    config: &ComboBoxConfig,
    state: &ComboBoxState,
    delegate: Arc<dyn KeyboardDelegate>,
) -> EventHandler {
    let state = state.clone();
    let raw = config.on_key_down.clone();

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

        let selection = state.selection_manager();
        match combo.key {
            Key::Down => {
                state.open();
                if let Some(next) = delegate.key_below(selection.focused_key().as_ref()) {
                    selection.set_focused_key(Some(next));
                }
                EventResult::Consumed
            }
            Key::Up => {
                state.open();
                if let Some(prev) = delegate.key_above(selection.focused_key().as_ref()) {
                    selection.set_focused_key(Some(prev));
                }
                EventResult::Consumed
            }
            Key::Home if state.is_open() => {
                if let Some(first) = delegate.first_key() {
                    selection.set_focused_key(Some(first));
                }
                EventResult::Consumed
            }
            Key::End if state.is_open() => {
                if let Some(last) = delegate.last_key() {
                    selection.set_focused_key(Some(last));
                }
                EventResult::Consumed
            }
            Key::Enter => {
                if state.is_open()
                    && let Some(focused) = selection.focused_key()
                {
                    debug!("Committing focused suggestion {focused}");
                    state.commit(&focused);
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Key::Escape => {
                if state.is_open() {
                    state.close();
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            _ => EventResult::Ignored,
        }
    })
}

fn change_handler(state: &ComboBoxState) -> EventHandler {
    let state = state.clone();
    EventHandler::new(move |event| {
        let Event::Change(value) = event else {
            return EventResult::Ignored;
        };
        state.set_input_value(value.as_str());
        EventResult::Consumed
    })
}

fn focus_handler(config: &ComboBoxConfig, state: &ComboBoxState) -> EventHandler {
    let state = state.clone();
    let on_focus = config.on_focus.clone();
    let on_focus_change = config.on_focus_change.clone();
    EventHandler::new(move |event| {
        if !matches!(event, Event::Focus) {
            return EventResult::Ignored;
        }
        state.set_focused(true);
        if let Some(callback) = &on_focus {
            callback();
        }
        if let Some(callback) = &on_focus_change {
            callback(true);
        }
        EventResult::Consumed
    })
}

fn blur_handler(config: &ComboBoxConfig, state: &ComboBoxState) -> EventHandler {
    let state = state.clone();
    let on_blur = config.on_blur.clone();
    let on_focus_change = config.on_focus_change.clone();
    EventHandler::new(move |event| {
        if !matches!(event, Event::Blur) {
            return EventResult::Ignored;
        }
        state.close();
        state.set_focused(false);
        if let Some(callback) = &on_blur {
            callback();
        }
        if let Some(callback) = &on_focus_change {
            callback(false);
        }
        EventResult::Consumed
    })
}
