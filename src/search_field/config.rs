//! Search field configuration.

use std::sync::Arc;

use crate::events::{Callback, EventResult, FocusCallback, KeyCallback, ValueCallback};
use crate::keys::KeyCombo;

/// The text value a search field reads and writes.
///
/// `value` is a snapshot of the current text. `set_value` routes edits back
/// to wherever the embedder keeps that text, typically a state handle.
#[derive(Clone)]
pub struct ValueBinding {
    /// Current text at the time the bag is built
    pub value: String,
    /// Writes a new text value back to the owner
    pub set_value: ValueCallback,
}

impl ValueBinding {
    /// Create a binding from a snapshot and a setter.
    pub fn new(value: impl Into<String>, set_value: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            value: value.into(),
            set_value: Arc::new(set_value),
        }
    }
}

/// Configuration for [`search_field_behavior`](super::search_field_behavior).
pub struct SearchFieldConfig {
    /// Visible label text, if any
    pub label: Option<String>,

    /// Placeholder text shown while the field is empty
    pub placeholder: Option<String>,

    /// Help text rendered below the field
    pub description: Option<String>,

    /// Validation error text. Its presence marks the field invalid.
    pub error_message: Option<String>,

    /// Whether the field ignores input
    pub is_disabled: bool,

    /// Value for the `autocomplete` attribute
    pub auto_complete: Option<String>,

    /// Called with the current text when Enter is pressed
    pub on_submit: Option<ValueCallback>,

    /// Called after the field is cleared
    pub on_clear: Option<Callback>,

    /// Called with the new text on every change
    pub on_change: Option<ValueCallback>,

    /// Called when the field gains focus
    pub on_focus: Option<Callback>,

    /// Called when the field loses focus
    pub on_blur: Option<Callback>,

    /// Called with the new focused state on focus and blur
    pub on_focus_change: Option<FocusCallback>,

    /// Raw key-down hook, runs before the built-in key handling.
    /// Returning `Consumed` suppresses the built-ins for that key.
    pub on_key_down: Option<KeyCallback>,

    /// Raw key-up hook
    pub on_key_up: Option<KeyCallback>,
}

impl SearchFieldConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self {
            label: None,
            placeholder: None,
            description: None,
            error_message: None,
            is_disabled: false,
            auto_complete: None,
            on_submit: None,
            on_clear: None,
            on_change: None,
            on_focus: None,
            on_blur: None,
            on_focus_change: None,
            on_key_down: None,
            on_key_up: None,
        }
    }

    /// Set the label text.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the placeholder text.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Set the help text.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the validation error text.
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// Disable the field.
    pub fn disabled(mut self) -> Self {
        self.is_disabled = true;
        self
    }

    /// Set the `autocomplete` attribute value.
    pub fn auto_complete(mut self, value: impl Into<String>) -> Self {
        self.auto_complete = Some(value.into());
        self
    }

    /// Set the submit callback.
    pub fn on_submit(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_submit = Some(Arc::new(callback));
        self
    }

    /// Set the clear callback.
    pub fn on_clear(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_clear = Some(Arc::new(callback));
        self
    }

    /// Set the change callback.
    pub fn on_change(mut self, callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(callback));
        self
    }

    /// Set the focus callback.
    pub fn on_focus(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_focus = Some(Arc::new(callback));
        self
    }

    /// Set the blur callback.
    pub fn on_blur(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_blur = Some(Arc::new(callback));
        self
    }

    /// Set the focus change callback.
    pub fn on_focus_change(mut self, callback: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_focus_change = Some(Arc::new(callback));
        self
    }

    /// Set the raw key-down hook.
    pub fn on_key_down(
        mut self,
        callback: impl Fn(&KeyCombo) -> EventResult + Send + Sync + 'static,
    ) -> Self {
        self.on_key_down = Some(Arc::new(callback));
        self
    }

    /// Set the raw key-up hook.
    pub fn on_key_up(
        mut self,
        callback: impl Fn(&KeyCombo) -> EventResult + Send + Sync + 'static,
    ) -> Self {
        self.on_key_up = Some(Arc::new(callback));
        self
    }
}

impl Default for SearchFieldConfig {
    fn default() -> Self {
        Self::new()
    }
}
