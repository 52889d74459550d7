//! Search autocomplete behavior: a search field bound to a suggestion menu.
//!
//! [`search_autocomplete_behavior`] composes the search field and combo box
//! behaviors over one [`ComboBoxState`]. The result is one set of attribute
//! bags: the input carries both the search semantics (Enter submits, Escape
//! clears) and the menu semantics (arrows move virtual focus, Enter commits
//! the focused suggestion).
//!
//! Submission and suggestion commits stay distinct: while a suggestion has
//! virtual focus, Enter commits it and the submit callback is not invoked.
//! With no focused suggestion, Enter submits the typed text.
//!
//! # Example
//!
//! ```ignore
//! let state = ComboBoxState::new().with_items(&[("de", "Germany"), ("fr", "France")]);
//! let config = SearchAutocompleteConfig::new()
//!     .label("Country")
//!     .on_submit(|value, key| match key {
//!         Some(key) => println!("picked {key}"),
//!         None => println!("searching for {value}"),
//!     });
//!
//! let attrs = search_autocomplete_behavior(&config, &state);
//! attrs.input.dispatch(names::ON_CHANGE, &Event::Change("ger".into()));
//! ```

use std::sync::Arc;

use crate::attrs::{Attrs, merge_attrs};
use crate::combo_box::{ComboBoxConfig, ComboBoxState, KeyboardDelegate, combo_box_behavior};
use crate::element::ElementId;
use crate::events::{
    Callback, EventResult, FocusCallback, KeyCallback, SubmitCallback, ValueCallback,
};
use crate::item::ItemKey;
use crate::keys::KeyCombo;
use crate::search_field::{SearchFieldConfig, ValueBinding, search_field_behavior};

/// Configuration for [`search_autocomplete_behavior`].
pub struct SearchAutocompleteConfig {
    /// Visible label text, if any
    pub label: Option<String>,

    /// Placeholder text shown while the input is empty
    pub placeholder: Option<String>,

    /// Help text rendered below the input
    pub description: Option<String>,

    /// Validation error text. When absent, the state's own error is used.
    pub error_message: Option<String>,

    /// Whether the whole widget ignores input
    pub is_disabled: bool,

    /// Element id of the text input
    pub input_id: ElementId,

    /// Element id of the popover containing the suggestion menu
    pub popover_id: ElementId,

    /// Element id of the listbox inside the popover
    pub listbox_id: ElementId,

    /// Navigation order override (defaults to the filtered list order)
    pub keyboard_delegate: Option<Arc<dyn KeyboardDelegate>>,

    /// Called when Enter submits the typed text.
    ///
    /// The item key argument is always `None` here: when a suggestion is
    /// committed instead, this callback is not invoked at all.
    pub on_submit: Option<SubmitCallback>,

    /// Called after the input is cleared
    pub on_clear: Option<Callback>,

    /// Called when the input gains focus
    pub on_focus: Option<Callback>,

    /// Called when the input loses focus
    pub on_blur: Option<Callback>,

    /// Called with the new focused state on focus and blur
    pub on_focus_change: Option<FocusCallback>,

    /// Raw key-down hook, runs before the built-in search key handling.
    /// Returning `Consumed` suppresses the submit and clear built-ins for
    /// that key. Menu navigation is not affected.
    pub on_key_down: Option<KeyCallback>,

    /// Raw key-up hook
    pub on_key_up: Option<KeyCallback>,
}

impl SearchAutocompleteConfig {
    /// Create a config with freshly generated element ids.
    pub fn new() -> Self {
        Self {
            label: None,
            placeholder: None,
            description: None,
            error_message: None,
            is_disabled: false,
            input_id: ElementId::auto("input"),
            popover_id: ElementId::auto("popover"),
            listbox_id: ElementId::auto("listbox"),
            keyboard_delegate: None,
            on_submit: None,
            on_clear: None,
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

    /// Disable the widget.
    pub fn disabled(mut self) -> Self {
        self.is_disabled = true;
        self
    }

    /// Set the input element id.
    pub fn input_id(mut self, id: impl Into<ElementId>) -> Self {
        self.input_id = id.into();
        self
    }

    /// Set the popover element id.
    pub fn popover_id(mut self, id: impl Into<ElementId>) -> Self {
        self.popover_id = id.into();
        self
    }

    /// Set the listbox element id.
    pub fn listbox_id(mut self, id: impl Into<ElementId>) -> Self {
        self.listbox_id = id.into();
        self
    }

    /// Override the keyboard navigation order.
    pub fn keyboard_delegate(mut self, delegate: Arc<dyn KeyboardDelegate>) -> Self {
        self.keyboard_delegate = Some(delegate);
        self
    }

    /// Set the submit callback.
    pub fn on_submit(
        mut self,
        callback: impl Fn(&str, Option<&ItemKey>) + Send + Sync + 'static,
    ) -> Self {
        self.on_submit = Some(Arc::new(callback));
        self
    }

    /// Set the clear callback.
    pub fn on_clear(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_clear = Some(Arc::new(callback));
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

impl Default for SearchAutocompleteConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Attribute bags produced by [`search_autocomplete_behavior`].
#[derive(Debug, Clone)]
pub struct SearchAutocompleteAttrs {
    /// Attributes for the label element
    pub label: Attrs,
    /// Attributes for the text input
    pub input: Attrs,
    /// Attributes for the listbox inside the popover
    pub listbox: Attrs,
    /// Attributes for the clear button
    pub clear_button: Attrs,
    /// Attributes for the help text element
    pub description: Attrs,
    /// Attributes for the error message element
    pub error_message: Attrs,
}

/// Build the attribute bags for a search autocomplete over the given state.
///
/// The search field side runs against an adapted configuration: the value is
/// bound to the state's input text, `autocomplete` is forced to `"off"`,
/// clearing resets the state's text before the configured clear callback
/// runs, and submission is suppressed while a suggestion has virtual focus.
/// The combo box side runs with the focus and raw key hooks stripped so
/// caller callbacks fire exactly once through the search field side.
///
/// The two input bags merge into one, search field attributes first.
pub fn search_autocomplete_behavior(
    config: &SearchAutocompleteConfig,
    state: &ComboBoxState,
) -> SearchAutocompleteAttrs {
    let field_config = adapted_field_config(config, state);
    let binding = {
        let state_handle = state.clone();
        ValueBinding::new(state.input_value(), move |value| {
            state_handle.set_input_value(value);
        })
    };
    let field = search_field_behavior(&field_config, &binding, &config.input_id);

    let combo_config = adapted_combo_config(config);
    let combo = combo_box_behavior(&combo_config, state);

    SearchAutocompleteAttrs {
        label: combo.label,
        input: merge_attrs(&field.input, &combo.input),
        listbox: combo.listbox,
        clear_button: field.clear_button,
        description: field.description,
        error_message: field.error_message,
    }
}

/// Search field configuration derived from the autocomplete config.
fn adapted_field_config(
    config: &SearchAutocompleteConfig,
    state: &ComboBoxState,
) -> SearchFieldConfig {
    let adapted_submit: ValueCallback = {
        let selection = state.selection_manager();
        let on_submit = config.on_submit.clone();
        Arc::new(move |value: &str| {
            // A focused suggestion belongs to the menu, not to submission
            if selection.focused_key().is_some() {
                return;
            }
            if let Some(callback) = &on_submit {
                callback(value, None);
            }
        })
    };

    let adapted_clear: Callback = {
        let state_handle = state.clone();
        let on_clear = config.on_clear.clone();
        Arc::new(move || {
            state_handle.set_input_value("");
            if let Some(callback) = &on_clear {
                callback();
            }
        })
    };

    SearchFieldConfig {
        label: config.label.clone(),
        placeholder: config.placeholder.clone(),
        description: config.description.clone(),
        error_message: config.error_message.clone().or_else(|| state.error()),
        is_disabled: config.is_disabled,
        auto_complete: Some("off".to_string()),
        on_submit: Some(adapted_submit),
        on_clear: Some(adapted_clear),
        on_change: None,
        on_focus: config.on_focus.clone(),
        on_blur: config.on_blur.clone(),
        on_focus_change: config.on_focus_change.clone(),
        on_key_down: config.on_key_down.clone(),
        on_key_up: config.on_key_up.clone(),
    }
}

/// Combo box configuration derived from the autocomplete config.
///
/// Focus and raw key hooks stay on the search field side.
fn adapted_combo_config(config: &SearchAutocompleteConfig) -> ComboBoxConfig {
    ComboBoxConfig {
        label: config.label.clone(),
        is_disabled: config.is_disabled,
        input_id: config.input_id.clone(),
        popover_id: config.popover_id.clone(),
        listbox_id: config.listbox_id.clone(),
        keyboard_delegate: config.keyboard_delegate.clone(),
        on_focus: None,
        on_blur: None,
        on_focus_change: None,
        on_key_down: None,
        on_key_up: None,
    }
}
