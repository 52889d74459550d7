//! Combo box configuration.

use std::sync::Arc;

use crate::element::ElementId;
use crate::events::{Callback, EventResult, FocusCallback, KeyCallback};
use crate::keys::KeyCombo;

use super::delegate::KeyboardDelegate;

/// Configuration for [`combo_box_behavior`](super::combo_box_behavior).
///
/// Element ids wire the produced attribute bags together. [`ComboBoxConfig::new`]
/// generates unique ids; give explicit ones when the embedder already assigned
/// them.
pub struct ComboBoxConfig {
    /// Visible label text, if any
    pub label: Option<String>,

    /// Whether the combo box ignores input
    pub is_disabled: bool,

    /// Element id of the text input
    pub input_id: ElementId,

    /// Element id of the popover containing the suggestion menu
    pub popover_id: ElementId,

    /// Element id of the listbox inside the popover
    pub listbox_id: ElementId,

    /// Navigation order override (defaults to the filtered list order)
    pub keyboard_delegate: Option<Arc<dyn KeyboardDelegate>>,

    /// Called when the input gains focus
    pub on_focus: Option<Callback>,

    /// Called when the input loses focus
    pub on_blur: Option<Callback>,

    /// Called with the new focused state on focus and blur
    pub on_focus_change: Option<FocusCallback>,

    /// Raw key-down hook, runs before the built-in key handling.
    /// Returning `Consumed` suppresses the built-ins for that key.
    pub on_key_down: Option<KeyCallback>,

    /// Raw key-up hook
    pub on_key_up: Option<KeyCallback>,
}

impl ComboBoxConfig {
    /// Create a config with freshly generated element ids.
    pub fn new() -> Self {
        Self {
            label: None,
            is_disabled: false,
            input_id: ElementId::auto("input"),
            popover_id: ElementId::auto("popover"),
            listbox_id: ElementId::auto("listbox"),
            keyboard_delegate: None,
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

    /// Disable the combo box.
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

impl Default for ComboBoxConfig {
    fn default() -> Self {
        Self::new()
    }
}
