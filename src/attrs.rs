//! Attribute bags produced by the behavior functions.
//!
//! A bag is an ordered mapping from attribute name to value. Values are
//! plain strings, booleans, or event handlers. Behaviors build bags, the
//! embedder reads them out and wires them onto whatever it renders.
//!
//! # Example
//!
//! ```ignore
//! let mut attrs = Attrs::new();
//! attrs.set(names::ROLE, "searchbox");
//! attrs.set(names::ARIA_EXPANDED, false);
//! assert_eq!(attrs.str_value(names::ROLE), Some("searchbox"));
//! ```

use std::fmt;

use crate::events::{Event, EventHandler, EventResult};

/// Attribute names used by the built-in behaviors.
pub mod names {
    pub const ID: &str = "id";
    pub const FOR: &str = "for";
    pub const ROLE: &str = "role";
    pub const VALUE: &str = "value";
    pub const PLACEHOLDER: &str = "placeholder";
    pub const DISABLED: &str = "disabled";
    pub const AUTOCOMPLETE: &str = "autocomplete";
    pub const EXCLUDE_FROM_TAB_ORDER: &str = "exclude-from-tab-order";
    pub const VIRTUAL_FOCUS: &str = "should-use-virtual-focus";

    pub const ARIA_LABEL: &str = "aria-label";
    pub const ARIA_LABELLEDBY: &str = "aria-labelledby";
    pub const ARIA_DESCRIBEDBY: &str = "aria-describedby";
    pub const ARIA_INVALID: &str = "aria-invalid";
    pub const ARIA_EXPANDED: &str = "aria-expanded";
    pub const ARIA_CONTROLS: &str = "aria-controls";
    pub const ARIA_OWNS: &str = "aria-owns";
    pub const ARIA_ACTIVEDESCENDANT: &str = "aria-activedescendant";
    pub const ARIA_AUTOCOMPLETE: &str = "aria-autocomplete";

    pub const ON_KEY_DOWN: &str = "on-key-down";
    pub const ON_KEY_UP: &str = "on-key-up";
    pub const ON_CHANGE: &str = "on-change";
    pub const ON_FOCUS: &str = "on-focus";
    pub const ON_BLUR: &str = "on-blur";
    pub const ON_PRESS: &str = "on-press";
}

// =============================================================================
// Attribute Values
// =============================================================================

/// Value stored under one attribute name.
#[derive(Debug, Clone)]
pub enum AttrValue {
    /// Plain string attribute
    Str(String),
    /// Boolean attribute
    Bool(bool),
    /// Event handler attribute
    Handler(EventHandler),
}

impl AttrValue {
    /// The string value, if this is a string attribute
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean value, if this is a boolean attribute
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The handler, if this is a handler attribute
    pub fn as_handler(&self) -> Option<&EventHandler> {
        match self {
            Self::Handler(h) => Some(h),
            _ => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<EventHandler> for AttrValue {
    fn from(h: EventHandler) -> Self {
        Self::Handler(h)
    }
}

// =============================================================================
// Attribute Bags
// =============================================================================

/// An ordered attribute bag.
///
/// Insertion order is preserved so embedders can apply attributes
/// deterministically. Setting an existing name replaces its value in place.
#[derive(Clone, Default)]
pub struct Attrs {
    entries: Vec<(&'static str, AttrValue)>,
}

impl Attrs {
    /// Create an empty bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value under the same name
    pub fn set(&mut self, name: &'static str, value: impl Into<AttrValue>) {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Look up an attribute by name
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v)
    }

    /// Check whether an attribute is present
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The string value stored under a name, if any
    pub fn str_value(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(AttrValue::as_str)
    }

    /// The boolean value stored under a name, if any
    pub fn bool_value(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(AttrValue::as_bool)
    }

    /// The handler stored under a name, if any
    pub fn handler(&self, name: &str) -> Option<&EventHandler> {
        self.get(name).and_then(AttrValue::as_handler)
    }

    /// Invoke the handler stored under a name.
    ///
    /// Returns `Ignored` when no handler is stored under that name.
    pub fn dispatch(&self, name: &str, event: &Event) -> EventResult {
        match self.handler(name) {
            Some(handler) => handler.call(event),
            None => EventResult::Ignored,
        }
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> {
        self.entries.iter().map(|(n, v)| (*n, v))
    }

    /// Attribute names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(n, _)| *n)
    }

    /// Number of attributes in the bag
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the bag is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for Attrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// =============================================================================
// Merging
// =============================================================================

/// Merge two attribute bags into one.
///
/// Names from `a` keep their order, names only in `b` follow in `b`'s order.
/// When both bags carry a handler under the same name the handlers chain,
/// `a`'s first. For any other collision `b`'s value wins.
pub fn merge_attrs(a: &Attrs, b: &Attrs) -> Attrs {
    let mut merged = a.clone();
    for (name, value) in b.iter() {
        match (merged.get(name), value) {
            (Some(AttrValue::Handler(first)), AttrValue::Handler(second)) => {
                let chained = first.then(second);
                merged.set(name, AttrValue::Handler(chained));
            }
            _ => merged.set(name, value.clone()),
        }
    }
    merged
}
