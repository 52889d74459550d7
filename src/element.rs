//! Element identifiers used to wire attribute bags together.
//!
//! Attribute bags reference each other by element id: the input points at the
//! listbox through `aria-controls`, the label through `aria-labelledby`, and
//! so on. Embedders can supply their own ids or let [`ElementId::auto`]
//! generate unique ones.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::item::ItemKey;

static ELEMENT_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Identifier for one element in the rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId(String);

impl ElementId {
    /// Create an element id from an existing string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a unique element id with the given prefix, like `__input_0`
    pub fn auto(prefix: &str) -> Self {
        let n = ELEMENT_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("__{prefix}_{n}"))
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive a related id by appending a suffix, like `{id}-label`
    pub fn child(&self, suffix: &str) -> Self {
        Self(format!("{}-{}", self.0, suffix))
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ElementId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Element id of the listbox option for one item.
///
/// This is the id the input's `aria-activedescendant` points at while the
/// item has virtual focus.
pub fn item_element_id(listbox_id: &ElementId, key: &ItemKey) -> ElementId {
    ElementId::new(format!("{}-option-{}", listbox_id, key))
}
