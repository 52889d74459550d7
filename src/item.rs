//! Suggestion items and their keys.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Key identifying one item in a suggestion list.
///
/// Keys are opaque strings. They track which item is focused or selected and
/// they appear in the element id of the corresponding listbox option.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemKey(String);

impl ItemKey {
    /// Create a new item key
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// The key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemKey {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ItemKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One entry in a suggestion list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique key for this item
    pub key: ItemKey,
    /// Display text, also used for filtering
    pub label: String,
}

impl Item {
    /// Create a new item
    pub fn new(key: impl Into<ItemKey>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Trait for values that can populate a suggestion list.
///
/// # Example
///
/// ```ignore
/// struct Country {
///     code: String,
///     name: String,
/// }
///
/// impl SuggestionItem for Country {
///     fn suggestion_key(&self) -> ItemKey {
///         ItemKey::new(&self.code)
///     }
///
///     fn suggestion_label(&self) -> String {
///         self.name.clone()
///     }
/// }
/// ```
pub trait SuggestionItem {
    /// Unique key for this item.
    ///
    /// Used for tracking focus and selection state.
    fn suggestion_key(&self) -> ItemKey;

    /// Display text for this item.
    ///
    /// This is what gets shown in the suggestion menu and used for filtering.
    fn suggestion_label(&self) -> String;
}

// Implement for Item itself
impl SuggestionItem for Item {
    fn suggestion_key(&self) -> ItemKey {
        self.key.clone()
    }

    fn suggestion_label(&self) -> String {
        self.label.clone()
    }
}

// Implement for String
impl SuggestionItem for String {
    fn suggestion_key(&self) -> ItemKey {
        ItemKey::new(self)
    }

    fn suggestion_label(&self) -> String {
        self.clone()
    }
}

// Implement for &str
impl SuggestionItem for &str {
    fn suggestion_key(&self) -> ItemKey {
        ItemKey::new(*self)
    }

    fn suggestion_label(&self) -> String {
        (*self).to_string()
    }
}

// Implement for (key, label) tuples
impl<S1, S2> SuggestionItem for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn suggestion_key(&self) -> ItemKey {
        ItemKey::new(self.0.as_ref())
    }

    fn suggestion_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}
