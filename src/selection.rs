//! Selection state shared between the combo box behaviors.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::item::ItemKey;

/// Internal selection state.
#[derive(Debug, Default)]
struct SelectionInner {
    /// Key of the item with virtual focus (None when nothing is focused)
    focused: Option<ItemKey>,
    /// Key of the committed item (None when nothing is selected)
    selected: Option<ItemKey>,
}

/// Tracks which suggestion has virtual focus and which one is selected.
///
/// `SelectionManager` is a cheap handle. Clones share the same underlying
/// state, so a handle captured inside an event handler observes changes made
/// through any other handle.
#[derive(Debug)]
pub struct SelectionManager {
    /// Shared selection state
    inner: Arc<RwLock<SelectionInner>>,
    /// Dirty flag, shared with the owning widget state
    dirty: Arc<AtomicBool>,
}

impl SelectionManager {
    /// Create a standalone selection manager.
    pub fn new() -> Self {
        Self::with_dirty(Arc::new(AtomicBool::new(false)))
    }

    /// Create a selection manager sharing an existing dirty flag.
    pub(crate) fn with_dirty(dirty: Arc<AtomicBool>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SelectionInner::default())),
            dirty,
        }
    }

    // -------------------------------------------------------------------------
    // Virtual focus
    // -------------------------------------------------------------------------

    /// Key of the item with virtual focus, if any.
    pub fn focused_key(&self) -> Option<ItemKey> {
        self.inner
            .read()
            .map(|guard| guard.focused.clone())
            .unwrap_or(None)
    }

    /// Move virtual focus to an item, or clear it with `None`.
    pub fn set_focused_key(&self, key: Option<ItemKey>) {
        if let Ok(mut guard) = self.inner.write()
            && guard.focused != key
        {
            guard.focused = key;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear virtual focus.
    pub fn clear_focus(&self) {
        self.set_focused_key(None);
    }

    /// Check whether an item has virtual focus.
    pub fn is_focused(&self, key: &ItemKey) -> bool {
        self.inner
            .read()
            .map(|guard| guard.focused.as_ref() == Some(key))
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Key of the selected item, if any.
    pub fn selected_key(&self) -> Option<ItemKey> {
        self.inner
            .read()
            .map(|guard| guard.selected.clone())
            .unwrap_or(None)
    }

    /// Select an item, or clear the selection with `None`.
    pub fn set_selected_key(&self, key: Option<ItemKey>) {
        if let Ok(mut guard) = self.inner.write()
            && guard.selected != key
        {
            guard.selected = key;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the selection.
    pub fn clear_selection(&self) {
        self.set_selected_key(None);
    }

    /// Check whether an item is selected.
    pub fn is_selected(&self, key: &ItemKey) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selected.as_ref() == Some(key))
            .unwrap_or(false)
    }
}

impl Clone for SelectionManager {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new()
    }
}
