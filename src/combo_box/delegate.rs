//! Keyboard navigation over the suggestion list.
//!
//! The combo box behavior never walks the item list itself. It asks a
//! [`KeyboardDelegate`] which key comes next, so embedders with sections,
//! separators, or disabled rows can plug in their own navigation order.

use crate::item::ItemKey;

use super::state::ComboBoxState;

/// Decides which item receives virtual focus next.
///
/// All methods return `None` when there is no such item, in which case the
/// behavior leaves the current focus unchanged.
pub trait KeyboardDelegate: Send + Sync {
    /// Key after `key` in navigation order. `None` for `key` means "from the
    /// top", so the first key is returned.
    fn key_below(&self, key: Option<&ItemKey>) -> Option<ItemKey>;

    /// Key before `key` in navigation order. `None` for `key` means "from the
    /// bottom", so the last key is returned.
    fn key_above(&self, key: Option<&ItemKey>) -> Option<ItemKey>;

    /// First key in navigation order.
    fn first_key(&self) -> Option<ItemKey>;

    /// Last key in navigation order.
    fn last_key(&self) -> Option<ItemKey>;
}

/// Default delegate walking the filtered items in display order.
///
/// Navigation does not wrap: stepping below the last item or above the first
/// returns `None`.
#[derive(Debug, Clone)]
pub struct ListKeyboardDelegate {
    state: ComboBoxState,
}

impl ListKeyboardDelegate {
    /// Create a delegate over a combo box state.
    pub fn new(state: &ComboBoxState) -> Self {
        Self {
            state: state.clone(),
        }
    }

    fn position_of(&self, keys: &[ItemKey], key: &ItemKey) -> Option<usize> {
        keys.iter().position(|k| k == key)
    }
}

impl KeyboardDelegate for ListKeyboardDelegate {
    fn key_below(&self, key: Option<&ItemKey>) -> Option<ItemKey> {
        let keys = self.state.filtered_keys();
        match key {
            None => keys.first().cloned(),
            Some(key) => {
                let pos = self.position_of(&keys, key)?;
                keys.get(pos + 1).cloned()
            }
        }
    }

    fn key_above(&self, key: Option<&ItemKey>) -> Option<ItemKey> {
        let keys = self.state.filtered_keys();
        match key {
            None => keys.last().cloned(),
            Some(key) => {
                let pos = self.position_of(&keys, key)?;
                if pos == 0 {
                    None
                } else {
                    keys.get(pos - 1).cloned()
                }
            }
        }
    }

    fn first_key(&self) -> Option<ItemKey> {
        self.state.filtered_keys().first().cloned()
    }

    fn last_key(&self) -> Option<ItemKey> {
        self.state.filtered_keys().last().cloned()
    }
}
