//! Combo box state.

use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::filter::{FilterFn, FilterMatch, default_filter};
use crate::item::{Item, ItemKey, SuggestionItem};
use crate::selection::SelectionManager;
use crate::validation::ErrorDisplay;

/// When the suggestion menu opens automatically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuTrigger {
    /// Open when the input value changes while the input is focused
    #[default]
    Input,
    /// Open when the input gains focus
    Focus,
    /// Only open through explicit [`ComboBoxState::open`] calls
    Manual,
}

/// Unique identifier for a combo box state instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComboBoxId(usize);

impl ComboBoxId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl fmt::Display for ComboBoxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "__combo_box_{}", self.0)
    }
}

/// Internal state for a combo box.
#[derive(Debug, Default)]
struct ComboBoxInner {
    /// Current input text
    value: String,
    /// All suggestion items
    items: Vec<Item>,
    /// Filtered view of the items (indices and scores)
    filtered: Vec<FilterMatch>,
    /// Validation error message (if any)
    error: Option<String>,
    /// How to display validation errors
    error_display: ErrorDisplay,
}

/// Shared state for a combo box or search autocomplete.
///
/// `ComboBoxState` is a cheap handle. Clones share the same underlying state,
/// which is how the handlers inside an attribute bag observe edits made after
/// the bag was built. The state tracks the input text, the suggestion items,
/// the filtered view, the open flag for the menu, and the selection.
///
/// While the menu is closed no item has virtual focus: closing the menu
/// clears the focused key.
///
/// # Example
///
/// ```ignore
/// let state = ComboBoxState::new()
///     .with_items(&[("de", "Germany"), ("fr", "France")])
///     .with_menu_trigger(MenuTrigger::Focus);
///
/// state.set_input_value("ger");
/// assert_eq!(state.filtered_count(), 1);
/// ```
pub struct ComboBoxState {
    /// Unique identifier for this state instance
    id: ComboBoxId,
    /// Internal state
    inner: Arc<RwLock<ComboBoxInner>>,
    /// Focus and selection tracking, shares this state's dirty flag
    selection: SelectionManager,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Whether the suggestion menu is open
    is_open: Arc<AtomicBool>,
    /// Whether the input has focus
    is_focused: Arc<AtomicBool>,
    /// When the menu opens automatically
    menu_trigger: MenuTrigger,
    /// Filter applied to the items on every value change
    filter: FilterFn,
}

impl ComboBoxState {
    /// Create an empty combo box state.
    pub fn new() -> Self {
        let dirty = Arc::new(AtomicBool::new(false));
        Self {
            id: ComboBoxId::new(),
            inner: Arc::new(RwLock::new(ComboBoxInner::default())),
            selection: SelectionManager::with_dirty(Arc::clone(&dirty)),
            dirty,
            is_open: Arc::new(AtomicBool::new(false)),
            is_focused: Arc::new(AtomicBool::new(false)),
            menu_trigger: MenuTrigger::default(),
            filter: default_filter(),
        }
    }

    /// Set the suggestion items.
    pub fn with_items<I: SuggestionItem>(self, items: &[I]) -> Self {
        self.set_items(items);
        self
    }

    /// Set the initial input text.
    pub fn with_input_value(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            self.refilter_locked(&mut guard);
        }
        self
    }

    /// Set when the menu opens automatically.
    pub fn with_menu_trigger(mut self, trigger: MenuTrigger) -> Self {
        self.menu_trigger = trigger;
        self
    }

    /// Replace the default fuzzy filter.
    pub fn with_filter(mut self, filter: FilterFn) -> Self {
        self.filter = filter;
        if let Ok(mut guard) = self.inner.write() {
            self.refilter_locked(&mut guard);
        }
        self
    }

    /// Get the unique ID for this state instance.
    pub fn id(&self) -> ComboBoxId {
        self.id
    }

    /// Get the ID as a string.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    /// When the menu opens automatically.
    pub fn menu_trigger(&self) -> MenuTrigger {
        self.menu_trigger
    }

    /// Handle for the focus and selection state.
    pub fn selection_manager(&self) -> SelectionManager {
        self.selection.clone()
    }

    // -------------------------------------------------------------------------
    // Input value
    // -------------------------------------------------------------------------

    /// Get the current input text.
    pub fn input_value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Set the input text.
    ///
    /// Re-runs the filter, clears any validation error, and opens the menu
    /// when the trigger is [`MenuTrigger::Input`] and the input is focused.
    pub fn set_input_value(&self, value: impl Into<String>) {
        self.write_value(value.into(), true);
    }

    fn write_value(&self, value: String, open_menu: bool) {
        let changed = if let Ok(mut guard) = self.inner.write() {
            if guard.value != value {
                guard.value = value;
                guard.error = None; // Clear error on edit
                self.refilter_locked(&mut guard);
                true
            } else {
                false
            }
        } else {
            false
        };

        if changed {
            self.dirty.store(true, Ordering::SeqCst);
            if open_menu
                && self.menu_trigger == MenuTrigger::Input
                && self.is_focused()
                && !self.is_open()
            {
                self.open();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Items and filtering
    // -------------------------------------------------------------------------

    /// Replace the suggestion items and re-run the filter.
    pub fn set_items<I: SuggestionItem>(&self, items: &[I]) {
        if let Ok(mut guard) = self.inner.write() {
            guard.items = items
                .iter()
                .map(|item| Item::new(item.suggestion_key(), item.suggestion_label()))
                .collect();
            self.refilter_locked(&mut guard);
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Get all suggestion items.
    pub fn items(&self) -> Vec<Item> {
        self.inner
            .read()
            .map(|guard| guard.items.clone())
            .unwrap_or_default()
    }

    /// Get the label of the item with the given key.
    pub fn label_for(&self, key: &ItemKey) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .items
                .iter()
                .find(|item| &item.key == key)
                .map(|item| item.label.clone())
        })
    }

    /// Number of items currently matching the filter.
    pub fn filtered_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.filtered.len())
            .unwrap_or(0)
    }

    /// Get the filtered view (indices and scores).
    pub fn filtered(&self) -> Vec<FilterMatch> {
        self.inner
            .read()
            .map(|guard| guard.filtered.clone())
            .unwrap_or_default()
    }

    /// Get the matching items in display order.
    pub fn filtered_items(&self) -> Vec<Item> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .filtered
                    .iter()
                    .filter_map(|m| guard.items.get(m.index).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Keys of the matching items in display order.
    pub fn filtered_keys(&self) -> Vec<ItemKey> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .filtered
                    .iter()
                    .filter_map(|m| guard.items.get(m.index).map(|item| item.key.clone()))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the label at a filtered index.
    pub fn filtered_label(&self, filtered_index: usize) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .filtered
                .get(filtered_index)
                .and_then(|m| guard.items.get(m.index).map(|item| item.label.clone()))
        })
    }

    /// Re-run the filter with the current value.
    fn refilter_locked(&self, guard: &mut ComboBoxInner) {
        guard.filtered = (self.filter)(&guard.value, &guard.items);
        // Drop virtual focus when the focused item fell out of the results
        if let Some(focused) = self.selection.focused_key() {
            let visible = guard
                .filtered
                .iter()
                .any(|m| guard.items.get(m.index).map(|item| &item.key) == Some(&focused));
            if !visible {
                self.selection.clear_focus();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the suggestion menu is open.
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    /// Open the suggestion menu.
    pub fn open(&self) {
        if !self.is_open.swap(true, Ordering::SeqCst) {
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Close the suggestion menu and clear virtual focus.
    pub fn close(&self) {
        if self.is_open.swap(false, Ordering::SeqCst) {
            self.selection.clear_focus();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Toggle the suggestion menu open/closed.
    pub fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    // -------------------------------------------------------------------------
    // Input focus
    // -------------------------------------------------------------------------

    /// Check if the input has focus.
    pub fn is_focused(&self) -> bool {
        self.is_focused.load(Ordering::SeqCst)
    }

    /// Record whether the input has focus.
    ///
    /// Gaining focus opens the menu when the trigger is
    /// [`MenuTrigger::Focus`].
    pub fn set_focused(&self, focused: bool) {
        if self.is_focused.swap(focused, Ordering::SeqCst) != focused {
            self.dirty.store(true, Ordering::SeqCst);
            if focused && self.menu_trigger == MenuTrigger::Focus {
                self.open();
            }
        }
    }

    // -------------------------------------------------------------------------
    // Committing a selection
    // -------------------------------------------------------------------------

    /// Commit an item: select it, copy its label into the input, close the
    /// menu.
    ///
    /// Unknown keys are ignored. The menu does not reopen for the value
    /// change a commit makes.
    pub fn commit(&self, key: &ItemKey) {
        let Some(label) = self.label_for(key) else {
            return;
        };
        self.selection.set_selected_key(Some(key.clone()));
        self.write_value(label, false);
        self.close();
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the state has changed since the last render.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Set a validation error message.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the validation error.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error.is_some()
        {
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if there is a validation error.
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    /// Get the validation error message, if any.
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or(None)
    }

    /// Get how validation errors are displayed.
    pub fn error_display(&self) -> ErrorDisplay {
        self.inner
            .read()
            .map(|guard| guard.error_display)
            .unwrap_or_default()
    }

    /// Set how validation errors are displayed.
    pub fn set_error_display(&self, display: ErrorDisplay) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error_display = display;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }
}

impl Clone for ComboBoxState {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            selection: self.selection.clone(),
            dirty: Arc::clone(&self.dirty),
            is_open: Arc::clone(&self.is_open),
            is_focused: Arc::clone(&self.is_focused),
            menu_trigger: self.menu_trigger,
            filter: Arc::clone(&self.filter),
        }
    }
}

impl Default for ComboBoxState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComboBoxState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComboBoxState")
            .field("id", &self.id)
            .field("inner", &self.inner)
            .field("is_open", &self.is_open)
            .field("is_focused", &self.is_focused)
            .field("menu_trigger", &self.menu_trigger)
            .finish_non_exhaustive()
    }
}

use crate::validation::Validatable;

impl Validatable for ComboBoxState {
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.input_value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        ComboBoxState::set_error(self, msg)
    }

    fn clear_error(&self) {
        ComboBoxState::clear_error(self)
    }

    fn has_error(&self) -> bool {
        ComboBoxState::has_error(self)
    }

    fn error(&self) -> Option<String> {
        ComboBoxState::error(self)
    }

    fn widget_id(&self) -> String {
        self.id_string()
    }

    fn error_display(&self) -> ErrorDisplay {
        ComboBoxState::error_display(self)
    }

    fn set_error_display(&self, display: ErrorDisplay) {
        ComboBoxState::set_error_display(self, display)
    }
}
