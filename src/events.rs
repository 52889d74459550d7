//! Event types and handler plumbing for the behavior attribute bags.
//!
//! Attribute bags carry [`EventHandler`] values alongside plain string and
//! boolean attributes. Embedders translate their native input into [`Event`]
//! values and dispatch them into the bag; the handler reports whether it
//! consumed the event so callers can decide on further propagation.

use std::fmt;
use std::sync::Arc;

use crate::item::ItemKey;
use crate::keys::KeyCombo;

// =============================================================================
// Events
// =============================================================================

/// An input event delivered to an attribute bag handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Key pressed while the element has focus
    KeyDown(KeyCombo),
    /// Key released while the element has focus
    KeyUp(KeyCombo),
    /// Text value changed, carrying the new value
    Change(String),
    /// Element gained focus
    Focus,
    /// Element lost focus
    Blur,
    /// Element activated (click, tap, Enter on a button)
    Press,
}

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
}

impl EventResult {
    /// Check if the event was consumed.
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

// =============================================================================
// Event Handlers
// =============================================================================

/// A shareable event handler stored inside an attribute bag.
///
/// Handlers are cheap to clone and can be chained with [`EventHandler::then`],
/// which is how merged attribute bags compose handlers from both sides.
#[derive(Clone)]
pub struct EventHandler {
    func: Arc<dyn Fn(&Event) -> EventResult + Send + Sync>,
}

impl EventHandler {
    /// Wrap a closure as an event handler.
    pub fn new(func: impl Fn(&Event) -> EventResult + Send + Sync + 'static) -> Self {
        Self {
            func: Arc::new(func),
        }
    }

    /// Invoke the handler for an event.
    pub fn call(&self, event: &Event) -> EventResult {
        (self.func)(event)
    }

    /// Chain another handler after this one.
    ///
    /// Both handlers always run, this one first. The combined result is
    /// consumed when either side consumed the event.
    pub fn then(&self, other: &EventHandler) -> EventHandler {
        let first = self.clone();
        let second = other.clone();
        EventHandler::new(move |event| {
            let a = first.call(event);
            let b = second.call(event);
            if a.is_handled() || b.is_handled() {
                EventResult::Consumed
            } else {
                EventResult::Ignored
            }
        })
    }
}

impl fmt::Debug for EventHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler")
    }
}

// =============================================================================
// Callback Aliases
// =============================================================================

/// Callback with no payload (clear, focus, blur)
pub type Callback = Arc<dyn Fn() + Send + Sync>;

/// Callback receiving the current text value
pub type ValueCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Callback receiving the new focused state
pub type FocusCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Raw key callback, runs before built-in key handling
pub type KeyCallback = Arc<dyn Fn(&KeyCombo) -> EventResult + Send + Sync>;

/// Submit callback receiving the text value and the selected item key, if any
pub type SubmitCallback = Arc<dyn Fn(&str, Option<&ItemKey>) + Send + Sync>;
