//! Combo box behavior: a text input bound to a filtered suggestion menu.
//!
//! [`combo_box_behavior`] turns a [`ComboBoxConfig`] and a [`ComboBoxState`]
//! into attribute bags for the input, label and listbox elements. The state
//! is a shared handle, so the handlers inside the bags mutate the same state
//! the embedder reads when rendering.
//!
//! # Example
//!
//! ```ignore
//! let state = ComboBoxState::new().with_items(&[("de", "Germany"), ("fr", "France")]);
//! let config = ComboBoxConfig::new().label("Country");
//! let attrs = combo_box_behavior(&config, &state);
//!
//! attrs.input.dispatch(names::ON_FOCUS, &Event::Focus);
//! attrs.input.dispatch(names::ON_CHANGE, &Event::Change("ger".into()));
//! ```

mod behavior;
mod config;
mod delegate;
mod state;

pub use behavior::{ComboBoxAttrs, combo_box_behavior};
pub use config::ComboBoxConfig;
pub use delegate::{KeyboardDelegate, ListKeyboardDelegate};
pub use state::{ComboBoxId, ComboBoxState, MenuTrigger};
