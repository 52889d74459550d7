//! Search field behavior: a text input with submit and clear semantics.
//!
//! [`search_field_behavior`] turns a [`SearchFieldConfig`] and a
//! [`ValueBinding`] into attribute bags for the input, its label, the clear
//! button, and the description and error message elements.
//!
//! # Example
//!
//! ```ignore
//! let config = SearchFieldConfig::new()
//!     .label("Search")
//!     .on_submit(|value| println!("searching for {value}"));
//! let binding = ValueBinding::new("", |_| {});
//! let attrs = search_field_behavior(&config, &binding, &ElementId::auto("input"));
//!
//! attrs.input.dispatch(names::ON_KEY_DOWN, &Event::KeyDown(KeyCombo::key(Key::Enter)));
//! ```

mod behavior;
mod config;

pub use behavior::{SearchFieldAttrs, search_field_behavior};
pub use config::{SearchFieldConfig, ValueBinding};
