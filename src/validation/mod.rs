//! Form validation for widget states.
//!
//! This module provides a fluent API for validating the text held by widget
//! states. A failed validation stores its message on the state, where the
//! behavior functions pick it up: the input bag gains `aria-invalid` and the
//! error message bag gains an id.
//!
//! # Example
//!
//! ```ignore
//! use armature::validation::Validator;
//!
//! let result = Validator::new()
//!     .field(&search_state, "query")
//!         .required("Enter a search term")
//!         .max_length(64, "Search terms are limited to 64 characters")
//!     .validate();
//!
//! if result.is_valid() {
//!     // Run the search
//! }
//! ```

mod error_display;
mod result;
mod validatable;
mod validator;

pub use error_display::ErrorDisplay;
pub use result::{FieldError, ValidationResult};
pub use validatable::Validatable;
pub use validator::{FieldBuilder, Validator};
