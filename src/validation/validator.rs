//! Validator builder for fluent validation API.

use std::sync::Arc;

use super::result::{FieldError, ValidationResult};
use super::validatable::Validatable;

/// Type alias for validation rule closures.
type Rule<V> = Box<dyn Fn(&V) -> Result<(), String> + Send + Sync>;

/// Internal representation of a field being validated.
struct FieldEntry {
    name: String,
    widget_id: String,
    set_error: Box<dyn Fn(Option<String>) + Send + Sync>,
    validate: Box<dyn Fn() -> Vec<String> + Send + Sync>,
}

/// Builder for validating multiple form fields.
///
/// # Example
///
/// ```ignore
/// let result = Validator::new()
///     .field(&self.query, "query")
///         .required("Enter a search term")
///     .field(&self.email, "email")
///         .required("Email is required")
///         .email("Invalid email format")
///     .validate();
///
/// if result.is_valid() {
///     // Submit form
/// }
/// ```
pub struct Validator {
    fields: Vec<FieldEntry>,
}

impl Validator {
    /// Create a new validator.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Add a field to validate.
    pub fn field<W: Validatable + Clone + 'static>(
        self,
        widget: &W,
        name: impl Into<String>,
    ) -> FieldBuilder<W> {
        FieldBuilder {
            validator: self,
            widget: widget.clone(),
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Run all validations.
    ///
    /// Each field's first failing rule becomes its error, stored on the
    /// widget state. Fields that pass get their error cleared.
    pub fn validate(self) -> ValidationResult {
        let mut errors = Vec::new();

        for field in &self.fields {
            let field_errors = (field.validate)();
            if let Some(first_error) = field_errors.first() {
                (field.set_error)(Some(first_error.clone()));
                errors.push(FieldError {
                    field_name: field.name.clone(),
                    widget_id: field.widget_id.clone(),
                    message: first_error.clone(),
                });
            } else {
                (field.set_error)(None);
            }
        }

        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<W: Validatable> {
    validator: Validator,
    widget: W,
    name: String,
    rules: Vec<Rule<W::Value>>,
}

impl<W: Validatable + Clone + 'static> FieldBuilder<W> {
    /// Add a custom validation rule.
    pub fn rule<F>(mut self, f: F, msg: impl Into<String>) -> Self
    where
        F: Fn(&W::Value) -> bool + Send + Sync + 'static,
    {
        let msg = msg.into();
        self.rules
            .push(Box::new(move |v| if f(v) { Ok(()) } else { Err(msg.clone()) }));
        self
    }

    /// Continue to the next field.
    pub fn field<W2: Validatable + Clone + 'static>(
        self,
        widget: &W2,
        name: impl Into<String>,
    ) -> FieldBuilder<W2> {
        let validator = self.finalize();
        validator.field(widget, name)
    }

    /// Finalize and run all validations.
    pub fn validate(self) -> ValidationResult {
        self.finalize().validate()
    }

    /// Finalize this field and return the validator.
    fn finalize(self) -> Validator {
        let widget_id = self.widget.widget_id();
        let name = self.name;

        let widget_for_rules = self.widget.clone();
        let widget_for_error = self.widget;

        let rules = Arc::new(self.rules);

        let validate: Box<dyn Fn() -> Vec<String> + Send + Sync> = Box::new(move || {
            let value = widget_for_rules.validation_value();
            let mut errors = Vec::new();
            for rule in rules.iter() {
                if let Err(msg) = rule(&value) {
                    errors.push(msg);
                }
            }
            errors
        });

        let set_error: Box<dyn Fn(Option<String>) + Send + Sync> = Box::new(move |msg| {
            if let Some(msg) = msg {
                widget_for_error.set_error(msg);
            } else {
                widget_for_error.clear_error();
            }
        });

        let mut validator = self.validator;
        validator.fields.push(FieldEntry {
            name,
            widget_id,
            set_error,
            validate,
        });

        validator
    }
}

// Built-in rules for String values
impl<W: Validatable<Value = String> + Clone + 'static> FieldBuilder<W> {
    /// Require the field to be non-empty.
    pub fn required(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(|v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex pattern.
    pub fn pattern(self, pattern: &str, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let re = regex::Regex::new(pattern).expect("Invalid regex pattern");
        self.rule(move |v| re.is_match(v), msg)
    }

    /// Require a valid email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(
            |v| {
                if v.is_empty() {
                    true // Empty is valid; use required() for non-empty
                } else {
                    email_address::EmailAddress::is_valid(v)
                }
            },
            msg,
        )
    }

    /// Require the value to equal another value.
    pub fn equals(self, other: String, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(move |v| v == &other, msg)
    }

    /// Require the value to contain a substring.
    pub fn contains(self, substr: impl Into<String>, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let substr = substr.into();
        self.rule(move |v| v.contains(&substr), msg)
    }
}
