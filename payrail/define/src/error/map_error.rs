//! Model mapping and validation errors.

use serde_json::Value;
use thiserror::Error;

/// Errors raised while translating a payload between wire and local form.
///
/// Every variant names the offending field by its local path
/// (e.g. `customer.address.country` or `data[2].amount`), so callers can
/// report exactly which part of a payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A required field was absent.
    #[error("Missing required field: {field}")]
    MissingField {
        /// Local path of the missing field.
        field: String,
    },

    /// JSON `null` was supplied for a field that does not accept it.
    #[error("Null is not allowed for field: {field}")]
    NullNotAllowed {
        /// Local path of the field.
        field: String,
    },

    /// The value is not a member of the field's closed enum set.
    #[error("Invalid value {value:?} for field {field}: not a member of {category}")]
    InvalidEnumValue {
        /// Local path of the field.
        field: String,
        /// The rejected value.
        value: String,
        /// Name of the enum category.
        category: &'static str,
    },

    /// A string value did not satisfy the field's declared pattern.
    #[error("Value {value:?} for field {field} does not match pattern {pattern}")]
    PatternMismatch {
        /// Local path of the field.
        field: String,
        /// The rejected value.
        value: String,
        /// Name of the pattern.
        pattern: &'static str,
    },

    /// None of a union field's candidate shapes accepted the value.
    #[error("No variant matched field {field} (tried: {tried:?})")]
    NoMatchingVariant {
        /// Local path of the field.
        field: String,
        /// One entry per candidate, in declaration order, with its failure.
        tried: Vec<String>,
    },

    /// A typed union named a candidate position the field does not declare.
    #[error("Field {field} has no union variant at position {index}")]
    UnknownVariant {
        /// Local path of the field.
        field: String,
        /// The position the typed value reported.
        index: usize,
    },

    /// A JSON number does not fit the declared numeric shape.
    #[error("Number {value} for field {field} is out of range for {expected}")]
    NumberOutOfRange {
        /// Local path of the field.
        field: String,
        /// The number's text.
        value: String,
        /// The declared shape (`integer` or `decimal`).
        expected: &'static str,
    },

    /// The JSON kind of a value differs from the declared shape.
    #[error("Type mismatch for field {field}: expected {expected}, found {found}")]
    TypeMismatch {
        /// Local path of the field.
        field: String,
        /// The declared shape.
        expected: &'static str,
        /// The JSON kind that was supplied.
        found: &'static str,
    },

    /// A declared regex pattern failed to compile.
    #[error("Invalid pattern {pattern}: {message}")]
    InvalidPattern {
        /// Name of the pattern.
        pattern: &'static str,
        /// Compiler message.
        message: String,
    },

    /// No model with this name is registered.
    #[error("Unknown model: {name}")]
    UnknownModel {
        /// The requested model name.
        name: String,
    },

    /// serde failed to materialize or flatten a typed model.
    ///
    /// After a successful [`from_wire`](crate::mapper::from_wire) this
    /// indicates that a typed struct disagrees with its descriptor table.
    #[error("Failed to convert {model}: {message}")]
    Serde {
        /// Name of the model.
        model: &'static str,
        /// serde's message.
        message: String,
    },
}

impl MapError {
    /// Creates a type mismatch error from the offending JSON value.
    pub fn type_mismatch(field: impl Into<String>, expected: &'static str, found: &Value) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            found: json_kind(found),
        }
    }

    /// Creates a serde conversion error for the named model.
    pub fn serde(model: &'static str, err: serde_json::Error) -> Self {
        Self::Serde {
            model,
            message: err.to_string(),
        }
    }

    /// Returns the local path of the offending field, when there is one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingField { field }
            | Self::NullNotAllowed { field }
            | Self::InvalidEnumValue { field, .. }
            | Self::PatternMismatch { field, .. }
            | Self::NoMatchingVariant { field, .. }
            | Self::UnknownVariant { field, .. }
            | Self::NumberOutOfRange { field, .. }
            | Self::TypeMismatch { field, .. } => Some(field),
            Self::InvalidPattern { .. } | Self::UnknownModel { .. } | Self::Serde { .. } => None,
        }
    }
}

/// Names the JSON kind of a value for error messages.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
