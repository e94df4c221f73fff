//! Descriptor table consistency errors.

use thiserror::Error;

/// Errors found while validating descriptor tables at registry build time.
///
/// These indicate a bug in a model definition, never bad input data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// Two fields of one model share a local name.
    #[error("Model {model} declares local name {name} more than once")]
    DuplicateLocalName {
        /// The model name.
        model: &'static str,
        /// The repeated local name.
        name: &'static str,
    },

    /// Two fields of one model share a wire name.
    #[error("Model {model} declares wire name {name} more than once")]
    DuplicateWireName {
        /// The model name.
        model: &'static str,
        /// The repeated wire name.
        name: &'static str,
    },

    /// Two distinct schemas were registered under the same name.
    #[error("Duplicate model name: {name}")]
    DuplicateModel {
        /// The model name.
        name: &'static str,
    },

    /// A regex pattern failed to compile.
    #[error("Invalid pattern {pattern}: {message}")]
    InvalidPattern {
        /// Name of the pattern.
        pattern: &'static str,
        /// Compiler message.
        message: String,
    },
}
