//! Request building errors.

use thiserror::Error;

/// Errors raised when a [`RequestBuilder`](crate::request::RequestBuilder)
/// is finalized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A placeholder in the path template was never bound.
    #[error("Missing path parameter {name} for {template}")]
    MissingPathParam {
        /// The unbound placeholder.
        name: String,
        /// The path template.
        template: String,
    },

    /// The same placeholder was bound more than once.
    #[error("Path parameter {name} bound more than once")]
    DuplicatePathParam {
        /// The placeholder name.
        name: String,
    },

    /// A path parameter was bound that the template does not declare.
    #[error("Path parameter {name} does not appear in {template}")]
    UnknownPathParam {
        /// The bound name.
        name: String,
        /// The path template.
        template: String,
    },

    /// A body was attached to a request whose method does not carry one.
    #[error("{method} requests cannot carry a body")]
    BodyNotAllowed {
        /// The method the request was finalized with.
        method: &'static str,
    },

    /// The path template has unbalanced braces or an empty placeholder.
    #[error("Invalid path template: {message}")]
    InvalidPathTemplate {
        /// Description of the template error.
        message: String,
    },
}

impl BuildError {
    /// Creates an invalid path template error.
    pub fn invalid_path(message: impl Into<String>) -> Self {
        Self::InvalidPathTemplate {
            message: message.into(),
        }
    }
}
