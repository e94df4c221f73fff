//! Client configuration errors.

use payrail_define::DefinitionError;
use thiserror::Error;

/// Errors in client configuration.
///
/// These occur while building a client, before any request is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The base URL does not use HTTP or HTTPS.
    #[error("Unsupported URL scheme: {scheme}")]
    UnsupportedScheme {
        /// The rejected scheme.
        scheme: String,
    },

    /// A default header name or value is not valid HTTP.
    #[error("Invalid header {name}: {message}")]
    InvalidHeader {
        /// The header name.
        name: String,
        /// Why the header was rejected.
        message: String,
    },

    /// The timeout is zero or not a whole number of seconds.
    #[error("Invalid timeout: {value}")]
    InvalidTimeout {
        /// The rejected value.
        value: String,
    },

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Built-in model definitions are inconsistent.
    #[error("Invalid model definitions: {0}")]
    Definitions(#[from] DefinitionError),
}

impl ConfigError {
    /// Creates an invalid header error.
    pub fn invalid_header(name: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidHeader {
            name: name.into(),
            message: message.to_string(),
        }
    }
}
