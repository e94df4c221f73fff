//! Top-level client error type.

use payrail_define::{BuildError, MapError};
use thiserror::Error;

use super::{ConfigError, TransportError};

/// Top-level error type for all client operations.
///
/// Local input problems ([`Validation`](Self::Validation),
/// [`Build`](Self::Build)) are raised before anything is sent and are kept
/// apart from [`Transport`](Self::Transport) failures and from responses
/// that do not match their model ([`Response`](Self::Response)).
///
/// ## Examples
///
/// ```rust,ignore
/// use payrail::PayrailError;
///
/// fn handle_error(err: PayrailError) {
///     match err {
///         PayrailError::Validation(e) => eprintln!("Invalid payload: {e}"),
///         PayrailError::Response(e) => eprintln!("Unexpected response: {e}"),
///         PayrailError::Build(e) => eprintln!("Invalid request: {e}"),
///         PayrailError::Transport(e) => eprintln!("Request failed: {e}"),
///         PayrailError::Config(e) => eprintln!("Configuration error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum PayrailError {
    /// A request body failed model validation before it was sent.
    #[error(transparent)]
    Validation(#[from] MapError),

    /// The server answered, but its payload failed model validation.
    #[error("Invalid response payload: {0}")]
    Response(#[source] MapError),

    /// A request could not be assembled.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The transport failed or the server rejected the request.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The client is misconfigured.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl PayrailError {
    /// Returns `true` if the error was raised locally, before any network
    /// access.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Build(_) | Self::Config(_))
    }

    /// Returns the HTTP status code if the server answered with an error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Transport(e) => e.status_code(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_map_error_is_local() {
        let err: PayrailError = MapError::MissingField {
            field: "amount".to_string(),
        }
        .into();
        assert!(matches!(err, PayrailError::Validation(_)));
        assert!(err.is_local());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_from_build_error_is_local() {
        let err: PayrailError = BuildError::MissingPathParam {
            name: "payment_id".to_string(),
            template: "/v1/payments/{payment_id}".to_string(),
        }
        .into();
        assert!(err.is_local());
    }

    #[test]
    fn test_response_mapping_error_is_not_local() {
        let err = PayrailError::Response(MapError::InvalidEnumValue {
            field: "status".to_string(),
            value: "SETTLED".to_string(),
            category: "PaymentStatus",
        });
        assert!(!err.is_local());
        assert_eq!(err.status_code(), None);
        assert!(err.to_string().starts_with("Invalid response payload:"));
    }

    #[test]
    fn test_transport_error_is_not_local() {
        let err: PayrailError = TransportError::HttpStatus {
            status: 404,
            body: "not found".to_string(),
        }
        .into();
        assert!(!err.is_local());
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.to_string(), "HTTP 404: not found");
    }
}
