//! Layered error types for the payrail client.
//!
//! - [`PayrailError`] - Top-level error returned by every service method
//! - [`TransportError`] - Network, HTTP status and response body failures
//! - [`ConfigError`] - Invalid client configuration
//!
//! Model validation and request building errors come from `payrail-define`
//! and are wrapped unchanged.

mod config_error;
mod payrail_error;
mod transport_error;

pub use config_error::ConfigError;
pub use payrail_error::PayrailError;
pub use transport_error::TransportError;
