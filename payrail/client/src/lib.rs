//! Payrail API Client
//!
//! An async client for the payrail payments API. Every operation maps a
//! typed body to its wire form, builds an immutable request descriptor,
//! sends it through a [`Transport`] and maps the response back into a
//! typed model. Payloads that violate their declared constraints are
//! rejected before anything is sent.
//!
//! ## Services
//!
//! - [`PayrailClient::payments`] - create, get, update, list, capture, cancel
//! - [`PayrailClient::refunds`] - create, get, list
//! - [`PayrailClient::customers`] - create, get, update, delete, list
//!
//! ## Configuration
//!
//! [`ClientConfig`] holds the base URL, the `access_key` header and the
//! request timeout. It can be built explicitly or read from the
//! `PAYRAIL_BASE_URL`, `PAYRAIL_ACCESS_KEY` and `PAYRAIL_TIMEOUT_SECS`
//! environment variables.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use payrail::{ClientConfig, PayrailClient};
//! use payrail::definitions::prelude::*;
//!
//! let config = ClientConfig::builder()
//!     .access_key("ak_test_123")
//!     .build()?;
//! let client = PayrailClient::new(config)?;
//!
//! let customer = client
//!     .customers()
//!     .create(&CreateCustomer {
//!         email: Some("ada@example.com".into()),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let mut payment = CreatePayment::new(2500, "USD");
//! payment.customer_id = Some(customer.id_.clone());
//! let payment = client.payments().create(&payment, Some("order-42")).await?;
//! ```

mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod transport;

pub use client::PayrailClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{ConfigError, PayrailError, TransportError};
pub use services::{CustomersService, PaymentsService, RefundsService};
pub use transport::{HttpTransport, Transport};

pub use payrail_define as define;
pub use payrail_definitions as definitions;
