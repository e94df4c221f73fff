use std::sync::Arc;

use payrail_define::{Model, Registry, RequestDescriptor};
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::{ConfigError, PayrailError};
use crate::services::{CustomersService, PaymentsService, RefundsService};
use crate::transport::{HttpTransport, Transport};

/// Async client for the payrail payments API.
///
/// The client owns a [`Transport`] and the validated model [`Registry`].
/// Resource operations are grouped into services borrowed from the client.
///
/// ## Examples
///
/// ```rust,ignore
/// use payrail::{ClientConfig, PayrailClient};
/// use payrail::definitions::prelude::*;
///
/// let client = PayrailClient::new(ClientConfig::builder().access_key("ak_live_1").build()?)?;
///
/// let payment = client
///     .payments()
///     .create(&CreatePayment::new(2500, "USD"), Some("order-42"))
///     .await?;
/// println!("created {}", payment.id_);
/// ```
#[derive(Debug, Clone)]
pub struct PayrailClient<T = HttpTransport> {
    transport: T,
    registry: Arc<Registry>,
}

impl PayrailClient<HttpTransport> {
    /// Creates a client that talks HTTP using `config`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed or the
    /// built-in model definitions are inconsistent.
    pub fn new(config: ClientConfig) -> Result<Self, PayrailError> {
        let transport = HttpTransport::new(&config)?;
        debug!(base_url = %config.base_url(), "Creating payrail client");
        Self::with_transport(transport)
    }

    /// Creates a client configured from `PAYRAIL_*` environment variables.
    ///
    /// ## Errors
    ///
    /// Returns an error if the environment holds invalid settings.
    pub fn from_env() -> Result<Self, PayrailError> {
        Self::new(ClientConfig::from_env()?)
    }
}

impl<T: Transport> PayrailClient<T> {
    /// Creates a client over a custom transport.
    ///
    /// ## Errors
    ///
    /// Returns an error if the built-in model definitions are inconsistent.
    pub fn with_transport(transport: T) -> Result<Self, PayrailError> {
        let registry = payrail_definitions::registry().map_err(ConfigError::from)?;
        Ok(Self {
            transport,
            registry: Arc::new(registry),
        })
    }

    /// Returns the model registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Returns the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Payment operations.
    pub fn payments(&self) -> PaymentsService<'_, T> {
        PaymentsService::new(self)
    }

    /// Refund operations.
    pub fn refunds(&self) -> RefundsService<'_, T> {
        RefundsService::new(self)
    }

    /// Customer operations.
    pub fn customers(&self) -> CustomersService<'_, T> {
        CustomersService::new(self)
    }

    /// Sends a request and maps the response into `M`.
    pub(crate) async fn call<M: Model>(&self, request: RequestDescriptor) -> Result<M, PayrailError> {
        let raw = self.transport.send(request).await?;
        M::from_wire(&raw).map_err(PayrailError::Response)
    }
}
