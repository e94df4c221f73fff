use payrail_define::{RequestBuilder, RestMethod};
use payrail_definitions::refunds::{
    CreateRefund, ListRefunds, REFUND_PATH, REFUNDS_PATH, Refund, RefundList,
};
use tracing::instrument;

use super::IDEMPOTENCY_KEY_HEADER;
use crate::client::PayrailClient;
use crate::error::PayrailError;
use crate::transport::Transport;

/// Refund operations, borrowed from [`PayrailClient::refunds`].
pub struct RefundsService<'a, T> {
    client: &'a PayrailClient<T>,
}

impl<'a, T: Transport> RefundsService<'a, T> {
    pub(crate) fn new(client: &'a PayrailClient<T>) -> Self {
        Self { client }
    }

    /// Refunds all or part of a payment.
    #[instrument(skip(self, params, idempotency_key), fields(operation = "refunds.create"))]
    pub async fn create(
        &self,
        params: &CreateRefund,
        idempotency_key: Option<&str>,
    ) -> Result<Refund, PayrailError> {
        let request = RequestBuilder::new(REFUNDS_PATH)
            .with_header(IDEMPOTENCY_KEY_HEADER, idempotency_key)
            .with_model(params)?
            .finalize(RestMethod::Post)?;
        self.client.call(request).await
    }

    /// Retrieves a refund.
    #[instrument(skip(self), fields(operation = "refunds.get"))]
    pub async fn get(&self, refund_id: &str) -> Result<Refund, PayrailError> {
        let request = RequestBuilder::new(REFUND_PATH)
            .with_path_param("refund_id", refund_id)
            .finalize(RestMethod::Get)?;
        self.client.call(request).await
    }

    /// Lists refunds, one page at a time.
    #[instrument(skip(self, params), fields(operation = "refunds.list"))]
    pub async fn list(&self, params: &ListRefunds) -> Result<RefundList, PayrailError> {
        let request = params
            .apply(RequestBuilder::new(REFUNDS_PATH))
            .finalize(RestMethod::Get)?;
        self.client.call(request).await
    }
}
