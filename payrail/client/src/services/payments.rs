use payrail_define::{RequestBuilder, RestMethod};
use payrail_definitions::payments::{
    CapturePayment, CreatePayment, ListPayments, PAYMENT_CANCEL_PATH, PAYMENT_CAPTURE_PATH,
    PAYMENT_PATH, PAYMENTS_PATH, Payment, PaymentList, UpdatePayment,
};
use tracing::instrument;

use super::IDEMPOTENCY_KEY_HEADER;
use crate::client::PayrailClient;
use crate::error::PayrailError;
use crate::transport::Transport;

/// Payment operations, borrowed from [`PayrailClient::payments`].
pub struct PaymentsService<'a, T> {
    client: &'a PayrailClient<T>,
}

impl<'a, T: Transport> PaymentsService<'a, T> {
    pub(crate) fn new(client: &'a PayrailClient<T>) -> Self {
        Self { client }
    }

    /// Creates a payment.
    ///
    /// Resubmitting with the same `idempotency_key` returns the original
    /// payment instead of creating a second one.
    #[instrument(skip(self, params, idempotency_key), fields(operation = "payments.create"))]
    pub async fn create(
        &self,
        params: &CreatePayment,
        idempotency_key: Option<&str>,
    ) -> Result<Payment, PayrailError> {
        let request = RequestBuilder::new(PAYMENTS_PATH)
            .with_header(IDEMPOTENCY_KEY_HEADER, idempotency_key)
            .with_model(params)?
            .finalize(RestMethod::Post)?;
        self.client.call(request).await
    }

    /// Retrieves a payment.
    #[instrument(skip(self), fields(operation = "payments.get"))]
    pub async fn get(&self, payment_id: &str) -> Result<Payment, PayrailError> {
        let request = RequestBuilder::new(PAYMENT_PATH)
            .with_path_param("payment_id", payment_id)
            .finalize(RestMethod::Get)?;
        self.client.call(request).await
    }

    /// Updates the mutable fields of a payment.
    #[instrument(skip(self, params), fields(operation = "payments.update"))]
    pub async fn update(
        &self,
        payment_id: &str,
        params: &UpdatePayment,
    ) -> Result<Payment, PayrailError> {
        let request = RequestBuilder::new(PAYMENT_PATH)
            .with_path_param("payment_id", payment_id)
            .with_model(params)?
            .finalize(RestMethod::Post)?;
        self.client.call(request).await
    }

    /// Lists payments, one page at a time.
    #[instrument(skip(self, params), fields(operation = "payments.list"))]
    pub async fn list(&self, params: &ListPayments) -> Result<PaymentList, PayrailError> {
        let request = params
            .apply(RequestBuilder::new(PAYMENTS_PATH))
            .finalize(RestMethod::Get)?;
        self.client.call(request).await
    }

    /// Captures an authorized payment.
    #[instrument(skip(self, params), fields(operation = "payments.capture"))]
    pub async fn capture(
        &self,
        payment_id: &str,
        params: &CapturePayment,
    ) -> Result<Payment, PayrailError> {
        let request = RequestBuilder::new(PAYMENT_CAPTURE_PATH)
            .with_path_param("payment_id", payment_id)
            .with_model(params)?
            .finalize(RestMethod::Post)?;
        self.client.call(request).await
    }

    /// Cancels a payment that has not completed.
    #[instrument(skip(self), fields(operation = "payments.cancel"))]
    pub async fn cancel(&self, payment_id: &str) -> Result<Payment, PayrailError> {
        let request = RequestBuilder::new(PAYMENT_CANCEL_PATH)
            .with_path_param("payment_id", payment_id)
            .finalize(RestMethod::Post)?;
        self.client.call(request).await
    }
}
