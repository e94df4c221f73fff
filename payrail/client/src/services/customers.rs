use payrail_define::{RequestBuilder, RestMethod};
use payrail_definitions::customers::{
    CUSTOMER_PATH, CUSTOMERS_PATH, CreateCustomer, Customer, CustomerList, Deleted, ListCustomers,
    UpdateCustomer,
};
use tracing::instrument;

use crate::client::PayrailClient;
use crate::error::PayrailError;
use crate::transport::Transport;

/// Customer operations, borrowed from [`PayrailClient::customers`].
pub struct CustomersService<'a, T> {
    client: &'a PayrailClient<T>,
}

impl<'a, T: Transport> CustomersService<'a, T> {
    pub(crate) fn new(client: &'a PayrailClient<T>) -> Self {
        Self { client }
    }

    #[instrument(skip(self, params), fields(operation = "customers.create"))]
    pub async fn create(&self, params: &CreateCustomer) -> Result<Customer, PayrailError> {
        let request = RequestBuilder::new(CUSTOMERS_PATH)
            .with_model(params)?
            .finalize(RestMethod::Post)?;
        self.client.call(request).await
    }

    #[instrument(skip(self), fields(operation = "customers.get"))]
    pub async fn get(&self, customer_id: &str) -> Result<Customer, PayrailError> {
        let request = RequestBuilder::new(CUSTOMER_PATH)
            .with_path_param("customer_id", customer_id)
            .finalize(RestMethod::Get)?;
        self.client.call(request).await
    }

    /// Updates a customer; `Nullable::Null` fields are cleared.
    #[instrument(skip(self, params), fields(operation = "customers.update"))]
    pub async fn update(
        &self,
        customer_id: &str,
        params: &UpdateCustomer,
    ) -> Result<Customer, PayrailError> {
        let request = RequestBuilder::new(CUSTOMER_PATH)
            .with_path_param("customer_id", customer_id)
            .with_model(params)?
            .finalize(RestMethod::Post)?;
        self.client.call(request).await
    }

    #[instrument(skip(self), fields(operation = "customers.delete"))]
    pub async fn delete(&self, customer_id: &str) -> Result<Deleted, PayrailError> {
        let request = RequestBuilder::new(CUSTOMER_PATH)
            .with_path_param("customer_id", customer_id)
            .finalize(RestMethod::Delete)?;
        self.client.call(request).await
    }

    /// Lists customers, one page at a time.
    #[instrument(skip(self, params), fields(operation = "customers.list"))]
    pub async fn list(&self, params: &ListCustomers) -> Result<CustomerList, PayrailError> {
        let request = params
            .apply(RequestBuilder::new(CUSTOMERS_PATH))
            .finalize(RestMethod::Get)?;
        self.client.call(request).await
    }
}
