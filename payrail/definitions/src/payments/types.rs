//! Payment models.

use std::collections::BTreeMap;

use payrail_define::{Amount, Nullable, RequestBuilder, UnionValue};
use serde::{Deserialize, Serialize};

use crate::customers::Customer;
use crate::enums::{CaptureMethod, PaymentMethodType, PaymentStatus};

/// Details of a payment instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentMethodDetails {
    /// Instrument kind (`type` on the wire).
    pub type_: PaymentMethodType,
    /// Card network, e.g. `visa`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_code: Option<String>,
    /// E-wallet provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
}

impl PaymentMethodDetails {
    /// Creates details of the given kind with no other fields set.
    pub fn new(type_: PaymentMethodType) -> Self {
        Self {
            type_,
            brand: None,
            last4: None,
            bank_code: None,
            provider: None,
        }
    }
}

/// A customer, either by id or expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CustomerRef {
    Id(String),
    Customer(Box<Customer>),
}

ordered_union!(CustomerRef {
    Id(String),
    Customer(Box<Customer>),
});

impl UnionValue for CustomerRef {
    fn variant_index(&self) -> usize {
        match self {
            Self::Id(_) => 0,
            Self::Customer(_) => 1,
        }
    }
}

impl CustomerRef {
    /// Returns the customer id in either form.
    pub fn id(&self) -> &str {
        match self {
            Self::Id(id) => id,
            Self::Customer(customer) => &customer.id_,
        }
    }
}

/// A payment method, either by id or as inline details.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PaymentMethodRef {
    Id(String),
    Details(PaymentMethodDetails),
}

ordered_union!(PaymentMethodRef {
    Id(String),
    Details(PaymentMethodDetails),
});

impl UnionValue for PaymentMethodRef {
    fn variant_index(&self) -> usize {
        match self {
            Self::Id(_) => 0,
            Self::Details(_) => 1,
        }
    }
}

/// A payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Payment identifier (`id` on the wire).
    pub id_: String,
    pub amount: Amount,
    /// ISO 4217 currency code.
    pub currency: String,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_captured: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount_refunded: Option<Amount>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub customer: Nullable<CustomerRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethodRef>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub description: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    /// Set when `status` is `FAILED`.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub failure_reason: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    /// Unix timestamp of creation.
    pub created: i64,
}

/// Request body for creating a payment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreatePayment {
    pub amount: Amount,
    pub currency: String,
    /// Existing customer to attach (`customer` on the wire).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethodRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capture_method: Option<CaptureMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl CreatePayment {
    /// Creates a request for an amount in a currency.
    pub fn new(amount: impl Into<Amount>, currency: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            currency: currency.into(),
            ..Default::default()
        }
    }
}

/// Request body for updating a payment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UpdatePayment {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub description: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

/// Request body for capturing a payment.
///
/// Leaving `amount` unset captures the full authorized amount.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CapturePayment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub statement_descriptor: Option<String>,
}

/// One page of payments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentList {
    pub data: Vec<Payment>,
    /// Whether more payments exist after this page.
    pub has_more: bool,
}

/// Query parameters for listing payments.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListPayments {
    /// Page size.
    pub limit: Option<u32>,
    /// Cursor: the last payment id of the previous page.
    pub starting_after: Option<String>,
    /// Only payments for this customer (`customer` in the query).
    pub customer_id: Option<String>,
    pub status: Option<PaymentStatus>,
}

impl ListPayments {
    /// Adds the set parameters to a request.
    pub fn apply<B>(&self, request: RequestBuilder<B>) -> RequestBuilder<B> {
        request
            .with_query_param("limit", self.limit)
            .with_query_param("starting_after", self.starting_after.as_deref())
            .with_query_param("customer", self.customer_id.as_deref())
            .with_query_param("status", self.status)
    }
}
