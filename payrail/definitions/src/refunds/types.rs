//! Refund models.

use std::collections::BTreeMap;

use payrail_define::{Amount, Nullable, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::enums::RefundStatus;

/// A refund of all or part of a payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refund {
    /// Refund identifier (`id` on the wire).
    pub id_: String,
    /// The refunded payment (`payment` on the wire).
    pub payment_id: String,
    pub amount: Amount,
    pub currency: String,
    pub status: RefundStatus,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub reason: Nullable<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
    /// Unix timestamp of creation.
    pub created: i64,
}

/// Request body for creating a refund.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CreateRefund {
    pub payment_id: String,
    /// Partial amount; the full remaining amount when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<BTreeMap<String, String>>,
}

impl CreateRefund {
    /// Creates a full refund of a payment.
    pub fn full(payment_id: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
            ..Default::default()
        }
    }
}

/// One page of refunds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefundList {
    pub data: Vec<Refund>,
    pub has_more: bool,
}

/// Query parameters for listing refunds.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ListRefunds {
    pub limit: Option<u32>,
    pub starting_after: Option<String>,
    /// Only refunds of this payment (`payment` in the query).
    pub payment_id: Option<String>,
}

impl ListRefunds {
    /// Adds the set parameters to a request.
    pub fn apply<B>(&self, request: RequestBuilder<B>) -> RequestBuilder<B> {
        request
            .with_query_param("limit", self.limit)
            .with_query_param("starting_after", self.starting_after.as_deref())
            .with_query_param("payment", self.payment_id.as_deref())
    }
}
