//! Closed value sets used by the payments API.
//!
//! Each Rust enum mirrors one [`EnumCategory`]; the serde names of its
//! variants are exactly the category's values.

use payrail_define::{EnumCategory, ParamValue};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

pub static PAYMENT_STATUS: EnumCategory = EnumCategory {
    name: "PaymentStatus",
    values: &[
        "PENDING",
        "IN_PROGRESS",
        "COMPLETED",
        "FAILED",
        "CANCELED",
        "EXPIRED",
    ],
};

pub static REFUND_STATUS: EnumCategory = EnumCategory {
    name: "RefundStatus",
    values: &["PENDING", "COMPLETED", "REJECTED", "ERROR"],
};

pub static CAPTURE_METHOD: EnumCategory = EnumCategory {
    name: "CaptureMethod",
    values: &["automatic", "manual"],
};

pub static PAYMENT_METHOD_TYPE: EnumCategory = EnumCategory {
    name: "PaymentMethodType",
    values: &["card", "bank_transfer", "ewallet"],
};

/// Lifecycle state of a payment.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Created, awaiting the payer or capture.
    Pending,
    /// Being processed by the network.
    InProgress,
    /// Funds captured.
    Completed,
    /// Declined or errored.
    Failed,
    /// Canceled before completion.
    Canceled,
    /// Not completed in time.
    Expired,
}

impl PaymentStatus {
    /// Returns the descriptor category for this enum.
    pub fn category() -> &'static EnumCategory {
        &PAYMENT_STATUS
    }

    /// Returns `true` if the payment can no longer change state.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Completed | Self::Failed | Self::Canceled | Self::Expired
        )
    }
}

/// Lifecycle state of a refund.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RefundStatus {
    Pending,
    Completed,
    Rejected,
    Error,
}

impl RefundStatus {
    /// Returns the descriptor category for this enum.
    pub fn category() -> &'static EnumCategory {
        &REFUND_STATUS
    }
}

/// When funds are captured after authorization.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CaptureMethod {
    /// Captured as soon as the payment is authorized.
    #[default]
    Automatic,
    /// Held until an explicit capture call.
    Manual,
}

impl CaptureMethod {
    /// Returns the descriptor category for this enum.
    pub fn category() -> &'static EnumCategory {
        &CAPTURE_METHOD
    }
}

/// Kind of payment instrument.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PaymentMethodType {
    Card,
    BankTransfer,
    Ewallet,
}

impl PaymentMethodType {
    /// Returns the descriptor category for this enum.
    pub fn category() -> &'static EnumCategory {
        &PAYMENT_METHOD_TYPE
    }
}

macro_rules! impl_param_value_via_as_ref {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamValue for $ty {
                fn into_param(self) -> Option<String> {
                    Some(self.as_ref().to_string())
                }
            }
        )*
    };
}

impl_param_value_via_as_ref!(PaymentStatus, RefundStatus, CaptureMethod, PaymentMethodType);
