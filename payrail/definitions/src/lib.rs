//! Payrail API Definitions
//!
//! This crate contains the payments API models built on the primitives from
//! `payrail-define`. Each resource is organized in its own module, holding
//! its descriptor tables, endpoint paths and typed models.
//!
//! ## Available Resources
//!
//! - [`payments`] - Payments, captures and cancellations
//! - [`refunds`] - Refunds of payments
//! - [`customers`] - Customers and their addresses
//!
//! ## Examples
//!
//! ```
//! use payrail_define::Model;
//! use payrail_definitions::payments::Payment;
//! use payrail_definitions::enums::PaymentStatus;
//! use serde_json::json;
//!
//! let payment = Payment::from_wire(&json!({
//!     "id": "pay_123",
//!     "amount": 25.00,
//!     "currency": "USD",
//!     "status": "COMPLETED",
//!     "customer": "cus_9",
//!     "created": 1700000000
//! }))
//! .unwrap();
//!
//! assert_eq!(payment.id_, "pay_123");
//! assert_eq!(payment.status, PaymentStatus::Completed);
//! ```

/// Implements [`Model`](payrail_define::Model) for typed structs.
///
/// Fields listed in brackets hold typed unions; their chosen variant is
/// passed to outbound translation.
macro_rules! impl_model {
    ($($ty:ty => $schema:path $([$($union:ident),+ $(,)?])?),* $(,)?) => {
        $(
            impl payrail_define::Model for $ty {
                fn schema() -> &'static payrail_define::ModelSchema {
                    &$schema
                }

                $(
                    fn union_choices(&self) -> payrail_define::UnionChoices {
                        let mut choices = payrail_define::UnionChoices::new();
                        $(choices.record(stringify!($union), &self.$union);)+
                        choices
                    }
                )?
            }
        )*
    };
}

/// Deserializes a union by trying each variant in declaration order.
macro_rules! ordered_union {
    ($name:ident { $($variant:ident($ty:ty)),+ $(,)? }) => {
        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                $(
                    if let Ok(inner) = <$ty as serde::Deserialize>::deserialize(&value) {
                        return Ok(Self::$variant(inner));
                    }
                )+
                Err(serde::de::Error::custom(concat!(
                    "no variant of ",
                    stringify!($name),
                    " matched"
                )))
            }
        }
    };
}

pub mod customers;
pub mod enums;
pub mod patterns;
pub mod payments;
pub mod prelude;
pub mod refunds;

use payrail_define::{DefinitionError, Registry};

impl_model!(
    customers::Address => customers::ADDRESS,
    customers::Customer => customers::CUSTOMER,
    customers::CreateCustomer => customers::CREATE_CUSTOMER,
    customers::UpdateCustomer => customers::UPDATE_CUSTOMER,
    customers::Deleted => customers::DELETED,
    customers::CustomerList => customers::CUSTOMER_LIST,
    payments::PaymentMethodDetails => payments::PAYMENT_METHOD_DETAILS,
    payments::Payment => payments::PAYMENT [customer, payment_method],
    payments::CreatePayment => payments::CREATE_PAYMENT [payment_method],
    payments::UpdatePayment => payments::UPDATE_PAYMENT,
    payments::CapturePayment => payments::CAPTURE_PAYMENT,
    payments::PaymentList => payments::PAYMENT_LIST,
    refunds::Refund => refunds::REFUND,
    refunds::CreateRefund => refunds::CREATE_REFUND,
    refunds::RefundList => refunds::REFUND_LIST,
);

/// Builds the registry of every payments API definition.
///
/// ## Errors
///
/// Returns an error if a descriptor table is inconsistent.
///
/// ## Examples
///
/// ```
/// let registry = payrail_definitions::registry().unwrap();
/// assert!(registry.model("Payment").is_some());
/// assert!(registry.enum_category("RefundStatus").is_some());
/// ```
pub fn registry() -> Result<Registry, DefinitionError> {
    Registry::builder()
        .model(&payments::PAYMENT_LIST)
        .model(&payments::CREATE_PAYMENT)
        .model(&payments::UPDATE_PAYMENT)
        .model(&payments::CAPTURE_PAYMENT)
        .model(&refunds::REFUND_LIST)
        .model(&refunds::CREATE_REFUND)
        .model(&customers::CUSTOMER_LIST)
        .model(&customers::CREATE_CUSTOMER)
        .model(&customers::UPDATE_CUSTOMER)
        .model(&customers::DELETED)
        .build()
}
