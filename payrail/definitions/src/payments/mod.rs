//! Payments API definition.
//!
//! ## Endpoints
//!
//! - `CreatePayment` - POST /v1/payments
//! - `GetPayment` - GET /v1/payments/{payment_id}
//! - `UpdatePayment` - POST /v1/payments/{payment_id}
//! - `ListPayments` - GET /v1/payments
//! - `CapturePayment` - POST /v1/payments/{payment_id}/capture
//! - `CancelPayment` - POST /v1/payments/{payment_id}/cancel
//!
//! The `customer` and `payment_method` fields are unions: either an id
//! string or the expanded object, tried in that order.

mod types;

pub use types::{
    CapturePayment, CreatePayment, CustomerRef, ListPayments, Payment, PaymentList,
    PaymentMethodDetails, PaymentMethodRef, UpdatePayment,
};

use payrail_define::{FieldDescriptor, ModelSchema, Shape, Variant};

use crate::customers::CUSTOMER;
use crate::enums::{CAPTURE_METHOD, PAYMENT_METHOD_TYPE, PAYMENT_STATUS};
use crate::patterns::{CARD_LAST4, CURRENCY_CODE, STATEMENT_DESCRIPTOR};

/// Collection path.
pub const PAYMENTS_PATH: &str = "/v1/payments";
/// Single payment path.
pub const PAYMENT_PATH: &str = "/v1/payments/{payment_id}";
/// Capture action path.
pub const PAYMENT_CAPTURE_PATH: &str = "/v1/payments/{payment_id}/capture";
/// Cancel action path.
pub const PAYMENT_CANCEL_PATH: &str = "/v1/payments/{payment_id}/cancel";

pub static PAYMENT_METHOD_DETAILS: ModelSchema = ModelSchema {
    name: "PaymentMethodDetails",
    fields: &[
        FieldDescriptor::required("type_", "type", Shape::Enum(&PAYMENT_METHOD_TYPE)),
        FieldDescriptor::optional("brand", "brand", Shape::String),
        FieldDescriptor::optional("last4", "last4", Shape::String).with_pattern(&CARD_LAST4),
        FieldDescriptor::optional("bank_code", "bank_code", Shape::String),
        FieldDescriptor::optional("provider", "provider", Shape::String),
    ],
};

pub static CUSTOMER_REF: [Variant; 2] = [
    Variant::new("customer_id", Shape::String),
    Variant::new("customer", Shape::Object(&CUSTOMER)),
];

pub static PAYMENT_METHOD_REF: [Variant; 2] = [
    Variant::new("payment_method_id", Shape::String),
    Variant::new("payment_method", Shape::Object(&PAYMENT_METHOD_DETAILS)),
];

pub static PAYMENT: ModelSchema = ModelSchema {
    name: "Payment",
    fields: &[
        FieldDescriptor::required("id_", "id", Shape::String),
        FieldDescriptor::required("amount", "amount", Shape::Decimal),
        FieldDescriptor::required("currency", "currency", Shape::String)
            .with_pattern(&CURRENCY_CODE),
        FieldDescriptor::required("status", "status", Shape::Enum(&PAYMENT_STATUS)),
        FieldDescriptor::optional("capture_method", "capture_method", Shape::Enum(&CAPTURE_METHOD)),
        FieldDescriptor::optional("amount_captured", "amount_captured", Shape::Decimal),
        FieldDescriptor::optional("amount_refunded", "amount_refunded", Shape::Decimal),
        FieldDescriptor::optional("customer", "customer", Shape::Union(&CUSTOMER_REF)).nullable(),
        FieldDescriptor::optional(
            "payment_method",
            "payment_method",
            Shape::Union(&PAYMENT_METHOD_REF),
        ),
        FieldDescriptor::optional("description", "description", Shape::String).nullable(),
        FieldDescriptor::optional("statement_descriptor", "statement_descriptor", Shape::String)
            .with_pattern(&STATEMENT_DESCRIPTOR),
        FieldDescriptor::optional("failure_reason", "failure_reason", Shape::String).nullable(),
        FieldDescriptor::optional("metadata", "metadata", Shape::Map(&Shape::String)),
        FieldDescriptor::required("created", "created", Shape::Integer),
    ],
};

pub static CREATE_PAYMENT: ModelSchema = ModelSchema {
    name: "CreatePayment",
    fields: &[
        FieldDescriptor::required("amount", "amount", Shape::Decimal),
        FieldDescriptor::required("currency", "currency", Shape::String)
            .with_pattern(&CURRENCY_CODE),
        FieldDescriptor::optional("customer_id", "customer", Shape::String),
        FieldDescriptor::optional(
            "payment_method",
            "payment_method",
            Shape::Union(&PAYMENT_METHOD_REF),
        ),
        FieldDescriptor::optional("capture_method", "capture_method", Shape::Enum(&CAPTURE_METHOD)),
        FieldDescriptor::optional("description", "description", Shape::String),
        FieldDescriptor::optional("statement_descriptor", "statement_descriptor", Shape::String)
            .with_pattern(&STATEMENT_DESCRIPTOR),
        FieldDescriptor::optional("metadata", "metadata", Shape::Map(&Shape::String)),
    ],
};

pub static UPDATE_PAYMENT: ModelSchema = ModelSchema {
    name: "UpdatePayment",
    fields: &[
        FieldDescriptor::optional("description", "description", Shape::String).nullable(),
        FieldDescriptor::optional("statement_descriptor", "statement_descriptor", Shape::String)
            .with_pattern(&STATEMENT_DESCRIPTOR),
        FieldDescriptor::optional("metadata", "metadata", Shape::Map(&Shape::String)),
    ],
};

pub static CAPTURE_PAYMENT: ModelSchema = ModelSchema {
    name: "CapturePayment",
    fields: &[
        FieldDescriptor::optional("amount", "amount", Shape::Decimal),
        FieldDescriptor::optional("statement_descriptor", "statement_descriptor", Shape::String)
            .with_pattern(&STATEMENT_DESCRIPTOR),
    ],
};

static PAYMENT_ITEM: Shape = Shape::Object(&PAYMENT);

pub static PAYMENT_LIST: ModelSchema = ModelSchema {
    name: "PaymentList",
    fields: &[
        FieldDescriptor::required("data", "data", Shape::List(&PAYMENT_ITEM)),
        FieldDescriptor::required("has_more", "has_more", Shape::Boolean),
    ],
};
