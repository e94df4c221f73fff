//! Refunds API definition.
//!
//! ## Endpoints
//!
//! - `CreateRefund` - POST /v1/refunds
//! - `GetRefund` - GET /v1/refunds/{refund_id}
//! - `ListRefunds` - GET /v1/refunds

mod types;

pub use types::{CreateRefund, ListRefunds, Refund, RefundList};

use payrail_define::{FieldDescriptor, ModelSchema, Shape};

use crate::enums::REFUND_STATUS;
use crate::patterns::CURRENCY_CODE;

/// Collection path.
pub const REFUNDS_PATH: &str = "/v1/refunds";
/// Single refund path.
pub const REFUND_PATH: &str = "/v1/refunds/{refund_id}";

pub static REFUND: ModelSchema = ModelSchema {
    name: "Refund",
    fields: &[
        FieldDescriptor::required("id_", "id", Shape::String),
        FieldDescriptor::required("payment_id", "payment", Shape::String),
        FieldDescriptor::required("amount", "amount", Shape::Decimal),
        FieldDescriptor::required("currency", "currency", Shape::String)
            .with_pattern(&CURRENCY_CODE),
        FieldDescriptor::required("status", "status", Shape::Enum(&REFUND_STATUS)),
        FieldDescriptor::optional("reason", "reason", Shape::String).nullable(),
        FieldDescriptor::optional("metadata", "metadata", Shape::Map(&Shape::String)),
        FieldDescriptor::required("created", "created", Shape::Integer),
    ],
};

pub static CREATE_REFUND: ModelSchema = ModelSchema {
    name: "CreateRefund",
    fields: &[
        FieldDescriptor::required("payment_id", "payment", Shape::String),
        FieldDescriptor::optional("amount", "amount", Shape::Decimal),
        FieldDescriptor::optional("reason", "reason", Shape::String),
        FieldDescriptor::optional("metadata", "metadata", Shape::Map(&Shape::String)),
    ],
};

static REFUND_ITEM: Shape = Shape::Object(&REFUND);

pub static REFUND_LIST: ModelSchema = ModelSchema {
    name: "RefundList",
    fields: &[
        FieldDescriptor::required("data", "data", Shape::List(&REFUND_ITEM)),
        FieldDescriptor::required("has_more", "has_more", Shape::Boolean),
    ],
};
