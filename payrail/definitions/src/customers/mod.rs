//! Customers API definition.
//!
//! ## Endpoints
//!
//! - `CreateCustomer` - POST /v1/customers
//! - `GetCustomer` - GET /v1/customers/{customer_id}
//! - `UpdateCustomer` - POST /v1/customers/{customer_id}
//! - `DeleteCustomer` - DELETE /v1/customers/{customer_id}
//! - `ListCustomers` - GET /v1/customers

mod types;

pub use types::{
    Address, CreateCustomer, Customer, CustomerList, Deleted, ListCustomers, UpdateCustomer,
};

use payrail_define::{FieldDescriptor, ModelSchema, Shape};

use crate::patterns::{COUNTRY_CODE, PHONE_NUMBER};

/// Collection path.
pub const CUSTOMERS_PATH: &str = "/v1/customers";
/// Single customer path.
pub const CUSTOMER_PATH: &str = "/v1/customers/{customer_id}";

pub static ADDRESS: ModelSchema = ModelSchema {
    name: "Address",
    fields: &[
        FieldDescriptor::required("line1", "line1", Shape::String),
        FieldDescriptor::optional("line2", "line2", Shape::String),
        FieldDescriptor::optional("city", "city", Shape::String),
        FieldDescriptor::optional("state", "state", Shape::String),
        FieldDescriptor::optional("postal_code", "postal_code", Shape::String),
        FieldDescriptor::required("country", "country", Shape::String).with_pattern(&COUNTRY_CODE),
    ],
};

pub static CUSTOMER: ModelSchema = ModelSchema {
    name: "Customer",
    fields: &[
        FieldDescriptor::required("id_", "id", Shape::String),
        FieldDescriptor::optional("email", "email", Shape::String),
        FieldDescriptor::optional("name", "name", Shape::String),
        FieldDescriptor::optional("phone", "phone", Shape::String).with_pattern(&PHONE_NUMBER),
        FieldDescriptor::optional("description", "description", Shape::String).nullable(),
        FieldDescriptor::optional("address", "address", Shape::Object(&ADDRESS)).nullable(),
        FieldDescriptor::optional("metadata", "metadata", Shape::Map(&Shape::String)),
        FieldDescriptor::required("created", "created", Shape::Integer),
    ],
};

pub static CREATE_CUSTOMER: ModelSchema = ModelSchema {
    name: "CreateCustomer",
    fields: &[
        FieldDescriptor::optional("email", "email", Shape::String),
        FieldDescriptor::optional("name", "name", Shape::String),
        FieldDescriptor::optional("phone", "phone", Shape::String).with_pattern(&PHONE_NUMBER),
        FieldDescriptor::optional("description", "description", Shape::String),
        FieldDescriptor::optional("address", "address", Shape::Object(&ADDRESS)),
        FieldDescriptor::optional("metadata", "metadata", Shape::Map(&Shape::String)),
    ],
};

pub static UPDATE_CUSTOMER: ModelSchema = ModelSchema {
    name: "UpdateCustomer",
    fields: &[
        FieldDescriptor::optional("email", "email", Shape::String),
        FieldDescriptor::optional("name", "name", Shape::String),
        FieldDescriptor::optional("phone", "phone", Shape::String).with_pattern(&PHONE_NUMBER),
        FieldDescriptor::optional("description", "description", Shape::String).nullable(),
        FieldDescriptor::optional("address", "address", Shape::Object(&ADDRESS)).nullable(),
        FieldDescriptor::optional("metadata", "metadata", Shape::Map(&Shape::String)),
    ],
};

pub static DELETED: ModelSchema = ModelSchema {
    name: "Deleted",
    fields: &[
        FieldDescriptor::required("id_", "id", Shape::String),
        FieldDescriptor::required("deleted", "deleted", Shape::Boolean),
    ],
};

static CUSTOMER_ITEM: Shape = Shape::Object(&CUSTOMER);

pub static CUSTOMER_LIST: ModelSchema = ModelSchema {
    name: "CustomerList",
    fields: &[
        FieldDescriptor::required("data", "data", Shape::List(&CUSTOMER_ITEM)),
        FieldDescriptor::required("has_more", "has_more", Shape::Boolean),
    ],
};
