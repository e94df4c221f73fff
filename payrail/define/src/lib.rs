//! Payrail Definition Library
//!
//! This crate provides the generic machinery behind every payrail model and
//! service call: static field descriptor tables, a model mapper that
//! translates and validates payloads against them, and a request builder
//! that produces immutable request descriptors.
//!
//! ## Core Types
//!
//! ### Descriptors
//!
//! - [`ModelSchema`] - The descriptor table of one model
//! - [`FieldDescriptor`] - Local name, wire name, shape and constraints of a field
//! - [`Shape`] - Expected value shape (string, decimal, enum, object, list, map, union)
//! - [`EnumCategory`] - A closed, case-sensitive set of string values
//! - [`Pattern`] - A named regex or descriptive format constraint
//! - [`Registry`] - Validated definitions, built once at startup
//!
//! ### Mapping
//!
//! - [`mapper`] - Wire ↔ local translation and union resolution
//! - [`Model`] - Typed models backed by a descriptor table
//! - [`Nullable`] - Absent / null / present tri-state for nullable fields
//! - [`Amount`] - Exact decimal monetary amounts
//! - [`UnionValue`] / [`UnionChoices`] - Typed unions that pass their chosen
//!   candidate to outbound translation
//!
//! ### Number handling
//!
//! This crate enables serde_json's `arbitrary_precision` feature so that
//! decimal text survives a round trip (`10.50` is sent back as `10.50`, not
//! `10.5`). Cargo unifies features across a build, so any crate linked with
//! this one gets the same `serde_json::Value` number behavior: numbers keep
//! their original text, and `Number::as_f64` parses that text on demand.
//!
//! Numbers that are well-formed JSON but do not fit their declared shape are
//! reported as [`MapError::NumberOutOfRange`]. An integer field accepts only
//! values that fit `i64`. A decimal field accepts only values that
//! [`rust_decimal::Decimal`] can hold exactly (at most 28 fractional digits).
//!
//! ```
//! use payrail_define::{FieldDescriptor, MapError, ModelSchema, Shape, mapper};
//! use serde_json::Value;
//!
//! static CHARGE: ModelSchema = ModelSchema {
//!     name: "Charge",
//!     fields: &[
//!         FieldDescriptor::required("amount", "amount", Shape::Decimal),
//!         FieldDescriptor::optional("created", "created", Shape::Integer),
//!     ],
//! };
//!
//! let wire: Value = serde_json::from_str(r#"{"amount": 10.50}"#).unwrap();
//! let local = mapper::from_wire(&wire, &CHARGE).unwrap();
//! assert_eq!(local["amount"].to_string(), "10.50");
//!
//! let wire: Value =
//!     serde_json::from_str(r#"{"amount": 1, "created": 18446744073709551615}"#).unwrap();
//! assert!(matches!(
//!     mapper::from_wire(&wire, &CHARGE),
//!     Err(MapError::NumberOutOfRange { expected: "integer", .. })
//! ));
//! ```
//!
//! ### Requests
//!
//! - [`RequestBuilder`] - Type-state builder with terminal `finalize`
//! - [`RequestDescriptor`] - The finished, read-only request
//! - [`RestMethod`] - HTTP methods
//!
//! ## Examples
//!
//! Declare a model, decode a payload and build a follow-up request:
//!
//! ```
//! use payrail_define::prelude::*;
//! use serde_json::json;
//!
//! static WIDGET: ModelSchema = ModelSchema {
//!     name: "Widget",
//!     fields: &[
//!         FieldDescriptor::required("id_", "id", Shape::String),
//!         FieldDescriptor::optional("name", "name", Shape::String),
//!     ],
//! };
//!
//! let local = mapper::from_wire(&json!({"id": "widget_123", "extra": 1}), &WIDGET).unwrap();
//! let id = local["id_"].as_str().unwrap();
//!
//! let request = RequestBuilder::new("/v1/widgets/{id}")
//!     .with_path_param("id", id)
//!     .finalize(RestMethod::Get)
//!     .unwrap();
//!
//! assert_eq!(request.path(), "/v1/widgets/widget_123");
//! ```
//!
//! ## API Definitions
//!
//! The payments API models live in the separate `payrail-definitions` crate,
//! and the HTTP client in `payrail`.

pub mod error;
pub mod mapper;
pub mod method;
pub mod model;
pub mod prelude;
pub mod registry;
pub mod request;
pub mod schema;

// Re-export main types at crate root
pub use error::{BuildError, DefinitionError, MapError};
pub use mapper::{Direction, Resolved, UnionChoices};
pub use method::RestMethod;
pub use model::{Amount, Model, Nullable, UnionSlot, UnionValue};
pub use registry::{Registry, RegistryBuilder};
pub use request::{ParamValue, PathTemplate, RequestBuilder, RequestDescriptor};
pub use schema::{
    EnumCategory, FieldDescriptor, ModelSchema, Pattern, PatternKind, Presence, Shape, Variant,
};
