//! Request building.
//!
//! A [`RequestBuilder`] collects path parameters, query parameters, headers
//! and at most one body, then [`finalize`](RequestBuilder::finalize)s into an
//! immutable [`RequestDescriptor`]. Nothing here performs network access.
//!
//! ## Components
//!
//! - [`PathTemplate`] - `{name}` placeholder parsing and substitution
//! - [`ParamValue`] - typed values for query parameters and headers
//! - [`RequestBuilder`] - type-state builder (`NoBody` / `WithBody`)
//! - [`RequestDescriptor`] - the finished, read-only request

mod builder;
mod descriptor;
mod param;
mod template;

pub use builder::{RequestBuilder, body_state};
pub use descriptor::RequestDescriptor;
pub use param::ParamValue;
pub use template::PathTemplate;
