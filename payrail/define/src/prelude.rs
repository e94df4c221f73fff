//! Convenient re-exports for declaring models and building requests.
//!
//! ## Examples
//!
//! ```
//! use payrail_define::prelude::*;
//!
//! static COLOR: EnumCategory = EnumCategory {
//!     name: "Color",
//!     values: &["RED", "GREEN"],
//! };
//!
//! static PAINT: ModelSchema = ModelSchema {
//!     name: "Paint",
//!     fields: &[FieldDescriptor::required("color", "color", Shape::Enum(&COLOR))],
//! };
//!
//! let registry = Registry::builder().model(&PAINT).build().unwrap();
//! assert!(registry.enum_category("Color").is_some());
//! ```

pub use crate::error::{BuildError, DefinitionError, MapError};
pub use crate::mapper::{self, UnionChoices};
pub use crate::method::RestMethod;
pub use crate::model::{Amount, Model, Nullable, UnionSlot, UnionValue};
pub use crate::registry::Registry;
pub use crate::request::{ParamValue, RequestBuilder, RequestDescriptor};
pub use crate::schema::{EnumCategory, FieldDescriptor, ModelSchema, Pattern, Shape, Variant};
