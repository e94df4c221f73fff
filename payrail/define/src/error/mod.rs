//! Layered error types for descriptor definitions, model mapping and
//! request building.
//!
//! All of these are raised synchronously, before any network access:
//! - [`MapError`] - A payload failed translation or validation against its schema
//! - [`BuildError`] - A request descriptor could not be finalized
//! - [`DefinitionError`] - Descriptor tables are internally inconsistent

mod build_error;
mod definition_error;
mod map_error;

pub use build_error::BuildError;
pub use definition_error::DefinitionError;
pub use map_error::MapError;
pub(crate) use map_error::json_kind;
