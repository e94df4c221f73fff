//! Typed models on top of descriptor tables.
//!
//! A [`Model`] is a plain serde struct whose field names are the local names
//! of its [`ModelSchema`]. Conversions always pass through the
//! [mapper](crate::mapper), so renaming, validation and union resolution
//! happen in one place and serde only sees local-keyed objects.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};

use crate::error::MapError;
use crate::mapper::{self, UnionChoices, parse_decimal};
use crate::schema::ModelSchema;

/// A typed model backed by a static descriptor table.
///
/// ## Examples
///
/// ```
/// use payrail_define::{FieldDescriptor, Model, ModelSchema, Shape};
/// use serde::{Deserialize, Serialize};
/// use serde_json::json;
///
/// static TOKEN: ModelSchema = ModelSchema {
///     name: "Token",
///     fields: &[
///         FieldDescriptor::required("id_", "id", Shape::String),
///         FieldDescriptor::optional("label", "label", Shape::String),
///     ],
/// };
///
/// #[derive(Debug, Serialize, Deserialize)]
/// struct Token {
///     id_: String,
///     #[serde(default, skip_serializing_if = "Option::is_none")]
///     label: Option<String>,
/// }
///
/// impl Model for Token {
///     fn schema() -> &'static ModelSchema {
///         &TOKEN
///     }
/// }
///
/// let token = Token::from_wire(&json!({"id": "tok_1"})).unwrap();
/// assert_eq!(token.id_, "tok_1");
/// assert_eq!(token.to_wire().unwrap(), json!({"id": "tok_1"}));
/// ```
pub trait Model: Serialize + DeserializeOwned {
    /// The descriptor table for this model.
    fn schema() -> &'static ModelSchema;

    /// Union candidates already chosen by this value's typed union fields.
    ///
    /// [`to_wire`](Model::to_wire) translates each recorded path through its
    /// chosen candidate instead of resolving it in declaration order.
    fn union_choices(&self) -> UnionChoices {
        UnionChoices::new()
    }

    /// Decodes and validates a wire payload.
    ///
    /// ## Errors
    ///
    /// Returns any [`MapError`] raised by the mapper, or
    /// [`MapError::Serde`] if the typed struct disagrees with its table.
    fn from_wire(raw: &Value) -> Result<Self, MapError> {
        let schema = Self::schema();
        let local = mapper::from_wire(raw, schema)?;
        serde_json::from_value(Value::Object(local)).map_err(|e| MapError::serde(schema.name, e))
    }

    /// Validates the model and encodes it as a wire payload.
    ///
    /// ## Errors
    ///
    /// Returns any [`MapError`] raised by the mapper.
    fn to_wire(&self) -> Result<Value, MapError> {
        let schema = Self::schema();
        match serde_json::to_value(self).map_err(|e| MapError::serde(schema.name, e))? {
            Value::Object(local) => mapper::to_wire_with(&local, schema, &self.union_choices()),
            other => Err(MapError::type_mismatch(schema.name, "object", &other)),
        }
    }
}

/// A typed union: an enum whose variants follow the candidate order of a
/// [`Shape::Union`](crate::Shape::Union).
pub trait UnionValue {
    /// Position of the held variant in the union's declaration order.
    fn variant_index(&self) -> usize;
}

/// A model field that may hold a typed union.
pub trait UnionSlot {
    fn chosen_variant(&self) -> Option<usize>;
}

impl<T: UnionValue> UnionSlot for Option<T> {
    fn chosen_variant(&self) -> Option<usize> {
        self.as_ref().map(UnionValue::variant_index)
    }
}

impl<T: UnionValue> UnionSlot for Nullable<T> {
    fn chosen_variant(&self) -> Option<usize> {
        self.as_ref().map(UnionValue::variant_index)
    }
}

/// A field value that distinguishes "not sent" from "explicitly null".
///
/// Used for nullable fields, mostly on update models where sending `null`
/// clears a value on the server. Fields of this type should be declared with
/// `#[serde(default, skip_serializing_if = "Nullable::is_absent")]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nullable<T> {
    /// The field is not part of the payload.
    Absent,
    /// The field is present with value `null`.
    Null,
    /// The field is present with a value.
    Present(T),
}

impl<T> Nullable<T> {
    /// Returns `true` if the field is not part of the payload.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns `true` if the field is explicitly `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value if present.
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Converts into an `Option`, collapsing absent and null.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Present)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => serializer.serialize_some(value),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

/// An exact monetary amount.
///
/// Stored as a [`Decimal`] and written to JSON as a number whose text is the
/// decimal's text, so `10.50` stays `10.50`. Accepts numbers and numeric
/// strings when reading.
///
/// Keeping the text intact relies on serde_json's `arbitrary_precision`
/// feature, which this crate enables. Cargo unifies features, so every crate
/// in the same build sees `serde_json::Number` keep its original text; see
/// the crate docs under "Number handling".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(pub Decimal);

impl Amount {
    /// Returns the underlying decimal.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Amount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i32> for Amount {
    fn from(value: i32) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<i64> for Amount {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl FromStr for Amount {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_decimal(s.trim()).map(Self)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let number = Number::from_str(&self.0.to_string()).map_err(serde::ser::Error::custom)?;
        number.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Number(number) => number.to_string().parse().map_err(D::Error::custom),
            Value::String(text) => text.parse().map_err(D::Error::custom),
            other => Err(D::Error::custom(format!(
                "expected a decimal amount, found {}",
                crate::error::json_kind(&other)
            ))),
        }
    }
}
