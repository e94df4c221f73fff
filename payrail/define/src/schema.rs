//! Field descriptor tables.
//!
//! Every model is described by a [`ModelSchema`]: a static, read-only table of
//! [`FieldDescriptor`]s mapping each local attribute name to exactly one wire
//! name, together with the field's [`Shape`] and constraints. Tables are
//! declared as `static` items and never mutated.
//!
//! ## Examples
//!
//! ```
//! use payrail_define::{EnumCategory, FieldDescriptor, ModelSchema, Shape};
//!
//! static WIDGET_COLOR: EnumCategory = EnumCategory {
//!     name: "WidgetColor",
//!     values: &["RED", "BLUE"],
//! };
//!
//! static WIDGET: ModelSchema = ModelSchema {
//!     name: "Widget",
//!     fields: &[
//!         FieldDescriptor::required("id_", "id", Shape::String),
//!         FieldDescriptor::optional("color", "color", Shape::Enum(&WIDGET_COLOR)),
//!     ],
//! };
//!
//! assert_eq!(WIDGET.wire_name("id_"), Some("id"));
//! assert_eq!(WIDGET.local_name("id"), Some("id_"));
//! ```

use std::collections::HashSet;
use std::fmt;

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::error::DefinitionError;

/// The expected JSON shape of a field value.
#[derive(Clone, Copy)]
pub enum Shape {
    /// A JSON string.
    String,
    /// A JSON number without a fractional part.
    Integer,
    /// A JSON number with exact decimal semantics (monetary amounts).
    Decimal,
    /// A JSON boolean.
    Boolean,
    /// A string drawn from a closed value set.
    Enum(&'static EnumCategory),
    /// A nested model.
    Object(&'static ModelSchema),
    /// A JSON array whose items share one shape.
    List(&'static Shape),
    /// A JSON object with arbitrary string keys whose values share one shape.
    Map(&'static Shape),
    /// One of several candidate shapes, tried in declaration order.
    Union(&'static [Variant]),
    /// Any JSON value, passed through unchanged.
    Any,
}

impl Shape {
    /// Short name of the shape, used in error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Boolean => "boolean",
            Self::Enum(_) => "enum",
            Self::Object(_) => "object",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Union(_) => "union",
            Self::Any => "any",
        }
    }
}

// Nested schemas may refer back to themselves, so only names are printed.
impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enum(category) => write!(f, "Enum({})", category.name),
            Self::Object(schema) => write!(f, "Object({})", schema.name),
            Self::List(inner) => write!(f, "List({inner:?})"),
            Self::Map(inner) => write!(f, "Map({inner:?})"),
            Self::Union(variants) => {
                let names: Vec<_> = variants.iter().map(|v| v.name).collect();
                write!(f, "Union({})", names.join(" | "))
            }
            other => f.write_str(other.describe()),
        }
    }
}

/// One candidate of a [`Shape::Union`].
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    /// Variant name, reported when resolution fails.
    pub name: &'static str,
    /// The candidate shape.
    pub shape: Shape,
}

impl Variant {
    /// Creates a union candidate.
    pub const fn new(name: &'static str, shape: Shape) -> Self {
        Self { name, shape }
    }
}

/// Whether a field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// The field must be present.
    Required,
    /// The field may be absent.
    Optional,
}

/// Declares one field of a model.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    /// Local attribute name (the Rust struct field name).
    pub local: &'static str,
    /// Field name in the external JSON payload.
    pub wire: &'static str,
    /// Expected value shape.
    pub shape: Shape,
    /// Whether the field must be present.
    pub presence: Presence,
    /// Whether JSON `null` is accepted.
    pub nullable: bool,
    /// Optional format constraint for string values.
    pub pattern: Option<&'static Pattern>,
}

impl FieldDescriptor {
    /// Declares a required, non-nullable field.
    pub const fn required(local: &'static str, wire: &'static str, shape: Shape) -> Self {
        Self {
            local,
            wire,
            shape,
            presence: Presence::Required,
            nullable: false,
            pattern: None,
        }
    }

    /// Declares an optional, non-nullable field.
    pub const fn optional(local: &'static str, wire: &'static str, shape: Shape) -> Self {
        Self {
            local,
            wire,
            shape,
            presence: Presence::Optional,
            nullable: false,
            pattern: None,
        }
    }

    /// Marks the field as accepting JSON `null`.
    pub const fn nullable(self) -> Self {
        Self {
            nullable: true,
            ..self
        }
    }

    /// Attaches a format constraint.
    pub const fn with_pattern(self, pattern: &'static Pattern) -> Self {
        Self {
            pattern: Some(pattern),
            ..self
        }
    }

    /// Returns `true` if the field must be present.
    pub fn is_required(&self) -> bool {
        self.presence == Presence::Required
    }
}

/// A closed set of permitted string values.
///
/// Matching is exact and case sensitive.
#[derive(Debug)]
pub struct EnumCategory {
    /// Category name, reported in validation errors.
    pub name: &'static str,
    /// The permitted values.
    pub values: &'static [&'static str],
}

impl EnumCategory {
    /// Returns `true` if `value` is a member of this category.
    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|candidate| *candidate == value)
    }

    /// Returns the values with duplicates collapsed, keeping first occurrences.
    pub fn canonical_values(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        self.values
            .iter()
            .copied()
            .filter(|value| seen.insert(*value))
            .collect()
    }

    /// Returns each value that is declared more than once.
    pub fn duplicates(&self) -> Vec<&'static str> {
        let mut seen = HashSet::new();
        let mut repeated = Vec::new();
        for value in self.values {
            if !seen.insert(*value) && !repeated.contains(value) {
                repeated.push(*value);
            }
        }
        repeated
    }
}

/// The kind of constraint a [`Pattern`] expresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// A regular expression the whole value must match.
    Regex(&'static str),
    /// A free-text constraint carried as documentation only.
    Descriptive(&'static str),
}

/// A named format constraint on string values.
///
/// Regex patterns are anchored to the whole value and compiled once, on
/// first use.
#[derive(Debug)]
pub struct Pattern {
    name: &'static str,
    kind: PatternKind,
    compiled: OnceCell<Regex>,
}

impl Pattern {
    /// Declares a regex constraint.
    pub const fn regex(name: &'static str, source: &'static str) -> Self {
        Self {
            name,
            kind: PatternKind::Regex(source),
            compiled: OnceCell::new(),
        }
    }

    /// Declares a descriptive constraint that is not enforced.
    pub const fn descriptive(name: &'static str, text: &'static str) -> Self {
        Self {
            name,
            kind: PatternKind::Descriptive(text),
            compiled: OnceCell::new(),
        }
    }

    /// Returns the pattern name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the pattern kind.
    pub fn kind(&self) -> PatternKind {
        self.kind
    }

    /// Returns the compiled regex, or `None` for descriptive patterns.
    ///
    /// ## Errors
    ///
    /// Returns an error if the regex source does not compile.
    pub fn compiled(&self) -> Result<Option<&Regex>, regex::Error> {
        match self.kind {
            PatternKind::Regex(source) => self
                .compiled
                .get_or_try_init(|| Regex::new(&format!("^(?:{source})$")))
                .map(Some),
            PatternKind::Descriptive(_) => Ok(None),
        }
    }

    /// Checks a value against the pattern.
    ///
    /// Descriptive patterns accept every value.
    ///
    /// ## Errors
    ///
    /// Returns an error if the regex source does not compile.
    pub fn is_match(&self, value: &str) -> Result<bool, regex::Error> {
        Ok(self.compiled()?.is_none_or(|regex| regex.is_match(value)))
    }
}

/// The descriptor table of one model.
#[derive(Debug)]
pub struct ModelSchema {
    /// Model name.
    pub name: &'static str,
    /// Field descriptors in declaration order.
    pub fields: &'static [FieldDescriptor],
}

impl ModelSchema {
    /// Looks up a field by its local name.
    pub fn field_by_local(&self, local: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.local == local)
    }

    /// Looks up a field by its wire name.
    pub fn field_by_wire(&self, wire: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|field| field.wire == wire)
    }

    /// Translates a local name to its wire name.
    pub fn wire_name(&self, local: &str) -> Option<&'static str> {
        self.field_by_local(local).map(|field| field.wire)
    }

    /// Translates a wire name to its local name.
    pub fn local_name(&self, wire: &str) -> Option<&'static str> {
        self.field_by_wire(wire).map(|field| field.local)
    }

    /// Checks that the local-to-wire mapping is one-to-one.
    ///
    /// ## Errors
    ///
    /// Returns the first repeated local or wire name.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let mut locals = HashSet::new();
        let mut wires = HashSet::new();
        for field in self.fields {
            if !locals.insert(field.local) {
                return Err(DefinitionError::DuplicateLocalName {
                    model: self.name,
                    name: field.local,
                });
            }
            if !wires.insert(field.wire) {
                return Err(DefinitionError::DuplicateWireName {
                    model: self.name,
                    name: field.wire,
                });
            }
        }
        Ok(())
    }
}
