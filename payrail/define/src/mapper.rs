//! Translation between wire payloads and local-keyed payloads.
//!
//! The mapper walks a [`ModelSchema`] and, for every declared field, renames
//! the key (wire ↔ local), checks presence and nullability, validates the
//! value against its [`Shape`] and pattern, and recurses into nested models,
//! lists, maps and unions. The output is a fresh JSON object; the input is
//! never modified, and nothing is returned unless every field succeeds.
//!
//! Typed models sit on top of this through [`Model`](crate::Model): serde
//! only ever sees local-keyed, already-validated objects. A typed union
//! already knows which candidate it holds, so outbound translation can be
//! told about it through [`UnionChoices`] instead of re-resolving.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::error::MapError;
use crate::model::UnionSlot;
use crate::schema::{FieldDescriptor, ModelSchema, Pattern, Shape, Variant};

/// Direction of a translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Wire names to local names (decoding a response).
    Inbound,
    /// Local names to wire names (encoding a request body).
    Outbound,
}

impl Direction {
    fn source_key(self, field: &FieldDescriptor) -> &'static str {
        match self {
            Self::Inbound => field.wire,
            Self::Outbound => field.local,
        }
    }

    fn target_key(self, field: &FieldDescriptor) -> &'static str {
        match self {
            Self::Inbound => field.local,
            Self::Outbound => field.wire,
        }
    }
}

/// The outcome of resolving a union value.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolved {
    /// Position of the winning candidate in declaration order.
    pub index: usize,
    /// Name of the winning candidate.
    pub variant: &'static str,
    /// The value translated through the winning candidate's shape.
    pub value: Value,
}

/// Union candidates already chosen by typed values, keyed by local path.
///
/// A path with a recorded choice is translated through that candidate's
/// shape only, so its validation errors surface directly instead of being
/// folded into [`MapError::NoMatchingVariant`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnionChoices {
    chosen: BTreeMap<String, usize>,
}

impl UnionChoices {
    pub const fn new() -> Self {
        Self {
            chosen: BTreeMap::new(),
        }
    }

    /// Records `index` as the candidate for the union at `path`.
    pub fn choose(&mut self, path: impl Into<String>, index: usize) {
        self.chosen.insert(path.into(), index);
    }

    /// Records the candidate held by a typed slot, if it holds a value.
    pub fn record(&mut self, path: impl Into<String>, slot: &impl UnionSlot) {
        if let Some(index) = slot.chosen_variant() {
            self.choose(path, index);
        }
    }

    pub fn get(&self, path: &str) -> Option<usize> {
        self.chosen.get(path).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}

static NO_CHOICES: UnionChoices = UnionChoices::new();

/// Decodes a wire payload into a local-keyed object.
///
/// ## Errors
///
/// - [`MapError::MissingField`] when a required field is absent
/// - [`MapError::NullNotAllowed`] when a non-nullable field is `null`
/// - [`MapError::InvalidEnumValue`], [`MapError::PatternMismatch`],
///   [`MapError::TypeMismatch`] or [`MapError::NoMatchingVariant`] when a
///   value fails validation
/// - [`MapError::NumberOutOfRange`] when a number has the right kind but
///   does not fit `i64` (integers) or [`Decimal`] (decimals)
///
/// ## Examples
///
/// ```
/// use payrail_define::{FieldDescriptor, ModelSchema, Shape, mapper};
/// use serde_json::json;
///
/// static TOKEN: ModelSchema = ModelSchema {
///     name: "Token",
///     fields: &[FieldDescriptor::required("id_", "id", Shape::String)],
/// };
///
/// let local = mapper::from_wire(&json!({"id": "tok_1"}), &TOKEN).unwrap();
/// assert_eq!(local["id_"], json!("tok_1"));
/// ```
pub fn from_wire(raw: &Value, schema: &ModelSchema) -> Result<Map<String, Value>, MapError> {
    translate_object(raw, schema, Direction::Inbound, "", &NO_CHOICES)
}

/// Encodes a local-keyed object into a wire payload.
///
/// Absent fields are omitted, as is `null` for optional fields that are not
/// nullable. `null` for a required, non-nullable field is treated as a
/// missing value.
///
/// ## Errors
///
/// Returns the same validation errors as [`from_wire`], except that a
/// `null` in a non-nullable field is reported as [`MapError::MissingField`]
/// when the field is required and omitted otherwise.
pub fn to_wire(local: &Map<String, Value>, schema: &ModelSchema) -> Result<Value, MapError> {
    to_wire_with(local, schema, &NO_CHOICES)
}

/// Encodes a local-keyed object, translating each union path recorded in
/// `choices` through its chosen candidate.
///
/// Unions without a recorded choice resolve in declaration order, as in
/// [`to_wire`].
///
/// ## Errors
///
/// Returns the errors of [`to_wire`], plus [`MapError::UnknownVariant`] when
/// a recorded index is outside the field's candidate list.
pub fn to_wire_with(
    local: &Map<String, Value>,
    schema: &ModelSchema,
    choices: &UnionChoices,
) -> Result<Value, MapError> {
    translate_fields(local, schema, Direction::Outbound, "", choices).map(Value::Object)
}

/// Resolves a value against union candidates in declaration order.
///
/// The first candidate that translates the value without error wins; later
/// candidates are never attempted.
///
/// ## Errors
///
/// Returns [`MapError::NoMatchingVariant`] listing every candidate's failure
/// when none of them accepts the value.
pub fn resolve_union(
    value: &Value,
    variants: &[Variant],
    direction: Direction,
    path: &str,
) -> Result<Resolved, MapError> {
    resolve_union_in(value, variants, direction, path, &NO_CHOICES)
}

/// Parses decimal text exactly, accepting plain and scientific notation.
pub fn parse_decimal(text: &str) -> Result<Decimal, rust_decimal::Error> {
    Decimal::from_str_exact(text).or_else(|_| Decimal::from_scientific(text))
}

fn resolve_union_in(
    value: &Value,
    variants: &[Variant],
    direction: Direction,
    path: &str,
    choices: &UnionChoices,
) -> Result<Resolved, MapError> {
    if let Some(index) = choices.get(path) {
        let variant = variants.get(index).ok_or_else(|| MapError::UnknownVariant {
            field: path.to_string(),
            index,
        })?;
        trace!(field = path, variant = variant.name, "Using chosen union variant");
        let value = translate_value(value, &variant.shape, direction, path, choices)?;
        return Ok(Resolved {
            index,
            variant: variant.name,
            value,
        });
    }

    let mut tried = Vec::with_capacity(variants.len());
    for (index, variant) in variants.iter().enumerate() {
        match translate_value(value, &variant.shape, direction, path, choices) {
            Ok(value) => {
                trace!(field = path, variant = variant.name, "Resolved union variant");
                return Ok(Resolved {
                    index,
                    variant: variant.name,
                    value,
                });
            }
            Err(err) => tried.push(format!("{}: {err}", variant.name)),
        }
    }
    Err(MapError::NoMatchingVariant {
        field: path.to_string(),
        tried,
    })
}

fn translate_object(
    value: &Value,
    schema: &ModelSchema,
    direction: Direction,
    path: &str,
    choices: &UnionChoices,
) -> Result<Map<String, Value>, MapError> {
    match value {
        Value::Object(source) => translate_fields(source, schema, direction, path, choices),
        other => {
            let field = if path.is_empty() { schema.name } else { path };
            Err(MapError::type_mismatch(field, "object", other))
        }
    }
}

fn translate_fields(
    source: &Map<String, Value>,
    schema: &ModelSchema,
    direction: Direction,
    path: &str,
    choices: &UnionChoices,
) -> Result<Map<String, Value>, MapError> {
    let mut target = Map::new();

    for field in schema.fields {
        let field_path = child_path(path, field.local);
        match source.get(direction.source_key(field)) {
            None if field.is_required() => {
                return Err(MapError::MissingField { field: field_path });
            }
            None => {}
            Some(Value::Null) if field.nullable => {
                target.insert(direction.target_key(field).to_string(), Value::Null);
            }
            Some(Value::Null) => match direction {
                Direction::Inbound => {
                    return Err(MapError::NullNotAllowed { field: field_path });
                }
                Direction::Outbound if field.is_required() => {
                    return Err(MapError::MissingField { field: field_path });
                }
                Direction::Outbound => {}
            },
            Some(value) => {
                let translated =
                    translate_value(value, &field.shape, direction, &field_path, choices)?;
                if let Some(pattern) = field.pattern {
                    check_pattern(&translated, pattern, &field_path)?;
                }
                target.insert(direction.target_key(field).to_string(), translated);
            }
        }
    }

    if tracing::enabled!(tracing::Level::TRACE) {
        for key in source.keys() {
            let declared = schema
                .fields
                .iter()
                .any(|field| direction.source_key(field) == key);
            if !declared {
                trace!(model = schema.name, key = %key, "Ignoring undeclared key");
            }
        }
    }

    Ok(target)
}

fn translate_value(
    value: &Value,
    shape: &Shape,
    direction: Direction,
    path: &str,
    choices: &UnionChoices,
) -> Result<Value, MapError> {
    match (shape, value) {
        (Shape::Any, _)
        | (Shape::String, Value::String(_))
        | (Shape::Boolean, Value::Bool(_)) => Ok(value.clone()),
        (Shape::Integer, Value::Number(n)) if n.is_i64() => Ok(value.clone()),
        (Shape::Integer, Value::Number(n)) if is_integral(n) => {
            Err(MapError::NumberOutOfRange {
                field: path.to_string(),
                value: n.to_string(),
                expected: "integer",
            })
        }
        (Shape::Decimal, Value::Number(n)) => match parse_decimal(&n.to_string()) {
            Ok(_) => Ok(value.clone()),
            Err(_) => Err(MapError::NumberOutOfRange {
                field: path.to_string(),
                value: n.to_string(),
                expected: "decimal",
            }),
        },
        (Shape::Enum(category), Value::String(s)) => {
            if category.contains(s) {
                Ok(value.clone())
            } else {
                Err(MapError::InvalidEnumValue {
                    field: path.to_string(),
                    value: s.clone(),
                    category: category.name,
                })
            }
        }
        (Shape::Object(schema), _) => {
            translate_object(value, schema, direction, path, choices).map(Value::Object)
        }
        (Shape::List(inner), Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                translate_value(item, inner, direction, &format!("{path}[{i}]"), choices)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        (Shape::Map(inner), Value::Object(entries)) => entries
            .iter()
            .map(|(key, item)| {
                translate_value(item, inner, direction, &child_path(path, key), choices)
                    .map(|translated| (key.clone(), translated))
            })
            .collect::<Result<Map<_, _>, _>>()
            .map(Value::Object),
        (Shape::Union(variants), _) => {
            resolve_union_in(value, variants, direction, path, choices)
                .map(|resolved| resolved.value)
        }
        (shape, other) => Err(MapError::type_mismatch(path, shape.describe(), other)),
    }
}

/// Integral number text: an optional sign followed by digits only.
fn is_integral(number: &Number) -> bool {
    let text = number.to_string();
    let digits = text.strip_prefix('-').unwrap_or(&text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

fn check_pattern(value: &Value, pattern: &'static Pattern, path: &str) -> Result<(), MapError> {
    match value {
        Value::String(s) => {
            let matched = pattern.is_match(s).map_err(|e| MapError::InvalidPattern {
                pattern: pattern.name(),
                message: e.to_string(),
            })?;
            if matched {
                Ok(())
            } else {
                Err(MapError::PatternMismatch {
                    field: path.to_string(),
                    value: s.clone(),
                    pattern: pattern.name(),
                })
            }
        }
        Value::Array(items) => items
            .iter()
            .enumerate()
            .try_for_each(|(i, item)| check_pattern(item, pattern, &format!("{path}[{i}]"))),
        _ => Ok(()),
    }
}

fn child_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{EnumCategory, FieldDescriptor};
    use serde_json::json;

    static CURRENCY_CODE: Pattern = Pattern::regex("currency_code", "USD|EUR|GBP|JPY");

    static STATUS: EnumCategory = EnumCategory {
        name: "WidgetStatus",
        values: &["ACTIVE", "IN_PROGRESS", "RETIRED"],
    };

    static MAKER: ModelSchema = ModelSchema {
        name: "Maker",
        fields: &[
            FieldDescriptor::required("id_", "id", Shape::String),
            FieldDescriptor::optional("display_name", "name", Shape::String),
        ],
    };

    static MAKER_VARIANTS: [Variant; 2] = [
        Variant::new("maker_id", Shape::String),
        Variant::new("maker", Shape::Object(&MAKER)),
    ];

    static PART: ModelSchema = ModelSchema {
        name: "Part",
        fields: &[
            FieldDescriptor::required("sku", "sku", Shape::String),
            FieldDescriptor::required("quantity", "qty", Shape::Integer),
        ],
    };

    static PART_ITEM: Shape = Shape::Object(&PART);

    static WIDGET: ModelSchema = ModelSchema {
        name: "Widget",
        fields: &[
            FieldDescriptor::required("id_", "id", Shape::String),
            FieldDescriptor::required("amount", "amount", Shape::Decimal),
            FieldDescriptor::required("currency", "currency", Shape::String)
                .with_pattern(&CURRENCY_CODE),
            FieldDescriptor::optional("status", "status", Shape::Enum(&STATUS)),
            FieldDescriptor::optional("maker", "maker", Shape::Union(&MAKER_VARIANTS)),
            FieldDescriptor::optional("parts", "parts", Shape::List(&PART_ITEM)),
            FieldDescriptor::optional("metadata", "metadata", Shape::Map(&Shape::String)),
            FieldDescriptor::optional("retired_at", "retired_at", Shape::Integer).nullable(),
            FieldDescriptor::optional("is_live", "livemode", Shape::Boolean),
        ],
    };

    fn wire_widget() -> Value {
        json!({
            "id": "widget_123",
            "amount": 10.5,
            "currency": "USD",
            "status": "ACTIVE",
            "maker": {"id": "mk_1", "name": "Acme"},
            "parts": [{"sku": "bolt", "qty": 4}],
            "metadata": {"order": "42"},
            "retired_at": null,
            "livemode": false
        })
    }

    #[test]
    fn test_from_wire_renames_to_local() {
        let local = from_wire(&wire_widget(), &WIDGET).unwrap();

        assert_eq!(local["id_"], json!("widget_123"));
        assert_eq!(local["is_live"], json!(false));
        assert_eq!(local["maker"], json!({"id_": "mk_1", "display_name": "Acme"}));
        assert_eq!(local["parts"], json!([{"sku": "bolt", "quantity": 4}]));
        assert_eq!(local["retired_at"], Value::Null);
        assert!(!local.contains_key("id"));
    }

    #[test]
    fn test_round_trip_reproduces_wire() {
        let wire = wire_widget();
        let local = from_wire(&wire, &WIDGET).unwrap();
        let back = to_wire(&local, &WIDGET).unwrap();
        assert_eq!(back, wire);

        let again = to_wire(&from_wire(&back, &WIDGET).unwrap(), &WIDGET).unwrap();
        assert_eq!(again, back);
    }

    #[test]
    fn test_id_mangling_both_directions() {
        let local = from_wire(
            &json!({"id": "abc", "amount": 1, "currency": "EUR"}),
            &WIDGET,
        )
        .unwrap();
        assert_eq!(local["id_"], json!("abc"));

        let wire = to_wire(&local, &WIDGET).unwrap();
        assert_eq!(wire["id"], json!("abc"));
        assert!(wire.get("id_").is_none());
    }

    #[test]
    fn test_missing_required_field() {
        let err = from_wire(&json!({"id": "w", "currency": "USD"}), &WIDGET).unwrap_err();
        assert_eq!(
            err,
            MapError::MissingField {
                field: "amount".to_string()
            }
        );
    }

    #[test]
    fn test_missing_optional_field_is_omitted() {
        let local = from_wire(
            &json!({"id": "w", "amount": 3, "currency": "GBP"}),
            &WIDGET,
        )
        .unwrap();
        assert_eq!(local.len(), 3);
        assert!(!local.contains_key("status"));
    }

    #[test]
    fn test_null_for_non_nullable_inbound() {
        let err = from_wire(
            &json!({"id": "w", "amount": 3, "currency": "GBP", "status": null}),
            &WIDGET,
        )
        .unwrap_err();
        assert_eq!(
            err,
            MapError::NullNotAllowed {
                field: "status".to_string()
            }
        );
    }

    #[test]
    fn test_null_outbound_required_is_missing() {
        let mut local = Map::new();
        local.insert("id_".to_string(), json!("w"));
        local.insert("amount".to_string(), Value::Null);
        local.insert("currency".to_string(), json!("USD"));

        let err = to_wire(&local, &WIDGET).unwrap_err();
        assert_eq!(
            err,
            MapError::MissingField {
                field: "amount".to_string()
            }
        );
    }

    #[test]
    fn test_null_outbound_optional_is_omitted() {
        let mut local = Map::new();
        local.insert("id_".to_string(), json!("w"));
        local.insert("amount".to_string(), json!(2));
        local.insert("currency".to_string(), json!("USD"));
        local.insert("status".to_string(), Value::Null);
        local.insert("retired_at".to_string(), Value::Null);

        let wire = to_wire(&local, &WIDGET).unwrap();
        assert!(wire.get("status").is_none());
        assert_eq!(wire["retired_at"], Value::Null);
    }

    #[test]
    fn test_enum_membership_is_exact() {
        for value in STATUS.values {
            let wire = json!({"id": "w", "amount": 1, "currency": "USD", "status": value});
            let local = from_wire(&wire, &WIDGET).unwrap();
            assert_eq!(local["status"], json!(value));
        }

        let err = from_wire(
            &json!({"id": "w", "amount": 1, "currency": "USD", "status": "active"}),
            &WIDGET,
        )
        .unwrap_err();
        assert_eq!(
            err,
            MapError::InvalidEnumValue {
                field: "status".to_string(),
                value: "active".to_string(),
                category: "WidgetStatus",
            }
        );
    }

    #[test]
    fn test_pattern_mismatch() {
        let err = from_wire(&json!({"id": "w", "amount": 1, "currency": "US"}), &WIDGET)
            .unwrap_err();
        assert_eq!(
            err,
            MapError::PatternMismatch {
                field: "currency".to_string(),
                value: "US".to_string(),
                pattern: "currency_code",
            }
        );
    }

    #[test]
    fn test_decimal_text_is_preserved() {
        let wire: Value =
            serde_json::from_str(r#"{"id": "w", "amount": 10.50, "currency": "USD"}"#).unwrap();
        let local = from_wire(&wire, &WIDGET).unwrap();
        let back = to_wire(&local, &WIDGET).unwrap();

        assert_eq!(serde_json::to_string(&back["amount"]).unwrap(), "10.50");
    }

    #[test]
    fn test_integer_shape_rejects_fraction() {
        let err = from_wire(
            &json!({"id": "w", "amount": 1, "currency": "USD", "parts": [{"sku": "a", "qty": 1.5}]}),
            &WIDGET,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("parts[0].quantity"));
    }

    #[test]
    fn test_decimal_accepts_integral_and_fractional() {
        for amount in [json!(10), json!(10.25), json!(-3)] {
            let wire = json!({"id": "w", "amount": amount, "currency": "USD"});
            assert!(from_wire(&wire, &WIDGET).is_ok());
        }
        let wire = json!({"id": "w", "amount": "10", "currency": "USD"});
        assert!(matches!(
            from_wire(&wire, &WIDGET),
            Err(MapError::TypeMismatch { expected: "decimal", .. })
        ));
    }

    #[test]
    fn test_union_first_match_wins() {
        let resolved =
            resolve_union(&json!("mk_9"), &MAKER_VARIANTS, Direction::Inbound, "maker").unwrap();
        assert_eq!(resolved.index, 0);
        assert_eq!(resolved.variant, "maker_id");

        let resolved = resolve_union(
            &json!({"id": "mk_9"}),
            &MAKER_VARIANTS,
            Direction::Inbound,
            "maker",
        )
        .unwrap();
        assert_eq!(resolved.variant, "maker");
        assert_eq!(resolved.value, json!({"id_": "mk_9"}));
    }

    #[test]
    fn test_union_no_match_lists_candidates() {
        let err = resolve_union(&json!(7), &MAKER_VARIANTS, Direction::Inbound, "maker")
            .unwrap_err();
        match err {
            MapError::NoMatchingVariant { field, tried } => {
                assert_eq!(field, "maker");
                assert_eq!(tried.len(), 2);
                assert!(tried[0].starts_with("maker_id:"));
                assert!(tried[1].starts_with("maker:"));
            }
            other => panic!("expected NoMatchingVariant, got {other:?}"),
        }
    }

    static AMBIGUOUS: [Variant; 2] = [
        Variant::new("first", Shape::String),
        Variant::new("second", Shape::String),
    ];

    #[test]
    fn test_union_never_attempts_later_candidates() {
        let resolved = resolve_union(&json!("x"), &AMBIGUOUS, Direction::Outbound, "v").unwrap();
        assert_eq!(resolved.variant, "first");
    }

    static TAGGED: ModelSchema = ModelSchema {
        name: "Tagged",
        fields: &[FieldDescriptor::optional("tag", "tag", Shape::Union(&AMBIGUOUS))],
    };

    #[test]
    fn test_chosen_variant_bypasses_ordered_resolution() {
        let mut local = Map::new();
        local.insert("tag".to_string(), json!("x"));
        let mut choices = UnionChoices::new();
        choices.choose("tag", 1);

        let resolved =
            resolve_union_in(&json!("x"), &AMBIGUOUS, Direction::Outbound, "tag", &choices)
                .unwrap();
        assert_eq!(resolved.index, 1);
        assert_eq!(resolved.variant, "second");
        assert_eq!(to_wire_with(&local, &TAGGED, &choices).unwrap(), json!({"tag": "x"}));
    }

    #[test]
    fn test_chosen_variant_reports_its_own_error() {
        let mut local = Map::new();
        local.insert("id_".to_string(), json!("w"));
        local.insert("amount".to_string(), json!(1));
        local.insert("currency".to_string(), json!("USD"));
        local.insert("maker".to_string(), json!({"display_name": "Acme"}));

        let unchosen = to_wire(&local, &WIDGET).unwrap_err();
        assert!(matches!(unchosen, MapError::NoMatchingVariant { .. }));

        let mut choices = UnionChoices::new();
        choices.choose("maker", 1);
        let chosen = to_wire_with(&local, &WIDGET, &choices).unwrap_err();
        assert_eq!(
            chosen,
            MapError::MissingField {
                field: "maker.id_".to_string()
            }
        );
    }

    #[test]
    fn test_chosen_index_out_of_range() {
        let mut local = Map::new();
        local.insert("tag".to_string(), json!("x"));
        let mut choices = UnionChoices::new();
        choices.choose("tag", 2);

        let err = to_wire_with(&local, &TAGGED, &choices).unwrap_err();
        assert_eq!(
            err,
            MapError::UnknownVariant {
                field: "tag".to_string(),
                index: 2
            }
        );
    }

    #[test]
    fn test_decimal_beyond_precision_is_out_of_range() {
        let wire: Value = serde_json::from_str(
            r#"{"id": "w", "amount": 0.12345678901234567890123456789, "currency": "USD"}"#,
        )
        .unwrap();
        let err = from_wire(&wire, &WIDGET).unwrap_err();
        assert_eq!(
            err,
            MapError::NumberOutOfRange {
                field: "amount".to_string(),
                value: "0.12345678901234567890123456789".to_string(),
                expected: "decimal",
            }
        );
    }

    #[test]
    fn test_integer_beyond_i64_is_out_of_range() {
        let wire: Value = serde_json::from_str(
            r#"{"id": "w", "amount": 1, "currency": "USD", "retired_at": 9223372036854775808}"#,
        )
        .unwrap();
        let err = from_wire(&wire, &WIDGET).unwrap_err();
        assert_eq!(
            err,
            MapError::NumberOutOfRange {
                field: "retired_at".to_string(),
                value: "9223372036854775808".to_string(),
                expected: "integer",
            }
        );

        let wire = json!({"id": "w", "amount": 1, "currency": "USD", "retired_at": i64::MAX});
        assert!(from_wire(&wire, &WIDGET).is_ok());
    }

    #[test]
    fn test_map_values_are_validated() {
        let err = from_wire(
            &json!({"id": "w", "amount": 1, "currency": "USD", "metadata": {"n": 1}}),
            &WIDGET,
        )
        .unwrap_err();
        assert_eq!(err.field(), Some("metadata.n"));
    }

    #[test]
    fn test_root_must_be_object() {
        let err = from_wire(&json!([1, 2]), &WIDGET).unwrap_err();
        assert_eq!(
            err,
            MapError::TypeMismatch {
                field: "Widget".to_string(),
                expected: "object",
                found: "array",
            }
        );
    }

    #[test]
    fn test_undeclared_keys_are_ignored() {
        let wire = json!({"id": "w", "amount": 1, "currency": "USD", "brand_new": true});
        let local = from_wire(&wire, &WIDGET).unwrap();
        assert!(!local.contains_key("brand_new"));
    }

    #[test]
    fn test_failure_leaves_no_partial_output() {
        let wire = json!({"id": "w", "amount": 1, "currency": "XXX"});
        assert!(from_wire(&wire, &WIDGET).is_err());
        assert_eq!(wire["currency"], json!("XXX"));
    }
}
