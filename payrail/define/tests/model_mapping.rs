//! End-to-end tests for typed models, unions and request building.
//!
//! These tests declare a small widget API the same way the payments
//! definitions do and exercise it through the public surface only.

use payrail_define::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

static WIDGET_STATUS: EnumCategory = EnumCategory {
    name: "WidgetStatus",
    values: &["DRAFT", "ACTIVE", "RETIRED"],
};

static SIZE_CODE: Pattern = Pattern::regex("size_code", "[SML]|X{1,3}L");

static MAKER: ModelSchema = ModelSchema {
    name: "Maker",
    fields: &[
        FieldDescriptor::required("id_", "id", Shape::String),
        FieldDescriptor::required("name", "name", Shape::String),
    ],
};

static MAKER_REF: [Variant; 2] = [
    Variant::new("id", Shape::String),
    Variant::new("maker", Shape::Object(&MAKER)),
];

static WIDGET: ModelSchema = ModelSchema {
    name: "Widget",
    fields: &[
        FieldDescriptor::required("id_", "id", Shape::String),
        FieldDescriptor::required("price", "price", Shape::Decimal),
        FieldDescriptor::required("status", "status", Shape::Enum(&WIDGET_STATUS)),
        FieldDescriptor::optional("size", "size", Shape::String).with_pattern(&SIZE_CODE),
        FieldDescriptor::optional("maker", "maker", Shape::Union(&MAKER_REF)),
        FieldDescriptor::optional("retired_at", "retired_at", Shape::Integer).nullable(),
        FieldDescriptor::optional("metadata", "metadata", Shape::Map(&Shape::String)),
    ],
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum WidgetStatus {
    Draft,
    Active,
    Retired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Maker {
    id_: String,
    name: String,
}

impl Model for Maker {
    fn schema() -> &'static ModelSchema {
        &MAKER
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum MakerRef {
    Id(String),
    Maker(Maker),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Widget {
    id_: String,
    price: Amount,
    status: WidgetStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    maker: Option<MakerRef>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    retired_at: Nullable<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<std::collections::BTreeMap<String, String>>,
}

impl Model for Widget {
    fn schema() -> &'static ModelSchema {
        &WIDGET
    }
}

fn widget() -> Widget {
    Widget {
        id_: "widget_123".to_string(),
        price: "19.90".parse().unwrap(),
        status: WidgetStatus::Active,
        size: Some("XL".to_string()),
        maker: Some(MakerRef::Maker(Maker {
            id_: "mk_1".to_string(),
            name: "Acme".to_string(),
        })),
        retired_at: Nullable::Absent,
        metadata: None,
    }
}

#[test]
fn test_round_trip_is_stable() {
    let wire = widget().to_wire().unwrap();
    let decoded = Widget::from_wire(&wire).unwrap();

    assert_eq!(decoded, widget());
    assert_eq!(decoded.to_wire().unwrap(), wire);
}

#[test]
fn test_optional_fields_are_omitted() {
    let mut bare = widget();
    bare.size = None;
    bare.maker = None;

    let wire = bare.to_wire().unwrap();
    let keys: Vec<&String> = wire.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), 3);
    assert!(wire.get("size").is_none());
    assert!(wire.get("retired_at").is_none());
}

#[test]
fn test_every_enum_value_is_accepted_and_others_rejected() {
    for value in WIDGET_STATUS.values {
        let wire = json!({"id": "w", "price": 1, "status": value});
        assert!(Widget::from_wire(&wire).is_ok(), "{value} should be accepted");
    }

    for value in ["active", "Active", "UNKNOWN", ""] {
        let wire = json!({"id": "w", "price": 1, "status": value});
        assert!(
            matches!(
                Widget::from_wire(&wire),
                Err(MapError::InvalidEnumValue { .. })
            ),
            "{value} should be rejected"
        );
    }
}

#[test]
fn test_union_prefers_first_candidate() {
    let wire = json!({"id": "w", "price": 1, "status": "DRAFT", "maker": "mk_9"});
    let widget = Widget::from_wire(&wire).unwrap();
    assert_eq!(widget.maker, Some(MakerRef::Id("mk_9".to_string())));

    let wire = json!({"id": "w", "price": 1, "status": "DRAFT", "maker": {"id": "mk_9", "name": "Acme"}});
    let widget = Widget::from_wire(&wire).unwrap();
    assert!(matches!(widget.maker, Some(MakerRef::Maker(ref m)) if m.id_ == "mk_9"));
}

#[test]
fn test_union_rejects_unmatched_value() {
    let wire = json!({"id": "w", "price": 1, "status": "DRAFT", "maker": {"name": "Acme"}});
    let err = Widget::from_wire(&wire).unwrap_err();
    assert!(matches!(err, MapError::NoMatchingVariant { ref field, .. } if field == "maker"));
}

#[test]
fn test_nullable_versus_required() {
    let wire = json!({"id": "w", "price": 1, "status": "RETIRED", "retired_at": null});
    let widget = Widget::from_wire(&wire).unwrap();
    assert_eq!(widget.retired_at, Nullable::Null);
    assert_eq!(widget.to_wire().unwrap()["retired_at"], Value::Null);

    let wire = json!({"id": "w", "price": null, "status": "RETIRED"});
    assert_eq!(
        Widget::from_wire(&wire).unwrap_err(),
        MapError::NullNotAllowed {
            field: "price".to_string()
        }
    );

    let wire = json!({"id": "w", "status": "RETIRED"});
    assert_eq!(
        Widget::from_wire(&wire).unwrap_err(),
        MapError::MissingField {
            field: "price".to_string()
        }
    );
}

#[test]
fn test_pattern_is_enforced_outbound() {
    let mut bad = widget();
    bad.size = Some("XXXXL".to_string());

    let err = bad.to_wire().unwrap_err();
    assert!(matches!(err, MapError::PatternMismatch { pattern: "size_code", .. }));
}

#[test]
fn test_id_maps_to_id_underscore() {
    let wire = widget().to_wire().unwrap();
    assert_eq!(wire["id"], json!("widget_123"));
    assert_eq!(wire["maker"]["id"], json!("mk_1"));
    assert!(wire.get("id_").is_none());
}

#[test]
fn test_widget_create_then_fetch() {
    let created = RequestBuilder::new("/v1/widgets")
        .with_model(&widget())
        .unwrap()
        .finalize(RestMethod::Post)
        .unwrap();
    assert_eq!(created.path(), "/v1/widgets");
    assert_eq!(created.body().unwrap()["id"], json!("widget_123"));

    let response = created.body().cloned().unwrap();
    let widget = Widget::from_wire(&response).unwrap();

    let fetch = RequestBuilder::new("/v1/widgets/{id}")
        .with_path_param("id", widget.id_)
        .finalize(RestMethod::Get)
        .unwrap();
    assert_eq!(fetch.path(), "/v1/widgets/widget_123");
}

#[test]
fn test_registry_collects_widget_definitions() {
    let registry = Registry::builder().model(&WIDGET).build().unwrap();

    assert!(registry.model("Maker").is_some());
    assert!(registry.enum_category("WidgetStatus").is_some());
    assert!(registry.warnings().is_empty());
}
