//! Process-wide table of model and enum definitions.
//!
//! A [`Registry`] is built once at startup from static declarations, checks
//! them for consistency, and is read-only afterwards. It is passed around
//! explicitly rather than looked up globally.

use std::collections::BTreeMap;

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{DefinitionError, MapError};
use crate::mapper;
use crate::schema::{EnumCategory, ModelSchema, Shape};

/// Validated model and enum definitions, keyed by name.
#[derive(Debug, Default)]
pub struct Registry {
    models: BTreeMap<&'static str, &'static ModelSchema>,
    enums: BTreeMap<&'static str, &'static EnumCategory>,
    warnings: Vec<String>,
}

impl Registry {
    /// Creates a new registry builder.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Looks up a model schema by name.
    pub fn model(&self, name: &str) -> Option<&'static ModelSchema> {
        self.models.get(name).copied()
    }

    /// Looks up an enum category by name.
    pub fn enum_category(&self, name: &str) -> Option<&'static EnumCategory> {
        self.enums.get(name).copied()
    }

    /// Iterates over registered model schemas in name order.
    pub fn models(&self) -> impl Iterator<Item = &'static ModelSchema> + '_ {
        self.models.values().copied()
    }

    /// Iterates over registered enum categories in name order.
    pub fn enum_categories(&self) -> impl Iterator<Item = &'static EnumCategory> + '_ {
        self.enums.values().copied()
    }

    /// Definition problems that were tolerated, such as duplicate enum values.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Maps a wire payload through the named model's schema.
    ///
    /// ## Errors
    ///
    /// Returns [`MapError::UnknownModel`] for an unregistered name, or any
    /// error from [`mapper::from_wire`].
    pub fn from_wire(&self, model: &str, raw: &Value) -> Result<Map<String, Value>, MapError> {
        let schema = self.model(model).ok_or_else(|| MapError::UnknownModel {
            name: model.to_string(),
        })?;
        mapper::from_wire(raw, schema)
    }
}

/// Collects root declarations for a [`Registry`].
///
/// Models reachable from a root (nested objects, list items, union
/// candidates) are registered automatically, as are the enum categories
/// they use.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    models: Vec<&'static ModelSchema>,
    enums: Vec<&'static EnumCategory>,
}

impl RegistryBuilder {
    /// Adds a root model.
    pub fn model(mut self, schema: &'static ModelSchema) -> Self {
        self.models.push(schema);
        self
    }

    /// Adds an enum category that no model field references.
    pub fn enum_category(mut self, category: &'static EnumCategory) -> Self {
        self.enums.push(category);
        self
    }

    /// Validates every reachable definition and builds the registry.
    ///
    /// ## Errors
    ///
    /// Returns an error if a model maps a name ambiguously, two different
    /// schemas share a name, or a regex pattern does not compile.
    pub fn build(self) -> Result<Registry, DefinitionError> {
        let mut registry = Registry::default();
        let mut pending = self.models;
        let mut categories = self.enums;

        while let Some(schema) = pending.pop() {
            if let Some(existing) = registry.models.get(schema.name) {
                if std::ptr::eq(*existing, schema) {
                    continue;
                }
                return Err(DefinitionError::DuplicateModel { name: schema.name });
            }
            schema.validate()?;

            for field in schema.fields {
                if let Some(pattern) = field.pattern {
                    pattern
                        .compiled()
                        .map_err(|e| DefinitionError::InvalidPattern {
                            pattern: pattern.name(),
                            message: e.to_string(),
                        })?;
                }
                collect_shape(&field.shape, &mut pending, &mut categories);
            }
            registry.models.insert(schema.name, schema);
        }

        for category in categories {
            if registry.enums.insert(category.name, category).is_some() {
                continue;
            }
            let duplicates = category.duplicates();
            if !duplicates.is_empty() {
                warn!(
                    category = category.name,
                    values = ?duplicates,
                    "Enum category declares duplicate values; treating them as one member"
                );
                registry.warnings.push(format!(
                    "{} declares duplicate values: {}",
                    category.name,
                    duplicates.join(", ")
                ));
            }
        }

        debug!(
            models = registry.models.len(),
            enums = registry.enums.len(),
            "Registry built"
        );
        Ok(registry)
    }
}

fn collect_shape(
    shape: &Shape,
    models: &mut Vec<&'static ModelSchema>,
    enums: &mut Vec<&'static EnumCategory>,
) {
    match shape {
        Shape::Object(schema) => models.push(*schema),
        Shape::Enum(category) => enums.push(*category),
        Shape::List(inner) | Shape::Map(inner) => collect_shape(inner, models, enums),
        Shape::Union(variants) => {
            for variant in *variants {
                collect_shape(&variant.shape, models, enums);
            }
        }
        Shape::String | Shape::Integer | Shape::Decimal | Shape::Boolean | Shape::Any => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDescriptor, Pattern, Variant};
    use serde_json::json;
    use tracing_test::traced_test;

    static STAGE: EnumCategory = EnumCategory {
        name: "Stage",
        values: &["QUEUED", "IN_PROGRESS", "IN_PROGRESS", "DONE"],
    };

    static KIND: EnumCategory = EnumCategory {
        name: "Kind",
        values: &["A", "B"],
    };

    static BAD_PATTERN: Pattern = Pattern::regex("bad", "[unclosed");

    static OWNER: ModelSchema = ModelSchema {
        name: "Owner",
        fields: &[FieldDescriptor::required("id_", "id", Shape::String)],
    };

    static OWNER_VARIANTS: [Variant; 2] = [
        Variant::new("owner_id", Shape::String),
        Variant::new("owner", Shape::Object(&OWNER)),
    ];

    static JOB: ModelSchema = ModelSchema {
        name: "Job",
        fields: &[
            FieldDescriptor::required("id_", "id", Shape::String),
            FieldDescriptor::required("stage", "stage", Shape::Enum(&STAGE)),
            FieldDescriptor::optional("owner", "owner", Shape::Union(&OWNER_VARIANTS)),
        ],
    };

    static BROKEN: ModelSchema = ModelSchema {
        name: "Broken",
        fields: &[FieldDescriptor::required("code", "code", Shape::String).with_pattern(&BAD_PATTERN)],
    };

    static IMPOSTOR: ModelSchema = ModelSchema {
        name: "Owner",
        fields: &[],
    };

    #[test]
    fn test_nested_definitions_are_registered() {
        let registry = Registry::builder().model(&JOB).build().unwrap();

        assert!(registry.model("Job").is_some());
        assert!(registry.model("Owner").is_some());
        assert!(registry.enum_category("Stage").is_some());
        assert_eq!(registry.models().count(), 2);
    }

    #[test]
    fn test_explicit_enum_is_registered() {
        let registry = Registry::builder().enum_category(&KIND).build().unwrap();
        assert!(registry.enum_category("Kind").is_some());
        assert!(registry.warnings().is_empty());
    }

    #[test]
    #[traced_test]
    fn test_duplicate_enum_values_are_flagged() {
        let registry = Registry::builder().model(&JOB).build().unwrap();

        assert_eq!(registry.warnings().len(), 1);
        assert!(registry.warnings()[0].contains("IN_PROGRESS"));
        assert!(logs_contain("duplicate values"));
    }

    #[test]
    fn test_invalid_pattern_fails_build() {
        let err = Registry::builder().model(&BROKEN).build().unwrap_err();
        assert!(matches!(err, DefinitionError::InvalidPattern { pattern: "bad", .. }));
    }

    #[test]
    fn test_same_name_different_schema_fails_build() {
        let err = Registry::builder()
            .model(&JOB)
            .model(&IMPOSTOR)
            .build()
            .unwrap_err();
        assert_eq!(err, DefinitionError::DuplicateModel { name: "Owner" });
    }

    #[test]
    fn test_registering_same_schema_twice_is_fine() {
        let registry = Registry::builder().model(&OWNER).model(&OWNER).build();
        assert!(registry.is_ok());
    }

    #[test]
    fn test_from_wire_by_name() {
        let registry = Registry::builder().model(&JOB).build().unwrap();

        let local = registry
            .from_wire("Job", &json!({"id": "job_1", "stage": "DONE"}))
            .unwrap();
        assert_eq!(local.get("id_"), Some(&json!("job_1")));

        let err = registry.from_wire("Nope", &json!({})).unwrap_err();
        assert_eq!(
            err,
            MapError::UnknownModel {
                name: "Nope".to_string()
            }
        );
    }
}
