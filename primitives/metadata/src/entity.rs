//! Entity, field and association descriptors.

use serde::{Deserialize, Serialize};

/// Separator between namespace segments of a fully-qualified class name.
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Returns the last segment of a fully-qualified class name.
///
/// ```
/// use metadata::short_class_name;
/// assert_eq!(short_class_name("App\\Entity\\Category"), "Category");
/// assert_eq!(short_class_name("Category"), "Category");
/// ```
pub fn short_class_name(class: &str) -> &str {
    class.rsplit(NAMESPACE_SEPARATOR).next().unwrap_or(class)
}

/// A scalar (column-backed) entity attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMapping {
    /// Attribute name on the entity.
    pub field_name: String,
    /// Raw storage type tag (e.g. `string`, `integer`, `datetime`).
    #[serde(rename = "type")]
    pub type_: String,
}

impl FieldMapping {
    /// Create a field mapping from a name and storage type tag.
    pub fn new(field_name: impl Into<String>, type_: impl Into<String>) -> Self {
        Self { field_name: field_name.into(), type_: type_.into() }
    }
}

/// Cardinality of an association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AssociationKind {
    /// One-to-one
    OneToOne,
    /// Many-to-one
    #[default]
    ManyToOne,
    /// One-to-many (always the inverse side)
    OneToMany,
    /// Many-to-many
    ManyToMany,
}

/// A relation from one entity to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssociationMapping {
    /// Attribute name holding the relation.
    pub field_name: String,
    /// Fully-qualified class name of the related entity.
    pub target_entity: String,
    /// Whether this side stores the foreign-key reference.
    #[serde(default)]
    pub is_owning_side: bool,
    /// Relation cardinality.
    #[serde(default, rename = "type")]
    pub kind: AssociationKind,
}

impl AssociationMapping {
    /// Create an association mapping.
    pub fn new(
        field_name: impl Into<String>,
        target_entity: impl Into<String>,
        is_owning_side: bool,
        kind: AssociationKind,
    ) -> Self {
        Self {
            field_name: field_name.into(),
            target_entity: target_entity.into(),
            is_owning_side,
            kind,
        }
    }

    /// Short class name of the related entity.
    pub fn target_short_name(&self) -> &str { short_class_name(&self.target_entity) }
}

fn default_identifier() -> String { "id".to_string() }

/// Everything the generator needs to know about one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMetadata {
    /// Fully-qualified class name (e.g. `App\Entity\Product`).
    pub class: String,
    /// Identifier field name.
    #[serde(default = "default_identifier")]
    pub identifier: String,
    /// Whether the identifier is assigned by the application rather than generated.
    #[serde(default)]
    pub natural_identifier: bool,
    /// Custom repository class, if the entity declares one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository_class: Option<String>,
    /// Scalar fields, in declaration order.
    #[serde(default)]
    pub fields: Vec<FieldMapping>,
    /// Associations, in declaration order.
    #[serde(default)]
    pub associations: Vec<AssociationMapping>,
}

impl EntityMetadata {
    /// Create metadata for `class` with an `id` identifier and no fields.
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            identifier: default_identifier(),
            natural_identifier: false,
            repository_class: None,
            fields: Vec::new(),
            associations: Vec::new(),
        }
    }

    /// Append a scalar field.
    pub fn with_field(mut self, name: impl Into<String>, type_: impl Into<String>) -> Self {
        self.fields.push(FieldMapping::new(name, type_));
        self
    }

    /// Append an association.
    pub fn with_association(mut self, association: AssociationMapping) -> Self {
        self.associations.push(association);
        self
    }

    /// Set the repository class.
    pub fn with_repository(mut self, repository_class: impl Into<String>) -> Self {
        self.repository_class = Some(repository_class.into());
        self
    }

    /// Short class name of the entity.
    pub fn short_name(&self) -> &str { short_class_name(&self.class) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_defaults_from_json() {
        let json = r#"{ "class": "App\\Entity\\Tag" }"#;
        let entity: EntityMetadata = serde_json::from_str(json).expect("valid entity json");
        assert_eq!(entity.identifier, "id");
        assert!(!entity.natural_identifier);
        assert!(entity.repository_class.is_none());
        assert!(entity.fields.is_empty());
        assert!(entity.associations.is_empty());
        assert_eq!(entity.short_name(), "Tag");
    }

    #[test]
    fn test_association_json_shape() {
        let json = r#"{
            "fieldName": "comments",
            "targetEntity": "App\\Entity\\Comment",
            "isOwningSide": false,
            "type": "one_to_many"
        }"#;
        let assoc: AssociationMapping = serde_json::from_str(json).expect("valid association");
        assert_eq!(assoc.field_name, "comments");
        assert_eq!(assoc.target_short_name(), "Comment");
        assert_eq!(assoc.kind, AssociationKind::OneToMany);
        assert!(!assoc.is_owning_side);
    }

    #[test]
    fn test_association_kind_defaults_to_many_to_one() {
        let json = r#"{ "fieldName": "owner", "targetEntity": "App\\Entity\\User" }"#;
        let assoc: AssociationMapping = serde_json::from_str(json).expect("valid association");
        assert_eq!(assoc.kind, AssociationKind::ManyToOne);
        assert!(!assoc.is_owning_side);
    }
}
