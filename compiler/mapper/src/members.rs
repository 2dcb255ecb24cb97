//! Interface members and form fields selected from entity metadata.

use metadata::{AssociationKind, EntityMetadata};

use crate::{OutputType, TypeAdapter};

/// One member of a generated client interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceMember {
    /// Member name, the entity's field name.
    pub name: String,
    /// Mapped output type.
    pub type_: OutputType,
}

impl InterfaceMember {
    /// Create an interface member.
    pub fn new(name: impl Into<String>, type_: OutputType) -> Self {
        Self { name: name.into(), type_ }
    }
}

/// One field bound by a generated form type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    /// Field name.
    pub name: String,
    /// Related entity class for association fields.
    pub target_entity: Option<String>,
}

/// Build the ordered interface member list of an entity.
///
/// Associations come first in metadata order, followed by the scalar fields
/// in metadata order.
pub fn collect_interface_members(
    metadata: &EntityMetadata,
    adapter: &dyn TypeAdapter,
) -> Vec<InterfaceMember> {
    let associations = metadata.associations.iter().map(|association| {
        InterfaceMember::new(
            &association.field_name,
            adapter
                .map_association_type(association.target_short_name(), association.is_owning_side),
        )
    });

    let fields = metadata
        .fields
        .iter()
        .map(|field| InterfaceMember::new(&field.field_name, adapter.map_field_type(&field.type_)));

    associations.chain(fields).collect()
}

/// Fields bound by the generated form type.
///
/// The identifier is left out unless it is a natural identifier. One-to-many
/// associations are never bound since the form edits the owning side only.
pub fn form_fields(metadata: &EntityMetadata) -> Vec<FormField> {
    let fields = metadata
        .fields
        .iter()
        .filter(|field| metadata.natural_identifier || field.field_name != metadata.identifier)
        .map(|field| FormField { name: field.field_name.clone(), target_entity: None });

    let associations = metadata
        .associations
        .iter()
        .filter(|association| association.kind != AssociationKind::OneToMany)
        .map(|association| FormField {
            name: association.field_name.clone(),
            target_entity: Some(association.target_entity.clone()),
        });

    fields.chain(associations).collect()
}
