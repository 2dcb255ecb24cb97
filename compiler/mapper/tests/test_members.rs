use mapper::{collect_interface_members, form_fields, OutputType, TypeScriptAdapter};
use metadata::{AssociationKind, AssociationMapping, EntityMetadata};

fn create_test_product() -> EntityMetadata {
    EntityMetadata::new("App\\Entity\\Product")
        .with_field("id", "integer")
        .with_field("title", "string")
        .with_field("price", "double")
}

fn member_tags(metadata: &EntityMetadata) -> Vec<(String, String)> {
    collect_interface_members(metadata, &TypeScriptAdapter)
        .into_iter()
        .map(|member| (member.name, member.type_.to_string()))
        .collect()
}

#[test]
fn test_scalar_members_keep_metadata_order() {
    let product = EntityMetadata::new("App\\Entity\\Product")
        .with_field("title", "string")
        .with_field("price", "double");

    assert_eq!(
        member_tags(&product),
        vec![
            ("title".to_string(), "string".to_string()),
            ("price".to_string(), "number".to_string())
        ]
    );
}

#[test]
fn test_associations_come_before_fields() {
    let product = create_test_product()
        .with_association(AssociationMapping::new(
            "category",
            "App\\Entity\\Category",
            true,
            AssociationKind::ManyToOne,
        ))
        .with_association(AssociationMapping::new(
            "reviews",
            "App\\Entity\\Review",
            false,
            AssociationKind::OneToMany,
        ));

    let members = collect_interface_members(&product, &TypeScriptAdapter);
    let names: Vec<&str> = members.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, ["category", "reviews", "id", "title", "price"]);
    assert_eq!(members[0].type_, OutputType::Entity("Category".to_string()));
    assert_eq!(members[1].type_.to_string(), "Review[]");
}

#[test]
fn test_unknown_field_type_maps_to_any() {
    let entity = EntityMetadata::new("App\\Entity\\Setting").with_field("payload", "json");
    assert_eq!(member_tags(&entity), vec![("payload".to_string(), "any".to_string())]);
}

#[test]
fn test_form_fields_skip_generated_identifier() {
    let names: Vec<String> =
        form_fields(&create_test_product()).into_iter().map(|field| field.name).collect();
    assert_eq!(names, ["title", "price"]);
}

#[test]
fn test_form_fields_keep_natural_identifier() {
    let mut country = EntityMetadata::new("App\\Entity\\Country").with_field("code", "string");
    country.identifier = "code".to_string();
    country.natural_identifier = true;

    let names: Vec<String> = form_fields(&country).into_iter().map(|field| field.name).collect();
    assert_eq!(names, ["code"]);
}

#[test]
fn test_form_fields_skip_one_to_many() {
    let product = create_test_product()
        .with_association(AssociationMapping::new(
            "reviews",
            "App\\Entity\\Review",
            false,
            AssociationKind::OneToMany,
        ))
        .with_association(AssociationMapping::new(
            "tags",
            "App\\Entity\\Tag",
            true,
            AssociationKind::ManyToMany,
        ));

    let fields = form_fields(&product);
    let names: Vec<&str> = fields.iter().map(|field| field.name.as_str()).collect();
    assert_eq!(names, ["title", "price", "tags"]);
    assert_eq!(fields[2].target_entity.as_deref(), Some("App\\Entity\\Tag"));
    assert_eq!(fields[0].target_entity, None);
}

#[test]
fn test_members_from_catalog_json() {
    let json = r#"{
        "class": "App\\Entity\\Order",
        "fields": [{ "fieldName": "placedAt", "type": "datetime" }],
        "associations": [
            { "fieldName": "customer", "targetEntity": "App\\Entity\\Customer", "isOwningSide": true }
        ]
    }"#;
    let order: EntityMetadata = serde_json::from_str(json).expect("valid entity json");

    assert_eq!(
        member_tags(&order),
        vec![
            ("customer".to_string(), "Customer".to_string()),
            ("placedAt".to_string(), "Date".to_string()),
        ]
    );
}
