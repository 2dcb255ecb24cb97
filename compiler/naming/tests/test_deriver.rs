use std::collections::HashSet;

use naming::{derive_names, NameDeriver, NamingError};

fn existing(classes: &[&str]) -> impl Fn(&str) -> bool {
    let set: HashSet<String> = classes.iter().map(|c| c.to_string()).collect();
    move |class: &str| set.contains(class)
}

#[test]
fn test_names_for_simple_entity() {
    let names = derive_names("Product", existing(&[])).expect("names");

    assert_eq!(names.controller.full_name(), "App\\Controller\\ProductController");
    assert_eq!(names.form.full_name(), "App\\Form\\ProductType");
    assert_eq!(names.route_name, "product");
    assert_eq!(names.route_path, "/product");
    assert_eq!(names.route_slug(), "product");
    assert_eq!(names.templates_path, "product");
    assert_eq!(names.repository.var, "productRepository");
    assert!(names.repository.class.is_none());
}

#[test]
fn test_names_for_compound_entity() {
    let names = derive_names("BlogPost", existing(&[])).expect("names");

    assert_eq!(names.route_name, "blog_post");
    assert_eq!(names.route_path, "/blog-post");
    assert_eq!(names.templates_path, "blog_post");
    assert_eq!(names.form.short_name(), "BlogPostType");
}

#[test]
fn test_form_name_skips_existing_classes() {
    let probe = existing(&["App\\Form\\FooType", "App\\Form\\Foo1Type"]);
    let names = derive_names("Foo", probe).expect("names");
    assert_eq!(names.form.full_name(), "App\\Form\\Foo2Type");
}

#[test]
fn test_form_name_is_deterministic() {
    let first = derive_names("Foo", existing(&["App\\Form\\FooType"])).expect("names");
    let second = derive_names("Foo", existing(&["App\\Form\\FooType"])).expect("names");
    assert_eq!(first, second);
    assert_eq!(first.form.short_name(), "Foo1Type");
}

#[test]
fn test_form_name_exhausted() {
    let deriver = NameDeriver::new("App", 3);
    let entity = deriver.describe_entity("App\\Entity\\Foo", "id").expect("entity");
    let probe = |_: &str| true;

    let err = deriver.derive(&entity, None, &probe).expect_err("every candidate is taken");
    assert_eq!(err, NamingError::FormNameExhausted { base: "FooType".to_string(), attempts: 3 });
}

#[test]
fn test_zero_attempts_still_probes_once() {
    let deriver = NameDeriver::new("App", 0);
    let entity = deriver.describe_entity("App\\Entity\\Foo", "id").expect("entity");
    let probe = |_: &str| false;

    let names = deriver.derive(&entity, None, &probe).expect("names");
    assert_eq!(names.form.short_name(), "FooType");
}

#[test]
fn test_entity_variables() {
    let deriver = NameDeriver::default();

    let product = deriver.describe_entity("App\\Entity\\Product", "id").expect("entity");
    assert_eq!(product.var_plural, "products");
    assert_eq!(product.var_singular, "product");
    assert_eq!(product.identifier, "id");

    let category = deriver.describe_entity("\\App\\Entity\\Category", "uuid").expect("entity");
    assert_eq!(category.var_plural, "categories");
    assert_eq!(category.var_singular, "category");
    assert_eq!(category.identifier, "uuid");
}

#[test]
fn test_entity_variables_for_double_s_names() {
    let deriver = NameDeriver::default();

    let address = deriver.describe_entity("App\\Entity\\Address", "id").expect("entity");
    assert_eq!(address.var_singular, "address");
    assert_eq!(address.var_plural, "addresses");

    let process = deriver.describe_entity("App\\Entity\\Process", "id").expect("entity");
    assert_eq!(process.var_singular, "process");
    assert_eq!(process.var_plural, "processes");
}

#[test]
fn test_namespaced_entity() {
    let deriver = NameDeriver::default();
    let entity = deriver.describe_entity("App\\Entity\\Admin\\BlogPost", "id").expect("entity");
    let probe = |_: &str| false;
    let names = deriver.derive(&entity, None, &probe).expect("names");

    assert_eq!(names.controller.full_name(), "App\\Controller\\Admin\\BlogPostController");
    assert_eq!(names.form.full_name(), "App\\Form\\Admin\\BlogPostType");
    assert_eq!(names.route_name, "admin_blog_post");
    assert_eq!(names.route_path, "/admin/blog-post");
    assert_eq!(names.templates_path, "admin/blog_post");
}

#[test]
fn test_custom_repository() {
    let deriver = NameDeriver::default();
    let entity = deriver.describe_entity("App\\Entity\\Product", "id").expect("entity");
    let probe = |_: &str| false;
    let names = deriver
        .derive(&entity, Some("App\\Repository\\ProductRepository"), &probe)
        .expect("names");

    let class = names.repository.class.expect("repository class");
    assert_eq!(class.full_name(), "App\\Repository\\ProductRepository");
    assert_eq!(names.repository.var, "productRepository");
}

#[test]
fn test_invalid_entity_class() {
    let deriver = NameDeriver::default();
    let err = deriver.describe_entity("App\\Entity\\2Fast", "id").expect_err("invalid");
    assert!(matches!(err, NamingError::InvalidClassName { .. }));
}
