use std::fs;
use std::path::Path;

use metadata::{AssociationKind, AssociationMapping, EntityCatalog, EntityMetadata, MetadataError};
use pipeline::{run, run_in_project, GenerationContext, GenerationRequest, PipelineError};

fn create_test_catalog() -> EntityCatalog {
    EntityCatalog::new(vec![
        EntityMetadata::new("App\\Entity\\Product")
            .with_field("title", "string")
            .with_field("price", "double"),
        EntityMetadata::new("App\\Entity\\BlogPost")
            .with_repository("App\\Repository\\BlogPostRepository")
            .with_field("id", "integer")
            .with_field("headline", "string")
            .with_association(AssociationMapping::new(
                "author",
                "App\\Entity\\User",
                true,
                AssociationKind::ManyToOne,
            )),
    ])
    .expect("valid catalog")
}

fn create_test_project(root: &Path) -> GenerationContext {
    let ctx = GenerationContext::builder().project_root(root).build().expect("context");
    fs::create_dir_all(ctx.catalog_path.parent().expect("catalog dir")).expect("create config dir");
    create_test_catalog().to_file(&ctx.catalog_path).expect("write catalog");
    ctx
}

fn nothing_exists(_: &str) -> bool { false }

#[test]
fn test_full_run_writes_every_artifact() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let ctx = create_test_project(temp_dir.path());
    let request =
        GenerationRequest::new("Product").interface(true).angular(true).angular_base(true);

    let report = run(&ctx, &create_test_catalog(), &nothing_exists, &request).expect("run");

    let root = temp_dir.path();
    assert_eq!(report.entity_class, "App\\Entity\\Product");
    assert_eq!(report.route_path, "/product");
    assert_eq!(
        report.written,
        vec![
            root.join("src/Controller/ProductController.php"),
            root.join("src/Form/ProductType.php"),
            root.join("generated/interface/product.interface.ts"),
            root.join("generated/angular/product-data.service.ts"),
            root.join("generated/angular/abstract-symfony-data.service.ts"),
        ]
    );
    assert!(report.skipped.is_empty());

    let interface = fs::read_to_string(root.join("generated/interface/product.interface.ts"))
        .expect("read interface");
    assert_eq!(
        interface,
        "export interface Product {\n    title: string;\n    price: number;\n}\n"
    );

    let controller = fs::read_to_string(root.join("src/Controller/ProductController.php"))
        .expect("read controller");
    assert!(controller.contains("getRepository(Product::class)"));
}

#[test]
fn test_controller_and_form_only_by_default() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let ctx = create_test_project(temp_dir.path());

    let request = GenerationRequest::new("BlogPost");
    let report = run(&ctx, &create_test_catalog(), &nothing_exists, &request).expect("run");

    assert_eq!(report.route_path, "/blog-post");
    assert_eq!(report.written.len(), 2);
    assert!(!temp_dir.path().join("generated").exists());

    let controller =
        fs::read_to_string(temp_dir.path().join("src/Controller/BlogPostController.php"))
            .expect("read controller");
    assert!(controller.contains("use App\\Repository\\BlogPostRepository;"));
    assert!(controller.contains("name=\"blog_post_show\""));
}

#[test]
fn test_unknown_entity_writes_nothing() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let ctx = create_test_project(temp_dir.path());
    let request = GenerationRequest::new("Invoice").interface(true);

    let err = run(&ctx, &create_test_catalog(), &nothing_exists, &request).expect_err("unknown");
    match err {
        PipelineError::Metadata(MetadataError::UnknownEntity { name }) => {
            assert_eq!(name, "Invoice")
        }
        other => panic!("Expected UnknownEntity error, got {:?}", other),
    }
    assert!(!temp_dir.path().join("src").exists());
    assert!(!temp_dir.path().join("generated").exists());
}

#[test]
fn test_failing_interface_commits_nothing() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let ctx = create_test_project(temp_dir.path());
    let interface = ctx.interface_path("product");
    fs::create_dir_all(interface.parent().expect("interface dir")).expect("create interface dir");
    fs::write(&interface, "// hand written\n").expect("write existing interface");

    let request = GenerationRequest::new("Product").interface(true);
    let err = run(&ctx, &create_test_catalog(), &nothing_exists, &request).expect_err("exists");

    assert!(matches!(err, PipelineError::FileExists { ref path } if *path == interface));
    assert!(!temp_dir.path().join("src/Controller/ProductController.php").exists());
    assert!(!temp_dir.path().join("src/Form/ProductType.php").exists());
    assert_eq!(fs::read_to_string(&interface).expect("read interface"), "// hand written\n");
}

#[test]
fn test_failed_commit_rolls_back_written_files() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let ctx = create_test_project(temp_dir.path());
    // A plain file where the generated directory should be
    fs::write(temp_dir.path().join("generated"), "").expect("write blocker");

    let request = GenerationRequest::new("Product").interface(true);
    let err = run(&ctx, &create_test_catalog(), &nothing_exists, &request).expect_err("blocked");

    assert!(matches!(err, PipelineError::Commit { .. }));
    assert!(!temp_dir.path().join("src").exists());
}

#[test]
fn test_existing_shared_base_is_skipped() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let ctx = create_test_project(temp_dir.path());
    let base = ctx.shared_base_service_path();
    fs::create_dir_all(base.parent().expect("angular dir")).expect("create angular dir");
    fs::write(&base, "// customised\n").expect("write base");

    let request = GenerationRequest::new("Product").angular(true).angular_base(true);
    let report = run(&ctx, &create_test_catalog(), &nothing_exists, &request).expect("run");

    assert_eq!(report.skipped, vec![base.clone()]);
    assert!(report.written.contains(&ctx.data_service_path("product")));
    assert_eq!(fs::read_to_string(&base).expect("read base"), "// customised\n");
}

#[test]
fn test_angular_base_requires_angular() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let ctx = create_test_project(temp_dir.path());

    let request = GenerationRequest::new("Product").angular_base(true);
    let report = run(&ctx, &create_test_catalog(), &nothing_exists, &request).expect("run");

    assert_eq!(report.written.len(), 2);
    assert!(!ctx.shared_base_service_path().exists());
}

#[test]
fn test_run_in_project_avoids_existing_form_class() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let ctx = create_test_project(temp_dir.path());
    let form_dir = ctx.source_dir.join("Form");
    fs::create_dir_all(&form_dir).expect("create form dir");
    fs::write(
        form_dir.join("ProductType.php"),
        "<?php\n\nnamespace App\\Form;\n\nclass ProductType\n{\n}\n",
    )
    .expect("write existing form");

    let request = GenerationRequest::new("App\\Entity\\Product");
    let report = run_in_project(&ctx, &request).expect("run");

    assert!(report.written.contains(&form_dir.join("Product1Type.php")));
    let controller = fs::read_to_string(ctx.source_dir.join("Controller/ProductController.php"))
        .expect("read controller");
    assert!(controller.contains("use App\\Form\\Product1Type;"));
    assert!(controller.contains("Product1Type::class"));
}

#[test]
fn test_run_in_project_without_catalog() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let ctx = GenerationContext::builder().project_root(temp_dir.path()).build().expect("context");

    let err = run_in_project(&ctx, &GenerationRequest::new("Product")).expect_err("no catalog");
    assert!(matches!(err, PipelineError::Metadata(MetadataError::Io(_))));
}

fn create_latin1_source(ctx: &GenerationContext) {
    let legacy_dir = ctx.source_dir.join("Legacy");
    fs::create_dir_all(&legacy_dir).expect("create legacy dir");
    let mut source = b"<?php\n\nnamespace App\\Legacy;\n\n// caf".to_vec();
    source.push(0xE9);
    source.extend_from_slice(b"\nclass Old\n{\n}\n");
    fs::write(legacy_dir.join("Old.php"), source).expect("write latin-1 source");
}

#[test]
fn test_run_in_project_with_non_utf8_source() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let ctx = create_test_project(temp_dir.path());
    create_latin1_source(&ctx);

    let report = run_in_project(&ctx, &GenerationRequest::new("Product")).expect("run");

    assert!(report.written.contains(&ctx.source_dir.join("Form/ProductType.php")));
}

#[test]
fn test_run_in_project_rejects_unknown_entity_first() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
    let ctx = create_test_project(temp_dir.path());
    create_latin1_source(&ctx);

    let err = run_in_project(&ctx, &GenerationRequest::new("Invoice")).expect_err("unknown");

    assert!(matches!(err, PipelineError::Metadata(MetadataError::UnknownEntity { .. })));
    assert!(!ctx.source_dir.join("Controller").exists());
}
