//! Pipeline orchestration for the main entry points.
//!
//! This module runs one generation: resolve the entity, derive names, stage
//! every requested artifact, then commit the batch.

use std::path::PathBuf;

use metadata::{EntityCatalog, MetadataSource};
use naming::ClassProbe;
use tracing::{debug, info, warn};

use crate::artifacts::{artifacts, GenerationPlan};
use crate::class_index::ProjectClassIndex;
use crate::generation_context::GenerationContext;
use crate::generator::Generator;
use crate::Result;

/// What to generate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationRequest {
    /// Entity name, relative to the entity namespace or fully qualified
    pub entity: String,
    /// Generate the TypeScript interface
    pub interface: bool,
    /// Generate the Angular data service
    pub angular: bool,
    /// Also generate the shared abstract service (requires `angular`)
    pub angular_base: bool,
}

impl GenerationRequest {
    /// Request the controller and form of `entity` only
    pub fn new(entity: impl Into<String>) -> Self {
        Self { entity: entity.into(), ..Self::default() }
    }

    /// Toggle the TypeScript interface
    pub fn interface(mut self, enabled: bool) -> Self {
        self.interface = enabled;
        self
    }

    /// Toggle the Angular data service
    pub fn angular(mut self, enabled: bool) -> Self {
        self.angular = enabled;
        self
    }

    /// Toggle the shared abstract service
    pub fn angular_base(mut self, enabled: bool) -> Self {
        self.angular_base = enabled;
        self
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    /// Fully-qualified entity class
    pub entity_class: String,
    /// Route path of the generated controller (e.g. "/blog-post")
    pub route_path: String,
    /// Files written, in emission order
    pub written: Vec<PathBuf>,
    /// Shared files that already existed and were left alone
    pub skipped: Vec<PathBuf>,
}

/// Run one generation against an explicit metadata source and class probe.
///
/// An unknown entity is rejected before anything else happens. Files are only
/// written once every requested artifact rendered and staged successfully.
///
/// # Returns
///
/// Returns `Result<GenerationReport>` with the route path and written files
pub fn run(
    ctx: &GenerationContext,
    source: &dyn MetadataSource,
    probe: &dyn ClassProbe,
    request: &GenerationRequest,
) -> Result<GenerationReport> {
    let metadata = source.resolve(&request.entity, &ctx.entity_namespace())?;
    info!(entity = %metadata.class, "generating API scaffolding");

    if request.angular_base && !request.angular {
        warn!("--angular-base has no effect without --angular");
    }

    let deriver = ctx.name_deriver();
    let entity = deriver.describe_entity(&metadata.class, &metadata.identifier)?;
    let names = deriver.derive(&entity, metadata.repository_class.as_deref(), probe)?;
    debug!(
        controller = names.controller.full_name(),
        form = names.form.full_name(),
        route = %names.route_path,
        "derived names"
    );

    let plan = GenerationPlan { ctx, request, metadata, entity, names };
    let mut generator = Generator::new(&ctx.project_root, &ctx.root_namespace, &ctx.source_dir);

    for artifact in artifacts() {
        if !artifact.is_requested(request) {
            continue;
        }
        let path = artifact.generate(&plan, &mut generator)?;
        debug!(artifact = artifact.artifact_name(), path = %path.display(), "artifact ready");
    }

    let report = generator.write_changes()?;
    info!(files = report.written.len(), "generation complete");

    Ok(GenerationReport {
        entity_class: plan.metadata.class.clone(),
        route_path: plan.names.route_path,
        written: report.written,
        skipped: report.skipped,
    })
}

/// Run one generation for the project described by `ctx`.
///
/// Loads the entity catalog from `ctx.catalog_path` and indexes the classes
/// under `ctx.source_dir` to avoid form class collisions.
pub fn run_in_project(
    ctx: &GenerationContext,
    request: &GenerationRequest,
) -> Result<GenerationReport> {
    let catalog = EntityCatalog::from_file(&ctx.catalog_path)?;
    // Unknown entities are rejected before the source tree is walked
    catalog.resolve(&request.entity, &ctx.entity_namespace())?;
    let index = ProjectClassIndex::scan(&ctx.source_dir)?;
    run(ctx, &catalog, &index, request)
}
