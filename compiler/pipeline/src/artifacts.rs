//! Artifact generators for the pipeline.
//!
//! Each generator renders one output file and stages it in the
//! [`Generator`] buffer. [`artifacts`] lists them in emission order.

use std::path::PathBuf;

use codegen::{
    ControllerGenerator, DataServiceGenerator, FormGenerator, InterfaceGenerator,
    SharedBaseServiceGenerator, SourceGenerator,
};
use mapper::{collect_interface_members, form_fields, TypeAdapter, TypeScriptAdapter};
use metadata::EntityMetadata;
use naming::{EntityDescriptor, NameSet};
use tracing::debug;

use crate::generation_context::GenerationContext;
use crate::generator::Generator;
use crate::orchestration::GenerationRequest;
use crate::Result;

/// Everything known about the entity once names are derived.
pub struct GenerationPlan<'a> {
    /// Project layout.
    pub ctx: &'a GenerationContext,
    /// What the caller asked for.
    pub request: &'a GenerationRequest,
    /// Entity metadata from the catalog.
    pub metadata: &'a EntityMetadata,
    /// Entity class and variable names.
    pub entity: EntityDescriptor,
    /// Derived class, route and repository names.
    pub names: NameSet,
}

/// Trait for generating one artifact
pub trait ArtifactGenerator {
    /// Name of the artifact, for logging
    fn artifact_name(&self) -> &str;

    /// Whether the request asks for this artifact
    fn is_requested(&self, _request: &GenerationRequest) -> bool { true }

    /// Render the artifact and stage it, returning the target path
    fn generate(&self, plan: &GenerationPlan<'_>, generator: &mut Generator) -> Result<PathBuf>;
}

/// Generator for the CRUD controller
pub struct ControllerArtifact;

impl ArtifactGenerator for ControllerArtifact {
    fn artifact_name(&self) -> &str { "controller" }

    fn generate(&self, plan: &GenerationPlan<'_>, generator: &mut Generator) -> Result<PathBuf> {
        let source = ControllerGenerator::new(&plan.entity, &plan.names).generate()?;
        generator.generate_class(plan.names.controller.full_name(), source)
    }
}

/// Generator for the form type
pub struct FormArtifact;

impl ArtifactGenerator for FormArtifact {
    fn artifact_name(&self) -> &str { "form" }

    fn generate(&self, plan: &GenerationPlan<'_>, generator: &mut Generator) -> Result<PathBuf> {
        let fields = form_fields(plan.metadata);
        let source = FormGenerator::new(&plan.entity, &plan.names.form, &fields).generate()?;
        generator.generate_class(plan.names.form.full_name(), source)
    }
}

/// Generator for the TypeScript interface
pub struct InterfaceArtifact;

impl ArtifactGenerator for InterfaceArtifact {
    fn artifact_name(&self) -> &str { "interface" }

    fn is_requested(&self, request: &GenerationRequest) -> bool { request.interface }

    fn generate(&self, plan: &GenerationPlan<'_>, generator: &mut Generator) -> Result<PathBuf> {
        let adapter = TypeScriptAdapter;
        let members = collect_interface_members(plan.metadata, &adapter);
        debug!(language = adapter.language_name(), members = members.len(), "mapped members");
        let source = InterfaceGenerator::new(plan.entity.class.short_name(), &members).generate()?;
        generator.generate_file(plan.ctx.interface_path(&plan.entity.var_singular), source)
    }
}

/// Generator for the Angular data service
pub struct DataServiceArtifact;

impl ArtifactGenerator for DataServiceArtifact {
    fn artifact_name(&self) -> &str { "data service" }

    fn is_requested(&self, request: &GenerationRequest) -> bool { request.angular }

    fn generate(&self, plan: &GenerationPlan<'_>, generator: &mut Generator) -> Result<PathBuf> {
        let source = DataServiceGenerator::new(
            plan.entity.class.short_name(),
            plan.names.route_slug(),
            plan.request.interface,
        )
        .generate()?;
        generator.generate_file(plan.ctx.data_service_path(&plan.entity.var_singular), source)
    }
}

/// Generator for the abstract service shared by all data services
pub struct SharedBaseServiceArtifact;

impl ArtifactGenerator for SharedBaseServiceArtifact {
    fn artifact_name(&self) -> &str { "shared base service" }

    fn is_requested(&self, request: &GenerationRequest) -> bool {
        request.angular && request.angular_base
    }

    fn generate(&self, plan: &GenerationPlan<'_>, generator: &mut Generator) -> Result<PathBuf> {
        let source = SharedBaseServiceGenerator.generate()?;
        generator.generate_shared_file(plan.ctx.shared_base_service_path(), source)
    }
}

/// All artifact generators in emission order
pub fn artifacts() -> Vec<Box<dyn ArtifactGenerator>> {
    vec![
        Box::new(ControllerArtifact),
        Box::new(FormArtifact),
        Box::new(InterfaceArtifact),
        Box::new(DataServiceArtifact),
        Box::new(SharedBaseServiceArtifact),
    ]
}
