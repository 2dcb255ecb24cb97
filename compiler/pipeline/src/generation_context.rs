//! Generation context for the pipeline.
//!
//! This module provides a unified context describing the target project:
//! where it lives, its root namespace, and where each kind of artifact goes.

use std::path::{Path, PathBuf};

use config::Config;
use naming::{NameDeriver, DEFAULT_MAX_FORM_ATTEMPTS, DEFAULT_ROOT_NAMESPACE};

use crate::PipelineError;

/// Context containing the project layout needed for generation
#[derive(Debug, Clone)]
pub struct GenerationContext {
    /// Root directory of the target project
    pub project_root: PathBuf,
    /// Root namespace of the application (e.g. "App")
    pub root_namespace: String,
    /// Directory mapped to the root namespace
    pub source_dir: PathBuf,
    /// Directory receiving the TypeScript artifacts
    pub generated_dir: PathBuf,
    /// Entity catalog file
    pub catalog_path: PathBuf,
    /// How many form class names are probed before giving up
    pub max_form_attempts: usize,
}

impl GenerationContext {
    /// Create a new builder for GenerationContext
    pub fn builder() -> GenerationContextBuilder { GenerationContextBuilder::default() }

    /// Build the context for `project_root` from a loaded configuration
    pub fn from_config(project_root: &Path, config: &Config) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            root_namespace: config.project.namespace.clone(),
            source_dir: config.source_dir(project_root),
            generated_dir: config.generated_dir(project_root),
            catalog_path: config.catalog_path(project_root),
            max_form_attempts: config.codegen.max_form_name_attempts,
        }
    }

    /// Name deriver configured for this project
    pub fn name_deriver(&self) -> NameDeriver {
        NameDeriver::new(self.root_namespace.as_str(), self.max_form_attempts)
    }

    /// Namespace entities live in (e.g. "App\Entity")
    pub fn entity_namespace(&self) -> String { self.name_deriver().entity_namespace() }

    /// Path of the interface file for an entity variable name
    pub fn interface_path(&self, entity_var_singular: &str) -> PathBuf {
        self.generated_dir.join("interface").join(format!("{}.interface.ts", entity_var_singular))
    }

    /// Path of the Angular data service for an entity variable name
    pub fn data_service_path(&self, entity_var_singular: &str) -> PathBuf {
        self.generated_dir.join("angular").join(format!("{}-data.service.ts", entity_var_singular))
    }

    /// Path of the abstract service shared by all data services
    pub fn shared_base_service_path(&self) -> PathBuf {
        self.generated_dir.join("angular").join("abstract-symfony-data.service.ts")
    }
}

#[derive(Default)]
/// Builder for GenerationContext
pub struct GenerationContextBuilder {
    /// Root directory of the target project
    project_root: Option<PathBuf>,
    /// Root namespace of the application
    root_namespace: Option<String>,
    /// Directory mapped to the root namespace
    source_dir: Option<PathBuf>,
    /// Directory receiving the TypeScript artifacts
    generated_dir: Option<PathBuf>,
    /// Entity catalog file
    catalog_path: Option<PathBuf>,
    /// Form class name attempt cap
    max_form_attempts: Option<usize>,
}

impl GenerationContextBuilder {
    /// Set the project root
    pub fn project_root(mut self, dir: impl Into<PathBuf>) -> Self {
        self.project_root = Some(dir.into());
        self
    }

    /// Set the root namespace
    pub fn root_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.root_namespace = Some(namespace.into());
        self
    }

    /// Set the source directory (relative paths are resolved against the project root)
    pub fn source_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.source_dir = Some(dir.into());
        self
    }

    /// Set the generated directory (relative paths are resolved against the project root)
    pub fn generated_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.generated_dir = Some(dir.into());
        self
    }

    /// Set the catalog path (relative paths are resolved against the project root)
    pub fn catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    /// Set the form class name attempt cap
    pub fn max_form_attempts(mut self, attempts: usize) -> Self {
        self.max_form_attempts = Some(attempts);
        self
    }

    /// Build the GenerationContext
    pub fn build(self) -> Result<GenerationContext, PipelineError> {
        let project_root = self
            .project_root
            .ok_or_else(|| PipelineError::Message("project_root is required".to_string()))?;
        let resolve = |dir: Option<PathBuf>, default: &str| {
            project_root.join(dir.unwrap_or_else(|| PathBuf::from(default)))
        };

        Ok(GenerationContext {
            source_dir: resolve(self.source_dir, "src"),
            generated_dir: resolve(self.generated_dir, "generated"),
            catalog_path: resolve(self.catalog_path, "config/entities.json"),
            root_namespace: self
                .root_namespace
                .unwrap_or_else(|| DEFAULT_ROOT_NAMESPACE.to_string()),
            max_form_attempts: self.max_form_attempts.unwrap_or(DEFAULT_MAX_FORM_ATTEMPTS),
            project_root,
        })
    }
}
