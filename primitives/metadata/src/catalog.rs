//! Entity catalog: an in-memory database of entity metadata.
//!
//! The catalog is the source of truth for which entities exist and what they
//! look like. It is loaded from a JSON file once per run and is read-only
//! afterwards.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entity::{EntityMetadata, NAMESPACE_SEPARATOR};
use crate::{MetadataError, Result};

/// Read-only access to entity metadata.
///
/// The generation pipeline only talks to this trait, so metadata can come
/// from a catalog file, a test fixture, or any other introspection source.
pub trait MetadataSource {
    /// Fully-qualified class names of all known entities, in catalog order.
    fn entity_classes(&self) -> Vec<&str>;

    /// Metadata for a fully-qualified class name.
    fn metadata(&self, class: &str) -> Option<&EntityMetadata>;

    /// Entity names as offered to the user for completion.
    ///
    /// Classes living under `entity_namespace` are listed relative to it
    /// (`App\Entity\Admin\Post` becomes `Admin\Post`); others keep their
    /// fully-qualified name.
    fn entities_for_autocomplete(&self, entity_namespace: &str) -> Vec<String> {
        let prefix = format!(
            "{}{}",
            entity_namespace.trim_end_matches(NAMESPACE_SEPARATOR),
            NAMESPACE_SEPARATOR
        );
        self.entity_classes()
            .into_iter()
            .map(|class| class.strip_prefix(prefix.as_str()).unwrap_or(class).to_string())
            .collect()
    }

    /// Resolve user input to an entity.
    ///
    /// `name` may be relative to `entity_namespace` or fully qualified (with
    /// or without a leading separator).
    fn resolve(&self, name: &str, entity_namespace: &str) -> Result<&EntityMetadata> {
        let trimmed = name.trim();
        let relative = format!(
            "{}{}{}",
            entity_namespace.trim_end_matches(NAMESPACE_SEPARATOR),
            NAMESPACE_SEPARATOR,
            trimmed
        );
        let absolute = trimmed.trim_start_matches(NAMESPACE_SEPARATOR);

        if trimmed.is_empty() {
            return Err(MetadataError::UnknownEntity { name: name.to_string() });
        }

        self.metadata(&relative)
            .or_else(|| self.metadata(absolute))
            .ok_or_else(|| MetadataError::UnknownEntity { name: trimmed.to_string() })
    }
}

/// Entity metadata loaded from a JSON catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityCatalog {
    entities: Vec<EntityMetadata>,
}

impl EntityCatalog {
    /// Build a catalog, rejecting duplicate class names.
    pub fn new(entities: Vec<EntityMetadata>) -> Result<Self> {
        let catalog = Self { entities };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Save the catalog as pretty-printed JSON.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');
        std::fs::write(path, content)?;
        Ok(())
    }

    /// All entities, in catalog order.
    pub fn entities(&self) -> &[EntityMetadata] { &self.entities }

    /// Number of entities in the catalog.
    pub fn len(&self) -> usize { self.entities.len() }

    /// Whether the catalog has no entities.
    pub fn is_empty(&self) -> bool { self.entities.is_empty() }

    fn validate(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for entity in &self.entities {
            if !seen.insert(entity.class.as_str()) {
                return Err(MetadataError::DuplicateEntity(entity.class.clone()));
            }
        }
        Ok(())
    }
}

impl MetadataSource for EntityCatalog {
    fn entity_classes(&self) -> Vec<&str> {
        self.entities.iter().map(|e| e.class.as_str()).collect()
    }

    fn metadata(&self, class: &str) -> Option<&EntityMetadata> {
        self.entities.iter().find(|e| e.class == class)
    }
}
