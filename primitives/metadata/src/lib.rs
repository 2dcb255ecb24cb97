#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Entity metadata for apigen
//!
//! This crate describes the persisted entities that scaffolding is generated
//! for: their class names, identifier, repository, scalar fields and
//! associations. Metadata is read from a JSON catalog and queried through the
//! [`MetadataSource`] trait so the generation pipeline never depends on where
//! the metadata came from.

pub mod catalog;
pub mod entity;

use thiserror::Error;

pub use catalog::{EntityCatalog, MetadataSource};
pub use entity::{
    short_class_name, AssociationKind, AssociationMapping, EntityMetadata, FieldMapping,
    NAMESPACE_SEPARATOR,
};

/// Errors raised while loading or querying entity metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    /// The catalog file could not be read.
    #[error("Failed to read entity catalog: {0}")]
    Io(#[from] std::io::Error),
    /// The catalog file is not valid JSON or does not match the expected shape.
    #[error("Failed to parse entity catalog: {0}")]
    Json(#[from] serde_json::Error),
    /// The requested entity is not part of the catalog.
    #[error("Entity \"{name}\" doesn't exist; please enter an existing one or create a new one.")]
    UnknownEntity {
        /// The name as supplied by the caller.
        name: String,
    },
    /// Two catalog entries share the same class name.
    #[error("Entity class \"{0}\" is declared more than once in the catalog")]
    DuplicateEntity(String),
}

/// Result type alias for metadata operations.
pub type Result<T> = std::result::Result<T, MetadataError>;
