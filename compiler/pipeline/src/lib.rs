#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Emission driver for API scaffolding.
//!
//! Resolves an entity, derives its names, renders every requested artifact
//! into an in-memory buffer and commits the buffer to disk as one batch.
//!
//! ## Module Organization
//!
//! - `orchestration` - Main entry points (`run`, `run_in_project`)
//! - `generation_context` - Project layout shared by every step
//! - `artifacts` - One generator per output artifact, run in fixed order
//! - `generator` - Pending-change buffer with batch commit and rollback
//! - `class_index` - Scan of classes already declared in the project

use std::path::PathBuf;

use thiserror::Error;

/// Convenient result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that can occur while running the generation pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A file to be generated already exists.
    #[error("The file \"{}\" can't be generated because it already exists.", .path.display())]
    FileExists {
        /// Target path.
        path: PathBuf,
    },
    /// Two artifacts of the same run target the same file.
    #[error("The file \"{}\" is generated twice in the same run.", .path.display())]
    DuplicateTarget {
        /// Target path.
        path: PathBuf,
    },
    /// Writing a pending file failed; the batch has been rolled back.
    #[error("Failed to write \"{}\": {source}", .path.display())]
    Commit {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
    /// Error from the entity catalog.
    #[error(transparent)]
    Metadata(#[from] metadata::MetadataError),
    /// Error from name derivation.
    #[error(transparent)]
    Naming(#[from] naming::NamingError),
    /// Error propagated from the codegen crate.
    #[error(transparent)]
    Codegen(#[from] codegen::CodegenError),
    /// I/O error while scanning the project.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Regex compilation error used while scanning the project.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

pub mod artifacts;
pub mod class_index;
pub mod generation_context;
pub mod generator;
pub mod orchestration;

pub use class_index::ProjectClassIndex;
pub use generation_context::GenerationContext;
pub use generator::{CommitReport, Generator, PendingFile, WritePolicy};
pub use orchestration::{run, run_in_project, GenerationReport, GenerationRequest};
