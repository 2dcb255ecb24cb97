#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Naming conventions for generated scaffolding.
//!
//! Everything the generator writes is named after the entity: the controller
//! and form classes, the route name and path, the template directory and the
//! variable names used inside templates. This crate derives all of those
//! names from an entity class name.
//!
//! - `casing` - case conversions (route names, slugs, file paths, class names)
//! - `inflector` - English plural/singular inflection
//! - `class_name` - fully-qualified class name construction and validation
//! - `deriver` - the name deriver producing an [`EntityDescriptor`] and [`NameSet`]

use thiserror::Error;

pub mod casing;
pub mod class_name;
pub mod deriver;
pub mod inflector;

pub use class_name::ClassNameDetails;
pub use deriver::{
    derive_names, ClassProbe, EntityDescriptor, NameDeriver, NameSet, RepositoryNames,
    DEFAULT_MAX_FORM_ATTEMPTS, DEFAULT_ROOT_NAMESPACE,
};

/// Errors raised while deriving names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// A constructed class name is not a valid PHP class name.
    #[error("\"{class}\" is not a valid PHP class name: {reason}")]
    InvalidClassName {
        /// The offending class name.
        class: String,
        /// Why it was rejected.
        reason: String,
    },
    /// Every form class candidate up to the attempt cap already exists.
    #[error("Could not find a free form class name for \"{base}\" after {attempts} attempts")]
    FormNameExhausted {
        /// The first candidate that was tried.
        base: String,
        /// Number of candidates probed.
        attempts: usize,
    },
}

/// Result type alias for naming operations.
pub type Result<T> = std::result::Result<T, NamingError>;
