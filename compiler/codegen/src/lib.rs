#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Source generation for API scaffolding.
//!
//! Templates for the controller, the form type, the TypeScript interface and
//! the Angular data services are embedded at compile time. Each template
//! carries `{{PLACEHOLDER}}` markers that are filled from a
//! [`TemplateParams`] map; a marker left without a value is an error rather
//! than silently ending up in a generated file.
//!
//! Writing the rendered sources to disk is left to the pipeline crate.

use thiserror::Error;

pub mod generators;
pub mod template;

pub use generators::{
    ControllerGenerator, DataServiceGenerator, FormGenerator, InterfaceGenerator,
    SharedBaseServiceGenerator, SourceGenerator,
};
pub use template::{clean_generated_source, render, TemplateName, TemplateParams};

/// Error type for code generation operations in this crate.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// A template marker had no value in the parameter map.
    #[error("Template \"{template}\" has no value for placeholder \"{{{{{placeholder}}}}}\"")]
    UnresolvedPlaceholder {
        /// Template being rendered.
        template: TemplateName,
        /// Name of the placeholder without braces.
        placeholder: String,
    },
    /// Regex compilation error.
    #[error(transparent)]
    Regex(#[from] regex::Error),
    /// Generic message-based error.
    #[error("{0}")]
    Message(String),
}

impl From<String> for CodegenError {
    fn from(msg: String) -> Self { CodegenError::Message(msg) }
}

/// Convenient result type for codegen functions in this crate.
pub type Result<T> = std::result::Result<T, CodegenError>;
