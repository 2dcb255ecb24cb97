//! Source generators, one per generated artifact.
//!
//! A generator turns derived names and mapped metadata into the
//! [`TemplateParams`] of its template and renders it.

use crate::template::{render, TemplateName, TemplateParams};
use crate::Result;

pub mod controller;
pub mod data_service;
pub mod form;
pub mod interface;

pub use controller::ControllerGenerator;
pub use data_service::{DataServiceGenerator, SharedBaseServiceGenerator};
pub use form::FormGenerator;
pub use interface::InterfaceGenerator;

/// Defines the interface for producing one generated source file.
pub trait SourceGenerator {
    /// Template this generator fills.
    fn template(&self) -> TemplateName;

    /// Placeholder values for the template.
    fn params(&self) -> TemplateParams;

    /// Render the template with [`params`](Self::params).
    fn generate(&self) -> Result<String> { render(self.template(), &self.params()) }
}
