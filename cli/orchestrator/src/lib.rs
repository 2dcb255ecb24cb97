#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]
//! Collection of utilities for the apigen command line.

use std::path::Path;

use pipeline::GenerationReport;
use thiserror::Error;

pub mod prompt;

/// Errors that can occur while running an apigen command.
#[derive(Debug, Error)]
pub enum CliError {
    /// No entity name was given and none could be asked for.
    #[error("Missing entity class name; pass ENTITY_CLASS or run interactively")]
    MissingEntity,
    /// Generation failed.
    #[error(transparent)]
    Pipeline(#[from] pipeline::PipelineError),
    /// The entity catalog could not be loaded.
    #[error(transparent)]
    Metadata(#[from] metadata::MetadataError),
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] config::ConfigError),
    /// The logger could not be installed.
    #[error(transparent)]
    Logging(#[from] logging::LoggingError),
    /// The interactive prompt failed.
    #[error("Prompt error: {0}")]
    Prompt(#[from] rustyline::error::ReadlineError),
    /// Terminal or working-directory I/O failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Complete `input` against the known entity names.
///
/// An exact match wins; otherwise a single case-insensitive prefix match is
/// taken. Anything else is returned unchanged so resolution reports it.
///
/// ```
/// use apigen_cli::complete_entity;
///
/// let known = vec!["Product".to_string(), "Admin\\Post".to_string()];
/// assert_eq!(complete_entity("prod", &known), "Product");
/// assert_eq!(complete_entity("Missing", &known), "Missing");
/// ```
pub fn complete_entity(input: &str, candidates: &[String]) -> String {
    let input = input.trim();
    if candidates.iter().any(|c| c == input) {
        return input.to_string();
    }

    let needle = input.to_lowercase();
    let mut matches = candidates.iter().filter(|c| c.to_lowercase().starts_with(&needle));
    match (matches.next(), matches.next()) {
        (Some(only), None) if !needle.is_empty() => only.clone(),
        _ => input.to_string(),
    }
}

/// Render the summary printed after a successful run.
///
/// Paths are shown relative to `project_root`.
pub fn format_report(report: &GenerationReport, project_root: &Path) -> String {
    let mut out = String::from("Success!\n\n");
    for path in &report.written {
        out.push_str(&format!(
            " created: {}\n",
            apigen_path::display_relative(path, project_root)
        ));
    }
    for path in &report.skipped {
        out.push_str(&format!(
            " skipped: {} (already exists)\n",
            apigen_path::display_relative(path, project_root)
        ));
    }
    out.push_str(&format!("\nNext: Check your new CRUD by going to {}/\n", report.route_path));
    out
}
