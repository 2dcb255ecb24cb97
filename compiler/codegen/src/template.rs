//! Embedded templates and placeholder substitution.

use std::collections::BTreeMap;
use std::fmt;

use regex::{Captures, Regex};
use tracing::debug;

use crate::{CodegenError, Result};

const PLACEHOLDER_PATTERN: &str = r"\{\{([A-Z][A-Z0-9_]*)\}\}";

/// The templates shipped with the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    /// CRUD controller class.
    Controller,
    /// Form type class.
    Form,
    /// TypeScript interface for the entity.
    Interface,
    /// Angular data service for the entity.
    DataService,
    /// Abstract Angular service shared by every data service.
    SharedBaseService,
}

impl TemplateName {
    /// Template source.
    pub fn source(&self) -> &'static str {
        match self {
            TemplateName::Controller => include_str!("../templates/controller/Controller.php"),
            TemplateName::Form => include_str!("../templates/form/Type.php"),
            TemplateName::Interface => include_str!("../templates/interface/interface.ts"),
            TemplateName::DataService => include_str!("../templates/angular/data.service.ts"),
            TemplateName::SharedBaseService => {
                include_str!("../templates/angular/abstract-symfony-data.service.ts")
            }
        }
    }

    /// Template path relative to the templates directory.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::Controller => "controller/Controller.php",
            TemplateName::Form => "form/Type.php",
            TemplateName::Interface => "interface/interface.ts",
            TemplateName::DataService => "angular/data.service.ts",
            TemplateName::SharedBaseService => "angular/abstract-symfony-data.service.ts",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

/// Ordered placeholder values for one template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateParams {
    values: BTreeMap<String, String>,
}

impl TemplateParams {
    /// Create an empty parameter map.
    pub fn new() -> Self { Self::default() }

    /// Set `key` to `value`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> { self.values.get(key).map(String::as_str) }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of parameters.
    pub fn len(&self) -> usize { self.values.len() }

    /// Whether no parameter is set.
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

/// Render `template` with `params`.
///
/// Every `{{NAME}}` marker is replaced in a single pass, so values are never
/// scanned for markers themselves. The first marker without a value fails the
/// render.
///
/// ```
/// use codegen::{render, TemplateName, TemplateParams};
///
/// let err = render(TemplateName::Interface, &TemplateParams::new()).expect_err("no params");
/// assert!(err.to_string().contains("IMPORTS"));
/// ```
pub fn render(template: TemplateName, params: &TemplateParams) -> Result<String> {
    let pattern = Regex::new(PLACEHOLDER_PATTERN)?;
    let mut unresolved: Option<String> = None;

    let rendered = pattern.replace_all(template.source(), |caps: &Captures| {
        let name = &caps[1];
        match params.get(name) {
            Some(value) => value.to_string(),
            None => {
                unresolved.get_or_insert_with(|| name.to_string());
                String::new()
            }
        }
    });

    if let Some(placeholder) = unresolved {
        return Err(CodegenError::UnresolvedPlaceholder { template, placeholder });
    }

    debug!(template = %template, params = params.len(), "rendered template");
    Ok(clean_generated_source(&rendered))
}

/// Trim trailing whitespace from each line and drop trailing blank lines.
/// Always ensures the returned string ends with a single newline when not empty.
pub fn clean_generated_source(src: &str) -> String {
    let mut lines: Vec<&str> = src.lines().map(str::trim_end).collect();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    if lines.is_empty() {
        String::new()
    } else {
        format!("{}\n", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_generated_source() {
        assert_eq!(clean_generated_source("a  \nb\t\n\n\n"), "a\nb\n");
        assert_eq!(clean_generated_source("\n\n"), "");
        assert_eq!(clean_generated_source("x"), "x\n");
    }

    #[test]
    fn test_shared_base_has_no_placeholders() {
        let rendered =
            render(TemplateName::SharedBaseService, &TemplateParams::new()).expect("renders");
        assert!(rendered.contains("export abstract class AbstractSymfonyDataService<T>"));
    }

    #[test]
    fn test_unresolved_placeholder_is_reported() {
        let params = TemplateParams::new().with("IMPORTS", "").with("CLASS_NAME", "Product");
        let err = render(TemplateName::Interface, &params).expect_err("MEMBERS is missing");
        match err {
            CodegenError::UnresolvedPlaceholder { template, placeholder } => {
                assert_eq!(template, TemplateName::Interface);
                assert_eq!(placeholder, "MEMBERS");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let params = TemplateParams::new()
            .with("IMPORTS", "")
            .with("CLASS_NAME", "Product")
            .with("MEMBERS", "    note: '{{NOT_A_MARKER}}';");
        let rendered = render(TemplateName::Interface, &params).expect("renders");
        assert!(rendered.contains("{{NOT_A_MARKER}}"));
    }

    #[test]
    fn test_params_iterate_in_key_order() {
        let params = TemplateParams::new().with("B", "2").with("A", "1");
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["A", "B"]);
        assert_eq!(params.get("A"), Some("1"));
        assert!(!params.is_empty());
    }
}
