//! Index of the classes already declared in the target project.

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::fs;
use std::path::Path;

use naming::ClassProbe;
use regex::Regex;
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::Result;

const NAMESPACE_PATTERN: &str = r"(?m)^\s*namespace\s+([A-Za-z_][A-Za-z0-9_\\]*)\s*;";
const CLASS_PATTERN: &str = r"(?m)^\s*(?:(?:final|abstract|readonly)\s+)*(?:class|interface|trait|enum)\s+([A-Za-z_][A-Za-z0-9_]*)";

/// Fully-qualified names of the classes declared under a source directory.
#[derive(Debug, Clone, Default)]
pub struct ProjectClassIndex {
    classes: BTreeSet<String>,
}

impl ProjectClassIndex {
    /// Create an empty index.
    pub fn new() -> Self { Self::default() }

    /// Scan every `.php` file below `source_dir`.
    ///
    /// A missing source directory yields an empty index. Files that are not
    /// valid UTF-8 are decoded lossily; unreadable files are skipped.
    pub fn scan(source_dir: &Path) -> Result<Self> {
        let namespace_re = Regex::new(NAMESPACE_PATTERN)?;
        let class_re = Regex::new(CLASS_PATTERN)?;
        let mut index = Self::new();

        if !source_dir.is_dir() {
            debug!(dir = %source_dir.display(), "source directory missing, empty class index");
            return Ok(index);
        }

        for entry in WalkDir::new(source_dir).into_iter().flatten() {
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension() != Some(OsStr::new("php")) {
                continue;
            }

            let bytes = match fs::read(path) {
                Ok(bytes) => bytes,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "unreadable source file, skipping");
                    continue;
                }
            };
            let source = String::from_utf8_lossy(&bytes);
            let namespace = namespace_re.captures(&source).map(|caps| caps[1].to_string());

            for caps in class_re.captures_iter(&source) {
                let class = match &namespace {
                    Some(ns) => format!("{}\\{}", ns, &caps[1]),
                    None => caps[1].to_string(),
                };
                index.classes.insert(class);
            }
        }

        debug!(dir = %source_dir.display(), classes = index.len(), "indexed project classes");
        Ok(index)
    }

    /// Record `class` as declared.
    pub fn insert(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into().trim_start_matches('\\').to_string());
    }

    /// Whether `class` is declared.
    pub fn contains(&self, class: &str) -> bool {
        self.classes.contains(class.trim_start_matches('\\'))
    }

    /// Number of indexed classes.
    pub fn len(&self) -> usize { self.classes.len() }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool { self.classes.is_empty() }
}

impl ClassProbe for ProjectClassIndex {
    fn class_exists(&self, class: &str) -> bool { self.contains(class) }
}
