// SPDX-License-Identifier: CC0-1.0

//! Path utility functions for finding project roots and resolving paths.

use std::path::{Path, PathBuf};

/// File whose presence marks the root of a target project.
pub const PROJECT_MARKER: &str = "composer.json";

/// Walk up from `start` looking for [`PROJECT_MARKER`].
pub fn find_project_root_from(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(PROJECT_MARKER).is_file() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Map a fully-qualified class name onto its source file (PSR-4).
///
/// Classes under `root_namespace` live below `source_dir`, one directory per
/// namespace segment. Classes outside the root namespace have no known
/// location and yield `None`.
///
/// # Examples
///
/// ```
/// use std::path::{Path, PathBuf};
/// use apigen_path::class_to_path;
///
/// let path = class_to_path("App", Path::new("src"), "App\\Controller\\ProductController");
/// assert_eq!(path, Some(PathBuf::from("src/Controller/ProductController.php")));
/// assert_eq!(class_to_path("App", Path::new("src"), "Vendor\\Thing"), None);
/// ```
pub fn class_to_path(root_namespace: &str, source_dir: &Path, class: &str) -> Option<PathBuf> {
    let class = class.trim_start_matches('\\');
    let prefix = format!("{}\\", root_namespace.trim_matches('\\'));
    let relative = class.strip_prefix(prefix.as_str())?;
    if relative.is_empty() {
        return None;
    }

    let mut path = source_dir.to_path_buf();
    for segment in relative.split('\\') {
        path.push(segment);
    }
    path.set_extension("php");
    Some(path)
}

/// Render `path` relative to `base` for display, falling back to `path` itself.
pub fn display_relative(path: &Path, base: &Path) -> String {
    pathdiff::diff_paths(path, base)
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| path.to_path_buf())
        .display()
        .to_string()
}
