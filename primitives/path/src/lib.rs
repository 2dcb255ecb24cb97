// SPDX-License-Identifier: CC0-1.0

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Path utility functions for finding project roots and resolving paths.
//!
//! This module provides utilities for locating the target project, mapping
//! class names onto source files, and displaying paths relative to the project.

pub mod path_utils;

// Re-export for convenience
pub use path_utils::*;
