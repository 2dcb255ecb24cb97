#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! apigen configuration
//!
//! This crate provides configuration management for apigen.
//! It handles loading, saving, and locating configuration files that specify:
//! - Project layout (root namespace, source directory, entity catalog)
//! - Logging configuration
//! - Code generation parameters
//!
//! Configuration is stored in TOML format. Every section and key is optional,
//! so an empty file yields the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the per-project configuration file, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "apigen.toml";

/// Errors that can occur when loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),
    /// Failed to parse the TOML configuration file
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    /// Failed to serialize configuration to TOML format
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    /// Configuration file was not found at the specified path
    #[error("Config file not found at: {0}")]
    NotFound(PathBuf),
    /// Could not locate the user's configuration directory
    #[error("Could not find user config directory")]
    ConfigDirUnavailable,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Target project layout
    pub project: ProjectConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Code generation settings
    pub codegen: CodegenConfig,
}

/// Layout of the project code is generated into
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Root namespace of the application (e.g. "App")
    pub namespace: String,
    /// Directory mapped to the root namespace, relative to the project root
    pub source_dir: PathBuf,
    /// Entity catalog file, relative to the project root
    pub catalog: PathBuf,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            namespace: "App".to_string(),
            source_dir: PathBuf::from("src"),
            catalog: PathBuf::from("config/entities.json"),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Log file path (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self { Self { level: "warn".to_string(), file: None } }
}

/// Code generation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenConfig {
    /// Where TypeScript artifacts are written, relative to the project root
    pub generated_dir: PathBuf,
    /// How many form class names are probed before giving up
    pub max_form_name_attempts: usize,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self { generated_dir: PathBuf::from("generated"), max_form_name_attempts: 100 }
    }
}

impl Config {
    /// Load configuration from a TOML file at `path`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Save this configuration as a pretty-printed TOML file at `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Returns the default config file path:
    /// `{config_dir()}/apigen/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir =
            dirs::config_dir().ok_or(ConfigError::ConfigDirUnavailable)?.join("apigen");
        Ok(config_dir.join("config.toml"))
    }

    /// Load the configuration that applies to `project_root`.
    ///
    /// An `explicit` path must exist. Otherwise `<project_root>/apigen.toml`
    /// and then the user's default config file are tried; when neither exists
    /// the defaults are returned.
    pub fn load(project_root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_internal(
            explicit,
            &project_root.join(PROJECT_CONFIG_FILE),
            Self::default_path().ok().as_deref(),
        )
    }

    /// Internal function for testing - allows injection of the candidate paths
    fn load_internal(
        explicit: Option<&Path>,
        project_file: &Path,
        user_file: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::from_file(path);
        }

        if project_file.is_file() {
            return Self::from_file(project_file);
        }

        match user_file {
            Some(path) if path.is_file() => Self::from_file(path),
            _ => Ok(Self::default()),
        }
    }

    /// Absolute path of the entity catalog for `project_root`
    pub fn catalog_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.project.catalog)
    }

    /// Absolute path of the source directory for `project_root`
    pub fn source_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.project.source_dir)
    }

    /// Absolute path of the generated TypeScript directory for `project_root`
    pub fn generated_dir(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.codegen.generated_dir)
    }
}
