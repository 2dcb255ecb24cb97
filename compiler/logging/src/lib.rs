#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

//! Logging setup for apigen.
//!
//! Installs a `tracing` subscriber writing to stderr, or to a file when one
//! is configured. Standard output stays reserved for command results.
//! `RUST_LOG` directives take precedence over the configured level.

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not one of off, error, warn, info, debug, trace.
    #[error("Invalid log level \"{0}\"; expected one of off, error, warn, info, debug, trace")]
    InvalidLevel(String),
    /// The log file could not be opened for appending.
    #[error("Failed to open log file {path}: {source}")]
    File {
        /// Log file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A global subscriber is already installed.
    #[error("Failed to install logger: {0}")]
    Init(String),
}

/// Parse a level name, case-insensitively.
///
/// ```
/// use logging::parse_level;
/// use tracing_subscriber::filter::LevelFilter;
///
/// assert_eq!(parse_level("Debug").expect("valid level"), LevelFilter::DEBUG);
/// assert!(parse_level("loud").is_err());
/// ```
pub fn parse_level(level: &str) -> Result<LevelFilter, LoggingError> {
    LevelFilter::from_str(level.trim()).map_err(|_| LoggingError::InvalidLevel(level.to_string()))
}

fn env_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.into()).from_env_lossy()
}

fn open_log_file(path: &Path) -> Result<File, LoggingError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::File { path: path.to_path_buf(), source })
}

/// Install the global subscriber at `level`, writing to `file` when given.
pub fn init(level: &str, file: Option<&Path>) -> Result<(), LoggingError> {
    let level = parse_level(level)?;
    let filter = env_filter(level);
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let installed = match file {
        Some(path) => {
            let file = open_log_file(path)?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    installed.map_err(|e| LoggingError::Init(e.to_string()))?;
    tracing::debug!(%level, file = ?file, "logger installed");
    Ok(())
}
