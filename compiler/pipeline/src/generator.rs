//! Pending-change buffer.
//!
//! Artifacts are staged in memory first. Nothing touches the disk until
//! [`Generator::write_changes`] commits the whole batch; a failed write
//! removes whatever the batch already created.

use std::collections::HashSet;
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::{PipelineError, Result};

/// What to do when a staged target already exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// The target must not exist.
    CreateNew,
    /// Files shared between runs: written once, skipped afterwards.
    SkipIfExists,
}

/// A file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    /// Absolute target path.
    pub path: PathBuf,
    /// Rendered contents.
    pub contents: String,
    /// Overwrite policy the file was staged with.
    pub policy: WritePolicy,
}

/// Outcome of a successful commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitReport {
    /// Files written, in staging order.
    pub written: Vec<PathBuf>,
    /// Shared files left alone because they already existed.
    pub skipped: Vec<PathBuf>,
}

/// Stages generated files and writes them as one batch.
#[derive(Debug)]
pub struct Generator {
    project_root: PathBuf,
    root_namespace: String,
    source_dir: PathBuf,
    pending: Vec<PendingFile>,
    targets: HashSet<PathBuf>,
    skipped: Vec<PathBuf>,
}

impl Generator {
    /// Create a generator for the project at `project_root` whose classes
    /// under `root_namespace` live in `source_dir`.
    pub fn new(
        project_root: impl Into<PathBuf>,
        root_namespace: impl Into<String>,
        source_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            root_namespace: root_namespace.into(),
            source_dir: source_dir.into(),
            pending: Vec::new(),
            targets: HashSet::new(),
            skipped: Vec::new(),
        }
    }

    /// Stage the source of class `class_name` at its PSR-4 location.
    pub fn generate_class(&mut self, class_name: &str, contents: String) -> Result<PathBuf> {
        let path = apigen_path::class_to_path(&self.root_namespace, &self.source_dir, class_name)
            .ok_or_else(|| {
                PipelineError::Message(format!(
                    "Class \"{}\" is outside the \"{}\" namespace and has no source location.",
                    class_name, self.root_namespace
                ))
            })?;
        self.stage(path, contents, WritePolicy::CreateNew)
    }

    /// Stage a file at `path`, relative to the project root unless absolute.
    pub fn generate_file(&mut self, path: impl AsRef<Path>, contents: String) -> Result<PathBuf> {
        let path = self.project_root.join(path);
        self.stage(path, contents, WritePolicy::CreateNew)
    }

    /// Stage a file shared between entities; an existing copy is kept.
    pub fn generate_shared_file(
        &mut self,
        path: impl AsRef<Path>,
        contents: String,
    ) -> Result<PathBuf> {
        let path = self.project_root.join(path);
        self.stage(path, contents, WritePolicy::SkipIfExists)
    }

    fn stage(&mut self, path: PathBuf, contents: String, policy: WritePolicy) -> Result<PathBuf> {
        if self.targets.contains(&path) {
            return Err(PipelineError::DuplicateTarget { path });
        }

        if path.exists() {
            match policy {
                WritePolicy::CreateNew => return Err(PipelineError::FileExists { path }),
                WritePolicy::SkipIfExists => {
                    debug!(path = %path.display(), "shared file exists, skipping");
                    self.targets.insert(path.clone());
                    self.skipped.push(path.clone());
                    return Ok(path);
                }
            }
        }

        debug!(path = %path.display(), "staged");
        self.targets.insert(path.clone());
        self.pending.push(PendingFile { path: path.clone(), contents, policy });
        Ok(path)
    }

    /// Files staged so far, in staging order.
    pub fn pending(&self) -> &[PendingFile] { &self.pending }

    /// Whether anything is waiting to be written.
    pub fn has_pending(&self) -> bool { !self.pending.is_empty() }

    /// Write every staged file.
    ///
    /// Files are written in staging order. If any write fails, the files and
    /// directories created by this batch are removed again and the error is
    /// returned.
    pub fn write_changes(self) -> Result<CommitReport> {
        let mut batch = Batch::default();

        for file in &self.pending {
            if let Err(source) = batch.write(file) {
                warn!(path = %file.path.display(), error = %source, "write failed, rolling back");
                batch.rollback();
                return Err(PipelineError::Commit { path: file.path.clone(), source });
            }
        }

        Ok(CommitReport { written: batch.written, skipped: self.skipped })
    }
}

/// Files and directories created during one commit.
#[derive(Default)]
struct Batch {
    written: Vec<PathBuf>,
    created_dirs: Vec<PathBuf>,
}

impl Batch {
    fn write(&mut self, file: &PendingFile) -> std::io::Result<()> {
        if let Some(parent) = file.path.parent() {
            self.create_dirs(parent)?;
        }

        let mut out = OpenOptions::new().write(true).create_new(true).open(&file.path)?;
        self.written.push(file.path.clone());
        out.write_all(file.contents.as_bytes())?;
        debug!(path = %file.path.display(), bytes = file.contents.len(), "written");
        Ok(())
    }

    fn create_dirs(&mut self, dir: &Path) -> std::io::Result<()> {
        let missing: Vec<&Path> = dir.ancestors().take_while(|d| !d.exists()).collect();
        for d in missing.into_iter().rev() {
            fs::create_dir(d)?;
            self.created_dirs.push(d.to_path_buf());
        }
        Ok(())
    }

    fn rollback(self) {
        for path in self.written.iter().rev() {
            if let Err(e) = fs::remove_file(path) {
                warn!(path = %path.display(), error = %e, "could not remove file during rollback");
            }
        }
        // Only empty directories are removed
        for dir in self.created_dirs.iter().rev() {
            if let Err(e) = fs::remove_dir(dir) {
                if !has_entries(dir) {
                    warn!(path = %dir.display(), error = %e, "could not remove directory");
                }
            }
        }
    }
}

fn has_entries(dir: &Path) -> bool {
    fs::read_dir(dir).map(|mut entries| entries.next().is_some()).unwrap_or(false)
}
