//! Writing generated schema modules to disk.

use crate::error::{CliResult, WriteError};
use std::path::{Path, PathBuf};

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// File was written to disk.
    Written { path: PathBuf, bytes: usize },

    /// Dry run, file was not written.
    DryRun { path: PathBuf, content: String },
}

/// Writer for generated schema modules.
#[derive(Debug)]
pub struct FileWriter {
    /// Whether to perform a dry run (no actual writes).
    dry_run: bool,
}

impl FileWriter {
    /// Create a new file writer.
    pub fn new() -> Self {
        Self { dry_run: false }
    }

    /// Enable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Write content to the given path, creating parent directories.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                path: path.to_path_buf(),
                content: content.to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }

    /// Check whether existing content at the path matches.
    ///
    /// Returns false when the file is missing or differs.
    pub fn is_up_to_date(&self, path: &Path, content: &str) -> bool {
        match std::fs::read_to_string(path) {
            Ok(existing) => existing == content,
            Err(_) => false,
        }
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new()
    }
}
