//! Loading description documents from disk.
//!
//! Reads scanned `.json` files and deserializes them into typed
//! descriptions. Individual file failures are collected rather than
//! aborting the whole batch.

use crate::error::LoadError;
use std::path::{Path, PathBuf};
use yup_rs::Description;

/// A description document loaded from disk.
#[derive(Debug, Clone)]
pub struct LoadedDescription {
    /// Module name derived from the file stem.
    pub name: String,

    /// Source file path.
    pub path: PathBuf,

    /// Parsed description.
    pub description: Description,
}

/// Load a single description document.
pub fn load_file(path: &Path) -> Result<LoadedDescription, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| LoadError::invalid_json(path.to_path_buf(), e.to_string()))?;

    let description = Description::from_value(&value).ok_or_else(|| LoadError::InvalidDescription {
        path: path.to_path_buf(),
    })?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "schema".to_string());

    Ok(LoadedDescription {
        name,
        path: path.to_path_buf(),
        description,
    })
}

/// Load a batch of description documents.
///
/// Returns the successfully loaded descriptions alongside the errors
/// for files that failed, so callers can report partial failures
/// without losing the rest of the batch.
pub fn load_files(paths: &[PathBuf]) -> (Vec<LoadedDescription>, Vec<LoadError>) {
    let mut loaded = Vec::new();
    let mut errors = Vec::new();

    for path in paths {
        match load_file(path) {
            Ok(description) => loaded.push(description),
            Err(e) => errors.push(e),
        }
    }

    (loaded, errors)
}
