//! File watcher for development mode.
//!
//! Watches a description directory and reports debounced change events
//! so the caller can regenerate schema modules.

use crate::error::{CliResult, WatchError};
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, DebouncedEvent, Debouncer};
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::time::Duration;

/// Event types for description document changes.
#[derive(Debug, Clone)]
pub enum WatchEvent {
    /// A document was modified or created.
    Changed(PathBuf),

    /// A document was deleted.
    Deleted(PathBuf),

    /// An error occurred while watching.
    Error(String),
}

impl WatchEvent {
    /// Get the path associated with this event.
    pub fn path(&self) -> Option<&Path> {
        match self {
            WatchEvent::Changed(p) | WatchEvent::Deleted(p) => Some(p),
            WatchEvent::Error(_) => None,
        }
    }

    /// Check if this is an error event.
    pub fn is_error(&self) -> bool {
        matches!(self, WatchEvent::Error(_))
    }
}

/// Watcher for description document directories.
pub struct DescriptionWatcher {
    /// Root directory to watch.
    root: PathBuf,

    /// Debounce duration in milliseconds.
    debounce_ms: u64,
}

impl DescriptionWatcher {
    /// Create a new watcher for the given directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            debounce_ms: 500,
        }
    }

    /// Set the debounce duration in milliseconds.
    pub fn with_debounce(mut self, ms: u64) -> Self {
        self.debounce_ms = ms;
        self
    }

    /// Start watching for document changes.
    ///
    /// Returns the debouncer, which must be kept alive for the watch to
    /// continue, and a receiver yielding change events.
    pub fn watch(&self) -> CliResult<(Debouncer<RecommendedWatcher>, Receiver<WatchEvent>)> {
        let (tx, rx) = channel::<WatchEvent>();

        let mut debouncer = new_debouncer(
            Duration::from_millis(self.debounce_ms),
            move |result: Result<Vec<DebouncedEvent>, notify::Error>| match result {
                Ok(events) => {
                    for event in events {
                        let path = event.path;

                        // Only description documents are interesting
                        if path.extension().map_or(true, |ext| ext != "json") {
                            continue;
                        }

                        let watch_event = if path.exists() {
                            WatchEvent::Changed(path)
                        } else {
                            WatchEvent::Deleted(path)
                        };

                        let _ = tx.send(watch_event);
                    }
                }
                Err(e) => {
                    let _ = tx.send(WatchEvent::Error(e.to_string()));
                }
            },
        )
        .map_err(|e| WatchError::Init(e.to_string()))?;

        debouncer
            .watcher()
            .watch(&self.root, RecursiveMode::Recursive)
            .map_err(|e| WatchError::Init(e.to_string()))?;

        Ok((debouncer, rx))
    }

    /// Get the root directory being watched.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
