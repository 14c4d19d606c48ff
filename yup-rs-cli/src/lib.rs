//! # yup-rs-cli
//!
//! CLI library for generating Yup validation-schema modules from JSON
//! description documents.
//!
//! This crate provides the functionality behind the `yup-rs` CLI tool,
//! including document discovery, loading, schema generation, and file
//! output.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`scanner`] - Description document discovery and filtering
//! - [`loader`] - Reading and deserializing description documents
//! - [`writer`] - File output and dry-run support
//! - [`watcher`] - File system watching for development mode
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod loader;
pub mod scanner;
pub mod watcher;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use loader::LoadedDescription;
pub use scanner::DescriptionScanner;
pub use watcher::DescriptionWatcher;
pub use writer::FileWriter;
