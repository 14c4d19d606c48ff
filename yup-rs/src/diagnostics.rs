//! Non-fatal diagnostics emitted during generation.
//!
//! Per-field issues (an empty annotation list, an unsupported method)
//! do not abort a generate call; they are reported through an injected
//! [`DiagnosticSink`] so callers can observe them without capturing
//! process-wide output.

use std::fmt;
use std::sync::Mutex;

/// A non-fatal condition noticed while generating a schema.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A property carried no annotations and was dropped from the
    /// output object.
    EmptyAnnotations {
        /// The property key.
        property: String,
    },

    /// An annotation referenced a method outside the supported
    /// vocabulary and was dropped by the preprocessor.
    UnsupportedMethod {
        /// The property key.
        property: String,
        /// The offending method name.
        method: String,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::EmptyAnnotations { property } => {
                write!(
                    f,
                    "property '{property}' has no annotations and was omitted from the schema"
                )
            }
            Diagnostic::UnsupportedMethod { property, method } => {
                write!(
                    f,
                    "property '{property}' references unsupported method '{method}'"
                )
            }
        }
    }
}

/// Sink for generation diagnostics.
pub trait DiagnosticSink: Send + Sync {
    /// Report one diagnostic.
    fn report(&self, diagnostic: Diagnostic);
}

/// Default sink: forwards diagnostics to `tracing` at warn level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, diagnostic: Diagnostic) {
        tracing::warn!("{diagnostic}");
    }
}

/// Sink that collects diagnostics in memory, for tests and callers
/// that want to inspect them after a generate call.
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    /// Create an empty collecting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clone out the diagnostics collected so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Drain and return the collected diagnostics.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    /// Diagnostics are never fatal: a poisoned lock is recovered rather
    /// than propagated as a panic.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}
