//! Error types for schema generation.

use thiserror::Error;

/// Result type alias for generation operations.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Fatal error raised by a generate call.
///
/// Per-field data issues are never errors; they surface as
/// [`crate::Diagnostic`]s and the affected field is dropped. Only
/// broken top-level invariants abort the whole operation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The input value does not satisfy the description document shape.
    #[error("cannot generate schema: input does not satisfy the description document shape")]
    InvalidDescription,

    /// The module skeleton does not contain the expected factory call.
    ///
    /// The skeleton is fixed at build time, so this signals a broken
    /// internal assumption rather than a recoverable input condition.
    #[error("module skeleton is malformed: {reason}")]
    MalformedTemplate {
        /// What was expected and not found.
        reason: String,
    },
}

impl GenerateError {
    /// Create a malformed-template error.
    pub fn malformed_template(reason: impl Into<String>) -> Self {
        Self::MalformedTemplate {
            reason: reason.into(),
        }
    }
}
