//! Description preprocessor.
//!
//! Runs once per generate call, before the compiler iterates the
//! properties: sugar aliases are resolved to their canonical method
//! names and annotations outside the supported vocabulary are dropped
//! with a diagnostic. The compiler trusts the result completely and
//! performs no membership check of its own.

use crate::description::Description;
use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::registry;

/// Normalize every property's annotation list in place.
pub(crate) fn prepare_description(description: &mut Description, sink: &dyn DiagnosticSink) {
    for property in &mut description.properties {
        let key = property.key.clone();
        property.annotations.retain_mut(|annotation| {
            if let Some(canonical) = registry::resolve_sugar(&annotation.method) {
                annotation.method = canonical.to_string();
            }
            if registry::is_supported(&annotation.method) {
                true
            } else {
                sink.report(Diagnostic::UnsupportedMethod {
                    property: key.clone(),
                    method: annotation.method.clone(),
                });
                false
            }
        });
    }
}
