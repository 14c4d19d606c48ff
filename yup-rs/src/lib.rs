//! # yup-rs
//!
//! Compile a declarative description of data-field validation rules
//! into the source text of a [Yup](https://github.com/jquense/yup)
//! validation-schema module.
//!
//! A description is an ordered list of properties, each carrying an
//! ordered list of annotations (`method` + literal parameters). Each
//! property compiles to a fluent rule chain, the chains are assembled
//! into an object literal, the literal is spliced into a fixed module
//! skeleton, and the result is rendered and normalized to readable
//! source text.
//!
//! ```rust
//! use yup_rs::{Annotation, Description, Property, YupGenerator};
//!
//! let description = Description::new(vec![Property::new("age")
//!     .add_annotation(Annotation::new("min").add_parameter(0i64))
//!     .add_annotation(Annotation::new("number"))]);
//!
//! let code = YupGenerator::new().generate(&description).unwrap();
//! assert!(code.contains("age: number().min(0)"));
//! ```

pub mod ast;
pub mod description;
pub mod diagnostics;
pub mod error;
pub mod registry;
pub mod text;

mod compiler;
mod prepare;
mod template;

use std::sync::Arc;

pub use description::{Annotation, Description, LiteralValue, Property};
pub use diagnostics::{CollectingSink, Diagnostic, DiagnosticSink, TracingSink};
pub use error::{GenerateError, GenerateResult};

/// Generator for Yup schema modules.
///
/// A generate call is a pure, synchronous, one-shot transformation: it
/// always runs to completion, holds no shared mutable state, and each
/// call works on its own freshly parsed template, so concurrent calls
/// on the same generator are independent by construction.
pub struct YupGenerator {
    sink: Arc<dyn DiagnosticSink>,
}

impl Default for YupGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl YupGenerator {
    /// Create a generator reporting diagnostics through `tracing`.
    pub fn new() -> Self {
        Self {
            sink: Arc::new(TracingSink),
        }
    }

    /// Create a generator with an injected diagnostic sink.
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Generate the schema module source for a description.
    ///
    /// Properties with empty annotation lists are dropped with a
    /// diagnostic; processing continues for the remaining properties.
    pub fn generate(&self, description: &Description) -> GenerateResult<String> {
        let mut description = description.clone();
        prepare::prepare_description(&mut description, self.sink.as_ref());

        let schema = compiler::assemble_schema(&description, self.sink.as_ref());
        let module = template::splice_schema(schema)?;
        let code = module.print();

        Ok(text::ensure_readable_text(&code))
    }

    /// Generate from an untyped JSON value.
    ///
    /// The value must satisfy the description document shape; anything
    /// else fails immediately with
    /// [`GenerateError::InvalidDescription`] and performs no
    /// compilation work.
    pub fn generate_value(&self, value: &serde_json::Value) -> GenerateResult<String> {
        let description =
            Description::from_value(value).ok_or(GenerateError::InvalidDescription)?;
        self.generate(&description)
    }
}
