//! Mock description document model.
//!
//! This module defines the in-memory representation of a parsed mock
//! description: an ordered list of properties, each carrying an ordered
//! list of validation annotations. The model is a read-only snapshot:
//! it is built once (usually by deserializing a JSON document) and then
//! handed to the generator.

use serde::{Deserialize, Serialize};

/// Root of a mock description document.
///
/// Property order is significant: it determines the field order of the
/// generated schema object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Description {
    /// Properties in declaration order.
    pub properties: Vec<Property>,
}

impl Description {
    /// Create a description from a list of properties.
    pub fn new(properties: Vec<Property>) -> Self {
        Self { properties }
    }

    /// Try to build a description from an untyped JSON value.
    ///
    /// Returns `None` when the value does not satisfy the description
    /// document shape (missing `properties`, empty property keys, etc.).
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let description: Description = serde_json::from_value(value.clone()).ok()?;
        if description.properties.iter().any(|p| p.key.is_empty()) {
            return None;
        }
        Some(description)
    }
}

/// One schema field of a description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Field name, unique within a description.
    pub key: String,

    /// Validation directives in declaration order.
    ///
    /// Order is semantically significant: it determines the nesting of
    /// the compiled rule chain and is preserved verbatim.
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl Property {
    /// Create a property with no annotations.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            annotations: Vec::new(),
        }
    }

    /// Set the annotation list.
    pub fn with_annotations(mut self, annotations: Vec<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    /// Append a single annotation.
    pub fn add_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// One validation directive.
///
/// `method` names a rule in the Yup vocabulary; `parameters` are the
/// literal arguments of the rule call, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Rule method name (e.g. `string`, `required`, `min`).
    pub method: String,

    /// Literal rule parameters in call order.
    #[serde(default)]
    pub parameters: Vec<LiteralValue>,
}

impl Annotation {
    /// Create an annotation with no parameters.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            parameters: Vec::new(),
        }
    }

    /// Set the parameter list.
    pub fn with_parameters(mut self, parameters: Vec<LiteralValue>) -> Self {
        self.parameters = parameters;
        self
    }

    /// Append a single parameter.
    pub fn add_parameter(mut self, parameter: impl Into<LiteralValue>) -> Self {
        self.parameters.push(parameter.into());
        self
    }
}

/// A scalar literal parameter.
///
/// The closed set of literal kinds the literal caster understands.
/// Deserialization never fails on an unexpected parameter type: any
/// JSON value that is not a string, number, or boolean lands in
/// [`LiteralValue::Other`] and is degraded to a string literal when it
/// is cast into the expression tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// Boolean literal.
    Bool(bool),
    /// Numeric literal.
    Num(f64),
    /// String literal.
    Str(String),
    /// Any other JSON value; degraded to a string literal at cast time.
    Other(serde_json::Value),
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        LiteralValue::Str(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        LiteralValue::Str(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        LiteralValue::Num(value)
    }
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        LiteralValue::Num(value as f64)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        LiteralValue::Bool(value)
    }
}
