//! Annotation-to-expression compiler.
//!
//! Folds each property's ordered annotation list into a single nested
//! call-expression tree (the fluent rule chain) and assembles the
//! per-property chains into one object-literal expression.

use crate::ast::{Expr, ObjectProp};
use crate::description::{Annotation, Description, LiteralValue, Property};
use crate::diagnostics::{Diagnostic, DiagnosticSink};

/// Cast a scalar literal into the matching expression node.
///
/// Strings, numbers, and booleans map to their literal nodes; any
/// other value degrades to a string literal built from its string
/// form. This is a deliberate fallback, never an error.
pub(crate) fn cast_literal(value: &LiteralValue) -> Expr {
    match value {
        LiteralValue::Str(s) => Expr::Str(s.clone()),
        LiteralValue::Num(n) => Expr::Num(*n),
        LiteralValue::Bool(b) => Expr::Bool(*b),
        LiteralValue::Other(v) => Expr::Str(v.to_string()),
    }
}

fn make_rule_arguments(annotation: &Annotation) -> Vec<Expr> {
    annotation.parameters.iter().map(cast_literal).collect()
}

/// Build the nested call expression for `annotations[index..]`.
///
/// Recursion walks from the end of the list backward: the last
/// annotation becomes the innermost bare call, and each earlier
/// annotation wraps the compiled tail in a member call, so the
/// rendered chain reads left to right in reverse annotation order.
fn make_rule_expression(annotations: &[Annotation], index: usize) -> Expr {
    let annotation = &annotations[index];
    if annotations.len() == 1 || index == annotations.len() - 1 {
        return Expr::call(
            Expr::ident(&annotation.method),
            make_rule_arguments(annotation),
        );
    }

    Expr::call(
        Expr::member(
            make_rule_expression(annotations, index + 1),
            &annotation.method,
        ),
        make_rule_arguments(annotation),
    )
}

/// Compile a property's rule chain.
///
/// A property with no annotations produces no expression: the caller
/// skips it, and the drop is reported through the sink.
pub(crate) fn build_rules_chain(property: &Property, sink: &dyn DiagnosticSink) -> Option<Expr> {
    if property.annotations.is_empty() {
        sink.report(Diagnostic::EmptyAnnotations {
            property: property.key.clone(),
        });
        return None;
    }

    Some(make_rule_expression(&property.annotations, 0))
}

/// Assemble the schema object literal for a whole description.
///
/// One entry per compilable property, in description order. Properties
/// without a chain are omitted; duplicate keys pass through verbatim.
pub(crate) fn assemble_schema(description: &Description, sink: &dyn DiagnosticSink) -> Expr {
    let mut props = Vec::new();

    for property in &description.properties {
        if let Some(chain) = build_rules_chain(property, sink) {
            props.push(ObjectProp {
                key: property.key.clone(),
                value: chain,
            });
        }
    }

    Expr::Object(props)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::CollectingSink;
    use serde_json::json;

    #[test]
    fn test_cast_literal_kinds() {
        assert_eq!(
            cast_literal(&LiteralValue::Str("abc".to_string())),
            Expr::Str("abc".to_string())
        );
        assert_eq!(cast_literal(&LiteralValue::Num(42.0)), Expr::Num(42.0));
        assert_eq!(cast_literal(&LiteralValue::Bool(true)), Expr::Bool(true));
    }

    #[test]
    fn test_cast_literal_degrades_other_to_string() {
        let object = cast_literal(&LiteralValue::Other(json!({ "a": 1 })));
        assert_eq!(object, Expr::Str("{\"a\":1}".to_string()));

        let null = cast_literal(&LiteralValue::Other(json!(null)));
        assert_eq!(null, Expr::Str("null".to_string()));
    }

    #[test]
    fn test_single_annotation_is_bare_call() {
        let sink = CollectingSink::new();
        let property = Property::new("name").add_annotation(Annotation::new("string"));

        let chain = build_rules_chain(&property, &sink).unwrap();
        assert_eq!(chain.print(), "string()");
        assert!(sink.entries().is_empty());
    }

    #[test]
    fn test_chain_nesting_is_reversed() {
        // Annotation order [required, string] nests with the last
        // annotation innermost: string().required().
        let sink = CollectingSink::new();
        let property = Property::new("name")
            .add_annotation(Annotation::new("required"))
            .add_annotation(Annotation::new("string"));

        let chain = build_rules_chain(&property, &sink).unwrap();
        assert_eq!(chain.print(), "string().required()");
    }

    #[test]
    fn test_three_annotation_chain() {
        let sink = CollectingSink::new();
        let property = Property::new("name")
            .add_annotation(Annotation::new("max").add_parameter(10i64))
            .add_annotation(Annotation::new("required"))
            .add_annotation(Annotation::new("string"));

        let chain = build_rules_chain(&property, &sink).unwrap();
        assert_eq!(chain.print(), "string().required().max(10)");
    }

    #[test]
    fn test_parameters_preserve_order_and_kind() {
        let sink = CollectingSink::new();
        let property = Property::new("level").add_annotation(
            Annotation::new("oneOf")
                .add_parameter("low")
                .add_parameter(1i64)
                .add_parameter(true),
        );

        let chain = build_rules_chain(&property, &sink).unwrap();
        assert_eq!(chain.print(), "oneOf(\"low\", 1, true)");
    }

    #[test]
    fn test_empty_annotations_yield_no_chain() {
        let sink = CollectingSink::new();
        let property = Property::new("orphan");

        assert!(build_rules_chain(&property, &sink).is_none());
        assert_eq!(
            sink.entries(),
            vec![Diagnostic::EmptyAnnotations {
                property: "orphan".to_string()
            }]
        );
    }

    #[test]
    fn test_assemble_preserves_property_order() {
        let sink = CollectingSink::new();
        let description = Description::new(vec![
            Property::new("a").add_annotation(Annotation::new("string")),
            Property::new("b"),
            Property::new("c").add_annotation(Annotation::new("number")),
        ]);

        let schema = assemble_schema(&description, &sink);
        match schema {
            Expr::Object(props) => {
                let keys: Vec<&str> = props.iter().map(|p| p.key.as_str()).collect();
                assert_eq!(keys, vec!["a", "c"]);
            }
            other => panic!("expected object literal, got {other:?}"),
        }
        assert_eq!(sink.entries().len(), 1);
    }

    #[test]
    fn test_assemble_passes_duplicate_keys_through() {
        let sink = CollectingSink::new();
        let description = Description::new(vec![
            Property::new("dup").add_annotation(Annotation::new("string")),
            Property::new("dup").add_annotation(Annotation::new("number")),
        ]);

        let schema = assemble_schema(&description, &sink);
        match schema {
            Expr::Object(props) => {
                assert_eq!(props.len(), 2);
                assert_eq!(props[0].key, "dup");
                assert_eq!(props[1].key, "dup");
            }
            other => panic!("expected object literal, got {other:?}"),
        }
    }
}
