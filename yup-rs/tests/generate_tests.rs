//! End-to-end tests for schema module generation.

use std::sync::Arc;

use serde_json::json;
use yup_rs::{
    Annotation, CollectingSink, Description, Diagnostic, GenerateError, Property, YupGenerator,
};

fn generator() -> YupGenerator {
    YupGenerator::new()
}

#[test]
fn generates_complete_module() {
    let description = Description::new(vec![
        Property::new("name")
            .add_annotation(Annotation::new("required"))
            .add_annotation(Annotation::new("string")),
        Property::new("age")
            .add_annotation(Annotation::new("min").add_parameter(0i64))
            .add_annotation(Annotation::new("number")),
    ]);

    let code = generator().generate(&description).unwrap();

    assert!(code.starts_with("/**"));
    assert!(code.contains("import { object, mixed, date, string, number, array, boolean } from \"yup\";"));
    assert!(code.contains("name: string().required()"));
    assert!(code.contains("age: number().min(0)"));
    assert!(code.trim_end().ends_with("});"));
}

#[test]
fn preserves_property_order() {
    let description = Description::new(vec![
        Property::new("a").add_annotation(Annotation::new("string")),
        Property::new("b").add_annotation(Annotation::new("number")),
        Property::new("c").add_annotation(Annotation::new("boolean")),
    ]);

    let code = generator().generate(&description).unwrap();

    let a = code.find("a: string()").unwrap();
    let b = code.find("b: number()").unwrap();
    let c = code.find("c: boolean()").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn literal_parameters_keep_their_kind() {
    let description = Description::new(vec![Property::new("field").add_annotation(
        Annotation::new("oneOf")
            .add_parameter("abc")
            .add_parameter(42i64)
            .add_parameter(true),
    )]);

    let code = generator().generate(&description).unwrap();
    assert!(code.contains("oneOf(\"abc\", 42, true)"));
}

#[test]
fn unsupported_parameter_type_degrades_to_string() {
    let value = json!({
        "properties": [
            {
                "key": "field",
                "annotations": [
                    { "method": "default", "parameters": [{ "nested": 1 }] }
                ]
            }
        ]
    });

    let code = generator().generate_value(&value).unwrap();
    assert!(code.contains("default(\"{\\\"nested\\\":1}\")"));
}

#[test]
fn empty_property_is_skipped_without_aborting() {
    let sink = Arc::new(CollectingSink::new());
    let generator = YupGenerator::with_sink(sink.clone());

    let description = Description::new(vec![
        Property::new("empty"),
        Property::new("age")
            .add_annotation(Annotation::new("number"))
            .add_annotation(Annotation::new("required")),
    ]);

    let code = generator.generate(&description).unwrap();

    assert!(!code.contains("empty"));
    assert!(code.contains("age: required().number()"));
    assert_eq!(
        sink.entries(),
        vec![Diagnostic::EmptyAnnotations {
            property: "empty".to_string()
        }]
    );
}

#[test]
fn invalid_input_fails_without_output() {
    let result = generator().generate_value(&json!({ "foo": "bar" }));
    assert!(matches!(result, Err(GenerateError::InvalidDescription)));
}

#[test]
fn sugar_aliases_resolve_before_compilation() {
    let description = Description::new(vec![Property::new("age")
        .add_annotation(Annotation::new("int"))
        .add_annotation(Annotation::new("number"))]);

    let code = generator().generate(&description).unwrap();
    assert!(code.contains("age: number().integer()"));
}

#[test]
fn unknown_method_is_dropped_with_diagnostic() {
    let sink = Arc::new(CollectingSink::new());
    let generator = YupGenerator::with_sink(sink.clone());

    let description = Description::new(vec![Property::new("name")
        .add_annotation(Annotation::new("frobnicate"))
        .add_annotation(Annotation::new("string"))]);

    let code = generator.generate(&description).unwrap();

    assert!(code.contains("name: string()"));
    assert!(!code.contains("frobnicate"));
    assert_eq!(
        sink.entries(),
        vec![Diagnostic::UnsupportedMethod {
            property: "name".to_string(),
            method: "frobnicate".to_string(),
        }]
    );
}

#[test]
fn non_ascii_parameters_render_readable() {
    let description = Description::new(vec![Property::new("label").add_annotation(
        Annotation::new("typeError").add_parameter("必须是字符串"),
    )]);

    let code = generator().generate(&description).unwrap();
    assert!(code.contains("typeError(\"必须是字符串\")"));
    assert!(!code.contains("\\u"));
}

mod chain_law {
    use super::*;
    use proptest::prelude::*;

    fn arb_method() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("string".to_string()),
            Just("number".to_string()),
            Just("required".to_string()),
            Just("nullable".to_string()),
            Just("trim".to_string()),
            Just("email".to_string()),
        ]
    }

    proptest! {
        /// For any non-empty annotation list, the rendered chain reads
        /// the annotations in reverse order: the last annotation is the
        /// base call and the first is the outermost suffix.
        #[test]
        fn chain_renders_annotations_in_reverse(methods in proptest::collection::vec(arb_method(), 1..6)) {
            let annotations: Vec<Annotation> =
                methods.iter().map(|m| Annotation::new(m.clone())).collect();
            let description =
                Description::new(vec![Property::new("field").with_annotations(annotations)]);

            let code = YupGenerator::new().generate(&description).unwrap();

            let mut expected = String::new();
            for (i, method) in methods.iter().rev().enumerate() {
                if i > 0 {
                    expected.push('.');
                }
                expected.push_str(method);
                expected.push_str("()");
            }
            prop_assert!(
                code.contains(&format!("field: {expected}")),
                "expected chain '{}' in:\n{}",
                expected,
                code
            );
        }

        /// Generated modules always have balanced parentheses and braces.
        #[test]
        fn generated_module_is_balanced(methods in proptest::collection::vec(arb_method(), 0..5)) {
            let annotations: Vec<Annotation> =
                methods.iter().map(|m| Annotation::new(m.clone())).collect();
            let description =
                Description::new(vec![Property::new("field").with_annotations(annotations)]);

            let code = YupGenerator::new().generate(&description).unwrap();

            prop_assert_eq!(code.matches('(').count(), code.matches(')').count());
            prop_assert_eq!(code.matches('{').count(), code.matches('}').count());
            prop_assert!(!code.contains(".."));
        }
    }
}
