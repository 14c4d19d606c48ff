//! Module skeleton and splicer.
//!
//! The generated schema module starts from a fixed boilerplate
//! skeleton whose only meaningful content is a default-exported,
//! zero-argument call to the schema factory. The splicer appends the
//! assembled object literal as that call's single argument.

use crate::ast::{self, Expr, Module};
use crate::error::{GenerateError, GenerateResult};

/// Name of the schema factory the skeleton exports a call to.
const FACTORY: &str = "object";

/// Fixed module skeleton. Each generate call parses its own fresh copy.
const SKELETON: &str = r#"/**
 * @overview A Yup schema generated by yup-rs.
 */
import { object, mixed, date, string, number, array, boolean } from "yup";

export default object();
"#;

/// Parse the skeleton and splice the schema object literal into the
/// default-exported factory call.
///
/// Fails when the skeleton does not have the expected shape. The
/// skeleton is a build-time constant, so such a failure signals a
/// broken internal assumption and aborts the whole operation.
pub(crate) fn splice_schema(schema: Expr) -> GenerateResult<Module> {
    let mut module = ast::parse_module(SKELETON)
        .map_err(|e| GenerateError::malformed_template(e.to_string()))?;

    match &mut module.export {
        Expr::Call { callee, args } if args.is_empty() => {
            match callee.as_ref() {
                Expr::Ident(name) if name == FACTORY => {}
                _ => {
                    return Err(GenerateError::malformed_template(format!(
                        "default export is not a call to '{FACTORY}'"
                    )))
                }
            }
            args.push(schema);
        }
        _ => {
            return Err(GenerateError::malformed_template(
                "default export is not a zero-argument factory call",
            ))
        }
    }

    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ObjectProp;

    #[test]
    fn test_splice_injects_single_argument() {
        let schema = Expr::Object(vec![ObjectProp {
            key: "age".to_string(),
            value: Expr::call(Expr::ident("number"), vec![]),
        }]);

        let module = splice_schema(schema).unwrap();
        match module.export {
            Expr::Call { args, .. } => assert_eq!(args.len(), 1),
            other => panic!("expected call expression, got {other:?}"),
        }
    }

    #[test]
    fn test_spliced_module_renders_factory_call() {
        let schema = Expr::Object(vec![]);
        let module = splice_schema(schema).unwrap();
        let printed = module.print();

        assert!(printed.contains("export default object({});"));
        assert!(printed.contains("from \"yup\";"));
    }

    #[test]
    fn test_skeleton_parses() {
        // The skeleton itself must always satisfy the splicer's shape
        // expectations.
        assert!(splice_schema(Expr::Object(vec![])).is_ok());
    }
}
