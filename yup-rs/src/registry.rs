//! Supported-method registry.
//!
//! The fixed vocabulary of Yup rule methods that annotations may
//! reference, plus the sugar aliases the preprocessor resolves to their
//! canonical names. Membership checking happens upstream of the
//! compiler; the compiler itself never re-validates a method name.

/// Check whether a method name is part of the supported Yup vocabulary.
pub fn is_supported(method: &str) -> bool {
    matches!(
        method,
        // Type heads
        "mixed"
            | "object"
            | "array"
            | "string"
            | "number"
            | "date"
            | "boolean"
            // Presence
            | "required"
            | "notRequired"
            | "nullable"
            | "defined"
            // Membership
            | "oneOf"
            | "notOneOf"
            // Size and range
            | "min"
            | "max"
            | "length"
            | "lessThan"
            | "moreThan"
            | "positive"
            | "negative"
            | "integer"
            | "truncate"
            | "round"
            // String formats
            | "matches"
            | "email"
            | "url"
            | "uuid"
            | "trim"
            | "lowercase"
            | "uppercase"
            // Misc
            | "default"
            | "label"
            | "typeError"
    )
}

/// Resolve a sugar alias to its canonical method name.
///
/// Returns `None` when the name is not an alias.
pub fn resolve_sugar(method: &str) -> Option<&'static str> {
    Some(match method {
        "int" => "integer",
        "bool" => "boolean",
        "text" => "string",
        "optional" => "notRequired",
        "pattern" => "matches",
        "gt" => "moreThan",
        "lt" => "lessThan",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_heads_are_supported() {
        for method in ["mixed", "object", "array", "string", "number", "date", "boolean"] {
            assert!(is_supported(method), "{method} should be supported");
        }
    }

    #[test]
    fn test_chainable_rules_are_supported() {
        for method in ["required", "min", "max", "matches", "email", "oneOf"] {
            assert!(is_supported(method), "{method} should be supported");
        }
    }

    #[test]
    fn test_unknown_methods_are_rejected() {
        assert!(!is_supported("frobnicate"));
        assert!(!is_supported(""));
        assert!(!is_supported("Required")); // method names are case sensitive
    }

    #[test]
    fn test_sugar_aliases_resolve_to_supported_methods() {
        for alias in ["int", "bool", "text", "optional", "pattern", "gt", "lt"] {
            let canonical = resolve_sugar(alias).unwrap();
            assert!(is_supported(canonical), "{alias} -> {canonical}");
        }
    }

    #[test]
    fn test_canonical_names_are_not_aliases() {
        assert_eq!(resolve_sugar("integer"), None);
        assert_eq!(resolve_sugar("string"), None);
        assert_eq!(resolve_sugar("required"), None);
    }
}
