//! Minimal JavaScript expression AST and printer.
//!
//! Just enough of an expression grammar to represent the generated
//! schema module: literals, identifiers, member accesses, calls, and
//! object literals, plus a module wrapper (overview comment, one named
//! import, one default export).
//!
//! The printer behaves like a generic code serializer: non-ASCII
//! characters in string literals and comments are escaped as `\uXXXX`
//! sequences. The text normalizer reverses that escaping after the
//! module has been rendered.

use thiserror::Error;

use once_cell::sync::Lazy;
use regex::Regex;

/// A JavaScript expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// String literal.
    Str(String),
    /// Numeric literal.
    Num(f64),
    /// Boolean literal.
    Bool(bool),
    /// Bare identifier.
    Ident(String),
    /// Member access: `object.property`.
    Member {
        /// Receiver expression.
        object: Box<Expr>,
        /// Property name.
        property: String,
    },
    /// Call expression: `callee(args)`.
    Call {
        /// Callee expression (identifier or member access).
        callee: Box<Expr>,
        /// Arguments in call order.
        args: Vec<Expr>,
    },
    /// Object literal with entries in insertion order.
    Object(Vec<ObjectProp>),
}

/// One key/value entry of an object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProp {
    /// Property key.
    pub key: String,
    /// Property value.
    pub value: Expr,
}

impl Expr {
    /// Create an identifier expression.
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }

    /// Create a call expression.
    pub fn call(callee: Expr, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee: Box::new(callee),
            args,
        }
    }

    /// Create a member-access expression.
    pub fn member(object: Expr, property: impl Into<String>) -> Self {
        Expr::Member {
            object: Box::new(object),
            property: property.into(),
        }
    }

    /// Render this expression to source text.
    pub fn print(&self) -> String {
        self.print_with_indent(0)
    }

    fn print_with_indent(&self, indent: usize) -> String {
        match self {
            Expr::Str(value) => print_string_literal(value),
            Expr::Num(value) => format!("{value}"),
            Expr::Bool(value) => format!("{value}"),
            Expr::Ident(name) => name.clone(),
            Expr::Member { object, property } => {
                let receiver = match object.as_ref() {
                    // An object literal in receiver position needs parens.
                    Expr::Object(_) => format!("({})", object.print_with_indent(indent)),
                    _ => object.print_with_indent(indent),
                };
                format!("{receiver}.{property}")
            }
            Expr::Call { callee, args } => {
                let args: Vec<String> = args
                    .iter()
                    .map(|arg| arg.print_with_indent(indent))
                    .collect();
                format!(
                    "{}({})",
                    callee.print_with_indent(indent),
                    args.join(", ")
                )
            }
            Expr::Object(props) => {
                if props.is_empty() {
                    return "{}".to_string();
                }
                let inner_pad = "  ".repeat(indent + 1);
                let entries: Vec<String> = props
                    .iter()
                    .map(|prop| {
                        format!(
                            "{}{}: {}",
                            inner_pad,
                            print_object_key(&prop.key),
                            prop.value.print_with_indent(indent + 1)
                        )
                    })
                    .collect();
                format!("{{\n{}\n{}}}", entries.join(",\n"), "  ".repeat(indent))
            }
        }
    }
}

/// A named-import declaration: `import { a, b } from "source";`.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportDecl {
    /// Imported binding names in declaration order.
    pub names: Vec<String>,
    /// Module source string.
    pub source: String,
}

/// A generated schema module: overview comment, one import, one
/// default-exported expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    /// Overview text of the leading block comment.
    pub overview: String,
    /// The single named-import declaration.
    pub import: ImportDecl,
    /// The default-exported expression.
    pub export: Expr,
}

impl Module {
    /// Render the whole module to source text.
    pub fn print(&self) -> String {
        let mut out = String::new();

        out.push_str("/**\n");
        for line in self.overview.lines() {
            out.push_str(" *");
            if !line.is_empty() {
                out.push(' ');
                out.push_str(&escape_non_ascii(line));
            }
            out.push('\n');
        }
        out.push_str(" */\n");

        out.push_str(&format!(
            "import {{ {} }} from \"{}\";\n\n",
            self.import.names.join(", "),
            self.import.source
        ));

        out.push_str(&format!("export default {};\n", self.export.print()));

        out
    }
}

/// Error raised when module source does not match the expected shape.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModuleParseError {
    /// No leading `/** ... */` comment.
    #[error("missing leading overview comment")]
    MissingOverview,

    /// No named-import declaration.
    #[error("missing named-import declaration")]
    MissingImport,

    /// No `export default factory();` statement.
    #[error("missing default-exported factory call")]
    MissingExport,
}

static OVERVIEW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*\*(.*?)\*/").expect("overview pattern"));
static IMPORT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"import\s*\{([^}]*)\}\s*from\s*"([^"]+)"\s*;"#).expect("import pattern"));
static EXPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"export\s+default\s+([A-Za-z_$][A-Za-z0-9_$]*)\(\)\s*;").expect("export pattern")
});

/// Parse module source of the skeleton shape into a [`Module`].
///
/// The grammar is deliberately narrow: a leading block comment, one
/// named import, and a default-exported zero-argument factory call.
pub fn parse_module(source: &str) -> Result<Module, ModuleParseError> {
    let overview = OVERVIEW_RE
        .captures(source)
        .ok_or(ModuleParseError::MissingOverview)?;
    let overview = overview[1]
        .lines()
        .map(|line| line.trim_start().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    let import = IMPORT_RE
        .captures(source)
        .ok_or(ModuleParseError::MissingImport)?;
    let names: Vec<String> = import[1]
        .split(',')
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect();
    let import = ImportDecl {
        names,
        source: import[2].to_string(),
    };

    let export = EXPORT_RE
        .captures(source)
        .ok_or(ModuleParseError::MissingExport)?;
    let export = Expr::call(Expr::ident(&export[1]), Vec::new());

    Ok(Module {
        overview,
        import,
        export,
    })
}

/// Render a string literal, escaping quotes, control characters, and
/// every non-ASCII character as `\uXXXX` code units.
fn print_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_ascii() => out.push(c),
            c => push_unicode_escape(&mut out, c),
        }
    }
    out.push('"');
    out
}

/// Escape every non-ASCII character of `text` as `\uXXXX` code units,
/// leaving ASCII untouched.
fn escape_non_ascii(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            push_unicode_escape(&mut out, c);
        }
    }
    out
}

fn push_unicode_escape(out: &mut String, c: char) {
    let mut units = [0u16; 2];
    for unit in c.encode_utf16(&mut units) {
        out.push_str(&format!("\\u{unit:04x}"));
    }
}

fn print_object_key(key: &str) -> String {
    if is_identifier(key) {
        key.to_string()
    } else {
        print_string_literal(key)
    }
}

fn is_identifier(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
