//! Common utilities for TypeScript code generation.
//!
//! Identifier sanitizing, quoting and literal conversion shared by the mapper,
//! the emitters and the resolver's name table.

use std::collections::HashSet;
use std::sync::LazyLock;

use super::types::{TsLiteral, TsPrimitive, TsType};
use crate::openapi::spec::EnumValue;

/// TypeScript reserved words that cannot be used as type names.
pub static TS_RESERVED_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "break",
        "case",
        "catch",
        "class",
        "const",
        "continue",
        "debugger",
        "default",
        "delete",
        "do",
        "else",
        "enum",
        "export",
        "extends",
        "false",
        "finally",
        "for",
        "function",
        "if",
        "import",
        "in",
        "instanceof",
        "new",
        "null",
        "return",
        "super",
        "switch",
        "this",
        "throw",
        "true",
        "try",
        "typeof",
        "var",
        "void",
        "while",
        "with",
        "yield",
        "let",
        "static",
        "implements",
        "interface",
        "package",
        "private",
        "protected",
        "public",
        "await",
        "async",
        // built-in type names a declaration must not shadow
        "any",
        "unknown",
        "never",
        "string",
        "number",
        "boolean",
        "object",
        "symbol",
        "bigint",
        "undefined",
    ]
    .into_iter()
    .collect()
});

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Check if a name needs quoting to be used as a property key.
///
/// Returns true if the name:
/// - Is empty
/// - Doesn't start with a letter, underscore, or dollar sign
/// - Contains characters other than alphanumeric, underscore, or dollar sign
pub fn needs_quoting(name: &str) -> bool {
    name.is_empty()
        || !name
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        || !name.chars().all(is_ident_char)
}

/// Escape a string for use in a double-quoted TypeScript string literal.
pub fn escape_js_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}

/// Always quote a string (property names, path templates).
pub fn quote(name: &str) -> String {
    format!("\"{}\"", escape_js_string(name))
}

/// Quote a string if it is not a valid bare key.
pub fn quote_if_needed(name: &str) -> String {
    if needs_quoting(name) {
        quote(name)
    } else {
        name.to_string()
    }
}

/// Escape text placed inside a `/** ... */` block.
pub fn escape_doc_text(s: &str) -> String {
    s.replace("*/", "*\\/")
}

/// Turn a component name into a valid TypeScript type name.
///
/// - Characters outside `[A-Za-z0-9_$]` act as separators; the following
///   segment gets its first letter capitalized (`user-profile` -> `userProfile`)
/// - Prepends `_` if the result starts with a digit
/// - Prefixes reserved words and built-in type names with `_`
pub fn sanitize_type_name(name: &str) -> String {
    let mut result = String::new();
    for (i, part) in name.split(|c: char| !is_ident_char(c)).enumerate() {
        if part.is_empty() {
            continue;
        }
        if i == 0 || result.is_empty() {
            result.push_str(part);
        } else {
            result.push_str(&capitalize_first(part));
        }
    }

    if result.is_empty() {
        return "_Empty".to_string();
    }

    if result.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        result = format!("_{result}");
    }

    if TS_RESERVED_WORDS.contains(result.as_str()) {
        result = format!("_{result}");
    }

    result
}

/// Capitalize the first letter of a string.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Convert an OpenAPI enum value to a literal type.
pub fn enum_value_to_type(v: &EnumValue) -> TsType {
    match v {
        EnumValue::String(s) => TsType::Literal(TsLiteral::String(s.clone())),
        EnumValue::Integer(n) => TsType::Literal(TsLiteral::Int(*n)),
        EnumValue::Float(f) => TsType::Literal(TsLiteral::Number(*f)),
        EnumValue::Bool(b) => TsType::Literal(TsLiteral::Bool(*b)),
        EnumValue::Null => TsType::Literal(TsLiteral::Null),
        EnumValue::Other(value) => json_value_to_type(value),
    }
}

/// Convert a JSON value (`const`) to a literal type.
pub fn json_value_to_type(value: &serde_json::Value) -> TsType {
    match value {
        serde_json::Value::Null => TsType::Literal(TsLiteral::Null),
        serde_json::Value::Bool(b) => TsType::Literal(TsLiteral::Bool(*b)),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                TsType::Literal(TsLiteral::Int(i))
            } else {
                TsType::Literal(TsLiteral::Number(n.as_f64().unwrap_or(0.0)))
            }
        }
        serde_json::Value::String(s) => TsType::Literal(TsLiteral::String(s.clone())),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
            TsType::Primitive(TsPrimitive::Unknown)
        }
    }
}

/// Create a `Record<string, T>` type.
pub fn make_string_record(value_type: TsType) -> TsType {
    TsType::Record {
        key: Box::new(TsType::Primitive(TsPrimitive::String)),
        value: Box::new(value_type),
    }
}
