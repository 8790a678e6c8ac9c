//! TypeScript code emission via the Emit trait.
//!
//! Each IR node knows how to print itself at a given nesting level. Object
//! literal types are the only multi-line construct: their members go one level
//! deeper (two spaces per level) and the closing brace returns to the level of
//! the line that opened it.

use super::types::{
    DocComment, IndexSignature, PropKey, TemplatePart, TsLiteral, TsObject, TsPrimitive, TsProp,
    TsType, TsTypeDef, TypeDefKind,
};
use super::utils::{escape_doc_text, escape_js_string, quote, quote_if_needed};

const INDENT: &str = "  ";

/// Trait for emitting TypeScript code from IR nodes.
pub trait Emit {
    /// Emit the node as if it started on a line indented `indent` levels.
    fn emit_indented(&self, indent: usize) -> String;

    /// Emit at the top level.
    fn emit(&self) -> String {
        self.emit_indented(0)
    }
}

// =============================================================================
// Primitive Types
// =============================================================================

impl Emit for TsPrimitive {
    fn emit_indented(&self, _indent: usize) -> String {
        match self {
            TsPrimitive::String => "string",
            TsPrimitive::Number => "number",
            TsPrimitive::Boolean => "boolean",
            TsPrimitive::Null => "null",
            TsPrimitive::Void => "void",
            TsPrimitive::Unknown => "unknown",
            TsPrimitive::Never => "never",
        }
        .to_string()
    }
}

impl Emit for TsLiteral {
    fn emit_indented(&self, _indent: usize) -> String {
        match self {
            TsLiteral::String(s) => format!("\"{}\"", escape_js_string(s)),
            TsLiteral::Number(n) => n.to_string(),
            TsLiteral::Int(i) => i.to_string(),
            TsLiteral::Bool(b) => b.to_string(),
            TsLiteral::Null => "null".to_string(),
        }
    }
}

// =============================================================================
// Types
// =============================================================================

/// Wrap members whose own operators would bind looser than the context.
fn needs_parens_in_array(ty: &TsType) -> bool {
    matches!(
        ty,
        TsType::Union(_) | TsType::Intersection(_) | TsType::Approximation { .. }
    )
}

fn readonly_prefix(readonly: bool) -> &'static str {
    if readonly { "readonly " } else { "" }
}

impl Emit for TsType {
    fn emit_indented(&self, indent: usize) -> String {
        match self {
            TsType::Primitive(p) => p.emit(),
            TsType::Array { item, readonly } => {
                let inner = item.emit_indented(indent);
                let prefix = readonly_prefix(*readonly);
                if needs_parens_in_array(item) {
                    format!("{prefix}({inner})[]")
                } else {
                    format!("{prefix}{inner}[]")
                }
            }
            TsType::Tuple { items, readonly } => {
                let parts: Vec<_> = items.iter().map(|t| t.emit_indented(indent)).collect();
                format!("{}[{}]", readonly_prefix(*readonly), parts.join(", "))
            }
            TsType::Union(types) => types
                .iter()
                .map(|t| t.emit_indented(indent))
                .collect::<Vec<_>>()
                .join(" | "),
            TsType::Intersection(types) => types
                .iter()
                .map(|t| {
                    let s = t.emit_indented(indent);
                    if matches!(t, TsType::Union(_) | TsType::Approximation { .. }) {
                        format!("({s})")
                    } else {
                        s
                    }
                })
                .collect::<Vec<_>>()
                .join(" & "),
            TsType::Object(object) => object.emit_indented(indent),
            TsType::Record { key, value } => {
                format!(
                    "Record<{}, {}>",
                    key.emit_indented(indent),
                    value.emit_indented(indent)
                )
            }
            TsType::Literal(lit) => lit.emit(),
            TsType::Template(parts) => {
                let content: String = parts
                    .iter()
                    .map(|p| match p {
                        TemplatePart::Static(s) => s.replace('`', "\\`").replace("${", "\\${"),
                        TemplatePart::Placeholder(prim) => format!("${{{}}}", prim.emit()),
                    })
                    .collect();
                format!("`{content}`")
            }
            TsType::Ref(name) => name.clone(),
            TsType::Approximation { ty, note } => {
                format!("{} /* {} */", ty.emit_indented(indent), escape_doc_text(note))
            }
        }
    }
}

impl Emit for TsObject {
    fn emit_indented(&self, indent: usize) -> String {
        if self.is_empty() {
            return "{}".to_string();
        }
        let inner = INDENT.repeat(indent + 1);
        let mut output = String::from("{\n");
        for prop in &self.props {
            output.push_str(&prop.emit_indented(indent + 1));
        }
        if let Some(index) = &self.index {
            output.push_str(&inner);
            output.push_str(&index.emit_indented(indent + 1));
            output.push_str(";\n");
        }
        output.push_str(&INDENT.repeat(indent));
        output.push('}');
        output
    }
}

impl Emit for IndexSignature {
    fn emit_indented(&self, indent: usize) -> String {
        format!(
            "{}[key: string]: {}",
            readonly_prefix(self.readonly),
            self.value.emit_indented(indent)
        )
    }
}

impl Emit for PropKey {
    fn emit_indented(&self, _indent: usize) -> String {
        match self {
            PropKey::Quoted(name) => quote(name),
            PropKey::Bare(name) => {
                if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
                    name.clone()
                } else {
                    quote_if_needed(name)
                }
            }
        }
    }
}

/// Emits a full member line (with its doc comment), terminated by `;\n`.
impl Emit for TsProp {
    fn emit_indented(&self, indent: usize) -> String {
        let prefix = INDENT.repeat(indent);
        let mut output = String::new();
        if let Some(docs) = &self.docs {
            output.push_str(&docs.emit_indented(indent));
        }
        let opt = if self.optional { "?" } else { "" };
        output.push_str(&format!(
            "{prefix}{}{}{opt}: {};\n",
            readonly_prefix(self.readonly),
            self.key.emit(),
            self.ty.emit_indented(indent)
        ));
        output
    }
}

/// Emits the comment block including its leading indentation and trailing newline.
impl Emit for DocComment {
    fn emit_indented(&self, indent: usize) -> String {
        let prefix = INDENT.repeat(indent);
        if let [line] = self.lines.as_slice() {
            return format!("{prefix}/** {} */\n", escape_doc_text(line));
        }
        let mut output = format!("{prefix}/**\n");
        for line in &self.lines {
            if line.is_empty() {
                output.push_str(&format!("{prefix} *\n"));
            } else {
                output.push_str(&format!("{prefix} * {}\n", escape_doc_text(line)));
            }
        }
        output.push_str(&format!("{prefix} */\n"));
        output
    }
}

// =============================================================================
// Type Definitions
// =============================================================================

impl Emit for TsTypeDef {
    fn emit_indented(&self, indent: usize) -> String {
        let mut output = String::new();
        if let Some(docs) = &self.docs {
            output.push_str(&docs.emit_indented(indent));
        }
        let prefix = INDENT.repeat(indent);
        match &self.kind {
            TypeDefKind::Interface(object) => {
                output.push_str(&format!(
                    "{prefix}export interface {} {}",
                    self.name,
                    object.emit_indented(indent)
                ));
            }
            TypeDefKind::TypeAlias(ty) => {
                output.push_str(&format!(
                    "{prefix}export type {} = {};",
                    self.name,
                    ty.emit_indented(indent)
                ));
            }
        }
        output
    }
}
