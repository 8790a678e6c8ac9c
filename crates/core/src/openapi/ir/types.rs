//! TypeScript IR types for code generation.
//!
//! This module defines the TypeScript type system representation:
//! - TsType: Types (primitives, arrays, tuples, unions, objects, etc.)
//! - TsObject / TsProp: Object literal types and their members
//! - TsTypeDef: Top-level `interface` / `type` declarations

/// TypeScript type representation
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// Primitive types: string, number, boolean, null, void, unknown, never
    Primitive(TsPrimitive),
    /// Array type: T[] or readonly T[]
    Array { item: Box<TsType>, readonly: bool },
    /// Fixed-length tuple: [T, T] or readonly [T, T]
    Tuple { items: Vec<TsType>, readonly: bool },
    /// Union type: A | B | C
    Union(Vec<TsType>),
    /// Intersection type: A & B & C
    Intersection(Vec<TsType>),
    /// Object type: { "foo": string; "bar"?: number }
    Object(TsObject),
    /// Record type: Record<K, V>
    Record {
        key: Box<TsType>,
        value: Box<TsType>,
    },
    /// Literal type: "foo", 42, true
    Literal(TsLiteral),
    /// Template literal type: `${string}-${string}`
    Template(Vec<TemplatePart>),
    /// Named type reference
    Ref(String),
    /// A type standing in for a construct TypeScript cannot express,
    /// emitted with an inline comment naming what was approximated
    Approximation { ty: Box<TsType>, note: String },
}

impl TsType {
    /// Shorthand for `unknown`.
    pub fn unknown() -> Self {
        TsType::Primitive(TsPrimitive::Unknown)
    }

    /// Check whether `null` is already a member of this type.
    pub fn admits_null(&self) -> bool {
        match self {
            TsType::Primitive(TsPrimitive::Null) | TsType::Literal(TsLiteral::Null) => true,
            TsType::Union(types) => types.iter().any(TsType::admits_null),
            _ => false,
        }
    }

    /// Union this type with `null` unless it already admits it.
    pub fn or_null(self) -> Self {
        if self.admits_null() {
            return self;
        }
        match self {
            TsType::Union(mut types) => {
                types.push(TsType::Primitive(TsPrimitive::Null));
                TsType::Union(types)
            }
            other => TsType::Union(vec![other, TsType::Primitive(TsPrimitive::Null)]),
        }
    }

    /// Build a union, collapsing zero members to `unknown` and one member to itself.
    pub fn union_of(mut types: Vec<TsType>) -> Self {
        match types.len() {
            0 => TsType::unknown(),
            1 => types.pop().unwrap_or_else(TsType::unknown),
            _ => TsType::Union(types),
        }
    }

    /// Build an intersection, collapsing zero members to `unknown` and one member to itself.
    pub fn intersection_of(mut types: Vec<TsType>) -> Self {
        match types.len() {
            0 => TsType::unknown(),
            1 => types.pop().unwrap_or_else(TsType::unknown),
            _ => TsType::Intersection(types),
        }
    }
}

/// TypeScript primitive types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TsPrimitive {
    String,
    Number,
    Boolean,
    Null,
    Void,
    Unknown,
    Never,
}

/// TypeScript literal values
#[derive(Debug, Clone, PartialEq)]
pub enum TsLiteral {
    String(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    Null,
}

/// Template literal part
#[derive(Debug, Clone, PartialEq)]
pub enum TemplatePart {
    /// Static text
    Static(String),
    /// Placeholder: ${string}
    Placeholder(TsPrimitive),
}

/// Object literal type
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TsObject {
    pub props: Vec<TsProp>,
    /// `[key: string]: T` appended after the properties
    pub index: Option<IndexSignature>,
}

impl TsObject {
    pub fn is_empty(&self) -> bool {
        self.props.is_empty() && self.index.is_none()
    }
}

/// `[key: string]: T`
#[derive(Debug, Clone, PartialEq)]
pub struct IndexSignature {
    pub value: Box<TsType>,
    pub readonly: bool,
}

/// How a member key is written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropKey {
    /// Always quoted: schema properties, parameter names, path templates
    Quoted(String),
    /// Written bare when it is a valid key: structural members like `get` or `200`
    Bare(String),
}

/// Object member definition
#[derive(Debug, Clone, PartialEq)]
pub struct TsProp {
    pub key: PropKey,
    pub ty: TsType,
    pub optional: bool,
    pub readonly: bool,
    pub docs: Option<DocComment>,
}

impl TsProp {
    /// A required structural member (`parameters`, `responses`, ...).
    pub fn field(name: &str, ty: TsType) -> Self {
        Self {
            key: PropKey::Bare(name.to_string()),
            ty,
            optional: false,
            readonly: false,
            docs: None,
        }
    }

    #[must_use]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    #[must_use]
    pub fn with_docs(mut self, docs: Option<DocComment>) -> Self {
        self.docs = docs;
        self
    }
}

/// Lines of a `/** ... */` block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocComment {
    pub lines: Vec<String>,
}

impl DocComment {
    /// Returns `None` when no line was collected.
    pub fn from_lines(lines: Vec<String>) -> Option<Self> {
        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }
}

/// Type definition kind
#[derive(Debug, Clone, PartialEq)]
pub enum TypeDefKind {
    /// export interface Foo { ... }
    Interface(TsObject),
    /// export type Foo = ...;
    TypeAlias(TsType),
}

/// Top-level declaration
#[derive(Debug, Clone, PartialEq)]
pub struct TsTypeDef {
    pub name: String,
    pub kind: TypeDefKind,
    pub docs: Option<DocComment>,
}

impl TsTypeDef {
    /// Whether the declaration is emitted as an interface.
    pub fn is_interface(&self) -> bool {
        matches!(self.kind, TypeDefKind::Interface(_))
    }
}
