//! OpenAPI document structs for serde deserialization.
//!
//! This module models the subset of OpenAPI 3.0/3.1 that the type compiler
//! reads. Every map is an [`IndexMap`] so that paths, properties, responses and
//! component schemas keep their document order all the way to the output.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// Root OpenAPI document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenApiDocument {
    /// OpenAPI version string (e.g. "3.1.0").
    pub openapi: Option<String>,
    /// API metadata.
    pub info: Option<Info>,
    /// Declared servers.
    #[serde(default)]
    pub servers: Vec<Server>,
    /// Path templates mapped to their operations.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    /// Reusable components.
    pub components: Option<Components>,
    /// Global security requirements.
    #[serde(default)]
    pub security: Vec<IndexMap<String, Vec<String>>>,
    /// Tag metadata.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl OpenApiDocument {
    /// Component schemas in document order (empty when the document has none).
    pub fn schemas(&self) -> impl Iterator<Item = (&String, &Schema)> {
        self.components
            .iter()
            .flat_map(|components| components.schemas.iter())
    }
}

/// API metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Info {
    /// API title.
    #[serde(default)]
    pub title: String,
    /// API version.
    #[serde(default)]
    pub version: String,
    /// Long-form description.
    pub description: Option<String>,
}

/// A server entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Server {
    /// Server URL.
    pub url: String,
    /// Human readable description.
    pub description: Option<String>,
}

/// A tag entry.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    /// Tag name.
    pub name: String,
    /// Tag description.
    pub description: Option<String>,
}

/// Components section containing reusable objects.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Components {
    /// Named schemas, each emitted as a top-level declaration.
    #[serde(default)]
    pub schemas: IndexMap<String, Schema>,
    /// Named responses.
    #[serde(default)]
    pub responses: IndexMap<String, RefOr<Response>>,
    /// Named parameters.
    #[serde(default)]
    pub parameters: IndexMap<String, RefOr<Parameter>>,
    /// Named request bodies.
    #[serde(default)]
    pub request_bodies: IndexMap<String, RefOr<RequestBody>>,
    /// Security schemes (accepted, never emitted).
    #[serde(default)]
    pub security_schemes: IndexMap<String, SecurityScheme>,
}

/// Either a `$ref` object or an inline value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RefOr<T> {
    /// `{ "$ref": "#/components/..." }`
    Ref(Reference),
    /// Inline value.
    Item(T),
}

/// A `$ref` object.
#[derive(Debug, Clone, Deserialize)]
pub struct Reference {
    /// The pointer string.
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

/// HTTP methods a path item can carry, in OpenAPI declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
    /// OPTIONS
    Options,
    /// HEAD
    Head,
    /// PATCH
    Patch,
    /// TRACE
    Trace,
}

impl HttpMethod {
    /// Lowercase method name as used for the operation key.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Put => "put",
            HttpMethod::Post => "post",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
            HttpMethod::Patch => "patch",
            HttpMethod::Trace => "trace",
        }
    }
}

/// A path item containing operations for different HTTP methods.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathItem {
    /// Short summary shared by all operations.
    pub summary: Option<String>,
    /// Description shared by all operations.
    pub description: Option<String>,
    /// GET operation.
    pub get: Option<Operation>,
    /// PUT operation.
    pub put: Option<Operation>,
    /// POST operation.
    pub post: Option<Operation>,
    /// DELETE operation.
    pub delete: Option<Operation>,
    /// OPTIONS operation.
    pub options: Option<Operation>,
    /// HEAD operation.
    pub head: Option<Operation>,
    /// PATCH operation.
    pub patch: Option<Operation>,
    /// TRACE operation.
    pub trace: Option<Operation>,
    /// Path-level parameters shared by all operations.
    #[serde(default)]
    pub parameters: Vec<RefOr<Parameter>>,
}

impl PathItem {
    /// Defined operations in method order.
    pub fn operations(&self) -> impl Iterator<Item = (HttpMethod, &Operation)> {
        [
            (HttpMethod::Get, self.get.as_ref()),
            (HttpMethod::Put, self.put.as_ref()),
            (HttpMethod::Post, self.post.as_ref()),
            (HttpMethod::Delete, self.delete.as_ref()),
            (HttpMethod::Options, self.options.as_ref()),
            (HttpMethod::Head, self.head.as_ref()),
            (HttpMethod::Patch, self.patch.as_ref()),
            (HttpMethod::Trace, self.trace.as_ref()),
        ]
        .into_iter()
        .filter_map(|(method, op)| op.map(|op| (method, op)))
    }
}

/// An API operation (endpoint).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Operation identifier, only surfaced in doc comments.
    pub operation_id: Option<String>,
    /// Short summary.
    pub summary: Option<String>,
    /// Long-form description.
    pub description: Option<String>,
    /// Grouping tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Operation-level parameters (override path-level ones).
    #[serde(default)]
    pub parameters: Vec<RefOr<Parameter>>,
    /// Request body.
    pub request_body: Option<RefOr<RequestBody>>,
    /// Responses keyed by status code.
    #[serde(default)]
    pub responses: IndexMap<String, RefOr<Response>>,
    /// Deprecation flag.
    #[serde(default)]
    pub deprecated: bool,
}

/// Where a parameter is carried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    /// Path template segment.
    Path,
    /// Query string.
    Query,
    /// Request header.
    Header,
    /// Cookie.
    Cookie,
}

impl ParameterLocation {
    /// Group key used in the emitted `parameters` object.
    pub fn as_str(self) -> &'static str {
        match self {
            ParameterLocation::Path => "path",
            ParameterLocation::Query => "query",
            ParameterLocation::Header => "header",
            ParameterLocation::Cookie => "cookie",
        }
    }
}

/// A parameter (path, query, header or cookie).
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    /// Parameter name.
    pub name: String,
    /// Parameter location.
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    /// Description.
    pub description: Option<String>,
    /// Whether the parameter must be supplied.
    #[serde(default)]
    pub required: bool,
    /// Deprecation flag.
    #[serde(default)]
    pub deprecated: bool,
    /// Parameter schema.
    pub schema: Option<Schema>,
    /// Example value.
    pub example: Option<serde_json::Value>,
}

/// A request body definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestBody {
    /// Description.
    pub description: Option<String>,
    /// Media types mapped to their schemas.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
    /// Whether the body must be supplied.
    #[serde(default)]
    pub required: bool,
}

/// A response definition.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Description.
    pub description: Option<String>,
    /// Media types mapped to their schemas.
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
    /// Response headers (accepted, not emitted).
    #[serde(default)]
    pub headers: IndexMap<String, RefOr<Header>>,
}

/// A response header definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Header {
    /// Description.
    pub description: Option<String>,
    /// Whether the header is always present.
    #[serde(default)]
    pub required: bool,
    /// Deprecation flag.
    #[serde(default)]
    pub deprecated: bool,
    /// Header schema.
    pub schema: Option<Schema>,
}

/// Media type content (e.g. `application/json`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MediaType {
    /// Payload schema.
    pub schema: Option<Schema>,
    /// Example payload.
    pub example: Option<serde_json::Value>,
}

/// Security scheme (accepted, never emitted).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    /// Scheme kind (`apiKey`, `http`, `oauth2`, `openIdConnect`).
    #[serde(rename = "type")]
    pub scheme_type: String,
    /// Description.
    pub description: Option<String>,
    /// Header/query/cookie name for `apiKey`.
    pub name: Option<String>,
    /// Location for `apiKey`.
    #[serde(rename = "in")]
    pub location: Option<String>,
    /// HTTP auth scheme for `http`.
    pub scheme: Option<String>,
    /// Bearer token format hint.
    pub bearer_format: Option<String>,
}

/// JSON Schema node as used in OpenAPI.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// The type of the schema (string, number, integer, boolean, object, array, null).
    #[serde(rename = "type")]
    pub schema_type: Option<SchemaType>,

    /// Reference to another component.
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// Format hint (e.g. date-time, uuid).
    pub format: Option<String>,

    /// Short title.
    pub title: Option<String>,

    /// Long-form description.
    pub description: Option<String>,

    /// Default value (`Some(Null)` for an explicit `default: null`).
    #[serde(default, deserialize_with = "present_value")]
    pub default: Option<serde_json::Value>,

    /// Enum values (strings, integers, floats, booleans, or null).
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<EnumValue>>,

    /// Constant value: the schema matches only this exact value.
    #[serde(rename = "const", default, deserialize_with = "present_value")]
    pub const_value: Option<serde_json::Value>,

    // --- Validation keywords (parsed, not reflected in types) ---
    /// Minimum value for numbers.
    pub minimum: Option<f64>,
    /// Maximum value for numbers.
    pub maximum: Option<f64>,
    /// Exclusive minimum (boolean in 3.0, number in 3.1).
    pub exclusive_minimum: Option<serde_json::Value>,
    /// Exclusive maximum (boolean in 3.0, number in 3.1).
    pub exclusive_maximum: Option<serde_json::Value>,
    /// Multiple-of constraint.
    pub multiple_of: Option<f64>,
    /// Minimum length for strings.
    pub min_length: Option<u64>,
    /// Maximum length for strings.
    pub max_length: Option<u64>,
    /// Regex pattern for strings.
    pub pattern: Option<String>,

    /// Item schema for array types.
    pub items: Option<Box<Schema>>,
    /// Minimum items for arrays.
    pub min_items: Option<u64>,
    /// Maximum items for arrays.
    pub max_items: Option<u64>,
    /// Uniqueness constraint for arrays.
    pub unique_items: Option<bool>,

    /// Properties for object types, in document order.
    pub properties: Option<IndexMap<String, Schema>>,
    /// Required property names for object types.
    pub required: Option<Vec<String>>,
    /// Additional properties for object types.
    pub additional_properties: Option<AdditionalProperties>,
    /// Minimum number of properties.
    pub min_properties: Option<u64>,
    /// Maximum number of properties.
    pub max_properties: Option<u64>,

    /// Intersection (all of these schemas combined).
    pub all_of: Option<Vec<Schema>>,
    /// Exclusive union (exactly one of these schemas).
    pub one_of: Option<Vec<Schema>>,
    /// Inclusive union (any of these schemas).
    pub any_of: Option<Vec<Schema>>,
    /// Negation.
    pub not: Option<Box<Schema>>,

    /// OpenAPI 3.0 nullable flag (3.1 uses type arrays instead).
    pub nullable: Option<bool>,
    /// Read-only hint.
    pub read_only: Option<bool>,
    /// Write-only hint.
    pub write_only: Option<bool>,
    /// Deprecation flag.
    pub deprecated: Option<bool>,
    /// Example value.
    #[serde(default, deserialize_with = "present_value")]
    pub example: Option<serde_json::Value>,
}

/// Keep an explicit JSON `null` as `Some(Value::Null)` instead of `None`.
fn present_value<'de, D>(deserializer: D) -> Result<Option<serde_json::Value>, D::Error>
where
    D: Deserializer<'de>,
{
    serde_json::Value::deserialize(deserializer).map(Some)
}

/// Enum value can be string, integer, float, boolean, null, or anything else.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EnumValue {
    /// String literal.
    String(String),
    /// Integer literal.
    Integer(i64),
    /// Float literal.
    Float(f64),
    /// Boolean literal.
    Bool(bool),
    /// `null`.
    Null,
    /// Arrays and objects, which have no literal type.
    Other(serde_json::Value),
}

/// Schema type can be a single type or an array of types (3.1 nullable style).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    /// `"type": "string"`
    Single(String),
    /// `"type": ["string", "null"]`
    Multiple(Vec<String>),
}

/// Additional properties can be a boolean or a schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// `true` (anything) or `false` (nothing).
    Bool(bool),
    /// Value schema.
    Schema(Box<Schema>),
}

impl Schema {
    /// Whether the schema is explicitly nullable (`nullable: true` or `null` in a type array).
    pub fn is_explicitly_nullable(&self) -> bool {
        if self.nullable == Some(true) {
            return true;
        }
        matches!(&self.schema_type, Some(SchemaType::Multiple(types)) if types.iter().any(|t| t == "null"))
    }

    /// Whether the schema carries a composition keyword. Empty lists count as absent.
    pub fn has_composition(&self) -> bool {
        [&self.all_of, &self.one_of, &self.any_of]
            .into_iter()
            .any(|branches| branches.as_ref().is_some_and(|b| !b.is_empty()))
            || self.not.is_some()
    }

    /// The single declared type, if the schema declares exactly one.
    pub fn single_type(&self) -> Option<&str> {
        match &self.schema_type {
            Some(SchemaType::Single(t)) => Some(t.as_str()),
            _ => None,
        }
    }

    /// Whether the schema is `deprecated: true`.
    pub fn is_deprecated(&self) -> bool {
        self.deprecated == Some(true)
    }
}
