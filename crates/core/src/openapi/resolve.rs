//! Reference resolution.
//!
//! The [`Resolver`] indexes every component of a document once, so each
//! `$ref` lookup afterwards is a single hash lookup returning a borrowed view
//! of the target. It never copies or mutates the document and holds no state
//! besides the index, so one resolver can be shared across threads.
//!
//! It also owns the declaration name table: the TypeScript identifier each
//! component schema is emitted under, which is what a reference to that
//! schema turns into.

use std::collections::{HashMap, HashSet};

use crate::openapi::error::GenerateError;
use crate::openapi::ir::utils::sanitize_type_name;
use crate::openapi::spec::{OpenApiDocument, Parameter, RefOr, RequestBody, Response, Schema};

const COMPONENTS_PREFIX: &str = "#/components/";

/// Name of the synthesized path surface declaration.
pub const PATHS_DECLARATION: &str = "paths";

/// The component sections a pointer may address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentSection {
    /// `#/components/schemas/...`
    Schemas,
    /// `#/components/responses/...`
    Responses,
    /// `#/components/parameters/...`
    Parameters,
    /// `#/components/requestBodies/...`
    RequestBodies,
}

impl ComponentSection {
    /// The section's segment in a pointer.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentSection::Schemas => "schemas",
            ComponentSection::Responses => "responses",
            ComponentSection::Parameters => "parameters",
            ComponentSection::RequestBodies => "requestBodies",
        }
    }

    fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "schemas" => Some(ComponentSection::Schemas),
            "responses" => Some(ComponentSection::Responses),
            "parameters" => Some(ComponentSection::Parameters),
            "requestBodies" => Some(ComponentSection::RequestBodies),
            _ => None,
        }
    }
}

/// A resolved component, borrowed from the document.
#[derive(Debug, Clone, Copy)]
pub enum Component<'a> {
    /// A component schema.
    Schema(&'a Schema),
    /// A component response (possibly itself a reference).
    Response(&'a RefOr<Response>),
    /// A component parameter (possibly itself a reference).
    Parameter(&'a RefOr<Parameter>),
    /// A component request body (possibly itself a reference).
    RequestBody(&'a RefOr<RequestBody>),
}

impl Component<'_> {
    /// The section this component lives in.
    pub fn section(&self) -> ComponentSection {
        match self {
            Component::Schema(_) => ComponentSection::Schemas,
            Component::Response(_) => ComponentSection::Responses,
            Component::Parameter(_) => ComponentSection::Parameters,
            Component::RequestBody(_) => ComponentSection::RequestBodies,
        }
    }
}

type ComponentKey = (ComponentSection, String);

/// Read-only index over a document's components.
#[derive(Debug)]
pub struct Resolver<'a> {
    index: HashMap<ComponentKey, Component<'a>>,
    names: HashMap<String, String>,
}

impl<'a> Resolver<'a> {
    /// Index every component of `document`.
    pub fn new(document: &'a OpenApiDocument) -> Self {
        let mut index = HashMap::new();
        let mut names = HashMap::new();

        let mut used = HashSet::new();
        if !document.paths.is_empty() {
            used.insert(PATHS_DECLARATION.to_string());
        }

        if let Some(components) = &document.components {
            for (name, schema) in &components.schemas {
                index.insert(
                    (ComponentSection::Schemas, name.clone()),
                    Component::Schema(schema),
                );
                names.insert(name.clone(), unique_name(sanitize_type_name(name), &mut used));
            }
            for (name, response) in &components.responses {
                index.insert(
                    (ComponentSection::Responses, name.clone()),
                    Component::Response(response),
                );
            }
            for (name, parameter) in &components.parameters {
                index.insert(
                    (ComponentSection::Parameters, name.clone()),
                    Component::Parameter(parameter),
                );
            }
            for (name, body) in &components.request_bodies {
                index.insert(
                    (ComponentSection::RequestBodies, name.clone()),
                    Component::RequestBody(body),
                );
            }
        }

        Self { index, names }
    }

    /// Resolve a pointer to the component it names.
    pub fn resolve(&self, pointer: &str, location: &str) -> Result<Component<'a>, GenerateError> {
        let key = parse_pointer(pointer).map_err(|reason| GenerateError::UnsupportedReference {
            pointer: pointer.to_string(),
            location: location.to_string(),
            reason: reason.to_string(),
        })?;

        self.index
            .get(&key)
            .copied()
            .ok_or_else(|| GenerateError::UnresolvedReference {
                pointer: pointer.to_string(),
                location: location.to_string(),
            })
    }

    /// Resolve a pointer that must name a component schema.
    pub fn schema(&self, pointer: &str, location: &str) -> Result<&'a Schema, GenerateError> {
        match self.resolve(pointer, location)? {
            Component::Schema(schema) => Ok(schema),
            other => Err(wrong_section(pointer, location, ComponentSection::Schemas, other)),
        }
    }

    /// Resolve a pointer that must name a component response.
    pub fn response(
        &self,
        pointer: &str,
        location: &str,
    ) -> Result<&'a RefOr<Response>, GenerateError> {
        match self.resolve(pointer, location)? {
            Component::Response(response) => Ok(response),
            other => Err(wrong_section(pointer, location, ComponentSection::Responses, other)),
        }
    }

    /// Resolve a pointer that must name a component parameter.
    pub fn parameter(
        &self,
        pointer: &str,
        location: &str,
    ) -> Result<&'a RefOr<Parameter>, GenerateError> {
        match self.resolve(pointer, location)? {
            Component::Parameter(parameter) => Ok(parameter),
            other => Err(wrong_section(pointer, location, ComponentSection::Parameters, other)),
        }
    }

    /// Resolve a pointer that must name a component request body.
    pub fn request_body(
        &self,
        pointer: &str,
        location: &str,
    ) -> Result<&'a RefOr<RequestBody>, GenerateError> {
        match self.resolve(pointer, location)? {
            Component::RequestBody(body) => Ok(body),
            other => Err(wrong_section(
                pointer,
                location,
                ComponentSection::RequestBodies,
                other,
            )),
        }
    }

    /// Declaration name of the component schema a pointer names.
    pub fn declaration_name(&self, pointer: &str) -> Option<&str> {
        match parse_pointer(pointer) {
            Ok((ComponentSection::Schemas, name)) => self.schema_declaration_name(&name),
            _ => None,
        }
    }

    /// Declaration name of a component schema by its key in `components.schemas`.
    pub fn schema_declaration_name(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }
}

/// Pointer for a component schema name, with JSON-pointer escaping.
pub fn schema_pointer(name: &str) -> String {
    format!(
        "{COMPONENTS_PREFIX}{}/{}",
        ComponentSection::Schemas.as_str(),
        name.replace('~', "~0").replace('/', "~1")
    )
}

fn parse_pointer(pointer: &str) -> Result<ComponentKey, &'static str> {
    let rest = pointer
        .strip_prefix(COMPONENTS_PREFIX)
        .ok_or("only local `#/components/...` references are supported")?;
    let (segment, name) = rest
        .split_once('/')
        .ok_or("reference does not name a component")?;
    let section =
        ComponentSection::from_segment(segment).ok_or("unsupported components section")?;
    if name.is_empty() {
        return Err("reference does not name a component");
    }
    if name.contains('/') {
        return Err("references into a component are not supported");
    }
    Ok((section, name.replace("~1", "/").replace("~0", "~")))
}

fn wrong_section(
    pointer: &str,
    location: &str,
    expected: ComponentSection,
    found: Component<'_>,
) -> GenerateError {
    GenerateError::UnsupportedReference {
        pointer: pointer.to_string(),
        location: location.to_string(),
        reason: format!(
            "expected a reference into `{}`, found one into `{}`",
            expected.as_str(),
            found.section().as_str()
        ),
    }
}

fn unique_name(base: String, used: &mut HashSet<String>) -> String {
    if used.insert(base.clone()) {
        return base;
    }
    let mut suffix = 2;
    loop {
        let candidate = format!("{base}_{suffix}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        suffix += 1;
    }
}
