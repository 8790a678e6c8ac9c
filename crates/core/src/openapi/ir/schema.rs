//! Schema to TypeScript type mapping.
//!
//! This module handles the per-node conversion:
//! - `$ref` to declaration names (with cycle tracking)
//! - Primitives, enums, const, nullability
//! - Arrays and tuples
//! - Object shapes and index signatures
//!
//! Composition keywords are handed to [`super::compose`].

use indexmap::{IndexMap, IndexSet};
use tracing::warn;

use crate::openapi::error::GenerateError;
use crate::openapi::options::GenerateOptions;
use crate::openapi::resolve::Resolver;
use crate::openapi::spec::{AdditionalProperties, RefOr, Schema, SchemaType};

use super::compose;
use super::types::{DocComment, IndexSignature, PropKey, TsObject, TsPrimitive, TsProp, TsType};
use super::utils::{enum_value_to_type, json_value_to_type, make_string_record};

/// Fixed-length arrays longer than this stay `T[]` even with `supportArrayLength`.
const MAX_TUPLE_LENGTH: u64 = 64;

/// State threaded through one mapping run (one declaration or one operation).
#[derive(Debug)]
pub struct MapContext<'a> {
    /// Switches for the whole run.
    pub options: &'a GenerateOptions,
    /// Component lookups and declaration names.
    pub resolver: &'a Resolver<'a>,
    /// Pointers currently being expanded.
    stack: Vec<String>,
    /// Dotted location used in error messages.
    location: String,
}

impl<'a> MapContext<'a> {
    pub fn new(
        options: &'a GenerateOptions,
        resolver: &'a Resolver<'a>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            options,
            resolver,
            stack: Vec::new(),
            location: location.into(),
        }
    }

    /// Run `f` with `segment` appended to the current location.
    pub fn at<T>(&mut self, segment: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        let len = self.location.len();
        self.location.push('.');
        self.location.push_str(segment);
        let out = f(self);
        self.location.truncate(len);
        out
    }

    /// Push `pointer` on the in-progress stack. Returns false if it is already there.
    pub fn enter(&mut self, pointer: &str) -> bool {
        if self.is_expanding(pointer) {
            return false;
        }
        self.stack.push(pointer.to_string());
        true
    }

    pub fn leave(&mut self) {
        self.stack.pop();
    }

    fn is_expanding(&self, pointer: &str) -> bool {
        self.stack.iter().any(|p| p == pointer)
    }

    /// Map a schema node to a type.
    pub fn map(&mut self, schema: &'a Schema) -> Result<TsType, GenerateError> {
        let ty = if let Some(pointer) = &schema.ref_path {
            self.map_reference(pointer)?
        } else if schema.has_composition() {
            compose::reduce(self, schema)?
        } else {
            self.map_non_composed(schema)?
        };
        Ok(self.apply_nullable(schema, ty))
    }

    /// Map a schema ignoring its composition keywords and nullability.
    pub fn map_non_composed(&mut self, schema: &'a Schema) -> Result<TsType, GenerateError> {
        if let Some(values) = &schema.enum_values {
            return Ok(TsType::union_of(values.iter().map(enum_value_to_type).collect()));
        }
        if let Some(value) = &schema.const_value {
            return Ok(json_value_to_type(value));
        }

        match &schema.schema_type {
            Some(SchemaType::Single(t)) => self.map_type_keyword(t, schema),
            Some(SchemaType::Multiple(types)) => {
                let non_null: Vec<_> = types.iter().filter(|t| *t != "null").collect();
                if non_null.is_empty() {
                    return Ok(if types.is_empty() {
                        TsType::unknown()
                    } else {
                        TsType::Primitive(TsPrimitive::Null)
                    });
                }
                let mapped = non_null
                    .into_iter()
                    .map(|t| self.map_type_keyword(t, schema))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(TsType::union_of(mapped))
            }
            None => {
                if schema.properties.is_some() || schema.additional_properties.is_some() {
                    self.map_object(ObjectShape::of(schema))
                } else {
                    Ok(TsType::unknown())
                }
            }
        }
    }

    fn map_type_keyword(
        &mut self,
        keyword: &str,
        schema: &'a Schema,
    ) -> Result<TsType, GenerateError> {
        match keyword {
            "string" => Ok(TsType::Primitive(TsPrimitive::String)),
            "number" | "integer" => Ok(TsType::Primitive(TsPrimitive::Number)),
            "boolean" => Ok(TsType::Primitive(TsPrimitive::Boolean)),
            "null" => Ok(TsType::Primitive(TsPrimitive::Null)),
            "array" => self.map_array(schema),
            "object" => self.map_object(ObjectShape::of(schema)),
            _ => Ok(TsType::unknown()),
        }
    }

    fn map_reference(&mut self, pointer: &str) -> Result<TsType, GenerateError> {
        if !self.is_expanding(pointer) {
            self.resolver.schema(pointer, &self.location)?;
        }
        self.resolver
            .declaration_name(pointer)
            .map(|name| TsType::Ref(name.to_string()))
            .ok_or_else(|| GenerateError::UnresolvedReference {
                pointer: pointer.to_string(),
                location: self.location.clone(),
            })
    }

    fn map_array(&mut self, schema: &'a Schema) -> Result<TsType, GenerateError> {
        let item = match &schema.items {
            Some(items) => self.at("items", |ctx| ctx.map(items))?,
            None => TsType::unknown(),
        };
        let readonly = self.options.immutable;

        if self.options.support_array_length
            && let (Some(min), Some(max)) = (schema.min_items, schema.max_items)
            && min == max
            && max <= MAX_TUPLE_LENGTH
        {
            let len = usize::try_from(max).unwrap_or_default();
            return Ok(TsType::Tuple {
                items: vec![item; len],
                readonly,
            });
        }

        Ok(TsType::Array {
            item: Box::new(item),
            readonly,
        })
    }

    /// Build the structural type of an object shape.
    pub fn map_object(&mut self, shape: ObjectShape<'a>) -> Result<TsType, GenerateError> {
        let readonly = self.options.immutable;
        let mut props = Vec::with_capacity(shape.properties.len());

        for (&name, &prop_schema) in &shape.properties {
            let ty = self.at(&format!("properties.{name}"), |ctx| ctx.map(prop_schema))?;
            let required = shape.required.contains(&name);
            props.push(TsProp {
                key: PropKey::Quoted(name.to_string()),
                ty,
                optional: !required,
                readonly,
                docs: self.schema_docs(prop_schema, false),
            });
        }

        let index = match shape.additional {
            Some(AdditionalProperties::Bool(true)) => Some(TsType::unknown()),
            Some(AdditionalProperties::Schema(value)) => {
                Some(self.at("additionalProperties", |ctx| ctx.map(value))?)
            }
            Some(AdditionalProperties::Bool(false)) => None,
            None if self.options.additional_properties => Some(TsType::unknown()),
            None => None,
        };

        if props.is_empty() && index.is_none() {
            let value = if matches!(shape.additional, Some(AdditionalProperties::Bool(false))) {
                TsPrimitive::Never
            } else {
                TsPrimitive::Unknown
            };
            return Ok(make_string_record(TsType::Primitive(value)));
        }

        Ok(TsType::Object(TsObject {
            props,
            index: index.map(|value| IndexSignature {
                value: Box::new(value),
                readonly,
            }),
        }))
    }

    /// Whether the schema maps to a type unioned with `null`.
    pub fn is_nullable(&self, schema: &Schema) -> bool {
        schema.is_explicitly_nullable()
            || (!self.options.default_non_nullable
                && matches!(schema.default, Some(serde_json::Value::Null)))
    }

    /// Append `| null` when the schema is nullable.
    pub fn apply_nullable(&self, schema: &Schema, ty: TsType) -> TsType {
        if self.is_nullable(schema) {
            ty.or_null()
        } else {
            ty
        }
    }

    /// Whether the schema is an inline object whose properties can be merged.
    ///
    /// With `as_sibling` the node is the implicit branch next to its own
    /// composition keywords, so those and its nullability are not considered.
    pub fn is_plain_object(&self, schema: &Schema, as_sibling: bool) -> bool {
        if schema.ref_path.is_some()
            || schema.enum_values.is_some()
            || schema.const_value.is_some()
            || schema.items.is_some()
            || (!as_sibling && (schema.has_composition() || self.is_nullable(schema)))
        {
            return false;
        }
        match &schema.schema_type {
            Some(SchemaType::Single(t)) => t == "object",
            Some(SchemaType::Multiple(_)) => false,
            None => {
                schema.properties.is_some()
                    || schema.additional_properties.is_some()
                    || schema.required.is_some()
            }
        }
    }

    /// Doc comment for a schema node, honouring the description/example switches.
    pub fn schema_docs(&self, schema: &Schema, with_title: bool) -> Option<DocComment> {
        if !self.options.emits_docs() {
            return None;
        }
        let mut lines = Vec::new();
        if self.options.include_descriptions {
            if with_title && let Some(title) = &schema.title {
                lines.extend(title.lines().map(str::to_string));
            }
            if let Some(description) = &schema.description {
                push_tagged(&mut lines, "@description", description);
            }
            if schema.is_deprecated() {
                lines.push("@deprecated".to_string());
            }
        }
        if self.options.include_examples
            && let Some(example) = &schema.example
        {
            push_example(&mut lines, example);
        }
        DocComment::from_lines(lines)
    }

    /// Follow a chain of component references to the inline value.
    ///
    /// Returns `None` when the chain loops back onto a pointer already being
    /// expanded.
    pub fn follow<T>(
        &mut self,
        item: &'a RefOr<T>,
        lookup: impl Fn(&Resolver<'a>, &str, &str) -> Result<&'a RefOr<T>, GenerateError>,
    ) -> Result<Option<&'a T>, GenerateError> {
        let depth = self.stack.len();
        let result = self.follow_chain(item, lookup);
        self.stack.truncate(depth);
        result
    }

    fn follow_chain<T>(
        &mut self,
        mut current: &'a RefOr<T>,
        lookup: impl Fn(&Resolver<'a>, &str, &str) -> Result<&'a RefOr<T>, GenerateError>,
    ) -> Result<Option<&'a T>, GenerateError> {
        loop {
            match current {
                RefOr::Item(value) => return Ok(Some(value)),
                RefOr::Ref(reference) => {
                    let pointer = reference.ref_path.as_str();
                    if !self.enter(pointer) {
                        warn!(pointer, location = %self.location, "reference cycle, using unknown");
                        return Ok(None);
                    }
                    current = lookup(self.resolver, pointer, &self.location)?;
                }
            }
        }
    }
}

/// Append `text` as a tagged doc paragraph: the tag on the first line,
/// continuation lines as they are.
pub fn push_tagged(lines: &mut Vec<String>, tag: &str, text: &str) {
    let mut text_lines = text.trim_end().lines();
    match text_lines.next() {
        Some(first) => lines.push(format!("{tag} {first}")),
        None => lines.push(tag.to_string()),
    }
    lines.extend(text_lines.map(str::to_string));
}

/// Append an `@example` tag with the value rendered as JSON.
pub fn push_example(lines: &mut Vec<String>, example: &serde_json::Value) {
    let rendered = serde_json::to_string(example).unwrap_or_default();
    lines.push(format!("@example {rendered}"));
}

/// Properties, required names and additional-properties setting of an
/// object schema, borrowed from the document so branches can be merged.
#[derive(Debug, Default)]
pub struct ObjectShape<'a> {
    properties: IndexMap<&'a str, &'a Schema>,
    required: IndexSet<&'a str>,
    additional: Option<&'a AdditionalProperties>,
}

impl<'a> ObjectShape<'a> {
    pub fn of(schema: &'a Schema) -> Self {
        let properties = schema
            .properties
            .iter()
            .flatten()
            .map(|(name, prop)| (name.as_str(), prop))
            .collect();
        let required = schema.required.iter().flatten().map(String::as_str).collect();
        Self {
            properties,
            required,
            additional: schema.additional_properties.as_ref(),
        }
    }

    /// Merge `other` into `self`: later property types replace earlier ones in
    /// place, required names accumulate, an explicit additional-properties
    /// setting overrides.
    pub fn merge(&mut self, other: ObjectShape<'a>) {
        for (name, schema) in other.properties {
            self.properties.insert(name, schema);
        }
        self.required.extend(other.required);
        if other.additional.is_some() {
            self.additional = other.additional;
        }
    }

    pub fn require(&mut self, names: impl IntoIterator<Item = &'a str>) {
        self.required.extend(names);
    }
}
