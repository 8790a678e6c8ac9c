//! The `paths` declaration.
//!
//! One member per path template, one member per defined method below it, and
//! for each operation its `parameters`, `requestBody` and `responses`.

use indexmap::IndexMap;

use crate::openapi::error::GenerateError;
use crate::openapi::options::GenerateOptions;
use crate::openapi::resolve::{PATHS_DECLARATION, Resolver};
use crate::openapi::spec::{
    MediaType, Operation, Parameter, ParameterLocation, PathItem, RefOr, RequestBody, Schema,
};

use super::schema::{MapContext, push_example, push_tagged};
use super::types::{
    DocComment, PropKey, TemplatePart, TsObject, TsPrimitive, TsProp, TsType, TsTypeDef,
    TypeDefKind,
};

/// Parameter groups in emission order.
const PARAMETER_GROUPS: [ParameterLocation; 4] = [
    ParameterLocation::Path,
    ParameterLocation::Query,
    ParameterLocation::Header,
    ParameterLocation::Cookie,
];

/// Emit the `paths` declaration, or `None` for a document without paths.
pub fn emit_paths<'a>(
    paths: &'a IndexMap<String, PathItem>,
    options: &'a GenerateOptions,
    resolver: &'a Resolver<'a>,
) -> Result<Option<TsTypeDef>, GenerateError> {
    if paths.is_empty() {
        return Ok(None);
    }

    let mut members = Vec::with_capacity(paths.len());
    for (path, item) in paths {
        let mut methods = Vec::new();
        for (method, op) in item.operations() {
            let location = format!("paths.{path}.{}", method.as_str());
            let mut ctx = MapContext::new(options, resolver, location);
            let ty = operation_type(&mut ctx, item, op)?;
            methods.push(
                TsProp::field(method.as_str(), TsType::Object(ty))
                    .with_docs(operation_docs(options, op)),
            );
        }
        members.push(TsProp {
            key: PropKey::Quoted(path.clone()),
            ty: TsType::Object(TsObject {
                props: methods,
                index: None,
            }),
            optional: false,
            readonly: false,
            docs: None,
        });
    }

    let body = TsObject {
        props: members,
        index: None,
    };
    let kind = if options.export_type {
        TypeDefKind::TypeAlias(TsType::Object(body))
    } else {
        TypeDefKind::Interface(body)
    };

    Ok(Some(TsTypeDef {
        name: PATHS_DECLARATION.to_string(),
        kind,
        docs: None,
    }))
}

fn operation_type<'a>(
    ctx: &mut MapContext<'a>,
    item: &'a PathItem,
    op: &'a Operation,
) -> Result<TsObject, GenerateError> {
    let mut props = Vec::new();

    if let Some(parameters) = ctx.at("parameters", |ctx| parameters_type(ctx, item, op))? {
        props.push(TsProp::field("parameters", TsType::Object(parameters)));
    }

    if let Some(body) = &op.request_body {
        let prop = ctx.at("requestBody", |ctx| request_body_prop(ctx, body))?;
        props.push(prop);
    }

    let responses = ctx.at("responses", |ctx| responses_type(ctx, op))?;
    props.push(TsProp::field("responses", TsType::Object(responses)));

    Ok(TsObject { props, index: None })
}

/// Path-level parameters merged with operation-level ones, grouped by location.
fn parameters_type<'a>(
    ctx: &mut MapContext<'a>,
    item: &'a PathItem,
    op: &'a Operation,
) -> Result<Option<TsObject>, GenerateError> {
    let mut merged: IndexMap<(&'a str, &'static str), &'a Parameter> = IndexMap::new();
    for param in item.parameters.iter().chain(&op.parameters) {
        if let Some(param) = ctx.follow(param, Resolver::parameter)? {
            merged.insert((param.name.as_str(), param.location.as_str()), param);
        }
    }

    let mut groups = Vec::new();
    for location in PARAMETER_GROUPS {
        let entries: Vec<&'a Parameter> = merged
            .values()
            .copied()
            .filter(|p| p.location == location)
            .collect();
        if entries.is_empty() {
            continue;
        }

        let mut props = Vec::with_capacity(entries.len());
        for &param in &entries {
            let ty = ctx.at(&param.name, |ctx| parameter_type(ctx, param))?;
            props.push(TsProp {
                key: PropKey::Quoted(param.name.clone()),
                ty,
                optional: !param.required,
                readonly: false,
                docs: parameter_docs(ctx.options, param),
            });
        }

        let any_required = entries.iter().any(|p| p.required);
        groups.push(
            TsProp::field(location.as_str(), TsType::Object(TsObject { props, index: None }))
                .optional(!any_required),
        );
    }

    if groups.is_empty() {
        Ok(None)
    } else {
        Ok(Some(TsObject {
            props: groups,
            index: None,
        }))
    }
}

fn parameter_type<'a>(
    ctx: &mut MapContext<'a>,
    param: &'a Parameter,
) -> Result<TsType, GenerateError> {
    let Some(schema) = &param.schema else {
        return Ok(TsType::Primitive(TsPrimitive::String));
    };

    if param.location == ParameterLocation::Path
        && ctx.options.path_params_as_types
        && is_plain_string(schema)
    {
        return Ok(ctx.apply_nullable(schema, path_param_template(schema)));
    }

    ctx.map(schema)
}

fn is_plain_string(schema: &Schema) -> bool {
    schema.single_type() == Some("string")
        && schema.ref_path.is_none()
        && schema.enum_values.is_none()
        && schema.const_value.is_none()
        && !schema.has_composition()
}

/// `${string}`, or five dash-separated placeholders for `format: uuid`.
fn path_param_template(schema: &Schema) -> TsType {
    let groups = if schema.format.as_deref() == Some("uuid") { 5 } else { 1 };
    let mut parts = Vec::with_capacity(groups * 2 - 1);
    for i in 0..groups {
        if i > 0 {
            parts.push(TemplatePart::Static("-".to_string()));
        }
        parts.push(TemplatePart::Placeholder(TsPrimitive::String));
    }
    TsType::Template(parts)
}

fn request_body_prop<'a>(
    ctx: &mut MapContext<'a>,
    body: &'a RefOr<RequestBody>,
) -> Result<TsProp, GenerateError> {
    let Some(body) = ctx.follow(body, Resolver::request_body)? else {
        return Ok(TsProp::field("requestBody", TsType::unknown()));
    };

    let ty = match primary_schema(&body.content) {
        Some(schema) => ctx.map(schema)?,
        None => TsType::unknown(),
    };

    let mut lines = Vec::new();
    if ctx.options.include_descriptions
        && let Some(description) = &body.description
    {
        push_tagged(&mut lines, "@description", description);
    }

    Ok(TsProp::field("requestBody", ty)
        .optional(!body.required)
        .with_docs(DocComment::from_lines(lines)))
}

fn responses_type<'a>(
    ctx: &mut MapContext<'a>,
    op: &'a Operation,
) -> Result<TsObject, GenerateError> {
    let mut props = Vec::with_capacity(op.responses.len());

    for (status, response) in &op.responses {
        let (ty, docs) = ctx.at(status, |ctx| -> Result<_, GenerateError> {
            let Some(response) = ctx.follow(response, Resolver::response)? else {
                return Ok((TsType::unknown(), None));
            };
            let ty = if response.content.is_empty() {
                TsType::Primitive(TsPrimitive::Void)
            } else {
                match primary_schema(&response.content) {
                    Some(schema) => ctx.map(schema)?,
                    None => TsType::unknown(),
                }
            };
            let mut lines = Vec::new();
            if ctx.options.include_descriptions
                && let Some(description) = &response.description
            {
                push_tagged(&mut lines, "@description", description);
            }
            Ok((ty, DocComment::from_lines(lines)))
        })?;

        let key = if !status.is_empty() && status.chars().all(|c| c.is_ascii_digit()) {
            PropKey::Bare(status.clone())
        } else {
            PropKey::Quoted(status.clone())
        };
        props.push(TsProp {
            key,
            ty,
            optional: false,
            readonly: false,
            docs,
        });
    }

    Ok(TsObject { props, index: None })
}

/// Schema of the primary media type: `application/json`, then any `+json`
/// type, then the first media type that has a schema.
fn primary_schema(content: &IndexMap<String, MediaType>) -> Option<&Schema> {
    let with_schema = || {
        content
            .iter()
            .filter_map(|(key, media)| media.schema.as_ref().map(|s| (essence(key), s)))
    };

    with_schema()
        .find(|(key, _)| key.eq_ignore_ascii_case("application/json"))
        .or_else(|| with_schema().find(|(key, _)| key.to_ascii_lowercase().ends_with("+json")))
        .or_else(|| with_schema().next())
        .map(|(_, schema)| schema)
}

/// Media type without its parameters (`application/json; charset=utf-8`).
fn essence(media_type: &str) -> &str {
    media_type.split(';').next().unwrap_or(media_type).trim()
}

fn operation_docs(options: &GenerateOptions, op: &Operation) -> Option<DocComment> {
    if !options.include_descriptions {
        return None;
    }
    let mut lines = Vec::new();
    if let Some(summary) = &op.summary {
        lines.extend(summary.trim_end().lines().map(str::to_string));
    }
    if let Some(description) = &op.description {
        push_tagged(&mut lines, "@description", description);
    }
    if let Some(id) = &op.operation_id {
        lines.push(format!("@operationId {id}"));
    }
    if op.deprecated {
        lines.push("@deprecated".to_string());
    }
    DocComment::from_lines(lines)
}

fn parameter_docs(options: &GenerateOptions, param: &Parameter) -> Option<DocComment> {
    let mut lines = Vec::new();
    if options.include_descriptions {
        if let Some(description) = &param.description {
            push_tagged(&mut lines, "@description", description);
        }
        if param.deprecated {
            lines.push("@deprecated".to_string());
        }
    }
    if options.include_examples
        && let Some(example) = &param.example
    {
        push_example(&mut lines, example);
    }
    DocComment::from_lines(lines)
}
