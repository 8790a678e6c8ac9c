//! Composition reduction (allOf / oneOf / anyOf / not).
//!
//! Keywords next to a composition (`properties`, `items`, `enum`, a non-object
//! `type`, ...) act as one more implicit branch placed before the `allOf`
//! branches. Each keyword present contributes one part; several parts are
//! joined as an intersection.

use crate::openapi::error::GenerateError;
use crate::openapi::spec::Schema;

use super::schema::{MapContext, ObjectShape};
use super::types::TsType;

/// Inline note carried by the `unknown` that stands in for `not`.
pub const NOT_NOTE: &str = "not: negation is not representable";

/// Reduce a schema carrying composition keywords to a single type.
///
/// Nullability of the node itself is applied by the caller.
pub fn reduce<'a>(ctx: &mut MapContext<'a>, schema: &'a Schema) -> Result<TsType, GenerateError> {
    let mut parts = Vec::new();

    let sibling = has_sibling_branch(schema).then_some(schema);
    let all_of = schema.all_of.as_deref().unwrap_or_default();
    if sibling.is_some() || !all_of.is_empty() {
        parts.push(ctx.at("allOf", |ctx| reduce_all_of(ctx, schema, sibling, all_of))?);
    }

    for (keyword, branches) in [("oneOf", &schema.one_of), ("anyOf", &schema.any_of)] {
        if let Some(branches) = branches
            && !branches.is_empty()
        {
            parts.push(ctx.at(keyword, |ctx| reduce_union(ctx, branches))?);
        }
    }

    if schema.not.is_some() {
        parts.push(TsType::Approximation {
            ty: Box::new(TsType::unknown()),
            note: NOT_NOTE.to_string(),
        });
    }

    Ok(TsType::intersection_of(parts))
}

/// `oneOf` / `anyOf`: union in source order, duplicates kept.
fn reduce_union<'a>(
    ctx: &mut MapContext<'a>,
    branches: &'a [Schema],
) -> Result<TsType, GenerateError> {
    let types = branches
        .iter()
        .map(|branch| ctx.map(branch))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(TsType::union_of(types))
}

/// `allOf` plus the implicit sibling branch: merged into one object when every
/// branch is a plain inline object, an intersection otherwise.
fn reduce_all_of<'a>(
    ctx: &mut MapContext<'a>,
    schema: &'a Schema,
    sibling: Option<&'a Schema>,
    all_of: &'a [Schema],
) -> Result<TsType, GenerateError> {
    let mergeable = sibling.is_none_or(|s| ctx.is_plain_object(s, true))
        && all_of.iter().all(|branch| ctx.is_plain_object(branch, false));

    if mergeable {
        let mut shape = sibling.map(ObjectShape::of).unwrap_or_default();
        for branch in all_of {
            shape.merge(ObjectShape::of(branch));
        }
        if sibling.is_none()
            && let Some(required) = &schema.required
        {
            shape.require(required.iter().map(String::as_str));
        }
        return ctx.map_object(shape);
    }

    let mut types = Vec::with_capacity(all_of.len() + 1);
    if let Some(sibling) = sibling {
        types.push(ctx.map_non_composed(sibling)?);
    }
    for branch in all_of {
        types.push(ctx.map(branch)?);
    }
    Ok(TsType::intersection_of(types))
}

/// Whether keywords next to the composition describe a type of their own.
fn has_sibling_branch(schema: &Schema) -> bool {
    schema.properties.is_some()
        || schema.additional_properties.is_some()
        || schema.items.is_some()
        || schema.enum_values.is_some()
        || schema.const_value.is_some()
        || schema
            .schema_type
            .as_ref()
            .is_some_and(|_| schema.single_type() != Some("object"))
}
