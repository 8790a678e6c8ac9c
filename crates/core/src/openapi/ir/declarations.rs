//! Component schemas to top-level declarations.

use crate::openapi::error::GenerateError;
use crate::openapi::options::GenerateOptions;
use crate::openapi::resolve::{Resolver, schema_pointer};
use crate::openapi::spec::Schema;

use super::schema::MapContext;
use super::types::{TsType, TsTypeDef, TypeDefKind};

/// Emit one declaration per component schema.
///
/// Declarations come out in document order, or sorted by name with
/// `alphabetize`.
pub fn emit_declarations<'a>(
    schemas: impl IntoIterator<Item = (&'a String, &'a Schema)>,
    options: &'a GenerateOptions,
    resolver: &'a Resolver<'a>,
) -> Result<Vec<TsTypeDef>, GenerateError> {
    let mut defs = schemas
        .into_iter()
        .map(|(name, schema)| emit_declaration(name, schema, options, resolver))
        .collect::<Result<Vec<_>, _>>()?;

    if options.alphabetize {
        defs.sort_by(|a, b| a.name.cmp(&b.name));
    }

    Ok(defs)
}

fn emit_declaration<'a>(
    name: &str,
    schema: &'a Schema,
    options: &'a GenerateOptions,
    resolver: &'a Resolver<'a>,
) -> Result<TsTypeDef, GenerateError> {
    let pointer = schema_pointer(name);
    let decl_name = resolver
        .schema_declaration_name(name)
        .ok_or_else(|| GenerateError::UnresolvedReference {
            pointer: pointer.clone(),
            location: "components.schemas".to_string(),
        })?
        .to_string();

    let mut ctx = MapContext::new(options, resolver, format!("components.schemas.{name}"));
    ctx.enter(&pointer);
    let ty = ctx.map(schema)?;
    ctx.leave();

    let interface_candidate = !options.export_type
        && !schema.has_composition()
        && schema.enum_values.is_none()
        && schema.const_value.is_none()
        && !ctx.is_nullable(schema);

    let kind = match ty {
        TsType::Object(object) if interface_candidate => TypeDefKind::Interface(object),
        other => TypeDefKind::TypeAlias(other),
    };

    Ok(TsTypeDef {
        name: decl_name,
        kind,
        docs: ctx.schema_docs(schema, true),
    })
}
