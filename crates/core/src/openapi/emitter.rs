//! TypeScript declaration emitter for OpenAPI documents.
//!
//! The pipeline is:
//! 1. Index: OpenApiDocument -> Resolver (components and declaration names)
//! 2. Assemble: paths and component schemas -> TsTypeDef declarations
//! 3. Emit: declarations -> String (via Emit trait), behind the optional header

use tracing::debug;

use crate::openapi::error::GenerateError;
use crate::openapi::ir::{Emit, TsTypeDef, emit_declarations, emit_paths};
use crate::openapi::options::GenerateOptions;
use crate::openapi::resolve::Resolver;
use crate::openapi::spec::OpenApiDocument;

/// Banner placed above the declarations when `header` is on.
pub const HEADER: &str = "/**
 * This file was auto-generated by ts-open-api.
 * DO NOT MAKE DIRECT CHANGES TO THE FILE.
 */";

/// Generate TypeScript declarations for an OpenAPI document.
///
/// Output is deterministic: the same document and options always give the
/// same text. Fails without partial output on the first reference that cannot
/// be resolved.
pub fn generate(
    document: &OpenApiDocument,
    options: &GenerateOptions,
) -> Result<String, GenerateError> {
    let resolver = Resolver::new(document);

    let paths = emit_paths(&document.paths, options, &resolver)?;
    let declarations = emit_declarations(document.schemas(), options, &resolver)?;

    debug!(
        paths = document.paths.len(),
        declarations = declarations.len(),
        interfaces = declarations.iter().filter(|d| d.is_interface()).count(),
        "generated TypeScript declarations"
    );

    Ok(render(options, paths.as_ref(), &declarations))
}

/// Join the header and declarations, one blank line between blocks.
fn render(
    options: &GenerateOptions,
    paths: Option<&TsTypeDef>,
    declarations: &[TsTypeDef],
) -> String {
    let mut blocks = Vec::with_capacity(declarations.len() + 2);
    if options.header {
        blocks.push(HEADER.to_string());
    }
    blocks.extend(paths.map(Emit::emit));
    blocks.extend(declarations.iter().map(Emit::emit));

    if blocks.is_empty() {
        return String::new();
    }
    let mut output = blocks.join("\n\n");
    output.push('\n');
    output
}
