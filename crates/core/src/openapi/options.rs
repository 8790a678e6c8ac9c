//! Generation options.
//!
//! One immutable value threaded by shared reference through every stage of
//! the compiler. Deserializable so that the CLI config file can provide
//! defaults with the same camelCase keys as the command-line flags.

use serde::Deserialize;

/// Switches controlling the emitted TypeScript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateOptions {
    /// Sort top-level schema declarations by name.
    pub alphabetize: bool,
    /// Mark every property, index signature and array `readonly`.
    pub immutable: bool,
    /// Emit `export type` aliases instead of interfaces.
    pub export_type: bool,
    /// Only an explicit nullable flag produces `| null`; a `default: null`
    /// no longer does.
    pub default_non_nullable: bool,
    /// Give objects that do not restrict `additionalProperties` an index signature.
    pub additional_properties: bool,
    /// Emit string path parameters as template literal types.
    pub path_params_as_types: bool,
    /// Emit fixed-length arrays (`minItems == maxItems`) as tuples.
    pub support_array_length: bool,
    /// Prepend the generated-file banner.
    pub header: bool,
    /// Render `description`/`deprecated` metadata as doc comments.
    pub include_descriptions: bool,
    /// Render `example` values as `@example` doc tags.
    pub include_examples: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            alphabetize: false,
            immutable: false,
            export_type: false,
            default_non_nullable: false,
            additional_properties: false,
            path_params_as_types: false,
            support_array_length: false,
            header: true,
            include_descriptions: false,
            include_examples: false,
        }
    }
}

impl GenerateOptions {
    /// Whether any doc comment can be produced at all.
    pub fn emits_docs(&self) -> bool {
        self.include_descriptions || self.include_examples
    }
}
