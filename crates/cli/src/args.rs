//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use ts_open_api_core::GenerateOptions;

/// Where declarations are written when `--output` is not given.
pub const DEFAULT_OUTPUT: &str = "./api-types.ts";

/// Generate TypeScript type declarations from an OpenAPI document
#[derive(Parser, Debug)]
#[command(name = "open-api", version, args_conflicts_with_subcommands = true)]
pub struct Cli {
    /// Subcommand; generation runs when none is given.
    #[command(subcommand)]
    pub command: Option<Commands>,
    /// Arguments of the default generate command.
    #[command(flatten)]
    pub generate: GenerateArgs,
}

/// Subcommands besides the default generate command.
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum Commands {
    /// Print the version
    Version,
}

/// Input, output and option flags of a generation run.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// OpenAPI document to read (.json, .yaml or .yml)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,
    /// File the declarations are written to
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,
    /// Sort schema declarations by name
    #[arg(long)]
    pub alphabetize: bool,
    /// Mark properties and arrays readonly
    #[arg(long)]
    pub immutable: bool,
    /// Only report errors
    #[arg(long)]
    pub silent: bool,
    /// Emit type aliases instead of interfaces
    #[arg(long)]
    pub export_type: bool,
    /// Only an explicit nullable flag adds | null
    #[arg(long)]
    pub default_non_nullable: bool,
    /// Allow extra keys on objects that do not forbid them
    #[arg(long)]
    pub additional_properties: bool,
    /// Emit string path parameters as template literal types
    #[arg(long)]
    pub path_params_as_types: bool,
    /// Emit fixed-length arrays as tuples
    #[arg(long)]
    pub support_array_length: bool,
    /// Omit the generated-file banner
    #[arg(long)]
    pub no_header: bool,
    /// Render descriptions as doc comments
    #[arg(long)]
    pub include_descriptions: bool,
    /// Render examples as @example doc tags
    #[arg(long)]
    pub include_examples: bool,
}

impl GenerateArgs {
    /// Layer the flags over config-provided defaults.
    ///
    /// A flag can only switch its option on; `--no-header` is the one way to
    /// switch something off.
    pub fn apply(&self, base: GenerateOptions) -> GenerateOptions {
        GenerateOptions {
            alphabetize: base.alphabetize || self.alphabetize,
            immutable: base.immutable || self.immutable,
            export_type: base.export_type || self.export_type,
            default_non_nullable: base.default_non_nullable || self.default_non_nullable,
            additional_properties: base.additional_properties || self.additional_properties,
            path_params_as_types: base.path_params_as_types || self.path_params_as_types,
            support_array_length: base.support_array_length || self.support_array_length,
            header: base.header && !self.no_header,
            include_descriptions: base.include_descriptions || self.include_descriptions,
            include_examples: base.include_examples || self.include_examples,
        }
    }
}
