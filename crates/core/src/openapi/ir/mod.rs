//! Intermediate Representation for OpenAPI to TypeScript type generation.
//!
//! The pipeline has three layers:
//! 1. Mapping: schema nodes to `TsType` (resolving references, reducing compositions)
//! 2. Assembly: component schemas and the `paths` map into `TsTypeDef` declarations
//! 3. Emission: declarations to TypeScript text via the `Emit` trait
//!
//! ## Module Structure
//!
//! - `types`: TypeScript type IR (TsType, TsObject, TsProp, TsTypeDef)
//! - `schema`: schema node -> TsType, with the cycle-tracking context
//! - `compose`: allOf / oneOf / anyOf / not reduction
//! - `declarations`: component schemas -> top-level declarations
//! - `paths`: the `paths` map -> one `paths` declaration
//! - `emit`: IR -> code strings (via Emit trait)
//! - `utils`: Common utilities shared across modules

mod compose;
mod declarations;
mod emit;
mod paths;
mod schema;
mod types;
pub mod utils;

// Re-export the main entry points
pub use declarations::emit_declarations;
pub use emit::Emit;
pub use paths::emit_paths;
pub use types::TsTypeDef;
