//! Schema-to-type compiler turning OpenAPI documents into TypeScript declarations.
//!
//! ```no_run
//! use ts_open_api_core::{GenerateOptions, OpenApiDocument, generate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document: OpenApiDocument = serde_json::from_str(r#"{ "openapi": "3.1.0" }"#)?;
//! let ts = generate(&document, &GenerateOptions::default())?;
//! print!("{ts}");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]

pub mod openapi;

pub use openapi::{GenerateError, GenerateOptions, OpenApiDocument, generate};
