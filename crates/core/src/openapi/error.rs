//! Error types for type generation.

use thiserror::Error;

/// Fatal conditions that abort a generation run.
///
/// Underspecified schemas are never errors; only references the resolver
/// cannot follow are.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// A supported pointer names a component that does not exist.
    #[error("unresolved reference '{pointer}' at {location}")]
    UnresolvedReference {
        /// The offending pointer.
        pointer: String,
        /// Where the pointer was met (e.g. `components.schemas.User`).
        location: String,
    },

    /// A pointer the resolver does not understand.
    #[error("unsupported reference '{pointer}' at {location}: {reason}")]
    UnsupportedReference {
        /// The offending pointer.
        pointer: String,
        /// Where the pointer was met.
        location: String,
        /// Why the pointer was rejected.
        reason: String,
    },
}

impl GenerateError {
    /// The pointer that caused the failure.
    pub fn pointer(&self) -> &str {
        match self {
            GenerateError::UnresolvedReference { pointer, .. }
            | GenerateError::UnsupportedReference { pointer, .. } => pointer,
        }
    }

    /// Where in the document the pointer was met.
    pub fn location(&self) -> &str {
        match self {
            GenerateError::UnresolvedReference { location, .. }
            | GenerateError::UnsupportedReference { location, .. } => location,
        }
    }
}
