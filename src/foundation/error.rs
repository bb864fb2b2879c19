/// Convenience result type used across the crate.
pub type SpriteResult<T> = Result<T, SpriteError>;

/// Top-level error taxonomy used by public APIs.
///
/// The render pipeline itself never fails: malformed descriptions are
/// repaired by defaulting and out-of-range style indices are clamped before
/// any drawing happens. Errors exist only at the boundaries (persistence,
/// export).
#[derive(thiserror::Error, Debug)]
pub enum SpriteError {
    /// Invalid user-provided data that cannot be repaired by defaulting.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing a character description.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Errors while producing an exported image file. Non-fatal to the live
    /// preview: the in-memory render that fed the export is unaffected.
    #[error("export error: {0}")]
    Export(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SpriteError {
    /// Build a [`SpriteError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SpriteError::Persistence`] value.
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Build a [`SpriteError::Export`] value.
    pub fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
