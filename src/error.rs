//! Error types for the resolution core.
//!
//! The core raises only logical errors. Type and column validation belongs to the
//! loaders, which report through `anyhow`.

/// Errors raised by the classification and hierarchy core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// The resolver was asked about a name that has no row in the mapping table.
    #[error("No mapping entry for object name '{name}'")]
    NotFound { name: String },

    /// A hierarchical code violates the segment format.
    #[error("Malformed hierarchical code '{code}': {reason}")]
    MalformedCode { code: String, reason: &'static str },

    #[error("Duplicate hierarchical code '{code}'")]
    DuplicateCode { code: String },

    #[error("Duplicate term id '{term_id}'")]
    DuplicateTermId { term_id: String },
}

pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// True for errors that only concern a single record and can be skipped.
    pub fn is_record_level(&self) -> bool {
        matches!(
            self,
            CoreError::MalformedCode { .. }
                | CoreError::DuplicateCode { .. }
                | CoreError::DuplicateTermId { .. }
        )
    }
}
