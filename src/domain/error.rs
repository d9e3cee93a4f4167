//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Violations of component cardinality and field-length limits.
///
/// Raised synchronously where the violation happens: at assignment time for
/// field and collection setters, at build time for rows without components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("row count is {found}, must be {limit} or fewer")]
    TooManyRows { found: usize, limit: usize },

    #[error("row holds {found} components, must be {limit} or fewer")]
    TooManyComponents { found: usize, limit: usize },

    #[error("button label is {found} characters, must be {limit} or fewer")]
    LabelTooLong { found: usize, limit: usize },

    #[error("button custom_id is {found} characters, must be {limit} or fewer")]
    CustomIdTooLong { found: usize, limit: usize },

    #[error("cannot build a row without components")]
    EmptyRow,
}

impl ConfigurationError {
    /// Name of the field or collection that was rejected.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigurationError::TooManyRows { .. } => "rows",
            ConfigurationError::TooManyComponents { .. } | ConfigurationError::EmptyRow => {
                "components"
            }
            ConfigurationError::LabelTooLong { .. } => "label",
            ConfigurationError::CustomIdTooLong { .. } => "custom_id",
        }
    }

    /// The limit that was exceeded, if the violation is a limit.
    pub fn limit(&self) -> Option<usize> {
        match self {
            ConfigurationError::TooManyRows { limit, .. }
            | ConfigurationError::TooManyComponents { limit, .. }
            | ConfigurationError::LabelTooLong { limit, .. }
            | ConfigurationError::CustomIdTooLong { limit, .. } => Some(*limit),
            ConfigurationError::EmptyRow => None,
        }
    }
}

/// Result type for builder operations.
pub type ConfigResult<T> = Result<T, ConfigurationError>;
