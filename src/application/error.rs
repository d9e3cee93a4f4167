//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ConfigurationError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Configuration(#[from] ConfigurationError),

    #[error("layout not found: {0}")]
    LayoutNotFound(PathBuf),

    #[error("invalid layout {path}: {message}")]
    Layout { path: PathBuf, message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("profile error: {message}")]
    Profile { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
