//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::ConfigurationError;
use crate::infrastructure::InfraError;

/// Exit statuses, BSD sysexits.h values.
pub mod sysexits {
    pub const USAGE: i32 = 64;
    /// Layout violates component limits or cannot be parsed
    pub const DATAERR: i32 = 65;
    pub const NOINPUT: i32 = 66;
    pub const SOFTWARE: i32 = 70;
    pub const IOERR: i32 = 74;
    pub const CONFIG: i32 = 78;
}

/// Top-level error shown to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),

    #[error("{0}")]
    Usage(String),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => sysexits::USAGE,
            CliError::Infra(InfraError::Io { .. }) => sysexits::IOERR,
            CliError::Infra(InfraError::Application(e)) => match e {
                ApplicationError::Configuration(_) | ApplicationError::Layout { .. } => {
                    sysexits::DATAERR
                }
                ApplicationError::LayoutNotFound(_) => sysexits::NOINPUT,
                ApplicationError::Config { .. } => sysexits::CONFIG,
                ApplicationError::OperationFailed { .. } => sysexits::IOERR,
                ApplicationError::Profile { .. } => sysexits::SOFTWARE,
            },
        }
    }

    /// The component limit violation behind this error, if any.
    pub fn violation(&self) -> Option<&ConfigurationError> {
        match self {
            CliError::Infra(InfraError::Application(ApplicationError::Configuration(e))) => {
                Some(e)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_configuration_error_when_mapping_exit_code_then_dataerr() {
        let err = CliError::from(ApplicationError::from(ConfigurationError::EmptyRow));
        assert_eq!(err.exit_code(), sysexits::DATAERR);
        assert_eq!(err.violation(), Some(&ConfigurationError::EmptyRow));
    }

    #[test]
    fn given_missing_layout_when_mapping_exit_code_then_noinput() {
        let err = CliError::from(ApplicationError::LayoutNotFound("x.toml".into()));
        assert_eq!(err.exit_code(), sysexits::NOINPUT);
        assert!(err.violation().is_none());
    }

    #[test]
    fn given_usage_error_when_mapping_exit_code_then_usage() {
        assert_eq!(CliError::Usage("no command".into()).exit_code(), sysexits::USAGE);
    }
}
