//! CLI-level errors (wraps application and infrastructure errors)

use std::fmt::Write as _;

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    /// Expected failure: bad options, bad config, unavailable report source
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Environment failure or bug
    #[error(transparent)]
    Infra(#[from] InfraError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Whether this is a general application error, reported as a one-liner.
    pub fn is_general(&self) -> bool {
        matches!(self, CliError::Application(_))
    }

    /// Get the appropriate exit code for this error when it escapes the bootstrap.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Option { .. }
                | ApplicationError::Usage { .. }
                | ApplicationError::Domain(DomainError::InvalidDate(_)) => crate::exitcode::USAGE,
                ApplicationError::Config { .. }
                | ApplicationError::ConfigFile { .. }
                | ApplicationError::Domain(_) => crate::exitcode::CONFIG,
                ApplicationError::Report { .. } => crate::exitcode::UNAVAILABLE,
            },
            CliError::Infra(InfraError::Io { .. }) => crate::exitcode::IOERR,
        }
    }
}

/// Render an error followed by its chain of causes.
pub fn render_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    if source.is_some() {
        out.push_str("\n\nCaused by:");
    }
    let mut index = 0;
    while let Some(cause) = source {
        let _ = write!(out, "\n    {}: {}", index, cause);
        index += 1;
        source = cause.source();
    }
    out
}
