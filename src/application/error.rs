//! Application-level errors (wraps domain errors)
//!
//! Every variant here is an expected, user-facing condition: a bad config,
//! bad options or a report source that cannot be queried.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("{message}")]
    Config { message: String },

    #[error("Unable to read the config file '{}'.", path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{message}")]
    Option { message: String },

    #[error("{message}")]
    Usage {
        message: String,
        #[source]
        source: clap::Error,
    },

    #[error("{message}")]
    Report { message: String },
}

impl ApplicationError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn option(message: impl Into<String>) -> Self {
        Self::Option {
            message: message.into(),
        }
    }

    /// Command line rejected by the parser.
    ///
    /// The message is the first line of clap's rendering without its `error: `
    /// prefix, the full rendering stays available as the source.
    pub fn usage(source: clap::Error) -> Self {
        let rendered = source.render().to_string();
        let first = rendered.lines().next().unwrap_or_default();
        let message = first.strip_prefix("error: ").unwrap_or(first).trim().to_string();
        Self::Usage { message, source }
    }

    pub fn report(message: impl Into<String>) -> Self {
        Self::Report {
            message: message.into(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
