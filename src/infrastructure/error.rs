//! Infrastructure-level errors
//!
//! These are environment failures (broken pipes, full disks), not problems
//! the user can fix by changing options or config.

use thiserror::Error;

/// Infrastructure errors add I/O-level concerns.
#[derive(Error, Debug)]
pub enum InfraError {
    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl InfraError {
    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
