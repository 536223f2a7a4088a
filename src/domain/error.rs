//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invalid user or date input.
/// These are independent of configuration and I/O concerns.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Email required for user initialization.")]
    EmailRequired,

    #[error("Invalid email address '{0}'")]
    InvalidEmail(String),

    #[error("Invalid alias definition: '{0}'")]
    InvalidAlias(String),

    #[error("Invalid date format: '{0}', use YYYY-MM-DD.")]
    InvalidDate(String),
}
