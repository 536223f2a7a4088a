//! Domain layer: users and dates
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod date;
pub mod error;
pub mod user;

pub use date::Date;
pub use error::DomainError;
pub use user::User;
