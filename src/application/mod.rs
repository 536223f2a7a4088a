//! Application layer: services and use cases
//!
//! This layer orchestrates domain logic and depends on the config.

pub mod error;
pub mod error_ext;
pub mod services;
pub mod token;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use token::{get_token, get_token_with};
