//! Error conversion helpers for config file reads
//!
//! Provides extension traits for cleaner error handling with path context.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Report a failed read of the main config file.
    ///
    /// # Example
    /// ```ignore
    /// fs::read_to_string(&path).or_config_file_error(&path)?;
    /// ```
    fn or_config_file_error(self, path: &Path) -> ApplicationResult<T>;

    /// Report a failed read of a file referenced from the config (token files).
    fn or_config_error(self, action: &str, path: &Path) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn or_config_file_error(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::ConfigFile {
            path: path.to_path_buf(),
            source,
        })
    }

    fn or_config_error(self, action: &str, path: &Path) -> ApplicationResult<T> {
        self.map_err(|e| ApplicationError::config(format!("{} '{}': {}", action, path.display(), e)))
    }
}
