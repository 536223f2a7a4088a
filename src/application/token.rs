//! Access tokens for report sources
//!
//! A config section may carry a token inline (`token = "..."`) or point to a
//! file holding it (`token_file = "~/.did/gitlab.token"`). The inline token wins.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::application::{ApplicationResult, IoResultExt};

pub const TOKEN_KEY: &str = "token";
pub const TOKEN_FILE_KEY: &str = "token_file";

/// Get the token of a config section using the default key names.
pub fn get_token(section: &BTreeMap<String, String>) -> ApplicationResult<Option<String>> {
    get_token_with(section, TOKEN_KEY, TOKEN_FILE_KEY)
}

/// Get the token of a config section stored under custom key names.
///
/// Blank values count as missing.
pub fn get_token_with(
    section: &BTreeMap<String, String>,
    token_key: &str,
    token_file_key: &str,
) -> ApplicationResult<Option<String>> {
    if let Some(token) = non_blank(section.get(token_key).map(String::as_str)) {
        debug!("get_token: using plain '{}'", token_key);
        return Ok(Some(token));
    }

    let Some(file) = section.get(token_file_key) else {
        return Ok(None);
    };
    let path = PathBuf::from(shellexpand::tilde(file).into_owned());
    debug!("get_token: reading '{}' from {}", token_file_key, path.display());
    let content = fs::read_to_string(&path).or_config_error("Unable to read token file", &path)?;
    Ok(non_blank(Some(content.as_str())))
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
