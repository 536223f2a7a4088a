//! Configuration file handling
//!
//! The config file is TOML with one table per section:
//!
//! ```toml
//! [general]
//! email = "Name Surname <email@example.org>"
//!
//! [mygit]
//! type = "git"
//! ```
//!
//! Location (lowest to highest precedence):
//! 1. `~/.did/config`
//! 2. `$DID_DIR/config`
//! 3. `--config PATH` (relative paths are resolved against the config directory)
//!
//! `DID_*` environment variables override scalars of the `[general]` section
//! once they are applied with [`Config::apply_overrides`].

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use config::{Environment, Map};
use serde::Deserialize;
use toml::{Table, Value};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};

/// Default width of the report and of the separator line.
pub const MAX_WIDTH: usize = 79;

/// Largest accepted report or separator width.
pub const WIDTH_LIMIT: usize = 1000;

/// Default character used to draw the separator line.
pub const DEFAULT_SEPARATOR: &str = "~";

/// Default name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "config";

/// Default config directory relative to the home directory.
pub const CONFIG_DIR: &str = ".did";

/// Environment variable overriding the config directory.
pub const DID_DIR_ENV: &str = "DID_DIR";

const GENERAL: &str = "general";

const ENV_PREFIX: &str = "DID";

/// Keys of a section which describe the section itself, not its options.
const RESERVED_KEYS: [&str; 2] = ["type", "order"];

/// `[general]` values picked up from `DID_*` environment variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralOverrides {
    pub email: Option<String>,
    pub width: Option<String>,
    pub separator: Option<String>,
    pub separator_width: Option<String>,
}

impl GeneralOverrides {
    /// Read overrides from the process environment.
    pub fn from_env() -> ApplicationResult<Self> {
        Self::from_source(None)
    }

    /// Read overrides from an explicit variable map instead of the process environment.
    pub fn from_source(source: Option<Map<String, String>>) -> ApplicationResult<Self> {
        config::Config::builder()
            .add_source(Environment::with_prefix(ENV_PREFIX).source(source))
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_err)
    }

    /// Reject values which would be invalid in the `[general]` section.
    fn validate(&self) -> ApplicationResult<()> {
        for (key, value) in [
            ("width", &self.width),
            ("separator_width", &self.separator_width),
        ] {
            let Some(raw) = value else { continue };
            if parse_width(raw).is_none() {
                return Err(ApplicationError::config(format!(
                    "Invalid {}_{} '{}' in the environment, should be integer up to {}.",
                    ENV_PREFIX,
                    key.to_uppercase(),
                    raw,
                    WIDTH_LIMIT
                )));
            }
        }
        Ok(())
    }

    fn entries(&self) -> impl Iterator<Item = (&'static str, &String)> {
        [
            ("email", self.email.as_ref()),
            ("width", self.width.as_ref()),
            ("separator", self.separator.as_ref()),
            ("separator_width", self.separator_width.as_ref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
    }
}

fn config_err(e: config::ConfigError) -> ApplicationError {
    ApplicationError::config(format!("environment override: {}", e))
}

/// Parsed config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    path: Option<PathBuf>,
    sections: Table,
}

impl Config {
    /// Minimal working config.
    pub fn example() -> String {
        "[general]\nemail = \"Name Surname <email@example.org>\"\n".to_string()
    }

    /// Parse config text.
    ///
    /// Every top-level key must be a section (table).
    pub fn parse(text: &str) -> ApplicationResult<Self> {
        let sections: Table = toml::from_str(text)
            .map_err(|e| ApplicationError::config(format!("Unable to parse the config: {}", e)))?;
        if let Some((key, _)) = sections.iter().find(|(_, v)| !v.is_table()) {
            return Err(ApplicationError::config(format!(
                "File contains no section header for key '{}'.",
                key
            )));
        }
        Ok(Self {
            path: None,
            sections,
        })
    }

    /// Read and parse the config file at `path`.
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> ApplicationResult<Self> {
        let text = fs::read_to_string(path).or_config_file_error(path)?;
        let mut config = Self::parse(&text)?;
        config.path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Path the config was loaded from, `None` when parsed from text.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Overwrite `[general]` scalars, creating the section if needed.
    ///
    /// Nothing is applied when any of the overrides is invalid.
    pub fn apply_overrides(&mut self, overrides: &GeneralOverrides) -> ApplicationResult<()> {
        overrides.validate()?;
        for (key, value) in overrides.entries() {
            debug!("apply_overrides: general.{} from environment", key);
            let general = self
                .sections
                .entry(GENERAL)
                .or_insert(Value::Table(Table::new()));
            if let Value::Table(table) = general {
                table.insert(key.to_string(), Value::String(value.clone()));
            }
        }
        Ok(())
    }

    fn value(&self, section: &str, key: &str) -> Option<String> {
        self.sections
            .get(section)
            .and_then(Value::as_table)
            .and_then(|table| table.get(key))
            .map(render_value)
    }

    /// User email(s) from `[general]`, comma separated when there are more.
    pub fn email(&self) -> ApplicationResult<String> {
        self.value(GENERAL, "email")
            .filter(|email| !email.trim().is_empty())
            .ok_or_else(|| {
                ApplicationError::config("No email provided in the [general] section.")
            })
    }

    pub fn width(&self) -> ApplicationResult<usize> {
        self.width_or(GENERAL, "width", MAX_WIDTH)
    }

    pub fn separator(&self) -> String {
        self.value(GENERAL, "separator")
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string())
    }

    pub fn separator_width(&self) -> ApplicationResult<usize> {
        self.width_or(GENERAL, "separator_width", MAX_WIDTH)
    }

    /// Directory with custom plugins, if configured.
    pub fn plugins(&self) -> Option<String> {
        self.value(GENERAL, "plugins")
    }

    /// First month of the first quarter (1 for calendar quarters).
    pub fn quarter(&self) -> ApplicationResult<u32> {
        let Some(raw) = self.value(GENERAL, "quarter") else {
            return Ok(1);
        };
        raw.trim()
            .parse::<u32>()
            .ok()
            .filter(|month| (1..=12).contains(month))
            .ok_or_else(|| {
                ApplicationError::config(format!(
                    "Invalid quarter start '{}', should be integer between 1 and 12.",
                    raw
                ))
            })
    }

    /// Section names in file order, optionally only those of the given `type`.
    pub fn sections(&self, kind: Option<&str>) -> Vec<String> {
        self.sections
            .keys()
            .filter(|name| match kind {
                Some(kind) => self.value(name, "type").as_deref() == Some(kind),
                None => true,
            })
            .cloned()
            .collect()
    }

    /// Options of a section in file order, without `type` and `order`.
    pub fn section(&self, name: &str) -> ApplicationResult<Vec<(String, String)>> {
        let table = self
            .sections
            .get(name)
            .and_then(Value::as_table)
            .ok_or_else(|| ApplicationError::config(format!("No [{}] section found.", name)))?;
        Ok(table
            .iter()
            .filter(|(key, _)| !RESERVED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), render_value(value)))
            .collect())
    }

    /// All options of a section as a map, `None` if there is no such section.
    pub fn section_map(&self, name: &str) -> Option<BTreeMap<String, String>> {
        self.sections.get(name).and_then(Value::as_table).map(|table| {
            table
                .iter()
                .map(|(key, value)| (key.clone(), render_value(value)))
                .collect()
        })
    }

    /// Single option of a section.
    pub fn item(&self, section: &str, key: &str) -> ApplicationResult<String> {
        self.value(section, key).ok_or_else(|| {
            ApplicationError::config(format!(
                "Please specify the '{}' in the [{}] section.",
                key, section
            ))
        })
    }

    fn width_or(&self, section: &str, key: &str, default: usize) -> ApplicationResult<usize> {
        match self.value(section, key) {
            None => Ok(default),
            Some(raw) => parse_width(&raw).ok_or_else(|| {
                ApplicationError::config(format!(
                    "Invalid {} '{}' in the [{}] section, should be integer up to {}.",
                    key, raw, section, WIDTH_LIMIT
                ))
            }),
        }
    }
}

fn parse_width(raw: &str) -> Option<usize> {
    raw.trim()
        .parse::<usize>()
        .ok()
        .filter(|width| *width <= WIDTH_LIMIT)
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Config directory: `$DID_DIR` or `~/.did`.
pub fn config_dir() -> PathBuf {
    match std::env::var(DID_DIR_ENV) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(shellexpand::tilde(&dir).into_owned()),
        _ => directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(CONFIG_DIR))
            .unwrap_or_else(|| PathBuf::from("~").join(CONFIG_DIR)),
    }
}

/// Path of the config file to use, honoring an explicit `--config` value.
pub fn config_path(explicit: Option<&Path>) -> PathBuf {
    resolve_config_path(&config_dir(), explicit)
}

/// Resolve the config file against `dir`.
///
/// Absolute and `~` paths are taken as they are, relative ones live in `dir`.
pub fn resolve_config_path(dir: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        None => dir.join(CONFIG_FILE),
        Some(path) => {
            let raw = path.to_string_lossy();
            if raw.starts_with('~') {
                PathBuf::from(shellexpand::tilde(&raw).into_owned())
            } else if path.is_absolute() {
                path.to_path_buf()
            } else {
                dir.join(path)
            }
        }
    }
}
