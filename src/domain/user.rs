//! Users a report is generated for
//!
//! A user is given as `email` or `Name Surname <email>`, optionally followed by
//! per-stats aliases: `some@email.org; bz: bzlogin; gh: other@email.org`.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, info};

use crate::domain::DomainError;

fn full_email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*?)\s*<([^>]*)>$").expect("valid regex"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[\w.+-]+@[\w-]+(\.[\w-]+)+$").expect("valid regex"))
}

/// User identity used to query report sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub login: String,
    pub name: Option<String>,
    original: String,
}

impl User {
    /// Parse a user without applying any aliases.
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        Self::for_stats(text, None, None)
    }

    /// Parse a user and apply the aliases configured for `stats`.
    ///
    /// `section` holds the key/value pairs of the config section named `stats`;
    /// its `email` and `login` keys act as aliases. Inline alias definitions
    /// in `text` take precedence over the section.
    pub fn for_stats(
        text: &str,
        stats: Option<&str>,
        section: Option<&BTreeMap<String, String>>,
    ) -> Result<Self, DomainError> {
        let original = text.trim();
        if original.is_empty() {
            return Err(DomainError::EmailRequired);
        }

        let (identity, aliases) = match original.split_once(';') {
            Some((identity, aliases)) => (identity.trim(), Some(aliases)),
            None => (original, None),
        };

        let (name, email) = match full_email_regex().captures(identity) {
            Some(caps) => {
                let name = caps[1].trim();
                let name = (!name.is_empty()).then(|| name.to_string());
                (name, caps[2].trim().to_string())
            }
            None => (None, identity.to_string()),
        };
        if !email_regex().is_match(&email) {
            return Err(DomainError::InvalidEmail(email));
        }

        let login = login_of(&email);
        let mut user = Self {
            email,
            login,
            name,
            original: original.to_string(),
        };
        if let Some(stats) = stats {
            user.apply_alias(aliases, stats, section)?;
        }
        Ok(user)
    }

    /// Re-create the user from its original definition for another stats section.
    pub fn clone_for(
        &self,
        stats: &str,
        section: Option<&BTreeMap<String, String>>,
    ) -> Result<Self, DomainError> {
        Self::for_stats(&self.original, Some(stats), section)
    }

    fn apply_alias(
        &mut self,
        aliases: Option<&str>,
        stats: &str,
        section: Option<&BTreeMap<String, String>>,
    ) -> Result<(), DomainError> {
        let mut email = section.and_then(|s| s.get("email")).cloned();
        let mut login = section.and_then(|s| s.get("login")).cloned();

        if let Some(aliases) = aliases {
            let definitions = parse_aliases(aliases)?;
            if let Some(alias) = definitions.get(stats) {
                if alias.contains('@') {
                    email = Some(alias.clone());
                } else {
                    login = Some(alias.clone());
                }
            }
        }

        if let Some(email) = email {
            info!("Using email alias '{}' for '{}'", email, stats);
            if login.is_none() {
                login = Some(login_of(&email));
            }
            self.email = email;
        }
        if let Some(login) = login {
            info!("Using login alias '{}' for '{}'", login, stats);
            self.login = login;
        }
        debug!("apply_alias: stats={} user={:?}", stats, self);
        Ok(())
    }
}

fn login_of(email: &str) -> String {
    email.split('@').next().unwrap_or(email).to_string()
}

/// Parse `stats: alias; stats: alias` into a map.
fn parse_aliases(aliases: &str) -> Result<BTreeMap<String, String>, DomainError> {
    aliases
        .trim()
        .split(';')
        .map(str::trim)
        .map(|definition| {
            definition
                .split_once(':')
                .map(|(stats, alias)| (stats.trim().to_string(), alias.trim().to_string()))
                .filter(|(stats, alias)| !stats.is_empty() && !alias.is_empty())
                .ok_or_else(|| DomainError::InvalidAlias(aliases.trim().to_string()))
        })
        .collect()
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} <{}>", name, self.email),
            None => write!(f, "{}", self.email),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        let aliases = parse_aliases(" bz: bzlogin ; gh:other@email.org").unwrap();
        assert_eq!(aliases["bz"], "bzlogin");
        assert_eq!(aliases["gh"], "other@email.org");
    }

    #[test]
    fn test_parse_aliases_rejects_missing_colon() {
        let err = parse_aliases("bad-alias").unwrap_err();
        assert_eq!(err, DomainError::InvalidAlias("bad-alias".into()));
    }

    #[test]
    fn test_login_of() {
        assert_eq!(login_of("some@email.org"), "some");
    }
}
