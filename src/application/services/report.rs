//! Report request service
//!
//! Turns command line options and the config into a fully validated
//! [`ReportRequest`] which is then handed over to a report sink.

use std::sync::Arc;

use itertools::Itertools;
use tracing::{debug, info};

use crate::application::{ApplicationError, ApplicationResult};
use crate::config::{Config, WIDTH_LIMIT};
use crate::domain::{Date, User};

/// Report options given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportOptions {
    /// Emails overriding the configured ones
    pub emails: Vec<String>,
    /// First day of the report (inclusive)
    pub since: Option<String>,
    /// Last day of the report (inclusive)
    pub until: Option<String>,
    /// Maximum report width overriding the config
    pub width: Option<usize>,
}

/// Everything needed to generate a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRequest {
    pub since: Date,
    pub until: Date,
    pub users: Vec<User>,
    pub width: usize,
    pub separator: String,
    pub separator_width: usize,
    /// Configured report sections, in config order
    pub sections: Vec<String>,
}

impl ReportRequest {
    /// Plain text report header: title, separator line and the users.
    pub fn header(&self) -> String {
        let title = if self.since == self.until {
            format!("Status report for {}.", self.since)
        } else {
            format!("Status report for {} to {}.", self.since, self.until)
        };
        let separator: String = self
            .separator
            .chars()
            .cycle()
            .take(self.separator_width.min(self.width))
            .collect();
        let users = self.users.iter().map(|user| format!("* {}", user)).join("\n");
        format!("{}\n\n{}\n\n{}\n", title, separator, users)
    }
}

/// Service for building report requests.
pub struct ReportService {
    config: Arc<Config>,
    today: Date,
}

impl ReportService {
    /// Create a new report service.
    ///
    /// `today` is the default day of the report.
    pub fn new(config: Arc<Config>, today: Date) -> Self {
        Self { config, today }
    }

    /// Validate options against the config and build the request.
    pub fn build(&self, options: &ReportOptions) -> ApplicationResult<ReportRequest> {
        debug!("build: options={:?}", options);
        let users = self.users(&options.emails)?;

        let since = match &options.since {
            Some(since) => since.parse::<Date>()?,
            None => self.today,
        };
        let until = match &options.until {
            Some(until) => until.parse::<Date>()?,
            None => since,
        };
        if until < since {
            return Err(ApplicationError::option(format!(
                "Since date '{}' is after until date '{}'.",
                since, until
            )));
        }

        let width = match options.width {
            Some(width) if width == 0 || width > WIDTH_LIMIT => {
                return Err(ApplicationError::option(format!(
                    "Width must be a positive number up to {}.",
                    WIDTH_LIMIT
                )))
            }
            Some(width) => width,
            None => self.config.width()?,
        };

        let request = ReportRequest {
            since,
            until,
            users,
            width,
            separator: self.config.separator(),
            separator_width: self.config.separator_width()?,
            sections: self
                .config
                .sections(None)
                .into_iter()
                .filter(|name| name != "general")
                .collect(),
        };
        info!(
            "Report for {} user(s) from {} to {}",
            request.users.len(),
            request.since,
            request.until
        );
        Ok(request)
    }

    /// Users from the command line, falling back to the configured email(s).
    fn users(&self, emails: &[String]) -> ApplicationResult<Vec<User>> {
        let emails: Vec<String> = if emails.is_empty() {
            split_emails(&self.config.email()?)
        } else {
            emails.iter().flat_map(|e| split_emails(e)).collect()
        };
        if emails.is_empty() {
            return Err(ApplicationError::option("No email given."));
        }
        emails
            .iter()
            .map(|email| User::parse(email).map_err(ApplicationError::from))
            .collect()
    }
}

fn split_emails(emails: &str) -> Vec<String> {
    emails
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect()
}
