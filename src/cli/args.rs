//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, ValueHint};

use crate::application::services::ReportOptions;

/// What did you do last week, month, year?
#[derive(Parser, Debug)]
#[command(name = "did")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (default: $DID_DIR/config or ~/.did/config)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// User email(s) to report on, comma separated or repeated
    #[arg(long, value_delimiter = ',')]
    pub email: Vec<String>,

    /// First day of the report (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub since: Option<String>,

    /// Last day of the report, inclusive (YYYY-MM-DD, default: since)
    #[arg(long)]
    pub until: Option<String>,

    /// Maximum width of the report output
    #[arg(long)]
    pub width: Option<usize>,

    /// Print an example config and exit
    #[arg(long)]
    pub example: bool,

    /// Generate shell completions
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Show full error details instead of a one-line message
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Report options given on the command line.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            emails: self.email.clone(),
            since: self.since.clone(),
            until: self.until.clone(),
            width: self.width,
        }
    }
}
