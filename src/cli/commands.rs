//! Command dispatch
//!
//! Parses the argument list, loads the config and hands a validated report
//! request to the report sink.

use std::io;
use std::sync::Arc;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::services::ReportService;
use crate::application::ApplicationError;
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::CliResult;
use crate::config::{config_path, Config, GeneralOverrides};
use crate::domain::Date;
use crate::exitcode;
use crate::infrastructure::{HeaderSink, InfraError, ReportSink};

/// Run the command line given in `args` (program name first).
pub fn execute(args: &[String]) -> CliResult<i32> {
    let overrides = GeneralOverrides::from_env()?;
    execute_with(args, &mut HeaderSink::stdout(), Date::today(), &overrides)
}

/// Run the command line with an explicit report sink, current day and
/// `[general]` overrides.
#[instrument(skip(sink))]
pub fn execute_with(
    args: &[String],
    sink: &mut dyn ReportSink,
    today: Date,
    overrides: &GeneralOverrides,
) -> CliResult<i32> {
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => {
            e.print().map_err(|e| InfraError::io("print help", e))?;
            return Ok(exitcode::OK);
        }
        Err(e) => return Err(ApplicationError::usage(e).into()),
    };
    debug!("execute: {:?}", cli);

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        let mut script = Vec::new();
        generate(shell, &mut cmd, name, &mut script);
        output::write_all(&mut io::stdout().lock(), &script)
            .map_err(|e| InfraError::io("print completions", e))?;
        return Ok(exitcode::OK);
    }

    if cli.example {
        output::info(&Config::example()).map_err(|e| InfraError::io("print example", e))?;
        return Ok(exitcode::OK);
    }

    let path = config_path(cli.config.as_deref());
    debug!("execute: config={}", path.display());
    let mut config = Config::load(&path)?;
    config.apply_overrides(overrides)?;

    let service = ReportService::new(Arc::new(config), today);
    let request = service.build(&cli.report_options())?;

    sink.emit(&request)
        .map_err(|e| InfraError::io("write report", e))?;
    Ok(exitcode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_error_is_general_usage_error() {
        let args: Vec<String> = ["did", "--no-such-flag", "--debug"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut sink = HeaderSink::new(Vec::new());

        let err = execute_with(&args, &mut sink, Date::today(), &GeneralOverrides::default())
            .unwrap_err();

        assert!(err.is_general());
        assert_eq!(err.to_string(), "unexpected argument '--no-such-flag' found");
        assert_eq!(err.exit_code(), exitcode::USAGE);
    }
}
