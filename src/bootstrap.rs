//! Outermost frame of the program
//!
//! Runs the dispatch routine and turns a general application error into a
//! logged one-line message plus exit code 1. With `--debug` anywhere in the
//! raw arguments the error is handed back untouched so the caller can show
//! every detail. Errors of any other kind are always handed back.

use crate::cli::{CliError, CliResult};
use crate::exitcode;
use crate::logging::{debug_requested, Logger};

/// How the program should terminate.
#[derive(Debug)]
pub struct Exit {
    pub code: i32,
    /// The reported general error behind a failure exit
    pub cause: Option<CliError>,
}

impl Exit {
    pub fn success(code: i32) -> Self {
        Self { code, cause: None }
    }

    pub fn failure(cause: CliError) -> Self {
        Self {
            code: exitcode::FAILURE,
            cause: Some(cause),
        }
    }
}

/// Run `dispatch` under `logger` and decide how the process exits.
///
/// `args` is the raw argument list, only consulted for `--debug`.
pub fn run<F>(args: &[String], logger: &Logger, dispatch: F) -> CliResult<Exit>
where
    F: FnOnce() -> CliResult<i32>,
{
    match logger.in_scope(dispatch) {
        Ok(code) => Ok(Exit::success(code)),
        Err(err) if err.is_general() && !debug_requested(args) => {
            logger.error(&err);
            Ok(Exit::failure(err))
        }
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::util::testing::CapturedLog;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn test_exit_failure_keeps_cause() {
        let exit = Exit::failure(ApplicationError::report("gone").into());
        assert_eq!(exit.code, 1);
        assert_eq!(exit.cause.unwrap().to_string(), "gone");
    }

    #[test]
    fn test_dispatch_runs_under_logger() {
        let log = CapturedLog::new();
        let logger = log.logger(LevelFilter::INFO);

        let exit = run(&["did".to_string()], &logger, || {
            tracing::info!("inside dispatch");
            Ok(0)
        })
        .unwrap();

        assert_eq!(exit.code, 0);
        assert!(log.contents().contains("inside dispatch"));
    }
}
