//! Process logger
//!
//! The logger is built once in `main` and handed to the bootstrap. It is never
//! installed as the global default: code logs through it only while running
//! inside [`Logger::in_scope`].

use std::fmt::Display;
use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing::Dispatch;
use tracing_subscriber::fmt::{self, MakeWriter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Raw flag switching on full error details and debug logging.
pub const DEBUG_FLAG: &str = "--debug";

const VERBOSE_FLAGS: [&str; 2] = ["-v", "--verbose"];

/// Whether the raw argument list asks for debug mode.
///
/// This is a plain membership test, independent of the argument parser.
pub fn debug_requested(args: &[String]) -> bool {
    args.iter().any(|arg| arg == DEBUG_FLAG)
}

/// Log level selected by the raw argument list.
pub fn level_from_args(args: &[String]) -> LevelFilter {
    if debug_requested(args) {
        LevelFilter::DEBUG
    } else if args.iter().any(|arg| VERBOSE_FLAGS.contains(&arg.as_str())) {
        LevelFilter::INFO
    } else {
        LevelFilter::WARN
    }
}

/// Explicitly constructed logger.
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    /// Logger writing to stderr at the level chosen by the raw arguments.
    pub fn from_args(args: &[String]) -> Self {
        Self::new(level_from_args(args))
    }

    /// Logger writing to stderr.
    ///
    /// `RUST_LOG`, when set, takes precedence over `level`.
    pub fn new(level: LevelFilter) -> Self {
        let filter = EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
        Self::build(level, filter, std::io::stderr, std::io::stderr().is_terminal())
    }

    /// Logger writing to any writer, ignoring `RUST_LOG`.
    pub fn with_writer<W>(level: LevelFilter, writer: W, ansi: bool) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        Self::build(level, EnvFilter::default().add_directive(level.into()), writer, ansi)
    }

    fn build<W>(level: LevelFilter, filter: EnvFilter, writer: W, ansi: bool) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let fmt_layer = fmt::layer()
            .with_writer(writer)
            .with_ansi(ansi)
            .without_time()
            .with_target(level >= LevelFilter::DEBUG)
            .with_thread_names(false);

        let subscriber = tracing_subscriber::registry().with(fmt_layer.with_filter(filter));

        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Run `f` with this logger receiving all tracing events.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    /// Log a message at error severity.
    pub fn error(&self, msg: &(impl Display + ?Sized)) {
        self.in_scope(|| tracing::error!("{}", msg));
    }
}
