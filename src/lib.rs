//! did: what did you do last week, month, year?
//!
//! Layers, inner to outer: `domain` (users, dates), `application` (errors,
//! tokens, report requests), `infrastructure` (report output), `cli`
//! (arguments and dispatch) and `bootstrap` (exit handling).

pub mod application;
pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod logging;
pub mod util;
