use std::process;

use did::bootstrap;
use did::cli::commands::execute;
use did::cli::output;
use did::cli::render_chain;
use did::logging::{debug_requested, Logger};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let logger = Logger::from_args(&args);

    match bootstrap::run(&args, &logger, || execute(&args)) {
        Ok(exit) => process::exit(exit.code),
        Err(err) => {
            output::error(&render_chain(&err));
            if debug_requested(&args) {
                output::detail(&format!("{:#?}", err));
            }
            process::exit(err.exit_code());
        }
    }
}
