use appsrc_core::logging;

mod cli;

use crate::cli::Cli;

fn main() {
    // Logging goes to stderr; stdout is reserved for the result line.
    if let Err(err) = logging::init_logging() {
        eprintln!("appsrc: {:#}", err);
    }

    if let Err(err) = Cli::run_from_args() {
        eprintln!("appsrc error: {:#}", err);
        std::process::exit(1);
    }
}
