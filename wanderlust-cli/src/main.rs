//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use wanderlust_cli::{CliError, run};

fn main() {
    match run() {
        Ok(()) => {}
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            eprintln!("wanderlust: {err}");
            std::process::exit(1);
        }
    }
}
