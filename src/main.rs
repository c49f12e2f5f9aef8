#![warn(clippy::pedantic, clippy::nursery, clippy::unwrap_used, clippy::perf)]
#![deny(unused_must_use)]

use std::process::ExitCode;

mod cli;
mod lexemes;
mod logging;

fn main() -> ExitCode {
    logging::init_tracing();
    let args = cli::parse_args();

    match cli::run(&args, &mut std::io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
