//! Command-line entry point for the loop-order benchmark.

use std::env;
use std::process::ExitCode;

use loop_orders::runner::{self, Config};

fn main() -> ExitCode {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    runner::run(&config);
    ExitCode::SUCCESS
}
