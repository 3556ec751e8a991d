mod cli;
mod application;
mod domain;
mod data;
mod infra;

use std::process::ExitCode;

use clap::Parser;
use cli::Cli;
use domain::error::{GenerateError, EXIT_FAILURE};

fn main() -> ExitCode {
    let cli = Cli::parse();
    infra::logging::init(cli.verbose);

    match cli.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err
                .downcast_ref::<GenerateError>()
                .map_or(EXIT_FAILURE, GenerateError::exit_code);
            tracing::debug!("Exiting with status {code}: {err:?}");
            eprintln!("Error: {err:#}");
            ExitCode::from(code)
        }
    }
}
