use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use clinic_app::Cli;
use clinic_logging::{clinic_error, LevelFilter, LogDestination};

const LOG_FILE: &str = "clinic_scraper.log";

fn main() -> ExitCode {
    // Usage errors exit here with status 2, before logging or any request.
    let cli = Cli::parse();

    let (destination, level) = if cli.verbose {
        (LogDestination::Both, LevelFilter::Debug)
    } else {
        (LogDestination::File, LevelFilter::Info)
    };
    clinic_logging::initialize(destination, level, Path::new(LOG_FILE));

    match clinic_app::app::run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            clinic_error!("fatal: {err:#}");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
