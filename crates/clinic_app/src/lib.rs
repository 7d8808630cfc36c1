//! Clinic scraper application: command line, configuration and console output.
//!
//! ```text
//! clinic-scraper --year 2009 --ensemble Buchholz
//! clinic-scraper --years 2015-2023 --ensemble USAF
//! clinic-scraper --years 2010-2023 --list ensembles.txt
//! clinic-scraper --year 2019 --discover
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod console;
mod reactions;

pub use app::{execute, execute_with, prepare, run, EnsembleSource, RunPlan};
pub use cli::Cli;
pub use config::ScraperConfig;
pub use console::{ConsoleReporter, ConsoleStyle, Tone};
