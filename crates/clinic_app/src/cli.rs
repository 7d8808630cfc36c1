use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use clinic_core::YearSpan;

const EXAMPLES: &str = "\
Examples:
  clinic-scraper --year 2009 --ensemble Buchholz
  clinic-scraper --years 2015-2023 --ensemble USAF
  clinic-scraper --years 2010-2023 --list ensembles.txt
  clinic-scraper --year 2019 --discover
  clinic-scraper --years 2015-2020 --discover --boring
  clinic-scraper --year 2019 --ensemble USAF --chaos";

/// Downloads concert program PDFs, one file per year and ensemble.
#[derive(Debug, Parser)]
#[command(name = "clinic-scraper", version, long_about = None, after_help = EXAMPLES)]
#[command(group(ArgGroup::new("period").required(true).args(["year", "years"])))]
#[command(group(ArgGroup::new("source").required(true).args(["ensemble", "list", "discover"])))]
pub struct Cli {
    /// Single year to download.
    #[arg(long)]
    pub year: Option<u32>,

    /// Inclusive year range, e.g. 2015-2023.
    #[arg(long, value_name = "START-END")]
    pub years: Option<YearSpan>,

    /// Single ensemble name.
    #[arg(long)]
    pub ensemble: Option<String>,

    /// File with ensemble names, one per line.
    #[arg(long, value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// Probe the built-in name list to find each year's ensembles.
    #[arg(long)]
    pub discover: bool,

    /// Plain output: no colors, no commentary.
    #[arg(long, conflicts_with = "chaos")]
    pub boring: bool,

    /// Louder commentary.
    #[arg(long)]
    pub chaos: bool,

    /// Directory that receives `<year>/<file>.pdf`.
    #[arg(long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Base address the program files live under.
    #[arg(long, value_name = "URL", env = "CLINIC_BASE_URL")]
    pub base_url: Option<String>,

    /// RON configuration file.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also log to the terminal, at debug level.
    #[arg(long, short)]
    pub verbose: bool,
}

impl Cli {
    /// Years to process, in ascending order.
    pub fn years(&self) -> Vec<u32> {
        match (self.years, self.year) {
            (Some(span), _) => span.to_vec(),
            (None, Some(year)) => vec![year],
            (None, None) => Vec::new(),
        }
    }
}
