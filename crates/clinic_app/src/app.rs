use std::io::{self, IsTerminal, Write};

use anyhow::{bail, Context};
use clinic_core::{load_ensemble_list, RunTally, TargetResolver};
use clinic_engine::{BatchDriver, Fetcher, ReqwestFetcher};
use clinic_logging::clinic_info;

use crate::{Cli, ConsoleReporter, ConsoleStyle, ScraperConfig};

/// Where a run's ensemble names come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsembleSource {
    /// Supplied directly, either one name or a list file.
    Names(Vec<String>),
    /// Candidates to probe for each year.
    Discover(Vec<String>),
}

/// Everything a run needs, validated before any network activity.
#[derive(Debug, Clone)]
pub struct RunPlan {
    pub years: Vec<u32>,
    pub source: EnsembleSource,
    pub config: ScraperConfig,
    pub resolver: TargetResolver,
    pub style: ConsoleStyle,
}

/// Loads configuration and the ensemble list. Every fatal error of a run
/// surfaces here.
pub fn prepare(cli: &Cli) -> anyhow::Result<RunPlan> {
    let mut config = match &cli.config {
        Some(path) => {
            clinic_info!("loading config from {}", path.display());
            ScraperConfig::load(path)?
        }
        None => ScraperConfig::default(),
    };
    if let Some(dir) = &cli.output {
        config.output_dir = dir.clone();
    }
    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }

    let resolver = TargetResolver::new(&config.base_url, config.output_dir.clone())?;

    let years = cli.years();
    if years.is_empty() {
        bail!("must specify --year or --years");
    }

    let source = if cli.discover {
        EnsembleSource::Discover(config.candidates.clone())
    } else if let Some(path) = &cli.list {
        let names = load_ensemble_list(path).context("cannot load ensemble list")?;
        EnsembleSource::Names(names)
    } else if let Some(name) = &cli.ensemble {
        EnsembleSource::Names(vec![name.clone()])
    } else {
        bail!("must specify --ensemble, --list, or --discover");
    };

    let style = ConsoleStyle::from_flags(cli.boring, cli.chaos, io::stdout().is_terminal());

    Ok(RunPlan {
        years,
        source,
        config,
        resolver,
        style,
    })
}

/// Runs the plan against the real network.
pub fn execute(plan: RunPlan, out: impl Write) -> anyhow::Result<RunTally> {
    let fetcher = ReqwestFetcher::new(plan.config.fetch_settings())?;
    execute_with(&fetcher, plan, out)
}

/// Runs the plan on a current-thread runtime; requests never overlap.
pub fn execute_with(
    fetcher: &dyn Fetcher,
    plan: RunPlan,
    out: impl Write,
) -> anyhow::Result<RunTally> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("cannot start async runtime")?;

    let mut reporter = ConsoleReporter::new(out, plan.style);
    reporter.startup();

    let driver = BatchDriver::new(fetcher, &plan.resolver, plan.config.pacing());
    let tally = runtime.block_on(async {
        match &plan.source {
            EnsembleSource::Names(names) => {
                reporter.manual_header(
                    plan.years.len() * names.len(),
                    plan.years.len(),
                    names.len(),
                );
                driver.run_manual(&plan.years, names, &mut reporter).await
            }
            EnsembleSource::Discover(candidates) => {
                reporter.discovery_header(plan.years.len());
                driver
                    .run_discovery(&plan.years, candidates, &mut reporter)
                    .await
            }
        }
    });

    clinic_info!(
        "run finished: {} downloaded, {} already present, {} failed, {} total",
        tally.success,
        tally.duplicate,
        tally.failed,
        tally.total
    );
    reporter.summary(&tally, &plan.config.output_dir);
    Ok(tally)
}

/// `prepare` then `execute`, printing to stdout.
pub fn run(cli: &Cli) -> anyhow::Result<RunTally> {
    let plan = prepare(cli)?;
    execute(plan, io::stdout().lock())
}
