use std::time::Duration;

use clinic_core::{plan_jobs, Job, RunTally, TargetResolver};
use clinic_logging::{clinic_debug, clinic_info, clinic_warn, enter_job_context};

use crate::{discover, process_target, report_outcome, Fetcher, JobProgress, Reporter, RunMode};

/// Fixed self-throttle between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacing {
    pub download_delay: Duration,
    pub discovery_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            download_delay: Duration::from_millis(1000),
            discovery_delay: Duration::from_millis(500),
        }
    }
}

impl Pacing {
    pub fn none() -> Self {
        Self {
            download_delay: Duration::ZERO,
            discovery_delay: Duration::ZERO,
        }
    }
}

/// Runs jobs strictly one after another in the order they were supplied.
pub struct BatchDriver<'a> {
    fetcher: &'a dyn Fetcher,
    resolver: &'a TargetResolver,
    pacing: Pacing,
}

impl<'a> BatchDriver<'a> {
    pub fn new(fetcher: &'a dyn Fetcher, resolver: &'a TargetResolver, pacing: Pacing) -> Self {
        Self {
            fetcher,
            resolver,
            pacing,
        }
    }

    /// Every year x every ensemble. No pause after the last job.
    pub async fn run_manual(
        &self,
        years: &[u32],
        ensembles: &[String],
        reporter: &mut dyn Reporter,
    ) -> RunTally {
        let jobs = plan_jobs(years, ensembles);
        let planned = jobs.len();
        clinic_info!(
            "manual run: {} jobs ({} years x {} ensembles)",
            planned,
            years.len(),
            ensembles.len()
        );

        let mut tally = RunTally::new();
        for (idx, job) in jobs.iter().enumerate() {
            let progress = JobProgress {
                job,
                index: idx + 1,
                planned: Some(planned),
                mode: RunMode::Manual,
            };
            self.run_job(progress, reporter, &mut tally).await;
            if idx + 1 < planned {
                self.pause(self.pacing.download_delay, reporter).await;
            }
        }
        tally
    }

    /// Discovers each year's ensembles from `candidates`, then downloads them.
    /// Years with no discovered ensembles are skipped.
    pub async fn run_discovery(
        &self,
        years: &[u32],
        candidates: &[String],
        reporter: &mut dyn Reporter,
    ) -> RunTally {
        clinic_info!(
            "discovery run: {} years, {} candidates each",
            years.len(),
            candidates.len()
        );

        let mut tally = RunTally::new();
        let mut index = 0;
        for (year_idx, &year) in years.iter().enumerate() {
            let found = discover(
                self.fetcher,
                self.resolver,
                year,
                candidates,
                self.pacing.discovery_delay,
                reporter,
            )
            .await;
            if found.is_empty() {
                continue;
            }

            let last_year = year_idx + 1 == years.len();
            for (name_idx, ensemble) in found.iter().enumerate() {
                index += 1;
                let job = Job::new(year, ensemble.as_str());
                let progress = JobProgress {
                    job: &job,
                    index,
                    planned: None,
                    mode: RunMode::Discovery,
                };
                self.run_job(progress, reporter, &mut tally).await;

                let last_job = last_year && name_idx + 1 == found.len();
                if !last_job {
                    self.pause(self.pacing.download_delay, reporter).await;
                }
            }
        }
        tally
    }

    async fn run_job(
        &self,
        progress: JobProgress<'_>,
        reporter: &mut dyn Reporter,
        tally: &mut RunTally,
    ) {
        let job = progress.job;
        let _ctx = enter_job_context(job.to_string());
        reporter.job_started(progress);

        let target = self.resolver.resolve(job);
        clinic_debug!("{} -> {:?}", target.remote_address, target.local_path);

        let outcome = process_target(self.fetcher, &target).await;
        if outcome.is_failure() {
            clinic_warn!("{}: {}", target.file_name, outcome);
        } else {
            clinic_info!("{}: {}", target.file_name, outcome);
        }

        report_outcome(reporter, job, &target, &outcome);
        tally.record(&outcome);
    }

    async fn pause(&self, delay: Duration, reporter: &mut dyn Reporter) {
        reporter.rate_limited(delay);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}
