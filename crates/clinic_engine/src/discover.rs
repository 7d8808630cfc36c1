use std::time::Duration;

use clinic_core::{Job, TargetResolver};
use clinic_logging::{clinic_debug, clinic_info, enter_job_context};

use crate::{Fetcher, Reporter};

const PROGRESS_EVERY: usize = 10;

/// Probes every candidate for `year` with a HEAD request and returns, in
/// candidate order, the names whose program answered `200`.
///
/// Misses and transport errors are swallowed: discovery is exploratory and
/// never counts as a batch failure.
pub async fn discover(
    fetcher: &dyn Fetcher,
    resolver: &TargetResolver,
    year: u32,
    candidates: &[String],
    delay: Duration,
    reporter: &mut dyn Reporter,
) -> Vec<String> {
    let _ctx = enter_job_context(format!("discover/{year}"));
    reporter.discovery_started(year, candidates.len());

    let mut found: Vec<String> = Vec::new();
    for (idx, candidate) in candidates.iter().enumerate() {
        let target = resolver.resolve(&Job::new(year, candidate.as_str()));
        match fetcher.head(&target.remote_address).await {
            Ok(200) => {
                if !found.contains(candidate) {
                    clinic_info!("found {}", candidate);
                    reporter.discovery_hit(year, candidate);
                    found.push(candidate.clone());
                }
            }
            Ok(status) => clinic_debug!("{} -> {}", candidate, status),
            Err(err) => clinic_debug!("{} -> {}", candidate, err),
        }

        let checked = idx + 1;
        if checked % PROGRESS_EVERY == 0 {
            reporter.discovery_progress(checked, candidates.len(), found.len());
        }
        if checked < candidates.len() {
            tokio::time::sleep(delay).await;
        }
    }

    clinic_info!(
        "discovery finished: {} of {} candidates found",
        found.len(),
        candidates.len()
    );
    reporter.discovery_finished(year, &found);
    found
}
