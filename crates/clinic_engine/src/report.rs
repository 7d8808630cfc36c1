use std::time::Duration;

use clinic_core::{Job, Outcome, ResolvedTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Ensemble names were supplied up front.
    Manual,
    /// Ensemble names come from probing the candidate vocabulary.
    Discovery,
}

/// Position of a job within the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobProgress<'a> {
    pub job: &'a Job,
    /// 1-based index across the whole run.
    pub index: usize,
    /// Known only in manual mode.
    pub planned: Option<usize>,
    pub mode: RunMode,
}

/// Observer of the batch. Implementations must not influence outcomes; every
/// method has a no-op default so tests can record only what they care about.
pub trait Reporter {
    fn job_started(&mut self, _progress: JobProgress<'_>) {}

    fn success(&mut self, _job: &Job, _target: &ResolvedTarget, _bytes_written: u64) {}

    fn duplicate(&mut self, _job: &Job, _target: &ResolvedTarget) {}

    /// Any outcome other than success or duplicate.
    fn failure(&mut self, _job: &Job, _target: &ResolvedTarget, _outcome: &Outcome) {}

    /// Called right before the driver pauses between requests.
    fn rate_limited(&mut self, _delay: Duration) {}

    fn discovery_started(&mut self, _year: u32, _candidates: usize) {}

    /// Called after every tenth probe.
    fn discovery_progress(&mut self, _checked: usize, _total: usize, _found: usize) {}

    fn discovery_hit(&mut self, _year: u32, _ensemble: &str) {}

    fn discovery_finished(&mut self, _year: u32, _found: &[String]) {}
}

/// Reporter that ignores everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Routes an outcome to the matching reporter method.
pub fn report_outcome(
    reporter: &mut dyn Reporter,
    job: &Job,
    target: &ResolvedTarget,
    outcome: &Outcome,
) {
    match outcome {
        Outcome::Success { bytes_written } => reporter.success(job, target, *bytes_written),
        Outcome::Duplicate => reporter.duplicate(job, target),
        other => reporter.failure(job, target, other),
    }
}
