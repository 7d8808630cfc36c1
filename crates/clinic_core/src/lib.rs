//! Clinic core: pure job planning, target resolution and outcome bookkeeping.
mod ensembles;
mod job;
mod outcome;
mod target;
mod vocabulary;
mod years;

pub use ensembles::{load_ensemble_list, parse_ensemble_list, ListError};
pub use job::{plan_jobs, Job};
pub use outcome::{Outcome, RunTally};
pub use target::{program_file_name, ResolvedTarget, ResolverError, TargetResolver};
pub use vocabulary::{common_ensembles, COMMON_ENSEMBLES};
pub use years::{YearSpan, YearSpanError, MAX_SPAN_YEARS};
