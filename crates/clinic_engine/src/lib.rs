//! Clinic engine: network IO, persistence and the sequential batch driver.
mod batch;
mod discover;
mod download;
mod fetch;
mod persist;
mod report;
mod types;

pub use batch::{BatchDriver, Pacing};
pub use discover::discover;
pub use download::{download_target, outcome_from_error, process_target};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, target_exists, AtomicFileWriter, PersistError};
pub use report::{report_outcome, JobProgress, NullReporter, Reporter, RunMode};
pub use types::{FailureKind, FetchError, FetchResponse};
