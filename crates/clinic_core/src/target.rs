use std::path::{Path, PathBuf};

use thiserror::Error;
use url::Url;

use crate::Job;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolverError {
    #[error("invalid base url {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Concrete remote address and local destination for one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    pub remote_address: String,
    pub local_path: PathBuf,
    pub file_name: String,
}

impl ResolvedTarget {
    /// Directory that holds all programs of the job's year.
    pub fn year_dir(&self) -> &Path {
        self.local_path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// `{year}_{ensemble}_Concert.pdf`, using the raw ensemble name.
pub fn program_file_name(year: u32, ensemble: &str) -> String {
    format!("{year}_{ensemble}_Concert.pdf")
}

/// Maps jobs onto `<base>/{year}/{year}_{ensemble}_Concert.pdf` and
/// `<output_root>/{year}/{year}_{ensemble}_Concert.pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetResolver {
    base_url: Url,
    output_root: PathBuf,
}

impl TargetResolver {
    pub fn new(base_url: &str, output_root: impl Into<PathBuf>) -> Result<Self, ResolverError> {
        let invalid = |reason: String| ResolverError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason,
        };
        let mut parsed = Url::parse(base_url).map_err(|err| invalid(err.to_string()))?;
        if parsed.cannot_be_a_base() {
            return Err(invalid("url cannot carry path segments".to_string()));
        }
        parsed.set_query(None);
        parsed.set_fragment(None);
        Ok(Self {
            base_url: parsed,
            output_root: output_root.into(),
        })
    }

    /// Pure and total: any ensemble string yields a target.
    pub fn resolve(&self, job: &Job) -> ResolvedTarget {
        let year = job.year.to_string();
        let file_name = program_file_name(job.year, &job.ensemble);

        let mut remote = self.base_url.clone();
        // `new` rejected cannot-be-a-base urls, so segments are always available.
        if let Ok(mut segments) = remote.path_segments_mut() {
            segments.pop_if_empty().push(&year).push(&file_name);
        }

        ResolvedTarget {
            remote_address: remote.to_string(),
            local_path: self.output_root.join(&year).join(&file_name),
            file_name,
        }
    }
}
