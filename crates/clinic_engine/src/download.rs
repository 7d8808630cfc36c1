use std::path::Path;

use clinic_core::{Outcome, ResolvedTarget};
use clinic_logging::{clinic_debug, clinic_warn};

use crate::{target_exists, AtomicFileWriter, FailureKind, FetchError, Fetcher};

/// Existence gate followed by the download. Issues no request when the local
/// file is already present.
pub async fn process_target(fetcher: &dyn Fetcher, target: &ResolvedTarget) -> Outcome {
    if target_exists(&target.local_path) {
        clinic_debug!("{:?} already present, skipping request", target.local_path);
        return Outcome::Duplicate;
    }
    download_target(fetcher, target).await
}

/// Performs exactly one GET and classifies the result. A `200` body is written
/// to `target.local_path`; nothing is written for any other outcome.
pub async fn download_target(fetcher: &dyn Fetcher, target: &ResolvedTarget) -> Outcome {
    let response = match fetcher.get(&target.remote_address).await {
        Ok(response) => response,
        Err(err) => {
            clinic_warn!("request for {} failed: {}", target.remote_address, err);
            return outcome_from_error(&err);
        }
    };

    match response.status {
        200 => persist_body(&target.local_path, &response.body),
        404 => Outcome::NotFound,
        status => Outcome::HttpError(status),
    }
}

pub fn outcome_from_error(err: &FetchError) -> Outcome {
    match err.kind {
        FailureKind::Timeout => Outcome::Timeout,
        FailureKind::Connect => Outcome::ConnectionError,
        _ => Outcome::Unexpected(err.to_string()),
    }
}

fn persist_body(local_path: &Path, body: &[u8]) -> Outcome {
    let (Some(dir), Some(file_name)) = (
        local_path.parent(),
        local_path.file_name().and_then(|name| name.to_str()),
    ) else {
        return Outcome::Unexpected(format!("invalid local path {local_path:?}"));
    };

    let writer = AtomicFileWriter::new(dir.to_path_buf());
    match writer.write_new(file_name, body) {
        Ok(_) => Outcome::Success {
            bytes_written: body.len() as u64,
        },
        Err(err) => {
            clinic_warn!("failed to write {:?}: {}", local_path, err);
            Outcome::Unexpected(err.to_string())
        }
    }
}
