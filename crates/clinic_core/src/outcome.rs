use std::fmt;

/// Classification of a single job's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success { bytes_written: u64 },
    Duplicate,
    NotFound,
    HttpError(u16),
    Timeout,
    ConnectionError,
    /// Any other failure, carrying the error text.
    Unexpected(String),
}

impl Outcome {
    pub fn is_failure(&self) -> bool {
        !matches!(self, Outcome::Success { .. } | Outcome::Duplicate)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success { bytes_written } => write!(f, "downloaded {bytes_written} bytes"),
            Outcome::Duplicate => write!(f, "already exists"),
            Outcome::NotFound => write!(f, "404"),
            Outcome::HttpError(code) => write!(f, "HTTP {code}"),
            Outcome::Timeout => write!(f, "TIMEOUT"),
            Outcome::ConnectionError => write!(f, "CONNECTION ERROR"),
            Outcome::Unexpected(message) => write!(f, "ERROR: {message}"),
        }
    }
}

/// Run-scoped counters, one outcome recorded at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunTally {
    pub success: usize,
    pub duplicate: usize,
    pub failed: usize,
    pub total: usize,
}

impl RunTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Success { .. } => self.success += 1,
            Outcome::Duplicate => self.duplicate += 1,
            _ => self.failed += 1,
        }
    }
}
