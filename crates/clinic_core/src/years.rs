use std::ops::RangeInclusive;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum YearSpanError {
    #[error("year range is empty")]
    Empty,
    #[error("invalid year {0:?}")]
    InvalidYear(String),
    #[error("year range starts at {start} but ends at {end}")]
    Reversed { start: u32, end: u32 },
    #[error("year range {start}-{end} spans more than {MAX_SPAN_YEARS} years")]
    TooWide { start: u32, end: u32 },
}

/// Widest range accepted by [`YearSpan::new`].
pub const MAX_SPAN_YEARS: u32 = 200;

/// Inclusive range of clinic years, written `2019` or `2015-2023`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearSpan {
    start: u32,
    end: u32,
}

impl YearSpan {
    pub fn single(year: u32) -> Self {
        Self {
            start: year,
            end: year,
        }
    }

    pub fn new(start: u32, end: u32) -> Result<Self, YearSpanError> {
        if start > end {
            return Err(YearSpanError::Reversed { start, end });
        }
        if end - start >= MAX_SPAN_YEARS {
            return Err(YearSpanError::TooWide { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn years(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    pub fn to_vec(&self) -> Vec<u32> {
        self.years().collect()
    }
}

impl FromStr for YearSpan {
    type Err = YearSpanError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(YearSpanError::Empty);
        }
        match raw.split_once('-') {
            Some((start, end)) => YearSpan::new(parse_year(start)?, parse_year(end)?),
            None => Ok(YearSpan::single(parse_year(raw)?)),
        }
    }
}

fn parse_year(raw: &str) -> Result<u32, YearSpanError> {
    let raw = raw.trim();
    raw.parse::<u32>()
        .map_err(|_| YearSpanError::InvalidYear(raw.to_string()))
}
