use chrono::{Datelike, Local};
use serde::Serialize;
use std::fmt;

use crate::error::ScoreError;

/// Closed interval of years over which production is counted.
///
/// `since` may be unbounded, meaning "since the record began".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EvaluationPeriod {
    since: Option<i32>,
    until: i32,
}

impl EvaluationPeriod {
    pub fn new(since: Option<i32>, until: i32) -> Result<Self, ScoreError> {
        if let Some(since) = since {
            if since > until {
                return Err(ScoreError::InvalidPeriod { since, until });
            }
        }
        Ok(Self { since, until })
    }

    /// Period ending in the current calendar year.
    pub fn until_current_year(since: Option<i32>) -> Result<Self, ScoreError> {
        Self::new(since, current_year())
    }

    pub fn since(&self) -> Option<i32> {
        self.since
    }

    pub fn until(&self) -> i32 {
        self.until
    }

    /// Both ends are inclusive.
    pub fn contains(&self, year: i32) -> bool {
        self.since.map_or(true, |since| since <= year) && year <= self.until
    }
}

impl fmt::Display for EvaluationPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.since {
            Some(since) => write!(f, "{}-{}", since, self.until),
            None => write!(f, "up to {}", self.until),
        }
    }
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Parse a year attribute.
///
/// Empty values mean "unknown" and yield `None` quietly. Anything else that
/// is not an integer is logged and also yields `None`.
pub fn parse_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse() {
        Ok(year) => Some(year),
        Err(_) => {
            tracing::warn!(value = raw, "ignoring malformed year");
            None
        }
    }
}

/// Year of a `DDMMYYYY` date attribute, as used by patent registries.
///
/// The first four digits (day and month) are not used; the value must still
/// be exactly eight ASCII digits to count.
pub fn parse_date_year(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if raw.len() != 8 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        tracing::warn!(value = raw, "ignoring malformed date");
        return None;
    }
    raw[4..].parse().ok()
}
