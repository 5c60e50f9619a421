//! Validation errors raised by the stats engine

use chrono::NaiveDate;

/// Invalid input handed to the stats engine.
///
/// The engine performs no I/O, so bad caller input is the only failure mode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Invalid month '{value}': expected YYYY-MM")]
    InvalidMonth { value: String },

    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Unknown timeframe '{0}': expected weekly, monthly or yearly")]
    UnknownTimeframe(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;
