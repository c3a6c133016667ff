//! Error types shared across the almanac library.

use thiserror::Error;

/// Application error type for almanac computations.
#[derive(Debug, Error)]
pub enum AlmanacError {
    /// A geographic coordinate was outside its valid range.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// A search period was empty or reversed.
    #[error("invalid period: start {start} must precede stop {stop}")]
    InvalidPeriod { start: f64, stop: f64 },

    /// A calendar timestamp could not be represented.
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A geographic subpoint was requested for a position that is not
    /// measured from the Earth's center.
    #[error("a geographic subpoint can only be calculated for positions measured from the center of the Earth, but this position has center {0}")]
    WrongCenter(String),
}
