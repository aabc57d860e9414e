//! Error types for time conversion.

use thiserror::Error;

/// Errors from timezone resolution and local-time normalization.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The timezone identifier is not a known IANA zone.
    #[error("unknown timezone identifier: {0}")]
    UnknownZone(String),
    /// The local wall-clock time does not exist in the zone (DST gap).
    #[error("local time {0} does not exist in timezone {1} (DST gap)")]
    NonexistentLocalTime(String, String),
}
