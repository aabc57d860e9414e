//! Error types for transit scanning.

use thiserror::Error;

use lyra_ephem::EphemerisError;

/// Errors from transit scan configuration and execution.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ForecastError {
    /// Malformed scan window or step.
    #[error("invalid scan config: {0}")]
    InvalidConfig(&'static str),
    /// Ephemeris failure while sampling.
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
}
