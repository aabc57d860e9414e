//! Error types for chart construction.

use thiserror::Error;

use lyra_ephem::EphemerisError;
use lyra_time::TimeError;

/// Errors from birth-data validation and chart assembly.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed or out-of-range birth data.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
    /// Timezone resolution / local-time normalization failure.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Ephemeris failure (epoch outside the supported era).
    #[error("ephemeris error: {0}")]
    Ephemeris(#[from] EphemerisError),
}
