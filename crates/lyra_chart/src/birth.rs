//! Birth data and geographic location, with fail-fast validation.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Geographic observer location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }
}

/// Birth record as supplied by the calling layer.
///
/// The time is optional; a missing time defaults to local noon during
/// chart construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthData {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    /// IANA timezone identifier, e.g. "Europe/Sofia".
    pub timezone: String,
}

impl BirthData {
    /// Validate ranges and the not-in-the-future invariant.
    ///
    /// `as_of` is the calling layer's current date; taking it as a
    /// parameter keeps validation deterministic. Era bounds are enforced
    /// downstream by the ephemeris, which owns its validity window.
    pub fn validate(&self, as_of: NaiveDate) -> Result<(), ChartError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(ChartError::InvalidInput("latitude must be within ±90°"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(ChartError::InvalidInput("longitude must be within ±180°"));
        }
        if self.timezone.is_empty() {
            return Err(ChartError::InvalidInput("timezone must not be empty"));
        }
        if self.date > as_of {
            return Err(ChartError::InvalidInput("birth date is in the future"));
        }
        Ok(())
    }

    pub fn location(&self) -> GeoLocation {
        GeoLocation::new(self.latitude_deg, self.longitude_deg)
    }
}
