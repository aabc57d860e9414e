//! Types for transit scanning.

use serde::{Deserialize, Serialize};

use lyra_aspect::{AspectKind, Nature};
use lyra_ephem::{Body, ERA_END_JD, ERA_START_JD};

/// Upper bound on samples per scan; callers must narrow the window or
/// coarsen the step beyond this.
pub const MAX_SAMPLES: usize = 1_000;

/// Transit scan window and sampling step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitConfig {
    /// Scan start, Julian Date on the UTC timescale.
    pub start_jd_utc: f64,
    /// Scan end (inclusive), Julian Date on the UTC timescale.
    pub end_jd_utc: f64,
    /// Sampling step in days.
    pub step_days: f64,
}

impl TransitConfig {
    /// Daily sampling, suited to roughly monthly forecast windows.
    pub fn daily(start_jd_utc: f64, end_jd_utc: f64) -> Self {
        Self {
            start_jd_utc,
            end_jd_utc,
            step_days: 1.0,
        }
    }

    /// Weekly sampling, suited to roughly yearly forecast windows.
    pub fn weekly(start_jd_utc: f64, end_jd_utc: f64) -> Self {
        Self {
            start_jd_utc,
            end_jd_utc,
            step_days: 7.0,
        }
    }

    /// Number of samples the scan will take, end inclusive.
    pub fn sample_count(&self) -> usize {
        if self.end_jd_utc <= self.start_jd_utc || self.step_days <= 0.0 {
            return 0;
        }
        ((self.end_jd_utc - self.start_jd_utc) / self.step_days).floor() as usize + 1
    }

    /// Fail-fast validation of the window and step.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.start_jd_utc.is_finite() || !self.end_jd_utc.is_finite() {
            return Err("scan window must be finite");
        }
        if !(self.step_days.is_finite() && self.step_days > 0.0) {
            return Err("step_days must be positive");
        }
        if self.end_jd_utc <= self.start_jd_utc {
            return Err("scan end must be after scan start");
        }
        if self.start_jd_utc < ERA_START_JD || self.end_jd_utc > ERA_END_JD {
            return Err("scan window outside supported ephemeris era");
        }
        if self.sample_count() > MAX_SAMPLES {
            return Err("scan window too long for the chosen step");
        }
        Ok(())
    }
}

/// One transiting aspect over the scanned window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransitWindow {
    /// The moving body.
    pub transiting: Body,
    /// The fixed natal body aspected.
    pub natal: Body,
    pub kind: AspectKind,
    pub nature: Nature,
    /// Smallest orb reached across the window, degrees.
    pub min_orb_deg: f64,
    /// Sample date of the smallest orb ("exactness"), JD UTC.
    pub exact_jd_utc: f64,
    /// House of the natal body, for theme classification.
    pub natal_house: u8,
}
