//! Time foundations for the Lyra astrology engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - A ΔT (TT−UTC) estimate for ephemeris epochs
//! - Greenwich Mean Sidereal Time and Local Sidereal Time
//! - Local wall-clock → UTC normalization via IANA timezone identifiers

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod zone;

pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, delta_t_seconds, jd_to_calendar, julian_centuries,
    utc_to_jd,
};
pub use sidereal::{gmst_deg, local_sidereal_deg};
pub use zone::LocalMoment;
