//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! Works in degrees throughout, matching the ecliptic-longitude convention
//! of the rest of the engine. Callers pass Julian Dates on the UTC
//! timescale; at arc-minute precision the |UT1−UTC| < 0.9 s offset is
//! negligible (< 0.004° of rotation).
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{J2000_JD, julian_centuries};

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let t = julian_centuries(jd_ut);
    let theta = 280.460_618_37
        + 360.985_647_366_29 * (jd_ut - J2000_JD)
        + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local Sidereal Time from GMST and observer east longitude, in degrees.
///
/// `LST = GMST + longitude_east`. Range [0, 360).
pub fn local_sidereal_deg(gmst: f64, longitude_east_deg: f64) -> f64 {
    (gmst + longitude_east_deg).rem_euclid(360.0)
}
