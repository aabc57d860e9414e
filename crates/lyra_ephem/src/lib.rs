//! Geocentric ecliptic ephemeris from closed-form series.
//!
//! This crate provides:
//! - The [`Body`] enum covering the ten bodies of a natal chart
//! - [`Ephemeris::positions_at`]: geocentric ecliptic longitude/latitude
//!   of every body at a TT Julian Date, equinox of date
//! - An explicit, injectable [`EphemerisCache`] keyed by rounded Julian Day
//!
//! No I/O, no global state: positions come from documented approximations
//! (JPL approximate Keplerian elements for the planets, a truncated lunar
//! series), deterministic for a given epoch. Precision is arc-minute grade,
//! sufficient for sign and house placement; the supported era is
//! 1800-01-01 – 2050-01-01, the validity window of the element table.

pub mod cache;
pub mod elements;
pub mod kepler;
pub mod moon;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::elements::HELIO_ELEMENTS;
use crate::kepler::heliocentric_position;

pub use crate::cache::{EphemerisCache, cache_key};

/// JD of 1800-01-01 00:00, start of the supported era.
pub const ERA_START_JD: f64 = 2_378_496.5;

/// JD of 2050-01-01 00:00, end of the supported era.
pub const ERA_END_JD: f64 = 2_469_807.5;

/// Supported epoch range (validity window of the element table).
pub const SUPPORTED_ERA_JD: RangeInclusive<f64> = ERA_START_JD..=ERA_END_JD;

/// General precession in ecliptic longitude, degrees per Julian century.
///
/// Converts J2000-equinox longitudes to equinox of date, the frame the
/// tropical zodiac is defined in.
const PRECESSION_DEG_PER_CENTURY: f64 = 1.396_971;

/// The ten bodies of a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

/// All ten bodies in chart order.
pub const ALL_BODIES: [Body; 10] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
    Body::Uranus,
    Body::Neptune,
    Body::Pluto,
];

impl Body {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// 0-based index into [`ALL_BODIES`].
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
        }
    }

    /// Typical peak geocentric longitude speed in degrees per day.
    ///
    /// Used by transit scanning to decide whether a body is too fast for a
    /// given sampling step. Inner bodies reach these speeds near conjunction
    /// with the Sun; outer bodies never move quickly.
    pub const fn peak_daily_motion_deg(self) -> f64 {
        match self {
            Self::Sun => 1.02,
            Self::Moon => 14.8,
            Self::Mercury => 2.2,
            Self::Venus => 1.26,
            Self::Mars => 0.8,
            Self::Jupiter => 0.25,
            Self::Saturn => 0.14,
            Self::Uranus => 0.07,
            Self::Neptune => 0.04,
            Self::Pluto => 0.04,
        }
    }
}

/// Geocentric ecliptic position, equinox of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    /// Ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
}

/// Positions of all ten bodies at one epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPositions {
    /// Indexed by [`Body::index`].
    pub positions: [EclipticPosition; 10],
}

impl BodyPositions {
    pub fn position(&self, body: Body) -> EclipticPosition {
        self.positions[body.index() as usize]
    }

    pub fn longitude(&self, body: Body) -> f64 {
        self.position(body).longitude_deg
    }

    /// All ten longitudes in chart order.
    pub fn longitudes(&self) -> [f64; 10] {
        let mut lons = [0.0; 10];
        for (i, p) in self.positions.iter().enumerate() {
            lons[i] = p.longitude_deg;
        }
        lons
    }
}

/// Ephemeris errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Epoch outside the validity window of the element table.
    #[error("epoch JD {jd_tt} outside the supported 1800–2050 era")]
    UnsupportedEra { jd_tt: f64 },
    /// Epoch is NaN or infinite.
    #[error("epoch must be finite")]
    NonFiniteEpoch,
}

/// Closed-form ephemeris provider.
///
/// Stateless and `Copy`; share freely across threads. Each call computes
/// from scratch unless a caller-owned [`EphemerisCache`] is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ephemeris;

impl Ephemeris {
    pub fn new() -> Self {
        Self
    }

    /// Geocentric ecliptic positions of all ten bodies at a TT Julian Date.
    pub fn positions_at(&self, jd_tt: f64) -> Result<BodyPositions, EphemerisError> {
        if !jd_tt.is_finite() {
            return Err(EphemerisError::NonFiniteEpoch);
        }
        if !SUPPORTED_ERA_JD.contains(&jd_tt) {
            return Err(EphemerisError::UnsupportedEra { jd_tt });
        }

        let t = lyra_time::julian_centuries(jd_tt);
        let precession = PRECESSION_DEG_PER_CENTURY * t;

        // Heliocentric J2000-ecliptic position of the Earth (Earth–Moon
        // barycenter; the ~4700 km barycenter offset is far below the
        // precision target).
        let earth = heliocentric_position(&HELIO_ELEMENTS.earth_moon_bary, t);

        let mut positions = [EclipticPosition {
            longitude_deg: 0.0,
            latitude_deg: 0.0,
        }; 10];

        for body in ALL_BODIES {
            let pos = match body {
                // The Sun is the anti-direction of the Earth's position.
                Body::Sun => spherical_of([-earth[0], -earth[1], -earth[2]], precession),
                // The lunar series is geocentric and equinox-of-date already.
                Body::Moon => moon::position(t),
                _ => {
                    let helio = heliocentric_position(HELIO_ELEMENTS.planet(body), t);
                    spherical_of(
                        [
                            helio[0] - earth[0],
                            helio[1] - earth[1],
                            helio[2] - earth[2],
                        ],
                        precession,
                    )
                }
            };
            positions[body.index() as usize] = pos;
        }

        Ok(BodyPositions { positions })
    }

    /// Like [`positions_at`](Self::positions_at), memoized in a
    /// caller-owned cache keyed by the Julian Day rounded to 1e−6 day.
    pub fn positions_at_cached(
        &self,
        jd_tt: f64,
        cache: &mut EphemerisCache,
    ) -> Result<BodyPositions, EphemerisError> {
        let key = cache_key(jd_tt);
        if let Some(hit) = cache.get(key) {
            return Ok(hit);
        }
        let computed = self.positions_at(jd_tt)?;
        cache.insert(key, computed);
        Ok(computed)
    }
}

/// Cartesian J2000-ecliptic vector → position of date.
fn spherical_of(v: [f64; 3], precession_deg: f64) -> EclipticPosition {
    let lon_j2000 = v[1].atan2(v[0]).to_degrees();
    let lat = v[2].atan2((v[0] * v[0] + v[1] * v[1]).sqrt()).to_degrees();
    EclipticPosition {
        longitude_deg: (lon_j2000 + precession_deg).rem_euclid(360.0),
        latitude_deg: lat,
    }
}
