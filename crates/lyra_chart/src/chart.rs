//! Natal chart assembly.
//!
//! [`ChartBuilder`] composes validation, timezone normalization, the
//! ephemeris, and the house system into a [`NatalChart`]. The builder is
//! pure: identical birth data always yields an identical chart, and
//! nothing is persisted here.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use lyra_ephem::{ALL_BODIES, Body, Ephemeris};
use lyra_time::{LocalMoment, delta_t_seconds, utc_to_jd};

use crate::birth::BirthData;
use crate::error::ChartError;
use crate::houses::{HouseCusps, HouseSystem, assign_house, cusps};
use crate::sign::{SignPosition, sign_from_longitude};

/// Chart construction configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub house_system: HouseSystem,
    /// The calling layer's current date, for the not-in-the-future check.
    pub as_of: NaiveDate,
}

impl ChartConfig {
    pub fn new(house_system: HouseSystem, as_of: NaiveDate) -> Self {
        Self {
            house_system,
            as_of,
        }
    }

    /// Placidus houses, the conventional default.
    pub fn placidus(as_of: NaiveDate) -> Self {
        Self::new(HouseSystem::Placidus, as_of)
    }
}

/// One body's placement in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub body: Body,
    /// Ecliptic longitude of date, degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude, degrees.
    pub latitude_deg: f64,
    pub sign: SignPosition,
    /// House 1–12.
    pub house: u8,
}

/// A complete natal chart: ten placements plus the Ascendant and houses.
///
/// A pure function of (date, time, location); computed once and immutable.
/// Serializes to plain JSON for external persistence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    /// Birth instant as a Julian Date on the UTC timescale.
    pub jd_utc: f64,
    pub bodies: [BodyPlacement; 10],
    pub ascendant: SignPosition,
    pub houses: HouseCusps,
}

impl NatalChart {
    pub fn placement(&self, body: Body) -> &BodyPlacement {
        &self.bodies[body.index() as usize]
    }

    /// All ten body longitudes in chart order.
    pub fn longitudes(&self) -> [f64; 10] {
        let mut lons = [0.0; 10];
        for (i, p) in self.bodies.iter().enumerate() {
            lons[i] = p.longitude_deg;
        }
        lons
    }

    /// True when a polar-latitude house fallback was applied.
    pub fn approximate(&self) -> bool {
        self.houses.approximate
    }
}

/// Builds natal charts from validated birth data.
#[derive(Debug, Clone, Copy)]
pub struct ChartBuilder {
    config: ChartConfig,
    ephemeris: Ephemeris,
}

impl ChartBuilder {
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            ephemeris: Ephemeris::new(),
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Build a natal chart. Fails fast on the first invalid field; era
    /// violations propagate from the ephemeris.
    pub fn build(&self, data: &BirthData) -> Result<NatalChart, ChartError> {
        data.validate(self.config.as_of)?;

        let moment = LocalMoment::new(data.date, data.time, data.timezone.clone());
        let utc = moment.to_utc()?;
        let jd_utc = utc_to_jd(&utc);
        let jd_tt = jd_utc + delta_t_seconds(utc.year()) / lyra_time::SECONDS_PER_DAY;

        debug!(jd_utc, zone = %data.timezone, "building natal chart");

        let positions = self.ephemeris.positions_at(jd_tt)?;
        let location = data.location();
        let house_cusps = cusps(jd_utc, &location, self.config.house_system);

        let mut bodies = [BodyPlacement {
            body: Body::Sun,
            longitude_deg: 0.0,
            latitude_deg: 0.0,
            sign: sign_from_longitude(0.0),
            house: 1,
        }; 10];

        for body in ALL_BODIES {
            let pos = positions.position(body);
            bodies[body.index() as usize] = BodyPlacement {
                body,
                longitude_deg: pos.longitude_deg,
                latitude_deg: pos.latitude_deg,
                sign: sign_from_longitude(pos.longitude_deg),
                house: assign_house(pos.longitude_deg, &house_cusps),
            };
        }

        let chart = NatalChart {
            jd_utc,
            bodies,
            ascendant: sign_from_longitude(house_cusps.ascendant_deg),
            houses: house_cusps,
        };

        debug!(
            ascendant = chart.houses.ascendant_deg,
            approximate = chart.approximate(),
            "natal chart ready"
        );
        Ok(chart)
    }
}
