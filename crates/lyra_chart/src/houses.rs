//! Ascendant, Midheaven, and house cusp computation.
//!
//! Ascendant/MC follow Meeus, "Astronomical Algorithms" (2nd ed), Ch. 13.
//! Placidus cusps use iterative semi-arc trisection; Porphyry trisects the
//! ecliptic quadrant arcs; Equal divides from the Ascendant. Time-based
//! division is undefined above the polar circles, where computation falls
//! back to Equal and flags the result approximate.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::birth::GeoLocation;
use crate::sign::normalize_360;
use lyra_time::{gmst_deg, julian_centuries, local_sidereal_deg};

/// Latitude limit (degrees) for time-based house systems.
const MAX_TIME_BASED_LATITUDE_DEG: f64 = 66.0;

/// Iteration cap for the Placidus semi-arc refinement.
const PLACIDUS_MAX_ITER: usize = 50;

/// House division method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum HouseSystem {
    /// Semi-arc trisection (the common default in western practice).
    #[default]
    Placidus,
    /// 30° divisions from the Ascendant.
    Equal,
    /// Ecliptic trisection of the quadrants between the angles.
    Porphyry,
}

impl HouseSystem {
    /// Whether the system divides diurnal arcs and so degenerates at
    /// polar latitudes.
    pub const fn is_time_based(self) -> bool {
        matches!(self, Self::Placidus)
    }
}

/// Computed house cusps for one instant and location.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps {
    /// The system actually applied (after any polar fallback).
    pub system: HouseSystem,
    /// Ecliptic longitude of the Ascendant (cusp of house 1), degrees.
    pub ascendant_deg: f64,
    /// Ecliptic longitude of the Midheaven (cusp of house 10), degrees.
    pub mc_deg: f64,
    /// Cusp longitudes of houses 1–12, degrees.
    pub cusps: [f64; 12],
    /// True when a polar-latitude fallback replaced the requested system.
    pub approximate: bool,
}

/// Mean obliquity of the ecliptic in radians at T centuries from J2000.
///
/// IAU 1980 expression, truncated to the quadratic term.
fn obliquity_rad(t: f64) -> f64 {
    (23.439_291_11 - 0.013_004_17 * t - 1.64e-7 * t * t).to_radians()
}

/// Compute house cusps for an instant (JD, UTC timescale) and location.
pub fn cusps(jd_utc: f64, location: &GeoLocation, system: HouseSystem) -> HouseCusps {
    let lst_deg = local_sidereal_deg(gmst_deg(jd_utc), location.longitude_deg);
    let lst = lst_deg.to_radians();
    let eps = obliquity_rad(julian_centuries(jd_utc));
    let phi = location.latitude_rad();

    // Meeus Ch. 13: Asc = atan2(−cos LST, sin LST·cos ε + tan φ·sin ε),
    // MC = atan2(sin LST, cos LST·cos ε).
    let asc_deg = f64::atan2(-lst.cos(), lst.sin() * eps.cos() + phi.tan() * eps.sin())
        .to_degrees()
        .rem_euclid(360.0);
    let mc_deg = f64::atan2(lst.sin(), lst.cos() * eps.cos())
        .to_degrees()
        .rem_euclid(360.0);

    let polar = location.latitude_deg.abs() > MAX_TIME_BASED_LATITUDE_DEG;
    let (applied, cusp_lons, approximate) = match system {
        HouseSystem::Placidus if polar => (HouseSystem::Equal, equal_cusps(asc_deg), true),
        HouseSystem::Placidus => (
            HouseSystem::Placidus,
            placidus_cusps(asc_deg, mc_deg, lst, phi, eps),
            false,
        ),
        HouseSystem::Equal => (HouseSystem::Equal, equal_cusps(asc_deg), false),
        HouseSystem::Porphyry => (HouseSystem::Porphyry, porphyry_cusps(asc_deg, mc_deg), false),
    };

    HouseCusps {
        system: applied,
        ascendant_deg: asc_deg,
        mc_deg,
        cusps: cusp_lons,
        approximate,
    }
}

/// Equal division: cusp[i] = Asc + i·30°.
fn equal_cusps(asc_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(asc_deg + (i as f64) * 30.0);
    }
    cusps
}

/// Porphyry: trisect the four ecliptic arcs between Asc, IC, Desc, MC.
fn porphyry_cusps(asc_deg: f64, mc_deg: f64) -> [f64; 12] {
    let desc_deg = normalize_360(asc_deg + 180.0);
    let ic_deg = normalize_360(mc_deg + 180.0);

    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[3] = ic_deg;
    cusps[6] = desc_deg;
    cusps[9] = mc_deg;

    let q1 = arc_forward(asc_deg, ic_deg);
    cusps[1] = normalize_360(asc_deg + q1 / 3.0);
    cusps[2] = normalize_360(asc_deg + 2.0 * q1 / 3.0);

    let q2 = arc_forward(ic_deg, desc_deg);
    cusps[4] = normalize_360(ic_deg + q2 / 3.0);
    cusps[5] = normalize_360(ic_deg + 2.0 * q2 / 3.0);

    let q3 = arc_forward(desc_deg, mc_deg);
    cusps[7] = normalize_360(desc_deg + q3 / 3.0);
    cusps[8] = normalize_360(desc_deg + 2.0 * q3 / 3.0);

    let q4 = arc_forward(mc_deg, asc_deg);
    cusps[10] = normalize_360(mc_deg + q4 / 3.0);
    cusps[11] = normalize_360(mc_deg + 2.0 * q4 / 3.0);

    cusps
}

/// Placidus: intermediate cusps by trisecting the diurnal/nocturnal
/// semi-arc in time; opposite cusps are antipodal.
fn placidus_cusps(asc_deg: f64, mc_deg: f64, ramc: f64, lat: f64, eps: f64) -> [f64; 12] {
    let desc_deg = normalize_360(asc_deg + 180.0);
    let ic_deg = normalize_360(mc_deg + 180.0);

    let mut cusps = [0.0; 12];
    cusps[0] = asc_deg;
    cusps[3] = ic_deg;
    cusps[6] = desc_deg;
    cusps[9] = mc_deg;

    // Houses 11, 12: the diurnal semi-arc east of the MC, RA = RAMC + f·SAd.
    cusps[10] = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, true);
    cusps[11] = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, true);

    // Houses 2, 3: the nocturnal semi-arc east of the IC, RA = RAMC + π − f·SAn.
    cusps[1] = placidus_cusp(ramc, lat, eps, 2.0 / 3.0, false);
    cusps[2] = placidus_cusp(ramc, lat, eps, 1.0 / 3.0, false);

    cusps[4] = normalize_360(cusps[10] + 180.0);
    cusps[5] = normalize_360(cusps[11] + 180.0);
    cusps[7] = normalize_360(cusps[1] + 180.0);
    cusps[8] = normalize_360(cusps[2] + 180.0);

    cusps
}

/// One intermediate Placidus cusp via fixed-point semi-arc trisection.
///
/// Diurnal cusps sit at `RA = RAMC + f·SAd`; nocturnal cusps at
/// `RA = RAMC + π − f·SAn`, where the semi-arc depends on the cusp's own
/// declination, hence the iteration.
fn placidus_cusp(ramc: f64, lat: f64, eps: f64, fraction: f64, above_horizon: bool) -> f64 {
    let project = |semi_arc: f64| {
        if above_horizon {
            ramc + fraction * semi_arc
        } else {
            ramc + PI - fraction * semi_arc
        }
    };
    let mut ra = project(PI / 2.0);

    for _ in 0..PLACIDUS_MAX_ITER {
        let dec = (eps.sin() * ra.sin()).asin();
        let new_ra = project(semi_arc_rad(dec, lat, above_horizon));
        if (new_ra - ra).abs() < 1e-10 {
            ra = new_ra;
            break;
        }
        ra = new_ra;
    }

    normalize_360(equator_to_ecliptic_longitude_rad(ra, eps).to_degrees())
}

/// Diurnal or nocturnal semi-arc in radians.
fn semi_arc_rad(dec: f64, lat: f64, diurnal: bool) -> f64 {
    let cos_ha = -(dec.tan() * lat.tan());
    let ha = cos_ha.clamp(-1.0, 1.0).acos();
    if diurnal { ha } else { PI - ha }
}

/// Ecliptic longitude of the point at right ascension `ra` whose
/// declination lies on the ecliptic: dec = asin(sin ε · sin RA).
fn equator_to_ecliptic_longitude_rad(ra: f64, eps: f64) -> f64 {
    let dec = (eps.sin() * ra.sin()).asin();
    let sin_lon = ra.sin() * eps.cos() + dec.tan() * eps.sin();
    f64::atan2(sin_lon, ra.cos()).rem_euclid(2.0 * PI)
}

/// Forward arc from a to b in degrees, [0, 360).
fn arc_forward(a: f64, b: f64) -> f64 {
    (b - a).rem_euclid(360.0)
}

/// House (1–12) containing an ecliptic longitude.
///
/// Each house is the half-open arc [cusp[i], cusp[i+1]) going forward
/// around the circle, so every longitude lands in exactly one house.
pub fn assign_house(longitude_deg: f64, cusps: &HouseCusps) -> u8 {
    let lon = normalize_360(longitude_deg);
    for i in 0..12 {
        let start = cusps.cusps[i];
        let end = cusps.cusps[(i + 1) % 12];
        let span = arc_forward(start, end);
        if arc_forward(start, lon) < span {
            return (i as u8) + 1;
        }
    }
    // Unreachable for finite cusps: the twelve half-open arcs tile the
    // circle. Surface loudly rather than misplace silently.
    debug_assert!(
        longitude_deg.is_nan(),
        "house assignment fell through for longitude {longitude_deg}"
    );
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sofia() -> GeoLocation {
        GeoLocation::new(42.6977, 23.3219)
    }

    // 1990-03-15 10:00 UTC.
    const JD_1990: f64 = 2_447_965.916_666_667;

    #[test]
    fn equal_cusps_30_apart() {
        let c = equal_cusps(100.0);
        for (i, cusp) in c.iter().enumerate() {
            let expected = normalize_360(100.0 + (i as f64) * 30.0);
            assert!((cusp - expected).abs() < 1e-10, "cusp[{i}] = {cusp}");
        }
    }

    #[test]
    fn equal_cusps_wrap() {
        let c = equal_cusps(350.0);
        assert!((c[1] - 20.0).abs() < 1e-10);
        assert!((c[11] - 320.0).abs() < 1e-10);
    }

    #[test]
    fn porphyry_angles_fixed() {
        let c = porphyry_cusps(90.0, 0.0);
        assert!((c[0] - 90.0).abs() < 1e-10);
        assert!(c[9].abs() < 1e-10 || (c[9] - 360.0).abs() < 1e-10);
        assert!((c[6] - 270.0).abs() < 1e-10);
        assert!((c[3] - 180.0).abs() < 1e-10);
        // Asc → IC spans 90°, trisected into 30° steps.
        assert!((c[1] - 120.0).abs() < 1e-10);
        assert!((c[2] - 150.0).abs() < 1e-10);
    }

    #[test]
    fn placidus_angular_cusps_match_asc_mc() {
        let hc = cusps(JD_1990, &sofia(), HouseSystem::Placidus);
        assert_eq!(hc.system, HouseSystem::Placidus);
        assert!(!hc.approximate);
        assert!((hc.cusps[0] - hc.ascendant_deg).abs() < 1e-9);
        assert!((hc.cusps[9] - hc.mc_deg).abs() < 1e-9);
        let desc = normalize_360(hc.ascendant_deg + 180.0);
        assert!((hc.cusps[6] - desc).abs() < 1e-9);
    }

    #[test]
    fn placidus_cusps_ordered_forward() {
        // Consecutive cusps advance monotonically around the circle.
        let hc = cusps(JD_1990, &sofia(), HouseSystem::Placidus);
        let mut total = 0.0;
        for i in 0..12 {
            let span = arc_forward(hc.cusps[i], hc.cusps[(i + 1) % 12]);
            assert!(span > 0.0, "degenerate house {i}");
            total += span;
        }
        assert!((total - 360.0).abs() < 1e-6, "spans sum to {total}");
    }

    #[test]
    fn polar_latitude_falls_back_to_equal() {
        let tromso = GeoLocation::new(69.65, 18.96);
        let hc = cusps(JD_1990, &tromso, HouseSystem::Placidus);
        assert_eq!(hc.system, HouseSystem::Equal);
        assert!(hc.approximate);
        // Equal fallback keeps the Ascendant as cusp 1.
        assert!((hc.cusps[0] - hc.ascendant_deg).abs() < 1e-9);
    }

    #[test]
    fn equal_system_never_approximate() {
        let tromso = GeoLocation::new(69.65, 18.96);
        let hc = cusps(JD_1990, &tromso, HouseSystem::Equal);
        assert_eq!(hc.system, HouseSystem::Equal);
        assert!(!hc.approximate);
    }

    #[test]
    fn asc_mc_roughly_quadrant_apart_at_mid_latitude() {
        let hc = cusps(JD_1990, &sofia(), HouseSystem::Placidus);
        let mut diff = (hc.ascendant_deg - hc.mc_deg).abs();
        if diff > 180.0 {
            diff = 360.0 - diff;
        }
        assert!(
            (50.0..130.0).contains(&diff),
            "|Asc − MC| = {diff}°, expected ~90°"
        );
    }

    #[test]
    fn assign_house_simple_wheel() {
        let hc = HouseCusps {
            system: HouseSystem::Equal,
            ascendant_deg: 0.0,
            mc_deg: 270.0,
            cusps: equal_cusps(0.0),
            approximate: false,
        };
        assert_eq!(assign_house(0.0, &hc), 1);
        assert_eq!(assign_house(29.999, &hc), 1);
        assert_eq!(assign_house(30.0, &hc), 2);
        assert_eq!(assign_house(359.999, &hc), 12);
    }

    #[test]
    fn assign_house_wrapped_wheel() {
        let hc = HouseCusps {
            system: HouseSystem::Equal,
            ascendant_deg: 350.0,
            mc_deg: 260.0,
            cusps: equal_cusps(350.0),
            approximate: false,
        };
        assert_eq!(assign_house(355.0, &hc), 1);
        assert_eq!(assign_house(10.0, &hc), 1);
        assert_eq!(assign_house(20.0, &hc), 2);
        assert_eq!(assign_house(349.0, &hc), 12);
    }

    #[test]
    fn assign_house_every_longitude_lands_once() {
        let hc = cusps(JD_1990, &sofia(), HouseSystem::Placidus);
        let mut counts = [0u32; 12];
        let mut lon = 0.0;
        while lon < 360.0 {
            let h = assign_house(lon, &hc);
            assert!((1..=12).contains(&h), "house {h} for lon {lon}");
            counts[(h - 1) as usize] += 1;
            lon += 0.25;
        }
        for (i, c) in counts.iter().enumerate() {
            assert!(*c > 0, "house {} never assigned", i + 1);
        }
    }

    #[test]
    fn obliquity_near_23_44_in_modern_era() {
        let eps = obliquity_rad(0.0).to_degrees();
        assert!((eps - 23.4393).abs() < 0.001, "ε = {eps}");
    }
}
