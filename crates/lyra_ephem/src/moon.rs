//! Geocentric lunar position from a truncated periodic series.
//!
//! Truncation of the lunar theory tabulated in Meeus, "Astronomical
//! Algorithms" (2nd ed), Ch. 47: every longitude term with amplitude
//! ≥ 0.010° and every latitude term ≥ 0.017°. Worst-case truncation error
//! is a few arc-minutes, inside the engine's precision target. The series
//! is geocentric and equinox-of-date by construction, so no precession
//! step applies.

use crate::EclipticPosition;

/// Periodic term: multiples of (D, M, M′, F) and amplitude in 1e−6 degrees.
struct Term(i8, i8, i8, i8, f64);

/// Longitude series, amplitude ≥ 0.010°.
const LONGITUDE_TERMS: [Term; 18] = [
    Term(0, 0, 1, 0, 6_288_774.0),
    Term(2, 0, -1, 0, 1_274_027.0),
    Term(2, 0, 0, 0, 658_314.0),
    Term(0, 0, 2, 0, 213_618.0),
    Term(0, 1, 0, 0, -185_116.0),
    Term(0, 0, 0, 2, -114_332.0),
    Term(2, 0, -2, 0, 58_793.0),
    Term(2, -1, -1, 0, 57_066.0),
    Term(2, 0, 1, 0, 53_322.0),
    Term(2, -1, 0, 0, 45_758.0),
    Term(0, 1, -1, 0, -40_923.0),
    Term(1, 0, 0, 0, -34_720.0),
    Term(0, 1, 1, 0, -30_383.0),
    Term(2, 0, 0, -2, 15_327.0),
    Term(0, 0, 1, 2, -12_528.0),
    Term(0, 0, 1, -2, 10_980.0),
    Term(4, 0, -1, 0, 10_675.0),
    Term(0, 0, 3, 0, 10_034.0),
];

/// Latitude series, amplitude ≥ 0.017°.
const LATITUDE_TERMS: [Term; 7] = [
    Term(0, 0, 0, 1, 5_128_122.0),
    Term(0, 0, 1, 1, 280_602.0),
    Term(0, 0, 1, -1, 277_693.0),
    Term(2, 0, 0, -1, 173_237.0),
    Term(2, 0, -1, 1, 55_413.0),
    Term(2, 0, -1, -1, 46_271.0),
    Term(2, 0, 0, 1, 32_573.0),
];

/// Geocentric ecliptic position of the Moon at T centuries from J2000.
pub fn position(t: f64) -> EclipticPosition {
    let t2 = t * t;
    let t3 = t2 * t;

    // Fundamental arguments, degrees.
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2;

    // Eccentricity factor applied once per power of M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;

    let argument = |term: &Term| {
        (term.0 as f64 * d + term.1 as f64 * m + term.2 as f64 * mp + term.3 as f64 * f)
            .to_radians()
    };
    let e_factor = |term: &Term| match term.1.unsigned_abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    };

    let sum_lon: f64 = LONGITUDE_TERMS
        .iter()
        .map(|term| term.4 * e_factor(term) * argument(term).sin())
        .sum();
    let sum_lat: f64 = LATITUDE_TERMS
        .iter()
        .map(|term| term.4 * e_factor(term) * argument(term).sin())
        .sum();

    EclipticPosition {
        longitude_deg: (lp + sum_lon * 1e-6).rem_euclid(360.0),
        latitude_deg: sum_lat * 1e-6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992-04-12 00:00 TT, T = −0.077221081451:
        // λ = 133.162655°, β = −3.229126° (full series).
        let pos = position(-0.077_221_081_451);
        assert!(
            (pos.longitude_deg - 133.162_655).abs() < 0.08,
            "λ = {}°, expected ~133.1627°",
            pos.longitude_deg
        );
        assert!(
            (pos.latitude_deg + 3.229_126).abs() < 0.1,
            "β = {}°, expected ~−3.2291°",
            pos.latitude_deg
        );
    }

    #[test]
    fn latitude_bounded_by_inclination() {
        // The lunar orbit is inclined ~5.15°; the truncated series must
        // never wander past ~5.3°.
        let mut t = -2.0;
        while t < 0.5 {
            let pos = position(t);
            assert!(
                pos.latitude_deg.abs() < 5.4,
                "T={t}: β = {}°",
                pos.latitude_deg
            );
            t += 0.001_37;
        }
    }

    #[test]
    fn longitude_normalized() {
        for t in [-1.9, -0.5, 0.0, 0.49] {
            let pos = position(t);
            assert!(
                (0.0..360.0).contains(&pos.longitude_deg),
                "T={t}: λ = {}",
                pos.longitude_deg
            );
        }
    }

    #[test]
    fn moves_about_thirteen_degrees_per_day() {
        let day = 1.0 / 36_525.0;
        let a = position(0.0).longitude_deg;
        let b = position(day).longitude_deg;
        let motion = (b - a).rem_euclid(360.0);
        assert!(
            (11.0..15.5).contains(&motion),
            "daily motion = {motion}°"
        );
    }
}
