//! Kepler-equation solution and heliocentric position from elements.
//!
//! Follows the evaluation procedure published with the approximate-element
//! table: propagate elements, solve `M = E − e·sin E` by Newton iteration,
//! form the orbital-plane position, rotate into the J2000 ecliptic.

use crate::elements::KeplerianElements;

/// Newton-iteration tolerance on the eccentric anomaly, degrees.
const KEPLER_TOL_DEG: f64 = 1e-7;

/// Iteration cap; the loop converges in a handful of steps for e < 0.25.
const KEPLER_MAX_ITER: usize = 32;

/// Normalize an angle to [−180, +180] degrees.
pub fn normalize_pm180(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Solve Kepler's equation for the eccentric anomaly, degrees.
///
/// `m_deg` is the mean anomaly; `e` the eccentricity. Newton's method with
/// the standard `E₀ = M + e*·sin M` seed (`e* = e` in degrees).
pub fn solve_kepler(m_deg: f64, e: f64) -> f64 {
    let m = normalize_pm180(m_deg);
    let e_star = e.to_degrees();

    let mut ecc_anom = m + e_star * m.to_radians().sin();
    for _ in 0..KEPLER_MAX_ITER {
        let rad = ecc_anom.to_radians();
        let delta_m = m - (ecc_anom - e_star * rad.sin());
        let delta_e = delta_m / (1.0 - e * rad.cos());
        ecc_anom += delta_e;
        if delta_e.abs() < KEPLER_TOL_DEG {
            break;
        }
    }
    ecc_anom
}

/// Heliocentric J2000-ecliptic position in AU at T centuries from J2000.
pub fn heliocentric_position(elements: &KeplerianElements, t: f64) -> [f64; 3] {
    let el = elements.at(t);

    // Argument of perihelion and mean anomaly from the longitudes.
    let omega = el.peri_deg - el.node_deg;
    let m = normalize_pm180(el.l_deg - el.peri_deg);

    let ecc_anom = solve_kepler(m, el.e).to_radians();

    // Orbital-plane coordinates with the x-axis toward perihelion.
    let xp = el.a_au * (ecc_anom.cos() - el.e);
    let yp = el.a_au * (1.0 - el.e * el.e).sqrt() * ecc_anom.sin();

    // Rotate by argument of perihelion, inclination, ascending node.
    let (sw, cw) = omega.to_radians().sin_cos();
    let (so, co) = el.node_deg.to_radians().sin_cos();
    let (si, ci) = el.i_deg.to_radians().sin_cos();

    [
        (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp,
        (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp,
        (sw * si) * xp + (cw * si) * yp,
    ]
}
