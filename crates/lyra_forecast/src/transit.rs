//! Transit scanning: sampled aspects between the moving sky and a natal chart.
//!
//! Coarse sampling with per-tuple minimal-orb tracking. The sample with the
//! smallest orb is reported as the window's exactness point; with daily
//! steps that is within half a step of the true extremum, which arc-minute
//! outputs tolerate. No bisection refinement is attempted.

use std::collections::HashMap;

use tracing::debug;

use lyra_aspect::{AspectKind, classify, separation_deg};
use lyra_chart::NatalChart;
use lyra_ephem::{ALL_BODIES, Body, Ephemeris, EphemerisCache};
use lyra_time::{SECONDS_PER_DAY, delta_t_seconds, jd_to_calendar};

use crate::error::ForecastError;
use crate::transit_types::{TransitConfig, TransitWindow};

/// Widest orb in the aspect table; a body whose motion per step exceeds
/// this can jump clean over an aspect band between samples.
const WIDEST_ORB_DEG: f64 = 8.0;

/// Whether a transiting body is too fast for the sampling step.
fn excluded(body: Body, step_days: f64) -> bool {
    body.peak_daily_motion_deg() * step_days > WIDEST_ORB_DEG
}

/// Scan a date range for aspects between transiting bodies and the natal
/// chart. A fresh per-call cache is used; see [`scan_with_cache`] to share
/// one across related scans.
pub fn scan(
    ephemeris: &Ephemeris,
    natal: &NatalChart,
    config: &TransitConfig,
) -> Result<Vec<TransitWindow>, ForecastError> {
    let mut cache = EphemerisCache::new();
    scan_with_cache(ephemeris, natal, config, &mut cache)
}

/// [`scan`] with a caller-owned position cache, so overlapping scans (for
/// example a monthly and a yearly forecast of the same person) reuse
/// samples.
pub fn scan_with_cache(
    ephemeris: &Ephemeris,
    natal: &NatalChart,
    config: &TransitConfig,
    cache: &mut EphemerisCache,
) -> Result<Vec<TransitWindow>, ForecastError> {
    config.validate().map_err(ForecastError::InvalidConfig)?;

    let transiting: Vec<Body> = ALL_BODIES
        .iter()
        .copied()
        .filter(|b| !excluded(*b, config.step_days))
        .collect();

    debug!(
        start = config.start_jd_utc,
        end = config.end_jd_utc,
        step = config.step_days,
        bodies = transiting.len(),
        "scanning transits"
    );

    // ΔT varies by seconds across any valid window; evaluate it once.
    let (year, _, _) = jd_to_calendar(config.start_jd_utc);
    let delta_t_days = delta_t_seconds(year) / SECONDS_PER_DAY;

    let natal_longitudes = natal.longitudes();

    // Minimal orb and its sample date per (transiting, natal, kind) tuple.
    let mut best: HashMap<(Body, Body, AspectKind), (f64, f64)> = HashMap::new();

    let mut sample = 0usize;
    loop {
        let jd_utc = config.start_jd_utc + sample as f64 * config.step_days;
        if jd_utc > config.end_jd_utc {
            break;
        }
        let positions = ephemeris.positions_at_cached(jd_utc + delta_t_days, cache)?;

        for &mover in &transiting {
            let mover_lon = positions.longitude(mover);
            for target in ALL_BODIES {
                let sep = separation_deg(mover_lon, natal_longitudes[target.index() as usize]);
                if let Some((kind, orb)) = classify(sep) {
                    best.entry((mover, target, kind))
                        .and_modify(|(best_orb, best_jd)| {
                            // Strict improvement keeps the earliest date on ties.
                            if orb < *best_orb {
                                *best_orb = orb;
                                *best_jd = jd_utc;
                            }
                        })
                        .or_insert((orb, jd_utc));
                }
            }
        }
        sample += 1;
    }

    let mut windows: Vec<TransitWindow> = best
        .into_iter()
        .map(|((mover, target, kind), (orb, jd))| TransitWindow {
            transiting: mover,
            natal: target,
            kind,
            nature: kind.nature(),
            min_orb_deg: orb,
            exact_jd_utc: jd,
            natal_house: natal.placement(target).house,
        })
        .collect();

    windows.sort_by(|a, b| {
        a.exact_jd_utc
            .total_cmp(&b.exact_jd_utc)
            .then_with(|| a.transiting.index().cmp(&b.transiting.index()))
            .then_with(|| a.natal.index().cmp(&b.natal.index()))
            .then_with(|| a.kind.target_deg().total_cmp(&b.kind.target_deg()))
    });

    debug!(windows = windows.len(), "transit scan complete");
    Ok(windows)
}
