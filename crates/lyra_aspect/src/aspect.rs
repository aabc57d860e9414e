//! Major-aspect detection between body longitudes.
//!
//! A pair matches an aspect when its separation falls within the aspect's
//! orb of the target angle. When tolerances overlap, the match with the
//! smallest resulting orb wins; iteration order never decides.

use serde::{Deserialize, Serialize};

use lyra_ephem::{ALL_BODIES, Body};

/// The five major (Ptolemaic) aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

/// All aspect kinds, conjunction first.
pub const ALL_KINDS: [AspectKind; 5] = [
    AspectKind::Conjunction,
    AspectKind::Opposition,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Sextile,
];

impl AspectKind {
    /// Exact separation the aspect targets, degrees.
    pub const fn target_deg(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Opposition => 180.0,
            Self::Trine => 120.0,
            Self::Square => 90.0,
            Self::Sextile => 60.0,
        }
    }

    /// Maximum allowed deviation from the target, degrees.
    pub const fn orb_limit_deg(self) -> f64 {
        match self {
            Self::Conjunction | Self::Opposition | Self::Trine => 8.0,
            Self::Square => 7.0,
            Self::Sextile => 6.0,
        }
    }

    /// Interpretive quality of the aspect.
    pub const fn nature(self) -> Nature {
        match self {
            Self::Trine | Self::Sextile => Nature::Harmonious,
            Self::Square | Self::Opposition => Nature::Challenging,
            Self::Conjunction => Nature::Neutral,
        }
    }
}

/// Interpretive quality derived from the aspect kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Nature {
    Harmonious,
    Challenging,
    Neutral,
}

/// Tightness class derived from the orb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strength {
    Strong,
    Moderate,
    Weak,
}

impl Strength {
    /// Strong within 3°, moderate within 6°, weak beyond.
    pub fn from_orb(orb_deg: f64) -> Self {
        if orb_deg <= 3.0 {
            Self::Strong
        } else if orb_deg <= 6.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }
}

/// One detected aspect between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub body_a: Body,
    pub body_b: Body,
    pub kind: AspectKind,
    /// Actual angular separation, degrees [0, 180].
    pub separation_deg: f64,
    /// Deviation from the exact target, degrees.
    pub orb_deg: f64,
    pub strength: Strength,
    pub nature: Nature,
}

/// Angular separation of two longitudes, folded to [0, 180].
pub fn separation_deg(lon_a: f64, lon_b: f64) -> f64 {
    let d = (lon_a - lon_b).rem_euclid(360.0);
    if d > 180.0 { 360.0 - d } else { d }
}

/// Smallest-orb match across an arbitrary candidate table.
///
/// Kept separate from [`classify`] so the tie-break is testable with
/// overlapping tolerances; the production table's bands are disjoint.
fn best_match(
    candidates: impl IntoIterator<Item = (AspectKind, f64, f64)>,
    separation: f64,
) -> Option<(AspectKind, f64)> {
    let mut best: Option<(AspectKind, f64)> = None;
    for (kind, target, limit) in candidates {
        let orb = (separation - target).abs();
        if orb <= limit && best.is_none_or(|(_, best_orb)| orb < best_orb) {
            best = Some((kind, orb));
        }
    }
    best
}

/// Classify a separation against the fixed aspect table.
pub fn classify(separation: f64) -> Option<(AspectKind, f64)> {
    best_match(
        ALL_KINDS
            .iter()
            .map(|&k| (k, k.target_deg(), k.orb_limit_deg())),
        separation,
    )
}

fn aspect_for(body_a: Body, body_b: Body, lon_a: f64, lon_b: f64) -> Option<Aspect> {
    let separation = separation_deg(lon_a, lon_b);
    classify(separation).map(|(kind, orb)| Aspect {
        body_a,
        body_b,
        kind,
        separation_deg: separation,
        orb_deg: orb,
        strength: Strength::from_orb(orb),
        nature: kind.nature(),
    })
}

/// Strongest-first presentation order: orb ascending, body indices as the
/// deterministic tie-break.
fn sort_aspects(aspects: &mut [Aspect]) {
    aspects.sort_by(|x, y| {
        x.orb_deg
            .total_cmp(&y.orb_deg)
            .then_with(|| x.body_a.index().cmp(&y.body_a.index()))
            .then_with(|| x.body_b.index().cmp(&y.body_b.index()))
    });
}

/// Aspects among the unordered body pairs of one chart.
pub fn aspects_within(longitudes: &[f64; 10]) -> Vec<Aspect> {
    let mut found = Vec::new();
    for (i, &a) in ALL_BODIES.iter().enumerate() {
        for &b in &ALL_BODIES[i + 1..] {
            if let Some(aspect) = aspect_for(
                a,
                b,
                longitudes[a.index() as usize],
                longitudes[b.index() as usize],
            ) {
                found.push(aspect);
            }
        }
    }
    sort_aspects(&mut found);
    found
}

/// Aspects across the full cross-product of two charts' bodies.
///
/// `body_a` always refers to the first chart, `body_b` to the second.
pub fn aspects_between(longitudes_a: &[f64; 10], longitudes_b: &[f64; 10]) -> Vec<Aspect> {
    let mut found = Vec::new();
    for a in ALL_BODIES {
        for b in ALL_BODIES {
            if let Some(aspect) = aspect_for(
                a,
                b,
                longitudes_a[a.index() as usize],
                longitudes_b[b.index() as usize],
            ) {
                found.push(aspect);
            }
        }
    }
    sort_aspects(&mut found);
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separation_folds_to_half_circle() {
        assert!((separation_deg(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((separation_deg(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((separation_deg(0.0, 180.0) - 180.0).abs() < 1e-12);
        assert!((separation_deg(90.0, 90.0)).abs() < 1e-12);
    }

    #[test]
    fn exact_trine() {
        let (kind, orb) = classify(120.0).unwrap();
        assert_eq!(kind, AspectKind::Trine);
        assert!(orb.abs() < 1e-12);
    }

    #[test]
    fn separations_outside_every_band_match_nothing() {
        for sep in [45.0, 100.0, 20.0, 137.0, 160.0] {
            assert!(classify(sep).is_none(), "unexpected aspect at {sep}°");
        }
    }

    #[test]
    fn band_edges_inclusive() {
        assert_eq!(classify(8.0).unwrap().0, AspectKind::Conjunction);
        assert_eq!(classify(54.0).unwrap().0, AspectKind::Sextile);
        assert_eq!(classify(66.0).unwrap().0, AspectKind::Sextile);
        assert_eq!(classify(83.0).unwrap().0, AspectKind::Square);
        assert_eq!(classify(97.0).unwrap().0, AspectKind::Square);
        assert_eq!(classify(112.0).unwrap().0, AspectKind::Trine);
        assert_eq!(classify(172.0).unwrap().0, AspectKind::Opposition);
        assert!(classify(8.000_001).is_none());
    }

    #[test]
    fn smallest_orb_wins_with_overlapping_bands() {
        // Hypothetical table whose bands overlap at 100°: a wide square
        // (orb 12) and a wide trine (orb 25). The trine is 20° away, the
        // square 10°; the square must win regardless of listing order.
        let table = [
            (AspectKind::Trine, 120.0, 25.0),
            (AspectKind::Square, 90.0, 12.0),
        ];
        let (kind, orb) = best_match(table, 100.0).unwrap();
        assert_eq!(kind, AspectKind::Square);
        assert!((orb - 10.0).abs() < 1e-12);

        let reversed = [
            (AspectKind::Square, 90.0, 12.0),
            (AspectKind::Trine, 120.0, 25.0),
        ];
        let (kind_rev, _) = best_match(reversed, 100.0).unwrap();
        assert_eq!(kind, kind_rev, "result must not depend on table order");
    }

    #[test]
    fn strength_thresholds() {
        assert_eq!(Strength::from_orb(0.0), Strength::Strong);
        assert_eq!(Strength::from_orb(3.0), Strength::Strong);
        assert_eq!(Strength::from_orb(3.000_001), Strength::Moderate);
        assert_eq!(Strength::from_orb(6.0), Strength::Moderate);
        assert_eq!(Strength::from_orb(7.5), Strength::Weak);
    }

    #[test]
    fn natures_fixed_by_kind() {
        assert_eq!(AspectKind::Trine.nature(), Nature::Harmonious);
        assert_eq!(AspectKind::Sextile.nature(), Nature::Harmonious);
        assert_eq!(AspectKind::Square.nature(), Nature::Challenging);
        assert_eq!(AspectKind::Opposition.nature(), Nature::Challenging);
        assert_eq!(AspectKind::Conjunction.nature(), Nature::Neutral);
    }

    #[test]
    fn within_finds_single_exact_trine() {
        // Sun at 0°, Moon at 120°, everything else far from any band
        // relative to both and to each other.
        let mut lons = [0.0; 10];
        lons[1] = 120.0; // Moon
        lons[2] = 20.0; // Mercury
        lons[3] = 45.0; // Venus
        lons[4] = 145.0; // Mars
        lons[5] = 166.0; // Jupiter
        lons[6] = 190.0; // Saturn
        lons[7] = 210.0; // Uranus
        lons[8] = 235.0; // Neptune
        lons[9] = 255.0; // Pluto
        let aspects = aspects_within(&lons);
        let trines: Vec<_> = aspects
            .iter()
            .filter(|a| a.kind == AspectKind::Trine && a.orb_deg < 1e-9)
            .collect();
        assert_eq!(trines.len(), 1);
        assert_eq!(trines[0].body_a, Body::Sun);
        assert_eq!(trines[0].body_b, Body::Moon);
        assert_eq!(trines[0].strength, Strength::Strong);
    }

    #[test]
    fn within_skips_self_pairs() {
        let lons = [0.0; 10];
        let aspects = aspects_within(&lons);
        // 45 unordered pairs, all conjunct at orb 0.
        assert_eq!(aspects.len(), 45);
        for a in &aspects {
            assert_ne!(a.body_a, a.body_b);
        }
    }

    #[test]
    fn between_covers_cross_product() {
        let lons = [0.0; 10];
        let aspects = aspects_between(&lons, &lons);
        // Full 10×10 cross-product, self-to-self included by design.
        assert_eq!(aspects.len(), 100);
    }

    #[test]
    fn output_sorted_strongest_first() {
        let mut lons_a = [0.0; 10];
        let mut lons_b = [0.0; 10];
        for i in 0..10 {
            lons_a[i] = (i as f64) * 36.0;
            lons_b[i] = (i as f64) * 36.0 + 2.5;
        }
        let aspects = aspects_between(&lons_a, &lons_b);
        for pair in aspects.windows(2) {
            assert!(
                pair[0].orb_deg <= pair[1].orb_deg,
                "not sorted: {} then {}",
                pair[0].orb_deg,
                pair[1].orb_deg
            );
        }
    }

    #[test]
    fn wraparound_conjunction_detected() {
        let mut lons_a = [100.0; 10];
        let mut lons_b = [100.0; 10];
        lons_a[0] = 359.0;
        lons_b[0] = 1.0;
        let aspects = aspects_between(&lons_a, &lons_b);
        let sun_sun = aspects
            .iter()
            .find(|a| a.body_a == Body::Sun && a.body_b == Body::Sun)
            .unwrap();
        assert_eq!(sun_sun.kind, AspectKind::Conjunction);
        assert!((sun_sun.orb_deg - 2.0).abs() < 1e-9);
    }
}
