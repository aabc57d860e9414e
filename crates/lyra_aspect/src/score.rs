//! Synastry category scoring.
//!
//! Each aspect contributes signed points to an overall bucket and to any
//! themed bucket that contains either of its bodies. Scores normalize to
//! [0, 100] with 50 as the neutral midpoint; a bucket no aspect touches
//! stays at 50.

use serde::{Deserialize, Serialize};

use lyra_chart::NatalChart;
use lyra_ephem::Body;

use crate::aspect::{Aspect, Nature, Strength, aspects_between};

/// Bodies feeding the love bucket.
const LOVE_BODIES: [Body; 3] = [Body::Venus, Body::Moon, Body::Sun];
/// Bodies feeding the communication bucket.
const COMMUNICATION_BODIES: [Body; 2] = [Body::Mercury, Body::Moon];
/// Bodies feeding the sexual-chemistry bucket.
const SEXUAL_BODIES: [Body; 3] = [Body::Mars, Body::Venus, Body::Pluto];
/// Bodies feeding the longevity bucket.
const LONGEVITY_BODIES: [Body; 3] = [Body::Saturn, Body::Jupiter, Body::Sun];

/// Maximum points a single aspect can contribute.
const MAX_POINTS_PER_ASPECT: f64 = 5.0;

/// Compatibility scores per category, each in [0, 100].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScores {
    pub overall: f64,
    pub love: f64,
    pub communication: f64,
    pub sexual: f64,
    pub longevity: f64,
}

/// Full synastry comparison of two charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynastryResult {
    pub name_a: String,
    pub name_b: String,
    /// Cross-chart aspects, strongest first.
    pub aspects: Vec<Aspect>,
    pub scores: CategoryScores,
}

/// Signed points contributed by one aspect.
fn aspect_points(aspect: &Aspect) -> f64 {
    match (aspect.nature, aspect.strength) {
        (Nature::Harmonious, Strength::Strong) => 5.0,
        (Nature::Harmonious, Strength::Moderate) => 3.0,
        (Nature::Harmonious, Strength::Weak) => 1.0,
        (Nature::Challenging, Strength::Strong) => -3.0,
        (Nature::Challenging, Strength::Moderate) => -2.0,
        (Nature::Challenging, Strength::Weak) => -1.0,
        (Nature::Neutral, Strength::Strong) => 4.0,
        (Nature::Neutral, Strength::Moderate) => 2.0,
        (Nature::Neutral, Strength::Weak) => 1.0,
    }
}

/// Running (points, max-possible) tally for one bucket.
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    points: f64,
    max: f64,
}

impl Tally {
    fn add(&mut self, points: f64) {
        self.points += points;
        self.max += MAX_POINTS_PER_ASPECT;
    }

    /// `clamp(((points + max) / (2·max)) · 100, 0, 100)`; an untouched
    /// bucket is neutral, never a division by zero.
    fn normalize(self) -> f64 {
        if self.max == 0.0 {
            return 50.0;
        }
        (((self.points + self.max) / (2.0 * self.max)) * 100.0).clamp(0.0, 100.0)
    }
}

fn touches(aspect: &Aspect, bucket: &[Body]) -> bool {
    bucket.contains(&aspect.body_a) || bucket.contains(&aspect.body_b)
}

/// Aggregate an aspect list into category scores.
///
/// Total function: any input (including empty) yields scores in [0, 100].
pub fn score_aspects(aspects: &[Aspect]) -> CategoryScores {
    let mut overall = Tally::default();
    let mut love = Tally::default();
    let mut communication = Tally::default();
    let mut sexual = Tally::default();
    let mut longevity = Tally::default();

    for aspect in aspects {
        let points = aspect_points(aspect);
        overall.add(points);
        if touches(aspect, &LOVE_BODIES) {
            love.add(points);
        }
        if touches(aspect, &COMMUNICATION_BODIES) {
            communication.add(points);
        }
        if touches(aspect, &SEXUAL_BODIES) {
            sexual.add(points);
        }
        if touches(aspect, &LONGEVITY_BODIES) {
            longevity.add(points);
        }
    }

    CategoryScores {
        overall: overall.normalize(),
        love: love.normalize(),
        communication: communication.normalize(),
        sexual: sexual.normalize(),
        longevity: longevity.normalize(),
    }
}

/// Compare two natal charts: cross-chart aspects plus category scores.
pub fn synastry(
    chart_a: &NatalChart,
    chart_b: &NatalChart,
    name_a: impl Into<String>,
    name_b: impl Into<String>,
) -> SynastryResult {
    let aspects = aspects_between(&chart_a.longitudes(), &chart_b.longitudes());
    let scores = score_aspects(&aspects);
    SynastryResult {
        name_a: name_a.into(),
        name_b: name_b.into(),
        aspects,
        scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aspect::AspectKind;

    fn aspect(body_a: Body, body_b: Body, kind: AspectKind, orb: f64) -> Aspect {
        Aspect {
            body_a,
            body_b,
            kind,
            separation_deg: kind.target_deg() + orb,
            orb_deg: orb,
            strength: Strength::from_orb(orb),
            nature: kind.nature(),
        }
    }

    #[test]
    fn empty_list_is_all_neutral() {
        let scores = score_aspects(&[]);
        assert_eq!(scores.overall, 50.0);
        assert_eq!(scores.love, 50.0);
        assert_eq!(scores.communication, 50.0);
        assert_eq!(scores.sexual, 50.0);
        assert_eq!(scores.longevity, 50.0);
    }

    #[test]
    fn single_strong_harmonious_maxes_touched_buckets() {
        // Venus trine Moon at orb 0: +5 of a possible +5.
        let scores = score_aspects(&[aspect(Body::Venus, Body::Moon, AspectKind::Trine, 0.0)]);
        assert_eq!(scores.overall, 100.0);
        assert_eq!(scores.love, 100.0);
        assert_eq!(scores.communication, 100.0); // Moon is a member
        assert_eq!(scores.sexual, 100.0); // Venus is a member
        assert_eq!(scores.longevity, 50.0); // untouched
    }

    #[test]
    fn strong_challenging_scores_twenty() {
        // −3 points against a +5 maximum: (−3+5)/10 = 20%.
        let scores = score_aspects(&[aspect(Body::Mars, Body::Saturn, AspectKind::Square, 1.0)]);
        assert_eq!(scores.overall, 20.0);
        assert_eq!(scores.sexual, 20.0);
        assert_eq!(scores.longevity, 20.0);
        assert_eq!(scores.love, 50.0);
    }

    #[test]
    fn conjunction_counts_positive() {
        let scores = score_aspects(&[aspect(Body::Sun, Body::Sun, AspectKind::Conjunction, 0.0)]);
        // +4 of +5: 90%.
        assert_eq!(scores.overall, 90.0);
        assert_eq!(scores.love, 90.0);
        assert_eq!(scores.longevity, 90.0);
        assert_eq!(scores.communication, 50.0);
    }

    #[test]
    fn all_harmonious_bounded_by_100() {
        let aspects: Vec<_> = (0..40)
            .map(|_| aspect(Body::Venus, Body::Moon, AspectKind::Trine, 0.0))
            .collect();
        let scores = score_aspects(&aspects);
        assert!(scores.overall <= 100.0);
        assert_eq!(scores.overall, 100.0);
    }

    #[test]
    fn all_challenging_bounded_by_0() {
        let aspects: Vec<_> = (0..40)
            .map(|_| aspect(Body::Mars, Body::Saturn, AspectKind::Opposition, 0.5))
            .collect();
        let scores = score_aspects(&aspects);
        assert!(scores.overall >= 0.0);
        assert_eq!(scores.overall, 20.0);
    }

    #[test]
    fn weak_aspects_contribute_little() {
        let strong = score_aspects(&[aspect(Body::Venus, Body::Moon, AspectKind::Trine, 0.5)]);
        let weak = score_aspects(&[aspect(Body::Venus, Body::Moon, AspectKind::Trine, 7.5)]);
        assert!(strong.overall > weak.overall);
        // +1 of +5: 60%.
        assert_eq!(weak.overall, 60.0);
    }

    #[test]
    fn mixed_list_stays_in_range() {
        let aspects = [
            aspect(Body::Sun, Body::Moon, AspectKind::Trine, 0.0),
            aspect(Body::Mars, Body::Pluto, AspectKind::Square, 0.2),
            aspect(Body::Mercury, Body::Jupiter, AspectKind::Sextile, 5.0),
            aspect(Body::Venus, Body::Saturn, AspectKind::Opposition, 7.9),
            aspect(Body::Moon, Body::Neptune, AspectKind::Conjunction, 4.0),
        ];
        let scores = score_aspects(&aspects);
        for s in [
            scores.overall,
            scores.love,
            scores.communication,
            scores.sexual,
            scores.longevity,
        ] {
            assert!((0.0..=100.0).contains(&s), "score out of range: {s}");
        }
    }

    #[test]
    fn bucket_membership_is_either_body() {
        // Mercury–Pluto touches communication (Mercury) and sexual (Pluto).
        let scores = score_aspects(&[aspect(
            Body::Mercury,
            Body::Pluto,
            AspectKind::Trine,
            1.0,
        )]);
        assert_ne!(scores.communication, 50.0);
        assert_ne!(scores.sexual, 50.0);
        assert_eq!(scores.love, 50.0);
        assert_eq!(scores.longevity, 50.0);
    }
}
