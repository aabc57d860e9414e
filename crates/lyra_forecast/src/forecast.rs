//! Forecast assembly: transit windows → themed buckets.
//!
//! Structured data only; the output is context for an external
//! narrative-generation collaborator and never contains prose.

use serde::{Deserialize, Serialize};

use lyra_aspect::Nature;

use crate::transit_types::TransitWindow;

/// Orb at or under which a window is considered a highlight.
const HIGHLIGHT_ORB_DEG: f64 = 3.0;

/// Forecast themes keyed by the natal body's house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Theme {
    Career,
    Love,
    Health,
    Finance,
}

/// Houses feeding each theme. Houses 2 and 6 intentionally appear twice:
/// the 2nd carries both earnings and material standing, the 6th both work
/// routine and bodily condition.
const CAREER_HOUSES: [u8; 3] = [2, 6, 10];
const LOVE_HOUSES: [u8; 2] = [5, 7];
const HEALTH_HOUSES: [u8; 2] = [1, 6];
const FINANCE_HOUSES: [u8; 2] = [2, 8];

/// Themes a house contributes to (possibly none, possibly several).
pub fn themes_for_house(house: u8) -> Vec<Theme> {
    let mut themes = Vec::new();
    if CAREER_HOUSES.contains(&house) {
        themes.push(Theme::Career);
    }
    if LOVE_HOUSES.contains(&house) {
        themes.push(Theme::Love);
    }
    if HEALTH_HOUSES.contains(&house) {
        themes.push(Theme::Health);
    }
    if FINANCE_HOUSES.contains(&house) {
        themes.push(Theme::Finance);
    }
    themes
}

/// Transit windows grouped by theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThemeBuckets {
    pub career: Vec<TransitWindow>,
    pub love: Vec<TransitWindow>,
    pub health: Vec<TransitWindow>,
    pub finance: Vec<TransitWindow>,
}

/// Assembled forecast data for one person and window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalHoroscopeData {
    pub start_jd_utc: f64,
    pub end_jd_utc: f64,
    /// Every window found in the scan, in scan order.
    pub windows: Vec<TransitWindow>,
    pub themes: ThemeBuckets,
    /// Tight-orb windows regardless of nature.
    pub highlights: Vec<TransitWindow>,
    /// Challenging-nature windows.
    pub challenges: Vec<TransitWindow>,
    /// Harmonious-nature windows.
    pub opportunities: Vec<TransitWindow>,
}

/// Bucket transit windows into themes and qualitative lists.
///
/// Total function: an empty window list yields an empty (but well-formed)
/// forecast.
pub fn assemble(
    start_jd_utc: f64,
    end_jd_utc: f64,
    windows: &[TransitWindow],
) -> PersonalHoroscopeData {
    let mut themes = ThemeBuckets::default();
    let mut highlights = Vec::new();
    let mut challenges = Vec::new();
    let mut opportunities = Vec::new();

    for window in windows {
        for theme in themes_for_house(window.natal_house) {
            let bucket = match theme {
                Theme::Career => &mut themes.career,
                Theme::Love => &mut themes.love,
                Theme::Health => &mut themes.health,
                Theme::Finance => &mut themes.finance,
            };
            bucket.push(*window);
        }

        if window.min_orb_deg <= HIGHLIGHT_ORB_DEG {
            highlights.push(*window);
        }
        match window.nature {
            Nature::Harmonious => opportunities.push(*window),
            Nature::Challenging => challenges.push(*window),
            Nature::Neutral => {}
        }
    }

    PersonalHoroscopeData {
        start_jd_utc,
        end_jd_utc,
        windows: windows.to_vec(),
        themes,
        highlights,
        challenges,
        opportunities,
    }
}
