//! Self-consistency and serialization tests for full synastry runs.

use chrono::{NaiveDate, NaiveTime};

use lyra_aspect::{AspectKind, Strength, synastry};
use lyra_chart::{BirthData, ChartBuilder, ChartConfig, NatalChart};
use lyra_ephem::ALL_BODIES;

fn build(date: (i32, u32, u32), time: (u32, u32)) -> NatalChart {
    let as_of = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let data = BirthData {
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        time: NaiveTime::from_hms_opt(time.0, time.1, 0),
        latitude_deg: 42.6977,
        longitude_deg: 23.3219,
        timezone: "Europe/Sofia".into(),
    };
    ChartBuilder::new(ChartConfig::placidus(as_of))
        .build(&data)
        .unwrap()
}

#[test]
fn chart_against_itself_conjuncts_every_body() {
    let chart = build((1990, 3, 15), (12, 0));
    let result = synastry(&chart, &chart, "self", "self");

    for body in ALL_BODIES {
        let own = result
            .aspects
            .iter()
            .find(|a| a.body_a == body && a.body_b == body)
            .unwrap_or_else(|| panic!("{} lacks a self-aspect", body.name()));
        assert_eq!(own.kind, AspectKind::Conjunction);
        assert!(own.orb_deg < 1e-9, "{} orb {}", body.name(), own.orb_deg);
        assert_eq!(own.strength, Strength::Strong);
    }
}

#[test]
fn self_synastry_scores_high_overall() {
    let chart = build((1990, 3, 15), (12, 0));
    let result = synastry(&chart, &chart, "self", "self");
    assert!(
        result.scores.overall > 60.0,
        "self-comparison overall = {}",
        result.scores.overall
    );
}

#[test]
fn synastry_scores_always_in_range() {
    let a = build((1990, 3, 15), (12, 0));
    let b = build((1987, 11, 2), (6, 30));
    let result = synastry(&a, &b, "a", "b");
    for s in [
        result.scores.overall,
        result.scores.love,
        result.scores.communication,
        result.scores.sexual,
        result.scores.longevity,
    ] {
        assert!((0.0..=100.0).contains(&s), "score out of range: {s}");
    }
}

#[test]
fn synastry_result_round_trips_through_json() {
    let a = build((1990, 3, 15), (12, 0));
    let b = build((1987, 11, 2), (6, 30));
    let result = synastry(&a, &b, "a", "b");
    let json = serde_json::to_string(&result).unwrap();
    let back: lyra_aspect::SynastryResult = serde_json::from_str(&json).unwrap();
    assert_eq!(result, back);
}

#[test]
fn synastry_is_deterministic() {
    let a = build((1990, 3, 15), (12, 0));
    let b = build((1987, 11, 2), (6, 30));
    let first = synastry(&a, &b, "a", "b");
    let second = synastry(&a, &b, "a", "b");
    assert_eq!(first, second);
}
