//! Convenience facade over the Lyra astrological computation engine.
//!
//! Re-exports the full pipeline: birth data → natal chart → synastry /
//! transits → forecast buckets. All outputs are plain serde-serializable
//! structures; narration, persistence, and delivery belong to callers.
//!
//! ```
//! use chrono::{NaiveDate, NaiveTime};
//! use lyra::{BirthData, ChartBuilder, ChartConfig, Sign, Body};
//!
//! let data = BirthData {
//!     date: NaiveDate::from_ymd_opt(1990, 3, 15).unwrap(),
//!     time: NaiveTime::from_hms_opt(12, 0, 0),
//!     latitude_deg: 42.6977,
//!     longitude_deg: 23.3219,
//!     timezone: "Europe/Sofia".into(),
//! };
//! let as_of = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
//! let chart = ChartBuilder::new(ChartConfig::placidus(as_of))
//!     .build(&data)
//!     .unwrap();
//! assert_eq!(chart.placement(Body::Sun).sign.sign, Sign::Pisces);
//! ```

pub use lyra_aspect::{
    ALL_KINDS, Aspect, AspectKind, CategoryScores, Nature, Strength, SynastryResult,
    aspects_between, aspects_within, classify, score_aspects, separation_deg, synastry,
};
pub use lyra_chart::{
    ALL_SIGNS, BirthData, BodyPlacement, ChartBuilder, ChartConfig, ChartError, GeoLocation,
    HouseCusps, HouseSystem, NatalChart, Sign, SignPosition, assign_house, sign_from_longitude,
};
pub use lyra_ephem::{
    ALL_BODIES, Body, BodyPositions, EclipticPosition, Ephemeris, EphemerisCache, EphemerisError,
};
pub use lyra_forecast::{
    ForecastError, PersonalHoroscopeData, Theme, ThemeBuckets, TransitConfig, TransitWindow,
    assemble, scan, scan_with_cache, themes_for_house,
};
pub use lyra_time::{LocalMoment, TimeError};
