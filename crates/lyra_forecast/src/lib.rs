//! Transit scanning and forecast assembly.
//!
//! This crate provides:
//! - [`scan`]: sampling the ephemeris across a date range and collecting
//!   the aspects transiting bodies form to a fixed natal chart, with the
//!   minimal-orb sample as each window's exactness point
//! - [`assemble`]: bucketing transit windows into themes and
//!   highlight/challenge/opportunity lists for downstream narration

pub mod error;
pub mod forecast;
pub mod transit;
pub mod transit_types;

pub use error::ForecastError;
pub use forecast::{PersonalHoroscopeData, Theme, ThemeBuckets, assemble, themes_for_house};
pub use transit::{scan, scan_with_cache};
pub use transit_types::{MAX_SAMPLES, TransitConfig, TransitWindow};
