//! Natal chart construction: signs, houses, and validated birth data.
//!
//! This crate provides:
//! - The 12-sign tropical zodiac and longitude → sign placement
//! - Ascendant/MC and house cusps (Placidus default, Equal, Porphyry)
//! - Birth-data validation and the [`ChartBuilder`] pipeline producing a
//!   serializable [`NatalChart`]

pub mod birth;
pub mod chart;
pub mod error;
pub mod houses;
pub mod sign;

pub use birth::{BirthData, GeoLocation};
pub use chart::{BodyPlacement, ChartBuilder, ChartConfig, NatalChart};
pub use error::ChartError;
pub use houses::{HouseCusps, HouseSystem, assign_house, cusps};
pub use sign::{ALL_SIGNS, Dms, Sign, SignPosition, deg_to_dms, sign_from_longitude};
