//! Local wall-clock → UTC normalization via IANA timezone identifiers.
//!
//! Birth records carry a local date, an optional local time, and a zone
//! identifier such as "Europe/Sofia". This module resolves them to a UTC
//! instant. A missing birth time defaults to local noon, the customary
//! convention when only the date is known.

use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;

/// A local wall-clock moment in a named timezone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalMoment {
    pub date: NaiveDate,
    /// Local time of day; `None` defaults to 12:00.
    pub time: Option<NaiveTime>,
    /// IANA zone identifier, e.g. "Europe/Sofia".
    pub zone: String,
}

impl LocalMoment {
    pub fn new(date: NaiveDate, time: Option<NaiveTime>, zone: impl Into<String>) -> Self {
        Self {
            date,
            time,
            zone: zone.into(),
        }
    }

    /// Local time of day, with the noon default applied.
    pub fn time_or_noon(&self) -> NaiveTime {
        self.time
            .unwrap_or_else(|| NaiveTime::from_hms_opt(12, 0, 0).unwrap())
    }

    /// Resolve to a UTC instant.
    ///
    /// DST edge cases: an ambiguous local time (fall-back hour) resolves to
    /// the earlier offset; a nonexistent local time (spring-forward gap) is
    /// rejected, since it cannot be a real wall-clock reading.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, TimeError> {
        let tz: Tz = self
            .zone
            .parse()
            .map_err(|_| TimeError::UnknownZone(self.zone.clone()))?;
        let naive = self.date.and_time(self.time_or_noon());
        match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earlier, _later) => Ok(earlier.with_timezone(&Utc)),
            LocalResult::None => Err(TimeError::NonexistentLocalTime(
                naive.to_string(),
                self.zone.clone(),
            )),
        }
    }
}
