//! Explicit, injectable position cache.
//!
//! The cache is owned by the caller and threaded through explicitly, so the
//! computation functions stay pure and independently testable. Keys are the
//! Julian Day rounded to 1e−6 day (≈ 0.09 s): samples that close together
//! are indistinguishable at arc-minute precision, so they coalesce.

use std::collections::HashMap;

use crate::BodyPositions;

/// Cache key: Julian Day rounded to 1e−6 day.
pub fn cache_key(jd: f64) -> i64 {
    (jd * 1e6).round() as i64
}

/// Memoized body positions keyed by rounded Julian Day.
///
/// Typical use is one cache per request (a transit scan, a batch of charts),
/// dropped when the request completes.
#[derive(Debug, Clone, Default)]
pub struct EphemerisCache {
    entries: HashMap<i64, BodyPositions>,
}

impl EphemerisCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: i64) -> Option<BodyPositions> {
        self.entries.get(&key).copied()
    }

    pub fn insert(&mut self, key: i64, positions: BodyPositions) {
        self.entries.insert(key, positions);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_rounds_sub_microday() {
        assert_eq!(cache_key(2_451_545.0), cache_key(2_451_545.000_000_4));
    }

    #[test]
    fn key_distinguishes_samples() {
        // One hour apart is far beyond the rounding quantum.
        assert_ne!(cache_key(2_451_545.0), cache_key(2_451_545.0 + 1.0 / 24.0));
    }

    #[test]
    fn empty_cache_misses() {
        let cache = EphemerisCache::new();
        assert!(cache.is_empty());
        assert!(cache.get(cache_key(2_451_545.0)).is_none());
    }
}
