//! Memoization for repeated annual-horoscope requests.
//!
//! Recomputation is pure, so results can be reused whenever the same
//! chart, year, language, and reference date come back (tab switches,
//! year navigation). The fingerprint hashes the chart's numeric content
//! bit-for-bit; any edit to the chart produces a fresh key.

use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::NaiveDate;

use crate::chart::NatalChart;
use crate::error::VarshaError;
use crate::texts::Language;
use crate::varshaphala::VarshaphalaResult;

/// Cache key: (chart fingerprint, target year, language, reference date).
///
/// The reference date is part of the key because the dasha current
/// flags are relative to it; with a pinned reference date the key is
/// effectively (chart, year, language).
pub type CacheKey = (u64, i32, Language, NaiveDate);

/// Stable fingerprint of a natal chart's numeric content.
pub fn chart_fingerprint(chart: &NatalChart) -> u64 {
    let mut h = DefaultHasher::new();
    chart.birth_utc.timestamp_micros().hash(&mut h);
    chart.utc_offset_hours.to_bits().hash(&mut h);
    chart.location.latitude_deg.to_bits().hash(&mut h);
    chart.location.longitude_deg.to_bits().hash(&mut h);
    chart.location.altitude_m.to_bits().hash(&mut h);
    chart.ascendant_deg.to_bits().hash(&mut h);
    for lon in chart.longitudes {
        lon.to_bits().hash(&mut h);
    }
    h.finish()
}

/// Hit/miss counters for observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Debug, Default)]
struct CacheInner {
    entries: HashMap<CacheKey, Arc<VarshaphalaResult>>,
    hits: u64,
    misses: u64,
}

/// Shared result cache. Only successful computations are stored;
/// errors (including cancellation) always surface to the caller.
#[derive(Debug, Default)]
pub struct VarshaphalaCache {
    inner: Mutex<CacheInner>,
}

impl VarshaphalaCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn get(&self, key: &CacheKey) -> Option<Arc<VarshaphalaResult>> {
        let mut inner = self.lock();
        match inner.entries.get(key) {
            Some(hit) => {
                let hit = Arc::clone(hit);
                inner.hits += 1;
                Some(hit)
            }
            None => {
                inner.misses += 1;
                None
            }
        }
    }

    pub fn insert(&self, key: CacheKey, result: Arc<VarshaphalaResult>) {
        self.lock().entries.insert(key, result);
    }

    /// Look up `key`, running `compute` on a miss.
    ///
    /// The lock is not held during `compute`; two racing misses may both
    /// compute, with the later insert winning. Both produce equal values.
    pub fn get_or_compute<F>(
        &self,
        key: CacheKey,
        compute: F,
    ) -> Result<Arc<VarshaphalaResult>, VarshaError>
    where
        F: FnOnce() -> Result<VarshaphalaResult, VarshaError>,
    {
        if let Some(hit) = self.get(&key) {
            return Ok(hit);
        }
        let value = Arc::new(compute()?);
        self.insert(key, Arc::clone(&value));
        Ok(value)
    }

    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        CacheStats {
            hits: inner.hits,
            misses: inner.misses,
            entries: inner.entries.len(),
        }
    }

    pub fn clear(&self) {
        self.lock().entries.clear();
    }
}
