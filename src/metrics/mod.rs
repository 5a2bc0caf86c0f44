//! Cache Metrics System
//!
//! Counters describing how a cache has been used, reported through the
//! [`CacheMetrics`] trait as a `BTreeMap<String, f64>`.
//!
//! BTreeMap is used instead of HashMap so that metrics always come out in the
//! same order, which keeps test assertions and log output reproducible.

extern crate alloc;

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

pub mod lru;

pub use lru::LruCacheMetrics;

/// Counters shared by every eviction policy.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CoreCacheMetrics {
    /// Total number of lookups (`get`/`get_mut`) made to the cache
    pub requests: u64,

    /// Number of lookups that found their key
    pub cache_hits: u64,

    /// Number of new keys admitted by `put`
    pub insertions: u64,

    /// Number of `put` calls that overwrote a resident key
    pub updates: u64,

    /// Number of entries dropped to stay within capacity
    pub evictions: u64,

    /// Number of entries taken out explicitly (`remove`, `pop_lru`)
    pub removals: u64,
}

impl CoreCacheMetrics {
    /// Creates a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a lookup that found its key.
    pub fn record_hit(&mut self) {
        self.requests += 1;
        self.cache_hits += 1;
    }

    /// Records a lookup that did not find its key.
    ///
    /// Misses are derived as `requests - cache_hits`.
    pub fn record_miss(&mut self) {
        self.requests += 1;
    }

    /// Records the admission of a new key.
    pub fn record_insertion(&mut self) {
        self.insertions += 1;
    }

    /// Records an overwrite of a resident key.
    pub fn record_update(&mut self) {
        self.updates += 1;
    }

    /// Records an eviction due to capacity.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Records an explicit removal.
    pub fn record_removal(&mut self) {
        self.removals += 1;
    }

    /// Number of lookups that missed.
    pub fn cache_misses(&self) -> u64 {
        self.requests - self.cache_hits
    }

    /// Fraction of lookups that hit, between 0.0 and 1.0.
    ///
    /// Returns 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_hits as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of lookups that missed, between 0.0 and 1.0.
    ///
    /// Returns 0.0 if no lookups have been made.
    pub fn miss_rate(&self) -> f64 {
        if self.requests > 0 {
            self.cache_misses() as f64 / self.requests as f64
        } else {
            0.0
        }
    }

    /// Fraction of insertions that had to evict another entry.
    ///
    /// Returns 0.0 if nothing has been inserted.
    pub fn eviction_rate(&self) -> f64 {
        if self.insertions > 0 {
            self.evictions as f64 / self.insertions as f64
        } else {
            0.0
        }
    }

    /// Convert core metrics to BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = BTreeMap::new();

        // Basic counters
        metrics.insert("requests".to_string(), self.requests as f64);
        metrics.insert("cache_hits".to_string(), self.cache_hits as f64);
        metrics.insert("cache_misses".to_string(), self.cache_misses() as f64);
        metrics.insert("insertions".to_string(), self.insertions as f64);
        metrics.insert("updates".to_string(), self.updates as f64);
        metrics.insert("evictions".to_string(), self.evictions as f64);
        metrics.insert("removals".to_string(), self.removals as f64);

        // Rates (0.0 to 1.0)
        metrics.insert("hit_rate".to_string(), self.hit_rate());
        metrics.insert("miss_rate".to_string(), self.miss_rate());
        metrics.insert("eviction_rate".to_string(), self.eviction_rate());

        metrics
    }
}

/// Trait that all cache algorithms implement for metrics reporting
///
/// The trait uses BTreeMap to ensure deterministic ordering of metrics, which is essential
/// for reproducible benchmarks and consistent test results.
pub trait CacheMetrics {
    /// Returns all metrics as key-value pairs in deterministic order
    fn metrics(&self) -> BTreeMap<String, f64>;

    /// Algorithm name for identification (e.g. "LRU")
    fn algorithm_name(&self) -> &'static str;
}
