//! LRU Cache Metrics
//!
//! Metrics specific to the LRU (Least Recently Used) cache algorithm.

extern crate alloc;

use super::{CacheMetrics, CoreCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// LRU-specific metrics (extends CoreCacheMetrics)
///
/// Besides the core counters, an LRU cache reports how full it is, since
/// its bound is an entry count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LruCacheMetrics {
    /// Core metrics common to all cache algorithms
    pub core: CoreCacheMetrics,
    /// Configured entry capacity
    pub capacity: usize,
    /// Entries resident when the snapshot was taken
    pub resident_entries: usize,
}

impl LruCacheMetrics {
    /// Creates a new LruCacheMetrics instance for a cache of `capacity` entries
    pub fn new(capacity: usize) -> Self {
        Self {
            core: CoreCacheMetrics::new(),
            capacity,
            resident_entries: 0,
        }
    }

    /// Share of the capacity currently in use, between 0.0 and 1.0.
    pub fn utilization(&self) -> f64 {
        self.resident_entries as f64 / self.capacity as f64
    }

    /// Converts LRU metrics to a BTreeMap for reporting
    pub fn to_btreemap(&self) -> BTreeMap<String, f64> {
        let mut metrics = self.core.to_btreemap();
        metrics.insert("capacity".to_string(), self.capacity as f64);
        metrics.insert(
            "resident_entries".to_string(),
            self.resident_entries as f64,
        );
        metrics.insert("cache_utilization".to_string(), self.utilization());
        metrics
    }
}

impl CacheMetrics for LruCacheMetrics {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.to_btreemap()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_metrics_report_occupancy() {
        let mut metrics = LruCacheMetrics::new(4);
        metrics.resident_entries = 3;
        metrics.core.record_insertion();
        let report = metrics.metrics();
        assert_eq!(report.get("capacity"), Some(&4.0));
        assert_eq!(report.get("resident_entries"), Some(&3.0));
        assert_eq!(report.get("cache_utilization"), Some(&0.75));
        assert_eq!(report.get("insertions"), Some(&1.0));
        assert_eq!(metrics.algorithm_name(), "LRU");
    }
}
