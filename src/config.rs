//! Configuration for the Least Recently Used (LRU) cache.
//!
//! The cache is bounded by entry count only, so the configuration carries a
//! single field. It is a plain struct with public fields: build it directly
//! from a [`NonZeroUsize`], or use [`LruCacheConfig::new`] to validate a raw
//! count coming from elsewhere.
//!
//! # Examples
//!
//! ```
//! use bounded_lru::config::LruCacheConfig;
//! use bounded_lru::LruCache;
//! use core::num::NonZeroUsize;
//!
//! let config = LruCacheConfig {
//!     capacity: NonZeroUsize::new(1000).unwrap(),
//! };
//! let cache: LruCache<String, i32> = LruCache::init(config, None);
//! assert_eq!(cache.cap().get(), 1000);
//!
//! // Capacity read from user input
//! let config = LruCacheConfig::new(0);
//! assert!(config.is_err());
//! ```

use crate::error::ConfigError;
use core::fmt;
use core::num::NonZeroUsize;

/// Configuration for an LRU (Least Recently Used) cache.
///
/// LRU evicts the least recently accessed item when an insertion of a new
/// key would take the cache past `capacity` entries.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LruCacheConfig {
    /// Maximum number of key-value pairs the cache can hold.
    pub capacity: NonZeroUsize,
}

impl LruCacheConfig {
    /// Validates `capacity` and builds a configuration from it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        let capacity = NonZeroUsize::new(capacity).ok_or(ConfigError::ZeroCapacity)?;
        Ok(LruCacheConfig { capacity })
    }
}

impl fmt::Debug for LruCacheConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCacheConfig")
            .field("capacity", &self.capacity)
            .finish()
    }
}
