//! Least Recently Used (LRU) Cache Implementation
//!
//! This module provides an LRU cache with O(1) operations for all common
//! cache operations.
//!
//! # Algorithm
//!
//! The cache keeps its entries in order of recency of use and evicts the
//! least recently used entry when a new key would push it past capacity.
//! Two structures cooperate:
//!
//! - a hash map from key to a handle into the recency list, and
//! - the recency list itself, an arena-backed doubly linked list bounded by
//!   two sentinels. The most recently used entry sits right after the head
//!   sentinel, the least recently used right before the tail sentinel.
//!
//! A key is in the map if and only if its entry is linked into the list.
//! Every mutation below updates both structures before returning.
//!
//! ```text
//!   map: { a -> #3, b -> #2, c -> #4 }
//!
//!   [HEAD] <-> #4 (c) <-> #3 (a) <-> #2 (b) <-> [TAIL]
//!               MRU                     LRU
//! ```
//!
//! # Performance Characteristics
//!
//! - Get: O(1), never allocates
//! - Put: O(1) amortized; once the cache is full an eviction frees the slot
//!   the new entry goes into
//! - Remove: O(1)
//!
//! # Thread Safety
//!
//! This implementation is not thread-safe. For concurrent access, wrap the
//! cache in a synchronization primitive such as `Mutex`.

use crate::config::LruCacheConfig;
use crate::error::ConfigError;
use crate::list::{self, Handle, List};
use crate::metrics::{CacheMetrics, CoreCacheMetrics, LruCacheMetrics};
use alloc::collections::BTreeMap;
use alloc::string::String;
use core::borrow::Borrow;
use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::iter::FusedIterator;
use core::num::NonZeroUsize;
use log::{debug, trace};

#[cfg(feature = "hashbrown")]
use hashbrown::DefaultHashBuilder;
#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(not(feature = "hashbrown"))]
use std::collections::hash_map::RandomState as DefaultHashBuilder;
#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

/// Upper bound on the number of entries reserved at construction.
///
/// Larger caches grow their map and arena on demand instead of reserving
/// memory for a capacity they may never reach.
const MAX_PREALLOCATED_ENTRIES: usize = 4096;

/// An implementation of a Least Recently Used (LRU) cache.
///
/// The cache has a fixed capacity and supports O(1) operations for
/// inserting, retrieving, and updating entries. When a new key arrives while
/// the cache is full, the least recently used entry is evicted to make room.
///
/// # Examples
///
/// ```
/// use bounded_lru::LruCache;
/// use core::num::NonZeroUsize;
///
/// let mut cache = LruCache::new(NonZeroUsize::new(2).unwrap());
///
/// cache.put("apple", 1);
/// cache.put("banana", 2);
///
/// // Accessing items updates their recency
/// assert_eq!(cache.get(&"apple"), Some(&1));
///
/// // Adding beyond capacity evicts the least recently used item
/// assert_eq!(cache.put("cherry", 3), Some(("banana", 2)));
/// assert_eq!(cache.get(&"banana"), None);
/// assert_eq!(cache.get(&"apple"), Some(&1));
/// assert_eq!(cache.get(&"cherry"), Some(&3));
/// ```
pub struct LruCache<K, V, S = DefaultHashBuilder> {
    config: LruCacheConfig,
    list: List<(K, V)>,
    map: HashMap<K, Handle, S>,
    metrics: CoreCacheMetrics,
}

impl<K: Hash + Eq, V> LruCache<K, V> {
    /// Creates a new LRU cache holding at most `cap` entries.
    pub fn new(cap: NonZeroUsize) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(cap, DefaultHashBuilder::default())
    }

    /// Creates a new LRU cache from an unchecked entry count.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroCapacity`] when `cap` is zero; no cache
    /// is built in that case.
    ///
    /// ```
    /// use bounded_lru::{ConfigError, LruCache};
    ///
    /// let cache = LruCache::<u32, u32>::try_new(0);
    /// assert_eq!(cache.unwrap_err(), ConfigError::ZeroCapacity);
    /// ```
    pub fn try_new(cap: usize) -> Result<LruCache<K, V, DefaultHashBuilder>, ConfigError> {
        let config = LruCacheConfig::new(cap)?;
        Ok(LruCache::init(config, None))
    }

    /// Creates a new LRU cache from a configuration and an optional hasher.
    pub fn init(
        config: LruCacheConfig,
        hasher: Option<DefaultHashBuilder>,
    ) -> LruCache<K, V, DefaultHashBuilder> {
        LruCache::with_hasher(config.capacity, hasher.unwrap_or_default())
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> LruCache<K, V, S> {
    /// Creates a new LRU cache with the specified capacity and hash builder.
    pub fn with_hasher(cap: NonZeroUsize, hash_builder: S) -> Self {
        let reserve = cap.get().min(MAX_PREALLOCATED_ENTRIES);
        debug!("creating LRU cache with capacity {}", cap);
        LruCache {
            config: LruCacheConfig { capacity: cap },
            list: List::new(cap, reserve),
            map: HashMap::with_capacity_and_hasher(reserve, hash_builder),
            metrics: CoreCacheMetrics::new(),
        }
    }

    /// Returns the maximum number of entries the cache can hold.
    #[inline]
    pub fn cap(&self) -> NonZeroUsize {
        self.config.capacity
    }

    /// Returns the number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the cache holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Returns the value for `key` and marks it as most recently used.
    ///
    /// A miss returns `None` and leaves the cache untouched apart from the
    /// miss counter.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(node) = self.map.get(key).copied() else {
            self.metrics.record_miss();
            return None;
        };
        self.list.move_to_front(node);
        self.metrics.record_hit();
        self.list.get(node).map(|(_, v)| v)
    }

    /// Like [`get`](Self::get), but hands out a mutable reference.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let Some(node) = self.map.get(key).copied() else {
            self.metrics.record_miss();
            return None;
        };
        self.list.move_to_front(node);
        self.metrics.record_hit();
        self.list.get_mut(node).map(|(_, v)| v)
    }

    /// Returns the value for `key` without changing its recency.
    ///
    /// Peeking is not counted as a request.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.get(key).copied()?;
        self.list.get(node).map(|(_, v)| v)
    }

    /// Returns true if `key` is resident. Does not change its recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.map.contains_key(key)
    }

    /// Returns the entry that the next over-capacity insertion would evict.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        let node = self.list.back()?;
        self.list.get(node).map(|(k, v)| (k, v))
    }

    /// Removes `key` from the cache, returning its value if it was resident.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let node = self.map.remove(key)?;
        let (_, value) = self.list.remove(node)?;
        self.metrics.record_removal();
        Some(value)
    }

    /// Removes and returns the least recently used entry.
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.remove_last()?;
        self.map.remove(&key);
        self.metrics.record_removal();
        Some((key, value))
    }

    /// Drops every entry. Capacity and metrics are kept.
    pub fn clear(&mut self) {
        debug!("clearing LRU cache holding {} entries", self.len());
        self.map.clear();
        self.list.clear();
    }

    /// Iterates over the resident entries from most to least recently used.
    ///
    /// Iteration does not change recency.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.list.iter(),
        }
    }

    /// Returns a snapshot of the cache's counters and occupancy.
    pub fn metrics_snapshot(&self) -> LruCacheMetrics {
        LruCacheMetrics {
            core: self.metrics.clone(),
            capacity: self.cap().get(),
            resident_entries: self.len(),
        }
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let (key, value) = self.list.remove_last()?;
        self.map.remove(&key);
        self.metrics.record_eviction();
        trace!(
            "evicted least recently used entry, {} of {} entries resident",
            self.list.len(),
            self.cap()
        );
        Some((key, value))
    }
}

impl<K: Hash + Eq + Clone, V, S: BuildHasher> LruCache<K, V, S> {
    /// Inserts `value` under `key` and marks the entry as most recently used.
    ///
    /// If `key` is already resident its value is replaced in place and
    /// nothing is evicted. Otherwise, when the cache is full, the least
    /// recently used entry is evicted to make room and returned.
    ///
    /// `put` always succeeds.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&node) = self.map.get(&key) {
            self.list.move_to_front(node);
            self.list.update(node, (key, value));
            self.metrics.record_update();
            return None;
        }

        let evicted = if self.list.is_full() {
            self.evict()
        } else {
            None
        };

        let node = self.list.add((key.clone(), value));
        debug_assert!(node.is_some(), "no free slot after making room");
        if let Some(node) = node {
            self.map.insert(key, node);
            self.metrics.record_insertion();
        }

        evicted
    }
}

impl<K: Hash + Eq, V, S: BuildHasher> CacheMetrics for LruCache<K, V, S> {
    fn metrics(&self) -> BTreeMap<String, f64> {
        self.metrics_snapshot().metrics()
    }

    fn algorithm_name(&self) -> &'static str {
        "LRU"
    }
}

impl<K, V, S> fmt::Debug for LruCache<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.config.capacity)
            .field("len", &self.list.len())
            .finish()
    }
}

/// Iterator over the entries of an [`LruCache`], most recently used first.
///
/// Created by [`LruCache::iter`].
pub struct Iter<'a, K, V> {
    inner: list::Iter<'a, (K, V)>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(k, v)| (k, v))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.inner.len())
            .finish()
    }
}

impl<'a, K: Hash + Eq, V, S: BuildHasher> IntoIterator for &'a LruCache<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}
