#![doc = include_str!("../README.md")]
//!
//! ---
//!
//! # Code Reference
//!
//! ## Operations
//!
//! | Operation | Cost | Effect on recency |
//! |-----------|------|-------------------|
//! | [`LruCache::get`] / [`LruCache::get_mut`] | O(1), no allocation | hit becomes MRU |
//! | [`LruCache::put`] | O(1) amortized | entry becomes MRU, may evict the LRU entry |
//! | [`LruCache::peek`] / [`LruCache::contains`] | O(1) | none |
//! | [`LruCache::remove`] / [`LruCache::pop_lru`] | O(1) | entry leaves the cache |
//! | [`LruCache::iter`] | O(n) | none, yields MRU to LRU |
//!
//! ## Layout
//!
//! ```text
//! ┌──────────────────────── LruCache ─────────────────────────┐
//! │                                                           │
//! │  map: K ──▶ Handle          list (arena of slots)         │
//! │                                                           │
//! │   "a" ──▶ #3        [HEAD] ⇄ #4 ⇄ #3 ⇄ #2 ⇄ [TAIL]        │
//! │   "b" ──▶ #2                MRU         LRU               │
//! │   "c" ──▶ #4                                              │
//! │                                                           │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! Links between entries are arena indices, so the crate contains no
//! `unsafe` code and the cache is `Send`/`Sync` whenever its keys and values are.
//!
//! ## Modules
//!
//! - [`lru`]: the LRU cache
//! - [`config`]: construction parameters
//! - [`error`]: configuration errors
//! - [`metrics`]: hit/miss/eviction counters

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(not(feature = "hashbrown"))]
extern crate std;

/// Arena-backed doubly linked list with sentinel boundaries.
///
/// Internal infrastructure for the recency ordering; not part of the public API.
pub(crate) mod list;

/// Cache configuration structures.
pub mod config;

/// Error types.
pub mod error;

/// Least Recently Used (LRU) cache implementation.
///
/// Provides a fixed-size cache that evicts the least recently used item when
/// a new key arrives at capacity.
pub mod lru;

/// Cache metrics system.
///
/// Counters for hits, misses, insertions and evictions, reported through
/// the [`metrics::CacheMetrics`] trait.
pub mod metrics;

pub use config::LruCacheConfig;
pub use error::ConfigError;
pub use lru::LruCache;
pub use metrics::CacheMetrics;
