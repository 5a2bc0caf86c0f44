//! Errors raised while building a cache.
//!
//! Lookups never fail: a miss is reported as `None`. The only fallible step
//! is construction from an unchecked capacity.

use thiserror::Error;

/// Errors that can occur while configuring a cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested capacity was zero. A cache must hold at least one entry.
    #[error("cache capacity must be at least 1")]
    ZeroCapacity,
}
