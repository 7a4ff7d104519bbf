//! Cache abstraction used by the rate store.

use async_trait::async_trait;
use std::time::Duration;

/// A cached value together with its freshness: `stale` is true once the
/// entry's TTL has elapsed. Callers decide whether stale data is usable.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    pub value: V,
    pub stale: bool,
}

#[async_trait]
pub trait Cache<K, V>: Send + Sync {
    /// Returns the value if present and unexpired.
    async fn get(&self, key: &K) -> Option<V>;

    /// Returns the value even when expired, flagged with its staleness.
    /// Used for degraded fallback when a refresh fails.
    async fn get_entry(&self, key: &K) -> Option<CacheEntry<V>>;

    /// Stores a value; `ttl` of `None` means the entry never expires.
    async fn put(&self, key: K, value: V, ttl: Option<Duration>);

    async fn remove(&self, key: &K);
}
