use crate::core::cache::{Cache, CacheEntry};
use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tracing::debug;

struct CacheValue<V> {
    value: V,
    expires_at: Option<Instant>,
}

impl<V> CacheValue<V> {
    fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|expiry| expiry < Instant::now())
    }
}

/// In-memory cache implementation using HashMap behind a tokio Mutex.
/// Expired entries are kept around so callers can fall back to them.
pub struct MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    inner: Arc<Mutex<HashMap<K, CacheValue<V>>>>,
}

impl<K, V> MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

impl<K, V> Default for MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync,
    V: Clone + Send + Sync,
{
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<K, V> Cache<K, V> for MemoryCache<K, V>
where
    K: Eq + Hash + Send + Sync + std::fmt::Debug + 'static,
    V: Clone + Send + Sync + 'static,
{
    async fn get(&self, key: &K) -> Option<V> {
        let cache = self.inner.lock().await;
        if let Some(entry) = cache.get(key) {
            if entry.is_expired() {
                debug!("Cache entry expired for key: {:?}", key);
                return None;
            }
            debug!("Cache HIT for key: {:?}", key);
            return Some(entry.value.clone());
        }
        debug!("Cache MISS for key: {:?}", key);
        None
    }

    async fn get_entry(&self, key: &K) -> Option<CacheEntry<V>> {
        let cache = self.inner.lock().await;
        cache.get(key).map(|entry| CacheEntry {
            value: entry.value.clone(),
            stale: entry.is_expired(),
        })
    }

    async fn put(&self, key: K, value: V, ttl: Option<Duration>) {
        let expires_at = ttl.map(|duration| Instant::now() + duration);
        let cache_value = CacheValue { value, expires_at };

        let mut cache = self.inner.lock().await;
        debug!("Cache PUT for key: {:?}", key);
        cache.insert(key, cache_value);
    }

    async fn remove(&self, key: &K) {
        let mut cache = self.inner.lock().await;
        debug!("Cache REMOVE for key: {:?}", key);
        cache.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_cache_get_put_remove() {
        let cache = MemoryCache::<String, i32>::new();

        assert!(cache.get(&"key1".to_string()).await.is_none());

        cache.put("key1".to_string(), 123, None).await;
        assert_eq!(cache.get(&"key1".to_string()).await, Some(123));

        cache.remove(&"key1".to_string()).await;
        assert!(cache.get(&"key1".to_string()).await.is_none());
    }

    #[tokio::test]
    async fn test_cache_ttl_expiry() {
        let cache = MemoryCache::<String, i32>::new();

        cache
            .put("key".to_string(), 7, Some(Duration::from_millis(10)))
            .await;
        assert_eq!(cache.get(&"key".to_string()).await, Some(7));

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(cache.get(&"key".to_string()).await.is_none());
    }

    #[tokio::test]
    async fn test_expired_entry_is_kept_for_fallback() {
        let cache = MemoryCache::<String, i32>::new();

        cache
            .put("key".to_string(), 7, Some(Duration::from_millis(10)))
            .await;
        tokio::time::sleep(Duration::from_millis(20)).await;

        let entry = cache.get_entry(&"key".to_string()).await.unwrap();
        assert_eq!(entry.value, 7);
        assert!(entry.stale);
    }

    #[tokio::test]
    async fn test_fresh_entry_is_not_stale() {
        let cache = MemoryCache::<String, i32>::new();

        cache
            .put("key".to_string(), 7, Some(Duration::from_secs(60)))
            .await;
        let entry = cache.get_entry(&"key".to_string()).await.unwrap();
        assert!(!entry.stale);
    }
}
