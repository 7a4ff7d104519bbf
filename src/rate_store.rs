//! Owns the current rate snapshot and its freshness.

use crate::core::cache::Cache;
use crate::core::feed::RateFeed;
use crate::core::rates::RateSnapshot;
use crate::store::MemoryCache;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Cache key for the current snapshot.
const SNAPSHOT_CACHE_ID: &str = "monobank_currency_rates";

/// Default snapshot TTL: 30 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(1800);

/// A snapshot together with its freshness. `is_stale` is set when the
/// store had to fall back to expired data or has no data at all, letting
/// callers warn the user instead of silently reusing old rates.
#[derive(Debug, Clone)]
pub struct SnapshotState {
    pub snapshot: Arc<RateSnapshot>,
    pub is_stale: bool,
}

/// Caches the latest feed snapshot with a TTL. Consumers always get a
/// whole snapshot; refresh swaps the cached `Arc` rather than mutating
/// pairs in place.
pub struct RateStore<F: RateFeed> {
    feed: F,
    cache: MemoryCache<String, Arc<RateSnapshot>>,
    ttl: Duration,
}

impl<F: RateFeed> RateStore<F> {
    pub fn new(feed: F, ttl: Duration) -> Self {
        Self {
            feed,
            cache: MemoryCache::new(),
            ttl,
        }
    }

    /// Returns the current snapshot, fetching from the feed when the
    /// cached one is missing or expired, or when `force_refresh` is set.
    ///
    /// Never fails: a fetch error degrades to the last known snapshot
    /// (flagged stale), or to an empty one when nothing was ever cached.
    pub async fn get_snapshot(&self, force_refresh: bool) -> SnapshotState {
        let key = SNAPSHOT_CACHE_ID.to_string();

        if !force_refresh
            && let Some(snapshot) = self.cache.get(&key).await
        {
            debug!("Using cached rate snapshot");
            return SnapshotState {
                snapshot,
                is_stale: false,
            };
        }

        match self.refresh().await {
            Ok(snapshot) => SnapshotState {
                snapshot,
                is_stale: false,
            },
            Err(e) => {
                warn!("Failed to fetch currency rates: {e:#}");
                if let Some(entry) = self.cache.get_entry(&key).await {
                    info!("Using previously cached currency rates as fallback");
                    return SnapshotState {
                        snapshot: entry.value,
                        is_stale: true,
                    };
                }
                SnapshotState {
                    snapshot: Arc::new(RateSnapshot::empty()),
                    is_stale: true,
                }
            }
        }
    }

    async fn refresh(&self) -> anyhow::Result<Arc<RateSnapshot>> {
        let records = self.feed.fetch_rates().await?;
        info!("Fetched {} currency rates from the feed", records.len());

        let snapshot = Arc::new(RateSnapshot::from_records(records, Utc::now()));
        self.cache
            .put(
                SNAPSHOT_CACHE_ID.to_string(),
                Arc::clone(&snapshot),
                Some(self.ttl),
            )
            .await;
        Ok(snapshot)
    }

    /// Drops the cached snapshot; the next `get_snapshot` hits the feed.
    pub async fn clear(&self) {
        self.cache.remove(&SNAPSHOT_CACHE_ID.to_string()).await;
        info!("Currency rates cache cleared");
    }
}
