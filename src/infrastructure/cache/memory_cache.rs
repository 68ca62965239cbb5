//! In-process response cache with lazy expiry.

use super::service::{CacheKey, CacheResult, CacheService};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

struct CacheEntry {
    body: Value,
    stored_at: Instant,
}

/// Map-backed cache shared by all request handlers.
///
/// Entries older than the TTL are removed when they are next read; nothing
/// sweeps the map in the background.
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl MemoryCache {
    pub fn new(ttl: Duration) -> Self {
        debug!("Using MemoryCache (TTL: {}s)", ttl.as_secs());
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &CacheKey) -> CacheResult<Option<Value>> {
        let mut entries = self.lock();

        match entries.get(key.as_str()) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                debug!("Cache HIT: {}", key);
                Ok(Some(entry.body.clone()))
            }
            Some(_) => {
                debug!("Cache EXPIRED: {}", key);
                entries.remove(key.as_str());
                Ok(None)
            }
            None => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &CacheKey, body: Value) -> CacheResult<()> {
        self.lock().insert(
            key.as_str().to_string(),
            CacheEntry {
                body,
                stored_at: Instant::now(),
            },
        );
        debug!("Cache SET: {} (TTL: {}s)", key, self.ttl.as_secs());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(name: &str) -> CacheKey {
        CacheKey::new("insight", &json!({ "guitarist": name })).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_hit_within_ttl() {
        let cache = MemoryCache::new(Duration::from_secs(3600));
        cache.set(&key("Slash"), json!({ "insight": "cached" })).await.unwrap();

        tokio::time::advance(Duration::from_secs(3599)).await;

        let hit = cache.get(&key("Slash")).await.unwrap();
        assert_eq!(hit, Some(json!({ "insight": "cached" })));
    }

    #[tokio::test(start_paused = true)]
    async fn test_expired_entry_is_evicted_on_read() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set(&key("Slash"), json!("old")).await.unwrap();

        tokio::time::advance(Duration::from_secs(60)).await;

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&key("Slash")).await.unwrap(), None);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_miss_for_unknown_key() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        assert_eq!(cache.get(&key("Nobody")).await.unwrap(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_overwrites_and_restamps() {
        let cache = MemoryCache::new(Duration::from_secs(60));
        cache.set(&key("Slash"), json!(1)).await.unwrap();
        tokio::time::advance(Duration::from_secs(50)).await;
        cache.set(&key("Slash"), json!(2)).await.unwrap();
        tokio::time::advance(Duration::from_secs(50)).await;

        assert_eq!(cache.get(&key("Slash")).await.unwrap(), Some(json!(2)));
    }
}
