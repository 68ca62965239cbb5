//! No-op cache implementation for disabled caching.

use super::service::{CacheKey, CacheResult, CacheService};
use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

/// A cache implementation that does nothing.
///
/// Used when caching is disabled with `CACHE_ENABLED=false`. Every lookup
/// misses, so each request reaches the language model.
pub struct NullCache;

impl NullCache {
    /// Creates a new NullCache instance.
    pub fn new() -> Self {
        debug!("Using NullCache (caching disabled)");
        Self
    }
}

impl Default for NullCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheService for NullCache {
    async fn get(&self, _key: &CacheKey) -> CacheResult<Option<Value>> {
        Ok(None)
    }

    async fn set(&self, _key: &CacheKey, _body: Value) -> CacheResult<()> {
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
