//! Cache service trait, cache keys and error types.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    KeyError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::KeyError(e) => write!(f, "Cache key error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Fingerprint of one request: `endpoint:sha256(canonical payload)`.
///
/// The payload is serialized to JSON with object keys sorted at every level, so
/// two payloads that differ only in field order share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey(String);

impl CacheKey {
    /// Builds the key for `payload` sent to `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::KeyError`] if the payload cannot be serialized.
    pub fn new<T: Serialize + ?Sized>(endpoint: &str, payload: &T) -> CacheResult<Self> {
        let value =
            serde_json::to_value(payload).map_err(|e| CacheError::KeyError(e.to_string()))?;

        let digest = Sha256::digest(canonical_json(&value).as_bytes());

        Ok(Self(format!("{}:{}", endpoint, hex::encode(digest))))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Serializes `value` with object keys sorted recursively.
fn canonical_json(value: &Value) -> String {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let fields: Vec<String> = entries
                .into_iter()
                .map(|(k, v)| format!("{}:{}", Value::String(k.clone()), canonical_json(v)))
                .collect();
            format!("{{{}}}", fields.join(","))
        }
        Value::Array(items) => {
            let items: Vec<String> = items.iter().map(canonical_json).collect();
            format!("[{}]", items.join(","))
        }
        scalar => scalar.to_string(),
    }
}

/// Trait for caching model-backed response bodies.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting the application (cache failures degrade to a fresh model call).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process map with TTL
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a live response body.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(body))` on cache hit
    /// - `Ok(None)` on miss, expiry or error (fail-open behavior)
    async fn get(&self, key: &CacheKey) -> CacheResult<Option<Value>>;

    /// Stores a response body, stamped with the current time.
    async fn set(&self, key: &CacheKey, body: Value) -> CacheResult<()>;

    /// Checks if the cache backend is usable.
    async fn health_check(&self) -> bool;
}
