//! Caching layer for language model responses.
//!
//! Provides a [`CacheService`] trait with two implementations:
//! - [`MemoryCache`] - In-process map with a fixed TTL
//! - [`NullCache`] - No-op implementation for testing/disabled caching

mod memory_cache;
mod null_cache;
mod service;

pub use memory_cache::MemoryCache;
pub use null_cache::NullCache;
pub use service::{CacheError, CacheKey, CacheResult, CacheService};
