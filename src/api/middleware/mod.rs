//! HTTP middleware for request processing and protection.
//!
//! Provides rate limiting for model-backed routes and request tracing.

pub mod rate_limit;
pub mod tracing;
