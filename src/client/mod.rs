//! HTTP client for the insight endpoints.
//!
//! Used by the `gts` CLI in place of a browser frontend. Every operation
//! degrades to local text instead of failing, so the terminal view always has
//! something to show.

mod insight_client;

pub use insight_client::{
    ClientError, DEFAULT_API_URL, DEFAULT_RETRIES, DEFAULT_RETRY_DELAY, InsightClient,
};
