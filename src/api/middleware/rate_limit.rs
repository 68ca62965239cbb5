//! Rate limiting middleware using token bucket algorithm.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Milliseconds between replenished tokens.
pub const REPLENISH_INTERVAL_MS: u64 = 500;

/// Requests a client may send back to back.
pub const BURST_SIZE: u32 = 20;

/// Creates a rate limiter for the routes that call the language model.
///
/// Covers the JSON model endpoints and the signature page, which also asks
/// the model for an insight.
///
/// # Limits
///
/// - **Rate**: 2 requests per second (one token every 500 ms)
/// - **Burst**: 20 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests` and never
/// reach the model or the cache.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/insight", post(insight_handler))
///     .layer(rate_limit::model_layer());
/// ```
pub fn model_layer()
-> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(REPLENISH_INTERVAL_MS)
            .burst_size(BURST_SIZE)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
