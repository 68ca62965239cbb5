//! API route configuration.

use crate::api::handlers::{
    compare_handler, guitarist_list_handler, health_handler, insight_handler, metrics_handler,
    recommend_handler, signature_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes that call the language model.
///
/// # Endpoints
///
/// - `POST /insight`   - Insight for one guitarist
/// - `POST /compare`   - Comparison of two or more guitarists
/// - `POST /recommend` - Similar guitarists
pub fn model_routes() -> Router<AppState> {
    Router::new()
        .route("/insight", post(insight_handler))
        .route("/compare", post(compare_handler))
        .route("/recommend", post(recommend_handler))
}

/// Routes answered from memory.
///
/// # Endpoints
///
/// - `GET /health`                       - Liveness and component checks
/// - `GET /metrics`                      - Prometheus counters
/// - `GET /guitarists`                   - Guitarist list
/// - `GET /guitarists/{name}/signature`  - Evaluated signature of one guitarist
pub fn data_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .route("/guitarists", get(guitarist_list_handler))
        .route("/guitarists/{name}/signature", get(signature_handler))
}
