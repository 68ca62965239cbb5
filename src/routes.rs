//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`                              - Signature page (HTML, rate limited)
//! - `POST /api/insight|compare|recommend` - Model-backed endpoints (rate limited)
//! - `GET  /api/health`                    - Liveness with component checks
//! - `GET  /api/metrics`                   - Prometheus counters
//! - `GET  /api/guitarists[/{name}/signature]` - Dataset endpoints
//! - `/static/*`                           - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive, so a browser frontend on another origin can call the API
//! - **Rate limiting** - Per-IP token bucket on every route that may call the model
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use axum::Router;
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `rate_limit_enabled` - when `true`, the model endpoints and the signature page
///   are limited per client IP;
///   this requires the peer address, so serve the router with
///   `into_make_service_with_connect_info::<SocketAddr>()`
pub fn app_router(state: AppState, rate_limit_enabled: bool) -> NormalizePath<Router> {
    let (model_routes, page_routes) = if rate_limit_enabled {
        (
            api::routes::model_routes().layer(rate_limit::model_layer()),
            web::routes::routes().layer(rate_limit::model_layer()),
        )
    } else {
        (api::routes::model_routes(), web::routes::routes())
    };

    let api_router = Router::new()
        .merge(model_routes)
        .merge(api::routes::data_routes());

    let router = Router::new()
        .merge(page_routes)
        .nest("/api", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
