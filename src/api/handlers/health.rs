//! Handler for health check endpoint.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service liveness with informational component checks.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// Always **200 OK** while the process serves requests. A missing API key or
/// empty dataset is reported under `checks` but does not change `status`,
/// because insight requests still answer with fallbacks.
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "timestamp": "2026-10-16T12:00:00Z",
///   "version": "0.1.0",
///   "checks": {
///     "cache": { "status": "ok", "message": "Cache available" },
///     "model": { "status": "ok", "message": "API key configured" },
///     "dataset": { "status": "ok", "message": "12 guitarists, 30 techniques, 85 sources" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        timestamp: Utc::now(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            cache: check_cache(&state).await,
            model: check_model(&state),
            dataset: check_dataset(&state),
        },
    })
}

async fn check_cache(state: &AppState) -> CheckStatus {
    if state.cache.health_check().await {
        CheckStatus::ok("Cache available")
    } else {
        CheckStatus::degraded("Cache unavailable")
    }
}

fn check_model(state: &AppState) -> CheckStatus {
    if state.model_configured {
        CheckStatus::ok("API key configured")
    } else {
        CheckStatus::degraded("API key missing, serving fallbacks")
    }
}

fn check_dataset(state: &AppState) -> CheckStatus {
    let dataset = state.signature_service.dataset();
    let message = format!(
        "{} guitarists, {} techniques, {} sources",
        dataset.guitarists.len(),
        dataset.techniques.len(),
        dataset.sources.len()
    );

    if dataset.guitarists.is_empty() {
        CheckStatus::degraded(message)
    } else {
        CheckStatus::ok(message)
    }
}
