//! Handler for the Prometheus scrape endpoint.

use axum::{extract::State, http::header, response::IntoResponse};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Renders the process counters in the Prometheus text format.
///
/// # Endpoint
///
/// `GET /api/metrics`
///
/// # Response Codes
///
/// - **200 OK** - exposition text, e.g. `insight_cache_hits_total 3`
/// - **404 Not Found** - no recorder was installed for this process
pub async fn metrics_handler(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let handle = state
        .metrics
        .as_ref()
        .ok_or_else(|| AppError::not_found("Metrics recorder not installed", json!({})))?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        handle.render(),
    ))
}
