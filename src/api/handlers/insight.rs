//! Handler for the insight endpoint.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::insight::InsightRequest;
use crate::api::extract::ValidatedJson;
use crate::domain::entities::Insight;
use crate::error::AppError;
use crate::state::AppState;

/// Generates a natural-language insight for one guitarist.
///
/// # Endpoint
///
/// `POST /api/insight`
///
/// # Request Body
///
/// ```json
/// {
///   "guitarist": "Jimi Hendrix",
///   "distribution": { "Beginner": 2, "Intermediate": 4, "Advanced": 3 },
///   "topTechniques": ["Bending", "Vibrato"],   // optional
///   "style": "Psychedelic Rock"                // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "insight": "Hendrix's signature ...",
///   "guitarist": "Jimi Hendrix",
///   "distribution": { "Beginner": 2, "Intermediate": 4, "Advanced": 3 }
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: `guitarist` or `distribution` missing
/// - **500 Internal Server Error**: model failure; body is `{"error": ..., "fallback": "..."}`
pub async fn insight_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<InsightRequest>,
) -> Result<Json<Insight>, AppError> {
    let (Some(guitarist), Some(distribution)) = (payload.guitarist, payload.distribution) else {
        return Err(AppError::bad_request("Missing required fields", json!({})));
    };

    let insight = state
        .insight_service
        .generate_insight(
            &guitarist,
            payload.style.as_deref(),
            distribution,
            payload.top_techniques.as_deref(),
        )
        .await?;

    Ok(Json(insight))
}
