//! Handler for the recommend endpoint.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::recommend::RecommendRequest;
use crate::api::extract::ValidatedJson;
use crate::domain::entities::Recommendations;
use crate::error::AppError;
use crate::state::AppState;

/// Recommends guitarists with a similar technique profile.
///
/// # Endpoint
///
/// `POST /api/recommend`
///
/// # Response
///
/// ```json
/// {
///   "recommendations": [{ "name": "Prince", "reason": "...", "appeal": "..." }],
///   "forGuitarist": "Slash"
/// }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: `guitarist` or `allGuitarists` missing
/// - **500 Internal Server Error**: model failure; body carries `"recommendations": []`
pub async fn recommend_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RecommendRequest>,
) -> Result<Json<Recommendations>, AppError> {
    let (Some(guitarist), Some(candidates)) = (payload.guitarist, payload.all_guitarists) else {
        return Err(AppError::bad_request("Missing required fields", json!({})));
    };

    let recommendations = state
        .insight_service
        .recommend(&guitarist, &candidates)
        .await?;

    Ok(Json(recommendations))
}
