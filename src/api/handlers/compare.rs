//! Handler for the compare endpoint.

use axum::{Json, extract::State};
use serde_json::json;

use crate::api::dto::compare::CompareRequest;
use crate::api::extract::ValidatedJson;
use crate::domain::entities::Comparison;
use crate::error::AppError;
use crate::state::AppState;

/// Compares two or more guitarists.
///
/// # Endpoint
///
/// `POST /api/compare`
///
/// # Request Body
///
/// ```json
/// {
///   "guitarists": [
///     { "name": "Slash", "style": "Hard Rock", "topTechniques": ["Bending"] },
///     { "name": "Prince", "style": "Funk", "topTechniques": ["Muting"] }
///   ]
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "comparison": "...", "guitarists": ["Slash", "Prince"] }
/// ```
///
/// # Errors
///
/// - **400 Bad Request**: fewer than two guitarists
/// - **500 Internal Server Error**: model failure, with a `fallback` string
pub async fn compare_handler(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CompareRequest>,
) -> Result<Json<Comparison>, AppError> {
    let Some(guitarists) = payload.guitarists else {
        return Err(AppError::bad_request(
            "Need at least 2 guitarists to compare",
            json!({}),
        ));
    };

    let comparison = state.insight_service.compare(&guitarists).await?;

    Ok(Json(comparison))
}
