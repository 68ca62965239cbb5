//! Handlers exposing the dataset.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::guitarists::GuitaristListResponse;
use crate::domain::entities::Signature;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every guitarist.
///
/// # Endpoint
///
/// `GET /api/guitarists`
pub async fn guitarist_list_handler(State(state): State<AppState>) -> Json<GuitaristListResponse> {
    let items = state.signature_service.guitarists().to_vec();

    Json(GuitaristListResponse {
        total: items.len(),
        items,
    })
}

/// Returns the evaluated technique signature of one guitarist.
///
/// # Endpoint
///
/// `GET /api/guitarists/{name}/signature`
///
/// # Response
///
/// ```json
/// {
///   "guitarist": { "id": "1", "name": "Jimi Hendrix", "style": "Psychedelic Rock" },
///   "distribution": { "Beginner": 1, "Intermediate": 3, "Advanced": 2 },
///   "categoryDistribution": { "Expressive": 3, "Textural": 2, "Foundational": 1 },
///   "topTechniques": [{ "technique": "Bending", "confidence": 0.95, "notes": "...", "tier": "Intermediate", "category": "Expressive" }],
///   "sourceCount": 6
/// }
/// ```
///
/// # Errors
///
/// Returns **404 Not Found** for an unknown guitarist.
pub async fn signature_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Signature>, AppError> {
    let signature = state.signature_service.signature(&name)?;
    Ok(Json(signature))
}
