//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::signature_page_handler;
use axum::{Router, routing::get};

/// Browser-facing routes.
///
/// # Endpoints
///
/// - `GET /` - Signature page, `?guitarist=<name>` selects a guitarist
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(signature_page_handler))
}
