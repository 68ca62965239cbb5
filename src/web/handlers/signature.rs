//! Signature page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use tracing::warn;

use crate::application::fallback::rule_based_insight;
use crate::chart::{self, BarChart};
use crate::domain::entities::{Guitarist, RankedTechnique, Signature};
use crate::state::AppState;

pub const SELECT_PROMPT: &str = "Select a guitarist to view their technique signature.";

#[derive(Debug, Deserialize)]
pub struct SignatureQuery {
    pub guitarist: Option<String>,
}

/// Evaluated signature ready for rendering.
pub struct SignatureView {
    pub name: String,
    pub style: String,
    pub tier_chart: BarChart,
    pub category_chart: BarChart,
    pub top_techniques: Vec<RankedTechnique>,
    pub insight: String,
    /// `true` when the insight was generated locally because the model failed.
    pub offline: bool,
}

/// Template for the signature page.
///
/// Renders `templates/signature.html` with:
/// - Guitarist dropdown
/// - Tier and category bar charts
/// - Top techniques and the insight paragraph
#[derive(Template, WebTemplate)]
#[template(path = "signature.html")]
pub struct SignatureTemplate {
    pub guitarists: Vec<Guitarist>,
    pub selected: String,
    pub view: Option<SignatureView>,
    pub message: Option<String>,
}

/// Renders the signature page.
///
/// # Endpoint
///
/// `GET /?guitarist=<name>`
///
/// # Flow
///
/// 1. Look up the guitarist's source rows
/// 2. Evaluate tier/category distribution and top techniques
/// 3. Lay out both bar charts
/// 4. Ask the insight service for prose; on model failure use the
///    rule-based paragraph
///
/// Responds **404** with the page and a message for an unknown guitarist.
pub async fn signature_page_handler(
    State(state): State<AppState>,
    Query(query): Query<SignatureQuery>,
) -> impl IntoResponse {
    let guitarists = state.signature_service.guitarists().to_vec();
    let selected = query
        .guitarist
        .map(|name| name.trim().to_string())
        .unwrap_or_default();

    let page = |view: Option<SignatureView>, message: Option<String>| SignatureTemplate {
        guitarists: guitarists.clone(),
        selected: selected.clone(),
        view,
        message,
    };

    if selected.is_empty() {
        return (StatusCode::OK, page(None, Some(SELECT_PROMPT.to_string())));
    }

    let signature = match state.signature_service.signature(&selected) {
        Ok(signature) => signature,
        Err(e) => {
            return (e.status(), page(None, Some(format!("{e}: {selected}"))));
        }
    };

    if signature.is_empty() {
        let message = format!("No technique data available for {selected}.");
        return (StatusCode::OK, page(None, Some(message)));
    }

    let view = build_view(&state, signature).await;
    (StatusCode::OK, page(Some(view), None))
}

async fn build_view(state: &AppState, signature: Signature) -> SignatureView {
    let names = signature.top_technique_names();
    let name = signature.guitarist.name.clone();
    let style = signature.guitarist.style.clone();

    let result = state
        .insight_service
        .generate_insight(
            &name,
            Some(style.as_str()),
            signature.distribution,
            Some(names.as_slice()),
        )
        .await;

    let (insight, offline) = match result {
        Ok(insight) => (insight.insight, false),
        Err(e) => {
            warn!(guitarist = %name, error = %e, "Insight unavailable");
            (rule_based_insight(&name, &signature.distribution, &names), true)
        }
    };

    SignatureView {
        tier_chart: chart::tier_chart(&signature.distribution),
        category_chart: chart::category_chart(&signature.category_distribution),
        top_techniques: signature.top_techniques,
        name,
        style,
        insight,
        offline,
    }
}
