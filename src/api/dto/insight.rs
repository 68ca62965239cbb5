//! DTOs for the insight endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::TierDistribution;

/// Request for a single guitarist's insight.
///
/// # Example
///
/// ```json
/// {
///   "guitarist": "Jimi Hendrix",
///   "distribution": { "Beginner": 2, "Intermediate": 4, "Advanced": 3 },
///   "topTechniques": ["Bending", "Vibrato"],
///   "style": "Psychedelic Rock"
/// }
/// ```
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InsightRequest {
    #[validate(
        required(message = "Missing required fields"),
        length(min = 1, message = "Missing required fields")
    )]
    pub guitarist: Option<String>,

    #[validate(required(message = "Missing required fields"))]
    pub distribution: Option<TierDistribution>,

    pub top_techniques: Option<Vec<String>>,

    pub style: Option<String>,
}
