//! DTOs for the recommend endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::GuitaristProfile;

/// Request for guitarists similar to `guitarist`, chosen among `all_guitarists`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendRequest {
    #[validate(required(message = "Missing required fields"), nested)]
    pub guitarist: Option<GuitaristProfile>,

    #[validate(required(message = "Missing required fields"))]
    pub all_guitarists: Option<Vec<GuitaristProfile>>,
}
