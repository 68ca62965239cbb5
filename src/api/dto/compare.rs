//! DTOs for the compare endpoint.

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::GuitaristProfile;

/// Request comparing two or more guitarists.
#[derive(Debug, Deserialize, Validate)]
pub struct CompareRequest {
    #[validate(
        required(message = "Need at least 2 guitarists to compare"),
        length(min = 2, message = "Need at least 2 guitarists to compare"),
        nested
    )]
    pub guitarists: Option<Vec<GuitaristProfile>>,
}
