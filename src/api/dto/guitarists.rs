//! DTOs for the guitarist listing endpoint.

use serde::Serialize;

use crate::domain::entities::Guitarist;

/// All guitarists in the dataset.
#[derive(Debug, Serialize)]
pub struct GuitaristListResponse {
    pub items: Vec<Guitarist>,
    pub total: usize,
}
