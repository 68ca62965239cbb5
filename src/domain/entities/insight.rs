//! Results produced by the insight service.
//!
//! These are the exact response bodies of the insight endpoints and the values
//! stored in the response cache.

use serde::{Deserialize, Serialize};

use super::distribution::TierDistribution;

/// Natural-language description of one guitarist's technique profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub insight: String,
    pub guitarist: String,
    pub distribution: TierDistribution,
}

/// Comparison of two or more guitarists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub comparison: String,
    pub guitarists: Vec<String>,
}

/// A single suggested guitarist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub name: String,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub appeal: String,
}

/// Guitarists similar to `for_guitarist`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub recommendations: Vec<Recommendation>,
    pub for_guitarist: String,
}
