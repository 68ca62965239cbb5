//! Per-guitarist technique signature.

use serde::{Deserialize, Serialize};

use super::distribution::{CategoryDistribution, TierDistribution};
use super::guitarist::{Guitarist, GuitaristProfile};
use super::technique::Tier;

/// A source entry selected by confidence, joined with its technique metadata
/// when the technique is known.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedTechnique {
    pub technique: String,
    pub confidence: f64,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier: Option<Tier>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Everything derived for one selected guitarist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    pub guitarist: Guitarist,
    pub distribution: TierDistribution,
    pub category_distribution: CategoryDistribution,
    pub top_techniques: Vec<RankedTechnique>,
    pub source_count: usize,
}

impl Signature {
    /// True when the dataset holds no source rows for the guitarist.
    pub fn is_empty(&self) -> bool {
        self.source_count == 0
    }

    /// Names of the top techniques, highest confidence first.
    pub fn top_technique_names(&self) -> Vec<String> {
        self.top_techniques
            .iter()
            .map(|ranked| ranked.technique.clone())
            .collect()
    }

    /// Profile used by the compare and recommend endpoints.
    pub fn profile(&self) -> GuitaristProfile {
        GuitaristProfile {
            name: self.guitarist.name.clone(),
            style: self.guitarist.style.clone(),
            top_techniques: self.top_technique_names(),
        }
    }
}
