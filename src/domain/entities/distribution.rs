//! Derived per-guitarist counts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::technique::Tier;

/// Number of matched techniques per tier.
///
/// Serialized as `{"Beginner": n, "Intermediate": n, "Advanced": n}`; missing keys
/// deserialize as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TierDistribution {
    #[serde(default)]
    pub beginner: u32,
    #[serde(default)]
    pub intermediate: u32,
    #[serde(default)]
    pub advanced: u32,
}

impl TierDistribution {
    pub fn new(beginner: u32, intermediate: u32, advanced: u32) -> Self {
        Self {
            beginner,
            intermediate,
            advanced,
        }
    }

    pub fn get(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Beginner => self.beginner,
            Tier::Intermediate => self.intermediate,
            Tier::Advanced => self.advanced,
        }
    }

    pub fn increment(&mut self, tier: Tier) {
        match tier {
            Tier::Beginner => self.beginner += 1,
            Tier::Intermediate => self.intermediate += 1,
            Tier::Advanced => self.advanced += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.beginner + self.intermediate + self.advanced
    }

    /// `(tier, count)` pairs in display order.
    pub fn entries(&self) -> [(Tier, u32); 3] {
        Tier::ALL.map(|tier| (tier, self.get(tier)))
    }

    /// Share of `tier` in percent, 0 when the distribution is empty.
    pub fn percentage(&self, tier: Tier) -> f64 {
        let total = self.total();
        if total == 0 {
            0.0
        } else {
            f64::from(self.get(tier)) / f64::from(total) * 100.0
        }
    }
}

/// Number of matched techniques per category, ordered by category name.
pub type CategoryDistribution = BTreeMap<String, u32>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serializes_with_tier_names() {
        let value = serde_json::to_value(TierDistribution::new(1, 2, 3)).unwrap();
        assert_eq!(
            value,
            json!({ "Beginner": 1, "Intermediate": 2, "Advanced": 3 })
        );
    }

    #[test]
    fn test_missing_keys_default_to_zero() {
        let distribution: TierDistribution =
            serde_json::from_value(json!({ "Advanced": 4 })).unwrap();
        assert_eq!(distribution, TierDistribution::new(0, 0, 4));
    }

    #[test]
    fn test_percentage_of_empty_distribution() {
        let distribution = TierDistribution::default();
        for tier in Tier::ALL {
            assert_eq!(distribution.percentage(tier), 0.0);
        }
    }

    #[test]
    fn test_percentage() {
        let distribution = TierDistribution::new(1, 1, 2);
        assert_eq!(distribution.percentage(Tier::Advanced), 50.0);
        assert_eq!(distribution.percentage(Tier::Beginner), 25.0);
    }
}
