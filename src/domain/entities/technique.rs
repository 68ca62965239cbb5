//! Technique reference data and difficulty tiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Difficulty classification of a technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tier {
    Beginner,
    Intermediate,
    Advanced,
}

impl Tier {
    /// All tiers in display order.
    pub const ALL: [Tier; 3] = [Tier::Beginner, Tier::Intermediate, Tier::Advanced];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Beginner => "Beginner",
            Tier::Intermediate => "Intermediate",
            Tier::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a tier label is not one of the known tiers.
#[derive(Debug, thiserror::Error)]
#[error("unknown tier '{0}'")]
pub struct UnknownTier(pub String);

impl FromStr for Tier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Beginner" => Ok(Tier::Beginner),
            "Intermediate" => Ok(Tier::Intermediate),
            "Advanced" => Ok(Tier::Advanced),
            other => Err(UnknownTier(other.to_string())),
        }
    }
}

/// A technique row from `techniques.csv`.
///
/// `tier` is kept as the raw label so that rows with an unexpected tier still
/// load; [`Technique::tier_level`] resolves it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technique {
    pub technique: String,
    #[serde(default)]
    pub tier: String,
    #[serde(default)]
    pub category: String,
}

impl Technique {
    pub fn new(
        technique: impl Into<String>,
        tier: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            technique: technique.into(),
            tier: tier.into(),
            category: category.into(),
        }
    }

    /// Parsed tier, or `None` when the label is not a known tier.
    pub fn tier_level(&self) -> Option<Tier> {
        self.tier.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_round_trips_through_display() {
        for tier in Tier::ALL {
            assert_eq!(tier.to_string().parse::<Tier>().unwrap(), tier);
        }
    }

    #[test]
    fn test_unknown_tier_is_rejected() {
        let err = "Expert".parse::<Tier>().unwrap_err();
        assert!(err.to_string().contains("Expert"));
    }

    #[test]
    fn test_tier_level_trims_whitespace() {
        let technique = Technique::new("Sweep Picking", " Advanced ", "Advanced");
        assert_eq!(technique.tier_level(), Some(Tier::Advanced));
    }

    #[test]
    fn test_tier_level_unknown() {
        let technique = Technique::new("Feedback", "Wild", "Textural");
        assert_eq!(technique.tier_level(), None);
    }
}
