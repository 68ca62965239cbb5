//! Evidence linking a guitarist to an observed technique.

use serde::{Deserialize, Serialize};

/// A row from `sources.csv`.
///
/// `confidence` is stored as the raw cell text; [`Source::confidence_score`]
/// parses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub guitarist: String,
    pub technique: String,
    #[serde(default)]
    pub confidence: String,
    #[serde(default)]
    pub notes: String,
}

impl Source {
    pub fn new(
        guitarist: impl Into<String>,
        technique: impl Into<String>,
        confidence: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            guitarist: guitarist.into(),
            technique: technique.into(),
            confidence: confidence.into(),
            notes: notes.into(),
        }
    }

    /// Numeric confidence. Missing, unparseable or non-finite values score 0.
    pub fn confidence_score(&self) -> f64 {
        self.confidence
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_score_parses() {
        let source = Source::new("B.B. King", "Vibrato", "0.95", "");
        assert_eq!(source.confidence_score(), 0.95);
    }

    #[test]
    fn test_confidence_score_defaults_to_zero() {
        for raw in ["", "high", "NaN", "inf"] {
            let source = Source::new("B.B. King", "Vibrato", raw, "");
            assert_eq!(source.confidence_score(), 0.0, "raw value {raw:?}");
        }
    }
}
