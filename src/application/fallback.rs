//! Static and rule-based texts used when the language model is unavailable.

use crate::domain::entities::{Tier, TierDistribution};

/// Returned by the insight endpoint when the model call fails.
pub const INSIGHT_FALLBACK: &str = "This guitarist demonstrates a unique approach to technique selection, balancing foundational skills with expressive choices that define their musical signature.";

/// Returned by the compare endpoint when the model call fails.
pub const COMPARISON_FALLBACK: &str = "These guitarists demonstrate different approaches to technique selection, each creating a unique musical signature through their choices.";

/// Shown by clients when the compare endpoint cannot be reached at all.
pub const COMPARISON_UNAVAILABLE: &str = "Unable to generate comparison at this time.";

/// Builds an insight from tier percentages and top techniques alone.
///
/// Needs no network access; an empty distribution reads as 0% everywhere.
pub fn rule_based_insight(
    guitarist: &str,
    distribution: &TierDistribution,
    top_techniques: &[String],
) -> String {
    let beginner = distribution.percentage(Tier::Beginner).round();
    let intermediate = distribution.percentage(Tier::Intermediate).round();
    let advanced = distribution.percentage(Tier::Advanced).round();

    let mut insight = format!("{guitarist}'s technique signature reveals ");

    if advanced > 40.0 {
        insight.push_str(&format!(
            "a strong emphasis on advanced techniques ({advanced}%), demonstrating sophisticated technical mastery. "
        ));
    } else if intermediate > 50.0 {
        insight.push_str(&format!(
            "a balanced approach with emphasis on intermediate expressive techniques ({intermediate}%), showing refined musical communication. "
        ));
    } else {
        insight.push_str(&format!(
            "a foundation-focused approach ({beginner}% foundational techniques), emphasizing core skills and musical fundamentals. "
        ));
    }

    if !top_techniques.is_empty() {
        let key: Vec<&str> = top_techniques.iter().take(3).map(String::as_str).collect();
        insight.push_str(&format!(
            "Key techniques include {}, which define their distinctive musical voice. ",
            key.join(", ")
        ));
    }

    insight.push_str("This distribution reflects intentional choices about musical expression rather than technical limitations, creating a unique sonic signature.");

    insight
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_advanced_emphasis() {
        let text = rule_based_insight(
            "Steve Vai",
            &TierDistribution::new(1, 1, 3),
            &names(&["Tapping", "Whammy", "Legato", "Sweep"]),
        );

        assert!(text.starts_with("Steve Vai's technique signature reveals a strong emphasis on advanced techniques (60%)"));
        assert!(text.contains("Key techniques include Tapping, Whammy, Legato, which"));
        assert!(!text.contains("Sweep"));
    }

    #[test]
    fn test_intermediate_emphasis() {
        let text = rule_based_insight("B.B. King", &TierDistribution::new(1, 3, 0), &[]);

        assert!(text.contains("balanced approach with emphasis on intermediate expressive techniques (75%)"));
        assert!(!text.contains("Key techniques"));
    }

    #[test]
    fn test_foundation_focus() {
        let text = rule_based_insight("Johnny Ramone", &TierDistribution::new(2, 1, 1), &[]);
        assert!(text.contains("a foundation-focused approach (50% foundational techniques)"));
    }

    #[test]
    fn test_empty_distribution_has_no_nan() {
        let text = rule_based_insight("Nobody", &TierDistribution::default(), &[]);

        assert!(text.contains("(0% foundational techniques)"));
        assert!(!text.contains("NaN"));
        assert!(text.ends_with("creating a unique sonic signature."));
    }
}
