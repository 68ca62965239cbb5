//! Technique evaluation: joins source rows to technique metadata.
//!
//! Joins are by exact technique name. When `techniques` lists the same name more
//! than once, the first row wins. Sources naming an unknown technique are
//! skipped without error.

use std::collections::HashMap;

use super::entities::{CategoryDistribution, RankedTechnique, Source, Technique, TierDistribution};

fn index(techniques: &[Technique]) -> HashMap<&str, &Technique> {
    let mut by_name = HashMap::with_capacity(techniques.len());
    for technique in techniques {
        by_name
            .entry(technique.technique.as_str())
            .or_insert(technique);
    }
    by_name
}

/// Counts matched sources per tier.
///
/// The total equals the number of sources whose technique is known and carries
/// a valid tier.
pub fn distribution(sources: &[Source], techniques: &[Technique]) -> TierDistribution {
    let by_name = index(techniques);
    let mut counts = TierDistribution::default();

    for source in sources {
        if let Some(tier) = by_name
            .get(source.technique.as_str())
            .and_then(|technique| technique.tier_level())
        {
            counts.increment(tier);
        }
    }

    counts
}

/// Counts matched sources per technique category.
pub fn category_distribution(sources: &[Source], techniques: &[Technique]) -> CategoryDistribution {
    let by_name = index(techniques);
    let mut counts = CategoryDistribution::new();

    for source in sources {
        if let Some(technique) = by_name.get(source.technique.as_str()) {
            *counts.entry(technique.category.clone()).or_insert(0) += 1;
        }
    }

    counts
}

/// Returns up to `limit` sources with the highest confidence.
///
/// The sort is stable, so sources with equal confidence keep their input order.
pub fn top_techniques(
    sources: &[Source],
    techniques: &[Technique],
    limit: usize,
) -> Vec<RankedTechnique> {
    let by_name = index(techniques);

    let mut ranked: Vec<(f64, &Source)> = sources
        .iter()
        .map(|source| (source.confidence_score(), source))
        .collect();
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));

    ranked
        .into_iter()
        .take(limit)
        .map(|(confidence, source)| {
            let known = by_name.get(source.technique.as_str());
            RankedTechnique {
                technique: source.technique.clone(),
                confidence,
                notes: source.notes.clone(),
                tier: known.and_then(|technique| technique.tier_level()),
                category: known.map(|technique| technique.category.clone()),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Tier;

    fn techniques() -> Vec<Technique> {
        vec![
            Technique::new("Alternate Picking", "Beginner", "Foundational"),
            Technique::new("Vibrato", "Intermediate", "Expressive"),
            Technique::new("Legato", "Advanced", "Expressive"),
            Technique::new("Tapping", "Advanced", "Advanced"),
        ]
    }

    fn source(technique: &str, confidence: &str) -> Source {
        Source::new("Tester", technique, confidence, format!("{technique} notes"))
    }

    #[test]
    fn test_distribution_single_legato() {
        let sources = vec![source("Legato", "0.9")];
        let techniques = vec![Technique::new("Legato", "Advanced", "Expressive")];

        assert_eq!(
            distribution(&sources, &techniques),
            TierDistribution::new(0, 0, 1)
        );
    }

    #[test]
    fn test_distribution_skips_unknown_techniques() {
        let sources = vec![
            source("Vibrato", "0.8"),
            source("Hybrid Picking", "0.7"),
            source("Tapping", "0.6"),
            source("Alternate Picking", "0.5"),
        ];

        let counts = distribution(&sources, &techniques());

        assert_eq!(counts, TierDistribution::new(1, 1, 1));
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_distribution_total_matches_known_sources() {
        let known = techniques();
        let sources: Vec<Source> = ["Vibrato", "Legato", "Slide", "Legato", "Sweep", "Tapping"]
            .iter()
            .map(|name| source(name, "0.5"))
            .collect();

        let matched = sources
            .iter()
            .filter(|s| known.iter().any(|t| t.technique == s.technique))
            .count() as u32;

        assert_eq!(distribution(&sources, &known).total(), matched);
    }

    #[test]
    fn test_distribution_empty_sources() {
        assert_eq!(distribution(&[], &techniques()), TierDistribution::default());
    }

    #[test]
    fn test_distribution_ignores_unknown_tier_label() {
        let techniques = vec![Technique::new("Feedback", "Experimental", "Textural")];
        let sources = vec![source("Feedback", "0.9")];

        assert_eq!(distribution(&sources, &techniques).total(), 0);
        assert_eq!(category_distribution(&sources, &techniques)["Textural"], 1);
    }

    #[test]
    fn test_duplicate_technique_rows_first_wins() {
        let techniques = vec![
            Technique::new("Bending", "Beginner", "Expressive"),
            Technique::new("Bending", "Advanced", "Advanced"),
        ];
        let sources = vec![source("Bending", "1")];

        assert_eq!(
            distribution(&sources, &techniques),
            TierDistribution::new(1, 0, 0)
        );
    }

    #[test]
    fn test_category_distribution() {
        let sources = vec![
            source("Vibrato", "0.8"),
            source("Legato", "0.7"),
            source("Tapping", "0.6"),
            source("Unknown", "0.6"),
        ];

        let categories = category_distribution(&sources, &techniques());

        assert_eq!(categories.len(), 2);
        assert_eq!(categories["Expressive"], 2);
        assert_eq!(categories["Advanced"], 1);
    }

    #[test]
    fn test_top_techniques_sorted_and_limited() {
        let sources = vec![
            source("Vibrato", "0.4"),
            source("Legato", "0.9"),
            source("Tapping", "0.7"),
            source("Alternate Picking", "0.8"),
        ];

        let top = top_techniques(&sources, &techniques(), 3);

        assert_eq!(top.len(), 3);
        let names: Vec<_> = top.iter().map(|t| t.technique.as_str()).collect();
        assert_eq!(names, vec!["Legato", "Alternate Picking", "Tapping"]);
        assert!(top.windows(2).all(|pair| pair[0].confidence >= pair[1].confidence));
        assert_eq!(top[0].tier, Some(Tier::Advanced));
        assert_eq!(top[0].notes, "Legato notes");
    }

    #[test]
    fn test_top_techniques_stable_for_ties_and_missing_confidence() {
        let sources = vec![
            source("Vibrato", ""),
            source("Legato", "0.5"),
            source("Tapping", "n/a"),
            source("Alternate Picking", "0.5"),
        ];

        let top = top_techniques(&sources, &techniques(), 10);

        let names: Vec<_> = top.iter().map(|t| t.technique.as_str()).collect();
        assert_eq!(
            names,
            vec!["Legato", "Alternate Picking", "Vibrato", "Tapping"]
        );
        assert_eq!(top[2].confidence, 0.0);
    }

    #[test]
    fn test_top_techniques_limit_larger_than_input() {
        let sources = vec![source("Vibrato", "0.4")];
        assert_eq!(top_techniques(&sources, &techniques(), 5).len(), 1);
        assert!(top_techniques(&sources, &techniques(), 0).is_empty());
    }

    #[test]
    fn test_top_techniques_unknown_technique_has_no_metadata() {
        let sources = vec![source("Chicken Picking", "0.9")];
        let top = top_techniques(&sources, &techniques(), 1);

        assert_eq!(top[0].tier, None);
        assert_eq!(top[0].category, None);
    }
}
