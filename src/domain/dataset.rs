//! In-memory dataset of guitarists, techniques and sources.

use super::entities::{Guitarist, Source, Technique};

/// The three static tables the application works from.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub guitarists: Vec<Guitarist>,
    pub techniques: Vec<Technique>,
    pub sources: Vec<Source>,
}

impl Dataset {
    pub fn new(guitarists: Vec<Guitarist>, techniques: Vec<Technique>, sources: Vec<Source>) -> Self {
        Self {
            guitarists,
            techniques,
            sources,
        }
    }

    /// Finds a guitarist by exact name.
    pub fn find_guitarist(&self, name: &str) -> Option<&Guitarist> {
        self.guitarists.iter().find(|g| g.name == name)
    }

    /// Source rows for one guitarist, in file order.
    pub fn sources_for(&self, name: &str) -> Vec<Source> {
        self.sources
            .iter()
            .filter(|s| s.guitarist == name)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sources_for_filters_by_exact_name() {
        let dataset = Dataset::new(
            vec![Guitarist::new("1", "Slash", "Hard Rock")],
            vec![],
            vec![
                Source::new("Slash", "Bending", "0.9", ""),
                Source::new("slash", "Vibrato", "0.9", ""),
                Source::new("Slash", "Vibrato", "0.8", ""),
            ],
        );

        let sources = dataset.sources_for("Slash");

        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].technique, "Bending");
        assert!(dataset.find_guitarist("Slash").is_some());
        assert!(dataset.find_guitarist("slash").is_none());
    }
}
