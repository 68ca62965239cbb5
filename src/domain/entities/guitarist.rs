//! Guitarist reference data and the profile shape exchanged with the insight API.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A guitarist row from `guitarists.csv`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guitarist {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub style: String,
}

impl Guitarist {
    /// Creates a guitarist record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            style: style.into(),
        }
    }
}

/// Summary of a guitarist used by the compare and recommend prompts.
///
/// Serialized with camelCase keys (`topTechniques`) to match the JSON API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GuitaristProfile {
    #[validate(length(min = 1, message = "Guitarist name must not be empty"))]
    pub name: String,
    #[serde(default)]
    pub style: String,
    #[serde(default)]
    pub top_techniques: Vec<String>,
}

impl GuitaristProfile {
    /// One-line summary: `Name (Style): a, b, c`.
    pub fn summary_line(&self) -> String {
        format!(
            "{} ({}): {}",
            self.name,
            self.style,
            self.top_techniques.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_profile_deserializes_camel_case() {
        let profile: GuitaristProfile = serde_json::from_value(json!({
            "name": "Jimi Hendrix",
            "style": "Psychedelic Rock",
            "topTechniques": ["Bending", "Vibrato"]
        }))
        .unwrap();

        assert_eq!(profile.name, "Jimi Hendrix");
        assert_eq!(profile.top_techniques, vec!["Bending", "Vibrato"]);
    }

    #[test]
    fn test_profile_defaults_missing_fields() {
        let profile: GuitaristProfile =
            serde_json::from_value(json!({ "name": "Django Reinhardt" })).unwrap();

        assert!(profile.style.is_empty());
        assert!(profile.top_techniques.is_empty());
    }

    #[test]
    fn test_summary_line() {
        let profile = GuitaristProfile {
            name: "Eddie Van Halen".to_string(),
            style: "Hard Rock".to_string(),
            top_techniques: vec!["Tapping".to_string(), "Dive Bomb".to_string()],
        };

        assert_eq!(
            profile.summary_line(),
            "Eddie Van Halen (Hard Rock): Tapping, Dive Bomb"
        );
    }
}
