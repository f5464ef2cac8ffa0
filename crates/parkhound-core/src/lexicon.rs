//! Facility extraction vocabulary.
//!
//! The keyword→tag mapping, the affirmation vocabulary, and the list of
//! free-text fields scanned for keywords are configuration, not logic:
//! operators can override any of them from a YAML file without touching
//! the fusion algorithm. The built-in defaults match the Brisbane
//! datasets.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityLexicon {
    /// Substring keyword → canonical facility tag. A field whose *name*
    /// contains the keyword counts as present-by-naming; a field whose
    /// textual *value* contains it counts only when the value affirms.
    pub keywords: BTreeMap<String, String>,
    /// String values treated as an affirmative for boolean-like fields,
    /// compared case-insensitively after trimming.
    pub affirmative_values: Vec<String>,
    /// Free-text fields scanned wholesale for keywords.
    pub text_fields: Vec<String>,
}

impl Default for FacilityLexicon {
    fn default() -> Self {
        let keywords = [
            ("toilet", "Toilets"),
            ("parking", "Parking"),
            ("playground", "Playground"),
            ("bbq", "BBQ"),
            ("shelter", "Shelter"),
            ("seating", "Seating"),
            ("water", "Water Fountain"),
            ("lighting", "Night Lighting"),
            ("exercise", "Exercise Equipment"),
            ("path", "Walking Paths"),
            ("picnic", "Picnic Area"),
            ("sport", "Sports Facilities"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            keywords,
            affirmative_values: ["y", "yes", "true", "1"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            text_fields: [
                "description",
                "facilities",
                "amenities",
                "features",
                "park_name_list",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
        }
    }
}

impl FacilityLexicon {
    /// Whether a string value counts as an affirmative ("yes"-like).
    #[must_use]
    pub fn affirms(&self, value: &str) -> bool {
        let normalized = value.trim().to_lowercase();
        self.affirmative_values.iter().any(|v| *v == normalized)
    }
}

/// Load the facility lexicon: the built-in defaults when `path` is
/// `None`, otherwise the YAML file at `path`. Sections omitted from the
/// file keep their defaults.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_lexicon(path: Option<&Path>) -> Result<FacilityLexicon, ConfigError> {
    let Some(path) = path else {
        return Ok(FacilityLexicon::default());
    };

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::LexiconFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let lexicon: FacilityLexicon = serde_yaml::from_str(&content)?;
    validate_lexicon(&lexicon)?;
    Ok(lexicon)
}

fn validate_lexicon(lexicon: &FacilityLexicon) -> Result<(), ConfigError> {
    for (keyword, tag) in &lexicon.keywords {
        if keyword.trim().is_empty() {
            return Err(ConfigError::Validation(
                "lexicon keyword must be non-empty".to_string(),
            ));
        }
        if tag.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "lexicon keyword '{keyword}' maps to an empty tag"
            )));
        }
    }
    if lexicon.affirmative_values.is_empty() {
        return Err(ConfigError::Validation(
            "lexicon affirmative_values must not be empty".to_string(),
        ));
    }
    Ok(())
}
