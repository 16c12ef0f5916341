//! Request-scoped input models for post and carousel generation.

use serde::{Deserialize, Serialize};

/// Hiring market for the role. Drives the carousel language rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Country {
    #[default]
    India,
    Japan,
}

impl Country {
    pub fn display_name(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::Japan => "Japan",
        }
    }

    /// The bilingual slide rule is keyed to exactly one market: Japanese
    /// roles get Japanese lines with English translations. A locale
    /// table would replace this method if more markets need it.
    pub fn bilingual_language(&self) -> Option<&'static str> {
        match self {
            Country::Japan => Some("Japanese"),
            Country::India => None,
        }
    }
}

/// Everything the form collects. Every field defaults so the handlers,
/// not the JSON extractor, decide which fields are required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobInputs {
    /// Role / job title. The only field both endpoints require.
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub experience: String,
    /// Comma-separated key skills.
    #[serde(default)]
    pub skills: String,
    /// Free-form notes from the hiring manager.
    #[serde(default)]
    pub extra_notes: String,
    #[serde(default)]
    pub country: Country,
    /// Client specifics the carousel prompt folds in.
    #[serde(default)]
    pub client_context: String,
    /// Raw job description text. Required by the carousel endpoint.
    #[serde(default)]
    pub jd_text: String,
}
