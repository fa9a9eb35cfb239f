use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One stock photo shaped for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    /// Preview-resolution URL shown in the grid
    pub thumb: String,
    /// Original-resolution URL opened on click
    pub full: String,
    /// Display text; the search query when the provider supplies none
    pub alt: String,
    /// Photographer display name
    pub photographer: String,
    /// URL of the photographer's profile page
    pub profile: String,
}

/// The result of exactly one image search, capped at the provider page size
pub type ImageResultSet = Vec<ImageResult>;

/// One translation event as persisted by the store service.
///
/// Field names are fixed by the wire contract between the orchestrator
/// and the store, hence the camelCase rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationRecord {
    pub original_word: String,
    pub translated_word: String,
    pub pexels_images: ImageResultSet,
    pub date: DateTime<Utc>,
    pub language: String,
}

impl TranslationRecord {
    /// Build a record stamped with the current time
    pub fn new(
        original_word: impl Into<String>,
        translated_word: impl Into<String>,
        pexels_images: ImageResultSet,
        language: impl Into<String>,
    ) -> Self {
        Self {
            original_word: original_word.into(),
            translated_word: translated_word.into(),
            pexels_images,
            date: Utc::now(),
            language: language.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_wire_field_names() {
        let record = TranslationRecord::new("hola", "hello", Vec::new(), "es");
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["originalWord"], "hola");
        assert_eq!(json["translatedWord"], "hello");
        assert_eq!(json["language"], "es");
        assert!(json["pexelsImages"].as_array().unwrap().is_empty());
        // chrono serializes DateTime<Utc> as an ISO-8601 / RFC 3339 string
        assert!(json["date"].as_str().unwrap().contains('T'));
    }
}
