//! Wire shapes of the translation provider

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct DetectRequest<'a> {
    pub q: &'a str,
}

#[derive(Debug, Serialize)]
pub struct TranslateRequest<'a> {
    pub q: &'a str,
    pub target: &'a str,
    /// Always "text"; HTML output would corrupt downstream display
    pub format: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct DetectResponse {
    pub data: DetectData,
}

#[derive(Debug, Deserialize)]
pub struct DetectData {
    /// One candidate list per input text; we only ever send one text
    pub detections: Vec<Vec<Detection>>,
}

#[derive(Debug, Deserialize)]
pub struct Detection {
    pub language: String,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    pub data: TranslateData,
}

#[derive(Debug, Deserialize)]
pub struct TranslateData {
    pub translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_detect_response() {
        let response: DetectResponse = serde_json::from_str(
            r#"{"data":{"detections":[[{"language":"es","isReliable":false,"confidence":0.98}]]}}"#,
        )
        .unwrap();
        assert_eq!(response.data.detections[0][0].language, "es");
    }

    #[test]
    fn test_parse_translate_response() {
        let response: TranslateResponse = serde_json::from_str(
            r#"{"data":{"translations":[{"translatedText":"hello"}]}}"#,
        )
        .unwrap();
        assert_eq!(response.data.translations[0].translated_text, "hello");
    }
}
