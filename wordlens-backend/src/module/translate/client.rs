use reqwest::Client;

use super::types::{
    DetectRequest, DetectResponse, TranslateRequest, TranslateResponse,
};
use crate::module::error::ApiError;

/// The fixed target language of every translation
pub const TARGET_LANGUAGE: &str = "en";

/// Client for the translation provider. The detect sub-endpoint lives at
/// `<base>/detect`; translation at the base URL itself.
pub struct TranslateClient {
    client: Client,
    base_url: String,
}

impl TranslateClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Detect the source language of `text`.
    ///
    /// Returns the first detection candidate's language code, or `Ok(None)`
    /// when the provider answers with zero candidates.
    pub async fn detect_language(
        &self,
        text: &str,
        api_key: &str,
    ) -> Result<Option<String>, ApiError> {
        tracing::debug!("Detecting language for query: {}", text);

        let response = self
            .client
            .post(format!("{}/detect", self.base_url))
            .query(&[("key", api_key)])
            .json(&DetectRequest { q: text })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::DetectionFailed {
                status: response.status().as_u16(),
            });
        }

        let detected: DetectResponse = response.json().await?;
        let language = detected
            .data
            .detections
            .into_iter()
            .next()
            .and_then(|candidates| candidates.into_iter().next())
            .map(|candidate| candidate.language);

        Ok(language)
    }

    /// Translate `text` into `target`, requesting plain-text output
    pub async fn translate(
        &self,
        text: &str,
        target: &str,
        api_key: &str,
    ) -> Result<String, ApiError> {
        tracing::debug!("Sending translation request for query: {}", text);

        let response = self
            .client
            .post(&self.base_url)
            .query(&[("key", api_key)])
            .json(&TranslateRequest {
                q: text,
                target,
                format: "text",
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ApiError::TranslationFailed {
                status: response.status().as_u16(),
            });
        }

        let translated: TranslateResponse = response.json().await?;
        translated
            .data
            .translations
            .into_iter()
            .next()
            .map(|t| t.translated_text)
            .ok_or(ApiError::EmptyTranslation)
    }
}
