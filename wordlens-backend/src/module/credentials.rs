//! Fetches third-party API credentials from the remote configuration
//! endpoint. Keys are re-fetched on every orchestration cycle; the
//! endpoint is the single source of truth and nothing is cached here.

use reqwest::Client;
use serde::Deserialize;

use super::error::ApiError;

/// The pair of keys required by one orchestration cycle
#[derive(Debug, Clone)]
pub struct ApiKeys {
    /// Key for the translation provider
    pub translation: String,
    /// Key for the image provider
    pub images: String,
}

/// Wire shape of the configuration endpoint response
#[derive(Debug, Deserialize)]
struct KeyResponse {
    #[serde(rename = "PEXELS_API_KEY")]
    pexels_api_key: String,
    #[serde(rename = "GOOGLE_API_KEY")]
    google_api_key: String,
}

pub struct CredentialProvider {
    client: Client,
    endpoint: String,
}

impl CredentialProvider {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub async fn fetch(&self) -> Result<ApiKeys, ApiError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Credential endpoint unreachable: {}", e);
                ApiError::CredentialsUnavailable
            })?;

        if !response.status().is_success() {
            tracing::error!(
                "Credential endpoint returned status {}",
                response.status()
            );
            return Err(ApiError::CredentialsUnavailable);
        }

        let keys: KeyResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse credential response: {}", e);
            ApiError::CredentialsUnavailable
        })?;

        tracing::debug!("API keys loaded from configuration endpoint");

        Ok(ApiKeys {
            translation: keys.google_api_key,
            images: keys.pexels_api_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_response_field_names() {
        let keys: KeyResponse = serde_json::from_str(
            r#"{"PEXELS_API_KEY":"px-123","GOOGLE_API_KEY":"gg-456"}"#,
        )
        .unwrap();
        assert_eq!(keys.pexels_api_key, "px-123");
        assert_eq!(keys.google_api_key, "gg-456");
    }
}
