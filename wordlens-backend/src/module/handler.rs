//! Handles client requests: rate gating, the credential → detect →
//! translate → image-search pipeline, history navigation, and the
//! fire-and-forget store notification.

use std::time::{Duration, Instant};

use reqwest::Client;
use tokio::sync::{Mutex, RwLock};
use wordlens_common::{ClientRequest, ClientResponse, ImageResultSet, TranslationRecord};

use super::credentials::CredentialProvider;
use super::error::ApiError;
use super::history::ImageHistory;
use super::images::ImageClient;
use super::notifier::StoreNotifier;
use super::translate::{TARGET_LANGUAGE, TranslateClient};
use crate::config::BackendConfig;

/// Minimum interval between accepted translation requests
const RATE_LIMIT: Duration = Duration::from_millis(1000);

/// Language code reported when the detection provider has no candidates
const UNKNOWN_LANGUAGE: &str = "und";

/// Gate enforcing the minimum inter-request interval.
///
/// The timestamp commit is unconditional once a request passes the check,
/// so overlapping requests inside the window are rejected even when the
/// accepted request later fails downstream.
struct RateGate {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl RateGate {
    fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    fn try_accept(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            if now.duration_since(last) < self.min_interval {
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}

/// One orchestrator instance owns all per-process state: the API clients,
/// the rate gate, and the image history. Constructed once at startup and
/// shared behind an `Arc` with every request handler; tests build a fresh
/// instance each.
pub struct Orchestrator {
    credentials: CredentialProvider,
    translator: TranslateClient,
    images: ImageClient,
    notifier: StoreNotifier,
    rate_gate: Mutex<RateGate>,
    history: RwLock<ImageHistory>,
}

impl Orchestrator {
    pub fn new(config: &BackendConfig) -> Self {
        let client = Client::new();
        Self {
            credentials: CredentialProvider::new(client.clone(), &config.credentials_url),
            translator: TranslateClient::new(client.clone(), &config.translate_url),
            images: ImageClient::new(client.clone(), &config.images_url),
            notifier: StoreNotifier::new(client, &config.store_url),
            rate_gate: Mutex::new(RateGate::new(RATE_LIMIT)),
            history: RwLock::new(ImageHistory::new()),
        }
    }

    /// Dispatch one client request. Always answers with a structured
    /// response; no failure escapes this boundary.
    pub async fn handle(&self, request: ClientRequest) -> ClientResponse {
        match request {
            ClientRequest::TranslateAndFetchImages { query } => {
                self.translate_and_fetch(&query).await
            }
            ClientRequest::GoBack => {
                let mut history = self.history.write().await;
                ClientResponse::history(history.back().cloned())
            }
            ClientRequest::GoForward => {
                let mut history = self.history.write().await;
                ClientResponse::history(history.forward().cloned())
            }
        }
    }

    /// Number of recorded result-sets, reported by the stats endpoint
    pub async fn history_depth(&self) -> usize {
        self.history.read().await.len()
    }

    async fn translate_and_fetch(&self, query: &str) -> ClientResponse {
        // The gate is checked and committed under one lock; a request
        // inside the window is turned away before any network call.
        if !self.rate_gate.lock().await.try_accept(Instant::now()) {
            return ClientResponse::error("Please wait 1 second between requests");
        }

        tracing::info!("Processing request for query: {}", query);

        match self.process(query).await {
            Ok(images) => ClientResponse::images(images),
            Err(ApiError::CredentialsUnavailable) => {
                tracing::error!("API keys not found");
                ClientResponse::error("API keys not configured. Set them in extension options.")
            }
            Err(ApiError::ImageRateLimited) => {
                ClientResponse::error("API rate limit exceeded")
            }
            Err(e) => {
                tracing::error!("Error during translation or fetching images: {}", e);
                ClientResponse::error(format!("Error: {}", e))
            }
        }
    }

    /// The sequential pipeline behind `translateAndFetchImages`. Short
    /// circuits on the first failure; no partial results survive.
    async fn process(&self, query: &str) -> Result<ImageResultSet, ApiError> {
        let keys = self.credentials.fetch().await?;

        let language = match self
            .translator
            .detect_language(query, &keys.translation)
            .await?
        {
            Some(language) => language,
            None => {
                tracing::warn!(
                    "Detection returned no candidates for '{}', reporting '{}'",
                    query,
                    UNKNOWN_LANGUAGE
                );
                UNKNOWN_LANGUAGE.to_string()
            }
        };
        tracing::info!("Detected language: {}", language);

        let translated = self
            .translator
            .translate(query, TARGET_LANGUAGE, &keys.translation)
            .await?;
        tracing::info!("Translated text: {}", translated);

        let images = self.images.search(&translated, &keys.images).await?;

        self.history.write().await.record(images.clone());

        self.notifier.notify(TranslationRecord::new(
            query,
            translated,
            images.clone(),
            language,
        ));

        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_gate_accepts_first_request() {
        let mut gate = RateGate::new(RATE_LIMIT);
        assert!(gate.try_accept(Instant::now()));
    }

    #[test]
    fn test_rate_gate_rejects_inside_window() {
        let mut gate = RateGate::new(RATE_LIMIT);
        let start = Instant::now();
        assert!(gate.try_accept(start));
        assert!(!gate.try_accept(start + Duration::from_millis(999)));
    }

    #[test]
    fn test_rate_gate_accepts_after_window() {
        let mut gate = RateGate::new(RATE_LIMIT);
        let start = Instant::now();
        assert!(gate.try_accept(start));
        assert!(gate.try_accept(start + Duration::from_millis(1000)));
    }

    #[test]
    fn test_rate_gate_rejection_does_not_commit() {
        let mut gate = RateGate::new(RATE_LIMIT);
        let start = Instant::now();
        assert!(gate.try_accept(start));
        // A rejected request must not push the window forward
        assert!(!gate.try_accept(start + Duration::from_millis(500)));
        assert!(gate.try_accept(start + Duration::from_millis(1100)));
    }
}
