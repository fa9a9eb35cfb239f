//! Best-effort side channel to the store service.
//!
//! Each successful orchestration cycle posts its TranslationRecord from a
//! detached task; the response path never waits for the outcome and a
//! failure only reaches the log.

use reqwest::Client;
use wordlens_common::TranslationRecord;

#[derive(Clone)]
pub struct StoreNotifier {
    client: Client,
    endpoint: String,
}

impl StoreNotifier {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Send `record` to the store without awaiting the outcome
    pub fn notify(&self, record: TranslationRecord) {
        let client = self.client.clone();
        let endpoint = self.endpoint.clone();

        tokio::spawn(async move {
            let result = client.post(&endpoint).json(&record).send().await;
            match result {
                Ok(response) if response.status().is_success() => {
                    tracing::debug!(
                        "Stored translation record for '{}'",
                        record.original_word
                    );
                }
                Ok(response) => {
                    tracing::warn!(
                        "Store rejected translation record: status {}",
                        response.status()
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to send translation record to store: {}", e);
                }
            }
        });
    }
}
