use reqwest::{Client, StatusCode, header};
use wordlens_common::ImageResultSet;

use super::types::SearchResponse;
use crate::module::error::ApiError;

/// Fixed page size requested from the provider; clients may display fewer
pub const PAGE_SIZE: u32 = 12;

pub struct ImageClient {
    client: Client,
    search_url: String,
}

impl ImageClient {
    pub fn new(client: Client, search_url: impl Into<String>) -> Self {
        Self {
            client,
            search_url: search_url.into(),
        }
    }

    /// Search stock photos for `query`.
    ///
    /// A provider-side rate limit (429) is reported as its own error so
    /// the caller can show a "try again soon" message instead of a
    /// generic failure.
    pub async fn search(
        &self,
        query: &str,
        api_key: &str,
    ) -> Result<ImageResultSet, ApiError> {
        tracing::debug!("Fetching images for query: {}", query);

        let per_page = PAGE_SIZE.to_string();
        let response = self
            .client
            .get(&self.search_url)
            .header(header::AUTHORIZATION, api_key)
            .query(&[("query", query), ("per_page", per_page.as_str())])
            .send()
            .await?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            tracing::error!("Image provider rate limit exceeded");
            return Err(ApiError::ImageRateLimited);
        }

        if !response.status().is_success() {
            return Err(ApiError::ImageSearchFailed {
                status: response.status().as_u16(),
            });
        }

        let search: SearchResponse = response.json().await?;
        let images = search
            .photos
            .into_iter()
            .map(|photo| photo.into_result(query))
            .collect();

        Ok(images)
    }
}
