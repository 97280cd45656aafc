//! HTTP client for the Rick and Morty character API.
//!
//! Every call performs exactly one GET request against the configured base URL. There is no
//! retry, caching or timeout policy here beyond what `reqwest` provides; caching lives in
//! [`crate::client::query`].

use dioxus_logger::tracing;
use serde::de::DeserializeOwned;

use crate::{
    client::error::ApiError,
    model::{
        api::ErrorDto,
        character::{Character, CharacterPage},
    },
};

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();

        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Retrieve one page of the character listing
    ///
    /// # Arguments
    /// - `page` - 1-based page number, passed through unchanged as the `page` query parameter
    pub async fn fetch_characters(&self, page: u32) -> Result<CharacterPage, ApiError> {
        let url = format!("{}/character", self.base_url);
        tracing::debug!("Fetching character page {} from {}", page, url);

        let request = self.http.get(&url).query(&[("page", page)]);

        self.send_json(request).await
    }

    /// Retrieve a single character by ID
    pub async fn fetch_character(&self, id: i64) -> Result<Character, ApiError> {
        let url = format!("{}/character/{}", self.base_url, id);
        tracing::debug!("Fetching character {} from {}", id, url);

        self.send_json(self.http.get(&url)).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Failed to send request: {}", e);
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        if status.is_success() {
            return response.json::<T>().await.map_err(|e| {
                tracing::warn!("Failed to parse character data: {}", e);
                ApiError::Decode(e.to_string())
            });
        }

        let body = response.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<ErrorDto>(&body) {
            Ok(error_dto) => error_dto.error,
            Err(_) if body.is_empty() => status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
            Err(_) => body,
        };

        tracing::warn!("Request failed with status {}: {}", status, message);

        Err(ApiError::Http {
            status: status.as_u16(),
            message,
        })
    }
}
