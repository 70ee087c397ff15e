//! reqwest implementation of the backend endpoints

use super::MemoryBackend;
use crate::config::BackendConfig;
use crate::error::{MemdashError, MemdashResult};
use crate::memory::{ForgetAck, ForgetRequest, MemoryDocument};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// HTTP client for the memory backend.
pub struct BackendClient {
    base_url: String,
    http_client: Client,
}

impl BackendClient {
    /// Create a client from backend configuration.
    pub fn new(config: &BackendConfig) -> MemdashResult<Self> {
        let http_client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| MemdashError::http(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http_client,
        })
    }

    /// The backend base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl MemoryBackend for BackendClient {
    async fn fetch_memory(&self) -> MemdashResult<MemoryDocument> {
        let url = self.endpoint("memory");
        tracing::debug!("Fetching memory document from {url}");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| MemdashError::http(format!("Memory request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(MemdashError::backend(status, message));
        }

        let document: MemoryDocument = response
            .json()
            .await
            .map_err(|e| MemdashError::http(format!("Failed to parse memory document: {e}")))?;

        tracing::debug!(
            profile = document.profile.len(),
            preferences = document.preferences.len(),
            notes = document.notes.len(),
            "Fetched memory document"
        );

        Ok(document)
    }

    async fn forget(&self, request: &ForgetRequest) -> MemdashResult<ForgetAck> {
        let url = self.endpoint("forget");
        tracing::debug!(
            "Forget request to {url}: {}",
            serde_json::to_string(request).unwrap_or_default()
        );

        let response = self
            .http_client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await
            .map_err(|e| MemdashError::http(format!("Forget request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(MemdashError::backend(status, message));
        }

        let ack: ForgetAck = response.json().await.map_err(|e| {
            MemdashError::http(format!("Failed to parse forget acknowledgement: {e}"))
        })?;

        Ok(ack)
    }
}
