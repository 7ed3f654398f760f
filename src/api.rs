//! Client for the political-tracker REST API.
//!
//! Two read-only endpoints: the full politician roster and a single
//! politician's voting record. Responses wrap their payload in a
//! `{ "data": [...] }` envelope.

use crate::error::ApiError;
use crate::models::{ApiEnvelope, Politician, Vote};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Thin typed wrapper over `reqwest::Client`.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given base URL with a request timeout.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET {base}/api/politicians` - the full roster.
    pub async fn fetch_politicians(&self) -> Result<Vec<Politician>, ApiError> {
        self.get_collection(format!("{}/api/politicians", self.base_url))
            .await
    }

    /// `GET {base}/api/politicians/{id}/votes` - one voting record.
    pub async fn fetch_votes(&self, politician_id: u64) -> Result<Vec<Vote>, ApiError> {
        self.get_collection(format!(
            "{}/api/politicians/{}/votes",
            self.base_url, politician_id
        ))
        .await
    }

    async fn get_collection<T: DeserializeOwned>(&self, url: String) -> Result<Vec<T>, ApiError> {
        debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { url, status });
        }

        let envelope: ApiEnvelope<T> = response.json().await?;
        Ok(envelope.data)
    }
}
