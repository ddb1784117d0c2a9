//! Discogs HTTP client
//!
//! Handles communication with the Discogs database API.
//! See: https://www.discogs.com/developers
//!
//! IMPORTANT: Discogs requires a User-Agent header. Authenticated requests
//! (personal access token) get a higher rate limit; 429 responses are
//! surfaced as [`CatalogError::RateLimited`], never retried here.

use serde::de::DeserializeOwned;

use super::dto;
use crate::catalog::domain::{CatalogError, ReleaseRecord};
use crate::catalog::normalize;

/// Discogs API client
pub struct DiscogsClient {
    http_client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// User agent string - Discogs requires this
const USER_AGENT: &str = concat!(
    "Spindle/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/spindle-tools/spindle)"
);

impl DiscogsClient {
    /// Create a new client, optionally authenticated with a personal
    /// access token
    pub fn new(token: Option<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: "https://api.discogs.com".to_string(),
            token,
        }
    }

    /// Create a client for testing with custom base URL
    #[cfg(test)]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Fetch a release by Discogs ID and return it fully normalized
    pub async fn fetch_release(&self, release_id: u64) -> Result<ReleaseRecord, CatalogError> {
        let raw = self.send_release_request(release_id).await?;
        let master_year = self.master_year_for(&raw).await;
        normalize::to_release(&raw, master_year)
    }

    /// Recover the originally-issued year from the release's master.
    ///
    /// Skipped entirely when the release year is unknown; a failed master
    /// lookup degrades to "no original year" instead of failing the fetch.
    async fn master_year_for(&self, raw: &dto::Release) -> Option<u64> {
        if raw.year == 0 {
            return None;
        }
        let master_id = raw.master_id?;
        match self.send_master_request(master_id).await {
            Ok(master) => Some(master.year),
            Err(e) => {
                tracing::warn!("Failed to fetch master {}: {}", master_id, e);
                None
            }
        }
    }

    async fn send_release_request(&self, release_id: u64) -> Result<dto::Release, CatalogError> {
        self.get_json(format!("{}/releases/{}", self.base_url, release_id))
            .await
    }

    async fn send_master_request(&self, master_id: u64) -> Result<dto::Master, CatalogError> {
        self.get_json(format!("{}/masters/{}", self.base_url, master_id))
            .await
    }

    /// Send a GET request and parse the JSON response
    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, CatalogError> {
        let mut request = self.http_client.get(&url);
        if let Some(ref token) = self.token {
            request = request.header(
                reqwest::header::AUTHORIZATION,
                format!("Discogs token={token}"),
            );
        }

        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(CatalogError::RateLimited);
        }

        if !status.is_success() {
            // Try to parse error response
            if let Ok(error) = response.json::<dto::ApiError>().await {
                return Err(CatalogError::Api(error.message));
            }
            return Err(CatalogError::Network(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(e.to_string()))
    }
}
