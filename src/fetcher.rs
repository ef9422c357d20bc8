//! HTTP fetcher for listing and detail pages

use reqwest::header::HeaderMap;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::errors::FetchError;

/// Thin wrapper around a shared `reqwest` client with a browser identity
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// GET `url` with the default timeout and no extra headers
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.fetch_with(url, HeaderMap::new(), self.timeout).await
    }

    /// GET `url` and return the body as text
    ///
    /// Any non-2xx status is [`FetchError::HttpStatus`]; timeouts and
    /// connection failures are [`FetchError::Network`]. Nothing is retried.
    pub async fn fetch_with(
        &self,
        url: &str,
        headers: HeaderMap,
        timeout: Duration,
    ) -> Result<String, FetchError> {
        debug!(url = %url, timeout_secs = timeout.as_secs(), "Fetching page");

        let response = self
            .client
            .get(url)
            .headers(headers)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    FetchError::InvalidUrl(url.to_string())
                } else {
                    warn!(url = %url, error = %e, timeout = e.is_timeout(), "Request failed");
                    FetchError::Network(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "Upstream returned an error status");
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await.map_err(FetchError::Network)?;
        debug!(url = %url, bytes = body.len(), "Page fetched");
        Ok(body)
    }
}
