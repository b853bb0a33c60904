/*
[INPUT]:  HTTP configuration (base URL, optional timeouts)
[OUTPUT]: Configured reqwest client ready for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::http::error::{Result, SearchError};
use crate::types::ApiErrorResponse;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Base URL for the video data API
const API_BASE_URL: &str = "https://www.googleapis.com";

/// Fallback message when the upstream error payload carries none
const GENERIC_UPSTREAM_MESSAGE: &str = "API request failed";

/// HTTP client configuration
///
/// Timeouts default to `None`: the search call runs unbounded unless a
/// deployment opts in.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

/// HTTP client for the video search API
#[derive(Debug, Clone)]
pub struct VideoApiClient {
    http_client: Client,
    base_url: Url,
}

impl VideoApiClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, API_BASE_URL)
    }

    /// Create a new client against a custom base URL (mock servers in tests)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
        })
    }

    /// Build full URL for an endpoint path
    fn api_url(&self, endpoint: &str) -> Result<Url> {
        Ok(self.base_url.join(endpoint)?)
    }

    /// Build request builder for API endpoints
    pub(crate) fn api_request(&self, method: Method, endpoint: &str) -> Result<RequestBuilder> {
        let url = self.api_url(endpoint)?;
        Ok(self.http_client.request(method, url))
    }

    /// Send a request and decode the JSON body.
    ///
    /// Non-success statuses become [`SearchError::Upstream`] with the message
    /// taken from the upstream error payload when one is present.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<ApiErrorResponse>()
                .await
                .ok()
                .and_then(|body| body.error)
                .and_then(|error| error.message)
                .unwrap_or_else(|| GENERIC_UPSTREAM_MESSAGE.to_string());
            return Err(SearchError::upstream(status, message));
        }

        Ok(response.json::<T>().await?)
    }
}
