//! Builder for creating and configuring exchange clients.

use std::time::Duration;

use reqwest::header::{self, HeaderMap, HeaderValue};

use super::BseClient;
use crate::error::{DigestError, Result, ResultExt};

/// Base URL of the exchange's JSON API.
pub const DEFAULT_API_URL: &str = "https://api.bseindia.com/BseIndiaAPI/api";

/// The exchange website; sent as Origin and Referer.
pub const EXCHANGE_ORIGIN: &str = "https://www.bseindia.com/";

/// The API rejects requests that do not look like they come from a browser.
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; rv:109.0) Gecko/20100101 Firefox/118.0";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Builder for creating and configuring [`BseClient`] instances.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_url: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            api_url: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom API base URL.
    ///
    /// If not specified, uses [`DEFAULT_API_URL`].
    pub fn with_api_url<S: Into<String>>(mut self, url: Option<S>) -> Self {
        if let Some(url) = url {
            self.api_url = Some(url.into());
        }
        self
    }

    /// Sets the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the configured client.
    ///
    /// # Errors
    ///
    /// Returns `DigestError::InvalidInput` if the API URL is not http(s)
    /// Returns `DigestError::Configuration` if the HTTP client cannot be built
    pub fn build(self) -> Result<BseClient> {
        let api_url = self
            .api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(DigestError::invalid_input("api_url")
                .with_reason(format!("'{api_url}' is not an http(s) URL")));
        }

        let http = reqwest::Client::builder()
            .default_headers(Self::default_headers())
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .timeout(self.timeout)
            .build()
            .with_context("Failed to build HTTP client")?;

        Ok(BseClient::new(http, api_url.trim_end_matches('/').to_string()))
    }

    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            HeaderValue::from_static("en-US,en;q=0.5"),
        );
        headers.insert(header::ORIGIN, HeaderValue::from_static(EXCHANGE_ORIGIN));
        headers.insert(header::REFERER, HeaderValue::from_static(EXCHANGE_ORIGIN));
        headers
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
