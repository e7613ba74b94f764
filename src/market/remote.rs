//! Upstream market-data API client.
//!
//! Quotes are requested from `{base_url}/v1/marketdata/{symbol}/quotes` with the
//! API key passed as the `apikey` query parameter. The upstream JSON body is
//! forwarded as-is.

use super::{QuotePayload, QuoteProvider};
use crate::config::ConfigError;
use crate::error::QuoteError;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Quote provider backed by a remote HTTP API.
pub struct RemoteQuoteProvider {
    client: Client,
    base_url: Url,
    api_key: String,
}

impl RemoteQuoteProvider {
    /// Creates a provider for the given upstream.
    ///
    /// # Arguments
    /// * `base_url` - Upstream root, e.g. `https://api.tdameritrade.com`
    /// * `api_key` - Pre-shared credential
    /// * `timeout` - Limit for each upstream request
    ///
    /// # Errors
    /// Returns error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str, api_key: String, timeout: Duration) -> Result<Self, ConfigError> {
        let base_url = Url::parse(base_url).map_err(|e| {
            ConfigError::InvalidValue(format!("invalid market data url {}: {}", base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue(format!(
                "market data url cannot be a base: {}",
                base_url
            )));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::InvalidValue(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    /// Builds the quote URL for `symbol`, which is encoded as one path segment.
    ///
    /// `.` and `..` are rejected: URL path normalisation would drop them and
    /// address a different upstream resource.
    fn quote_url(&self, symbol: &str) -> Result<Url, QuoteError> {
        if matches!(symbol, "." | "..") {
            return Err(QuoteError::InvalidUrl(format!("invalid symbol: {}", symbol)));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| QuoteError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["v1", "marketdata", symbol, "quotes"]);
        url.query_pairs_mut().append_pair("apikey", &self.api_key);
        Ok(url)
    }
}

#[async_trait]
impl QuoteProvider for RemoteQuoteProvider {
    fn name(&self) -> &'static str {
        "remote"
    }

    async fn get_quote(&self, symbol: &str) -> Result<QuotePayload, QuoteError> {
        let url = self.quote_url(symbol)?;
        debug!("Requesting upstream quote for {}", symbol);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(QuoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        let body: serde_json::Value =
            serde_json::from_slice(&bytes).map_err(|e| QuoteError::Malformed(e.to_string()))?;

        Ok(QuotePayload::Upstream(body))
    }
}
