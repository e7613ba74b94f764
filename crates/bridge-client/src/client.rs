//! HTTP client for the BRidge API.

use crate::error::Error;
use crate::types::*;
use reqwest::{Client, Url};
use std::time::Duration;


/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g., "http://localhost:3000").
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the BRidge API.
#[derive(Debug, Clone)]
pub struct BridgeClient {
    client: Client,
    base_url: String,
}

impl BridgeClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ClientConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ========================================================================
    // Health
    // ========================================================================

    /// Performs a health check.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn health_check(&self) -> Result<HealthResponse, Error> {
        let url = format!("{}/health", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Inventory
    // ========================================================================

    /// Adds an inventory record.
    ///
    /// # Errors
    /// Returns error if the request fails or the payload is rejected.
    pub async fn create_inventory(
        &self,
        request: &CreateInventoryRequest,
    ) -> Result<InventoryRecord, Error> {
        let url = format!("{}/inventory", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Lists all inventory records in creation order.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_inventory(&self) -> Result<Vec<InventoryRecord>, Error> {
        let url = format!("{}/inventory", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Market Data
    // ========================================================================

    /// Gets the quote for a symbol as raw JSON.
    ///
    /// The shape depends on the server's quote provider: the remote provider
    /// forwards the upstream body unchanged.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn get_market_quote(&self, symbol: &str) -> Result<serde_json::Value, Error> {
        let url = self.market_url(symbol)?;
        let resp = self.client.get(url).send().await?;
        self.handle_response(resp).await
    }

    /// Gets the quote for a symbol from a server using synthetic quotes.
    ///
    /// # Errors
    /// Returns error if the request fails or the body is not a synthetic quote.
    pub async fn get_synthetic_quote(&self, symbol: &str) -> Result<MarketQuote, Error> {
        let value = self.get_market_quote(symbol).await?;
        Ok(serde_json::from_value(value)?)
    }

    fn market_url(&self, symbol: &str) -> Result<Url, Error> {
        // Dot segments are normalised away and would hit a different route
        if matches!(symbol, "." | "..") {
            return Err(Error::InvalidUrl(format!("invalid symbol: {}", symbol)));
        }
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", self.base_url, e)))?;
        url.path_segments_mut()
            .map_err(|_| Error::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(["market", symbol]);
        Ok(url)
    }

    // ========================================================================
    // Pricing
    // ========================================================================

    /// Calculates a purchase price.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn calculate_purchase_price(
        &self,
        request: &PricingRequest,
    ) -> Result<PurchasePriceResponse, Error> {
        let url = format!("{}/pricing/calculate", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Futures
    // ========================================================================

    /// Records a futures contract.
    ///
    /// # Errors
    /// Returns error if the request fails or the payload is rejected.
    pub async fn create_futures_contract(
        &self,
        request: &CreateFuturesContractRequest,
    ) -> Result<FuturesContract, Error> {
        let url = format!("{}/futures", self.base_url);
        let resp = self.client.post(&url).json(request).send().await?;
        self.handle_response(resp).await
    }

    /// Lists all futures contracts in creation order.
    ///
    /// # Errors
    /// Returns error if the request fails.
    pub async fn list_futures_contracts(&self) -> Result<Vec<FuturesContract>, Error> {
        let url = format!("{}/futures", self.base_url);
        let resp = self.client.get(&url).send().await?;
        self.handle_response(resp).await
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, Error> {
        let status = resp.status();

        if status.is_success() {
            Ok(resp.json().await?)
        } else {
            let text = resp.text().await.unwrap_or_default();
            let message = error_message(&text);
            if status.as_u16() == 404 {
                Err(Error::NotFound(message))
            } else {
                Err(Error::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }
}

/// Extracts the `error` field of an API error body, falling back to the raw text.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.error)
        .unwrap_or_else(|_| body.to_string())
}
