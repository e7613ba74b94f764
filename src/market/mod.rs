//! Market quote providers.
//!
//! Exactly one [`QuoteProvider`] is active per deployment, chosen from
//! [`MarketDataConfig::provider`] at startup. There is no fallback between
//! providers.

mod remote;
mod synthetic;

pub use remote::RemoteQuoteProvider;
pub use synthetic::SyntheticQuoteProvider;

use crate::config::{ConfigError, MarketDataConfig, QuoteProviderKind};
use crate::error::QuoteError;
use crate::models::MarketQuote;
use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// Quote returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QuotePayload {
    /// Locally generated quote.
    Synthetic(MarketQuote),
    /// Upstream body, forwarded unmodified.
    Upstream(serde_json::Value),
}

/// Source of market quotes for a ticker symbol.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Provider name for logging.
    fn name(&self) -> &'static str;

    /// Fetches the current quote for `symbol`.
    ///
    /// # Errors
    /// Returns [`QuoteError`] if the upstream is unreachable, answers with a
    /// non-success status, or returns a body that is not JSON.
    async fn get_quote(&self, symbol: &str) -> Result<QuotePayload, QuoteError>;
}

/// Shared handle to the active provider.
pub type SharedQuoteProvider = Arc<dyn QuoteProvider>;

/// Builds the provider selected by the configuration.
///
/// # Errors
/// Returns error if the remote provider cannot be constructed.
pub fn build_provider(config: &MarketDataConfig) -> Result<SharedQuoteProvider, ConfigError> {
    match config.provider {
        QuoteProviderKind::Synthetic => {
            let provider = match config.seed {
                Some(seed) => SyntheticQuoteProvider::with_seed(seed),
                None => SyntheticQuoteProvider::new(),
            };
            Ok(Arc::new(provider))
        }
        QuoteProviderKind::Remote => {
            let api_key = config.api_key.clone().ok_or_else(|| {
                ConfigError::InvalidValue("remote quote provider requires an api_key".to_string())
            })?;
            let provider = RemoteQuoteProvider::new(
                &config.base_url,
                api_key,
                Duration::from_millis(config.timeout_ms),
            )?;
            Ok(Arc::new(provider))
        }
    }
}
