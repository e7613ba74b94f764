//! Application state management.

use crate::config::{Config, ConfigError};
use crate::market::{SharedQuoteProvider, SyntheticQuoteProvider, build_provider};
use crate::models::{FuturesContract, InventoryRecord};
use crate::store::{InMemoryStore, RecordStore};
use std::sync::Arc;
use tracing::info;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Inventory record store.
    pub inventory: Arc<dyn RecordStore<InventoryRecord>>,
    /// Futures contract store.
    pub futures: Arc<dyn RecordStore<FuturesContract>>,
    /// Active market quote provider.
    pub quotes: SharedQuoteProvider,
}

impl AppState {
    /// Creates a new application state with empty in-memory stores and the
    /// given quote provider.
    #[must_use]
    pub fn new(quotes: SharedQuoteProvider) -> Self {
        Self::with_stores(
            Arc::new(InMemoryStore::<InventoryRecord>::new()),
            Arc::new(InMemoryStore::<FuturesContract>::new()),
            quotes,
        )
    }

    /// Creates a new application state from explicit components.
    #[must_use]
    pub fn with_stores(
        inventory: Arc<dyn RecordStore<InventoryRecord>>,
        futures: Arc<dyn RecordStore<FuturesContract>>,
        quotes: SharedQuoteProvider,
    ) -> Self {
        Self {
            inventory,
            futures,
            quotes,
        }
    }

    /// Creates a new application state from configuration.
    ///
    /// # Errors
    /// Returns error if the configured quote provider cannot be built.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let quotes = build_provider(&config.market_data)?;
        info!("Using {} quote provider", quotes.name());
        Ok(Self::new(quotes))
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(SyntheticQuoteProvider::new()))
    }
}
