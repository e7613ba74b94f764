//! Fictional quote generator.

use super::{QuotePayload, QuoteProvider};
use crate::error::QuoteError;
use crate::models::MarketQuote;
use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates uniformly distributed quotes:
/// `lastPrice` in [100, 150], `change` in [0, 5], `changePercent` in [0, 2],
/// each rounded to two decimals.
pub struct SyntheticQuoteProvider {
    rng: Mutex<StdRng>,
}

impl SyntheticQuoteProvider {
    /// Creates a generator seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Creates a generator with a fixed seed, for reproducible sequences.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Generates the next quote for `symbol`.
    pub fn generate(&self, symbol: &str) -> MarketQuote {
        let mut rng = self.rng.lock();
        MarketQuote {
            symbol: symbol.to_string(),
            last_price: round_cents(rng.gen_range(100.0..=150.0)),
            change: round_cents(rng.gen_range(0.0..=5.0)),
            change_percent: round_cents(rng.gen_range(0.0..=2.0)),
        }
    }
}

impl Default for SyntheticQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for SyntheticQuoteProvider {
    fn name(&self) -> &'static str {
        "synthetic"
    }

    async fn get_quote(&self, symbol: &str) -> Result<QuotePayload, QuoteError> {
        Ok(QuotePayload::Synthetic(self.generate(symbol)))
    }
}

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
