//! Configuration module for loading TOML configuration files and
//! environment overrides.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Default upstream for the remote quote provider.
pub const DEFAULT_MARKET_DATA_URL: &str = "https://api.tdameritrade.com";

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse TOML configuration.
    #[error("failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// Invalid configuration value.
    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Market data configuration.
    pub market_data: MarketDataConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port number to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

/// Which quote provider serves `/market/{symbol}`.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuoteProviderKind {
    /// Forward quotes from the upstream market-data API.
    Remote,
    /// Generate fictional quotes locally.
    #[default]
    Synthetic,
}

impl std::str::FromStr for QuoteProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "synthetic" => Ok(Self::Synthetic),
            other => Err(ConfigError::InvalidValue(format!(
                "unknown quote provider: {}. Use 'remote' or 'synthetic'",
                other
            ))),
        }
    }
}

impl std::fmt::Display for QuoteProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Remote => write!(f, "remote"),
            Self::Synthetic => write!(f, "synthetic"),
        }
    }
}

/// Market data configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MarketDataConfig {
    /// Active quote provider.
    pub provider: QuoteProviderKind,
    /// Base URL of the upstream market-data API.
    pub base_url: String,
    /// Pre-shared API key for the upstream.
    pub api_key: Option<String>,
    /// Timeout for upstream requests in milliseconds.
    pub timeout_ms: u64,
    /// Seed for the synthetic generator. Unseeded uses OS entropy.
    pub seed: Option<u64>,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            provider: QuoteProviderKind::Synthetic,
            base_url: DEFAULT_MARKET_DATA_URL.to_string(),
            api_key: None,
            timeout_ms: 10_000,
            seed: None,
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file.
    ///
    /// # Errors
    /// Returns error if file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// Values are not validated here, since environment overrides may still
    /// supply them. Call [`Config::validate`] or [`Config::apply_env_overrides`]
    /// before use.
    ///
    /// # Errors
    /// Returns error if content cannot be parsed.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Builds the runtime configuration: optional `CONFIG_PATH` file, then
    /// environment overrides.
    ///
    /// # Errors
    /// Returns error if the file is unreadable or a value is invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match std::env::var("CONFIG_PATH") {
            Ok(path) => Self::load(path)?,
            Err(_) => Self::default(),
        };
        base.apply_env_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from a variable lookup, then validates.
    ///
    /// Recognised keys: `HOST`, `PORT`, `QUOTE_PROVIDER`, `TD_API_KEY`,
    /// `MARKET_DATA_BASE_URL`, `MARKET_DATA_TIMEOUT_MS`, `SYNTHETIC_QUOTE_SEED`.
    ///
    /// # Errors
    /// Returns error if a value cannot be parsed or the result is invalid.
    pub fn apply_env_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = parse_number("PORT", &port)?;
        }
        if let Some(provider) = lookup("QUOTE_PROVIDER") {
            self.market_data.provider = provider.parse()?;
        }
        if let Some(key) = lookup("TD_API_KEY") {
            self.market_data.api_key = Some(key);
        }
        if let Some(url) = lookup("MARKET_DATA_BASE_URL") {
            self.market_data.base_url = url;
        }
        if let Some(timeout) = lookup("MARKET_DATA_TIMEOUT_MS") {
            self.market_data.timeout_ms = parse_number("MARKET_DATA_TIMEOUT_MS", &timeout)?;
        }
        if let Some(seed) = lookup("SYNTHETIC_QUOTE_SEED") {
            self.market_data.seed = Some(parse_number("SYNTHETIC_QUOTE_SEED", &seed)?);
        }

        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] describing the first invalid value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidValue(
                "server port must be non-zero".to_string(),
            ));
        }

        let market = &self.market_data;
        if market.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "market_data timeout_ms must be positive".to_string(),
            ));
        }

        if market.provider == QuoteProviderKind::Remote {
            if market.api_key.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::InvalidValue(
                    "remote quote provider requires an api_key (TD_API_KEY)".to_string(),
                ));
            }
            if url::Url::parse(&market.base_url).is_err() {
                return Err(ConfigError::InvalidValue(format!(
                    "market_data base_url is not a valid URL: {}",
                    market.base_url
                )));
            }
        }

        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue(format!("{} must be a valid number", key)))
}
