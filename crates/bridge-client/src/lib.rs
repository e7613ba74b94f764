//! HTTP client library for the BRidge API.
//!
//! This crate provides a typed HTTP client for the BRidge scrap-metal pricing
//! backend: inventory records, market quotes, purchase pricing and futures
//! contracts.
//!
//! # Example
//!
//! ```no_run
//! use bridge_client::{BridgeClient, ClientConfig, CreateInventoryRequest};
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), bridge_client::Error> {
//!     let client = BridgeClient::new(ClientConfig {
//!         base_url: "http://localhost:3000".into(),
//!         timeout: Duration::from_secs(30),
//!     })?;
//!
//!     let record = client
//!         .create_inventory(&CreateInventoryRequest {
//!             metal_type: "copper".into(),
//!             quantity: 1200.0,
//!             condition: "clean".into(),
//!         })
//!         .await?;
//!     println!("Created inventory record {}", record.id);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::{BridgeClient, ClientConfig};
pub use error::Error;
pub use types::*;
