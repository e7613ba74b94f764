//! # BRidge Backend - Scrap-Metal Pricing REST API
//!
//! A REST API backend for a scrap-metal yard: it keeps an inventory of metal
//! lots, exposes commodity market quotes, computes purchase prices, and
//! records futures contracts. Built with [Axum](https://crates.io/crates/axum)
//! and documented with [utoipa](https://crates.io/crates/utoipa).
//!
//! ## Key Features
//!
//! - **Inventory and Contract Records**: Append-only stores with sequential
//!   identifiers per record kind, safe under concurrent requests.
//!
//! - **Purchase Pricing**: `marketPrice * (1 + adjustmentFactor) +
//!   operationalCosts + hedgingImpact`, unrounded.
//!
//! - **Pluggable Market Data**: A remote provider that forwards an upstream
//!   quotes API, or a synthetic provider generating fictional quotes. One is
//!   chosen at startup.
//!
//! - **OpenAPI Documentation**: Swagger UI at `/swagger-ui/`.
//!
//! - **Structured Logging**: Request tracing with `tower-http`.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`api`] | Route handlers and router configuration |
//! | [`config`] | TOML and environment configuration |
//! | [`error`] | Error types with `IntoResponse` implementation |
//! | [`market`] | Quote providers |
//! | [`models`] | Records and request/response DTOs |
//! | [`pricing`] | Purchase price formula |
//! | [`state`] | Application state management |
//! | [`store`] | Append-only record storage |
//!
//! ## API Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/inventory` | Add an inventory record |
//! | GET | `/inventory` | List inventory records |
//! | GET | `/market/{symbol}` | Get a market quote |
//! | POST | `/pricing/calculate` | Calculate a purchase price |
//! | POST | `/futures` | Record a futures contract |
//! | GET | `/futures` | List futures contracts |
//!
//! ## Example Usage
//!
//! ```bash
//! # Synthetic quotes on the default port 3000
//! cargo run
//!
//! # Remote quotes
//! QUOTE_PROVIDER=remote TD_API_KEY=... PORT=4000 cargo run
//! ```
//!
//! ```bash
//! curl -X POST http://localhost:3000/inventory \
//!   -H "Content-Type: application/json" \
//!   -d '{"type": "copper", "quantity": 1200, "condition": "clean"}'
//!
//! curl -X POST http://localhost:3000/pricing/calculate \
//!   -H "Content-Type: application/json" \
//!   -d '{"marketPrice": 100, "adjustmentFactor": 0.1, "operationalCosts": 5, "hedgingImpact": 2}'
//!
//! curl http://localhost:3000/market/HG=F
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod market;
pub mod models;
pub mod pricing;
pub mod state;
pub mod store;
