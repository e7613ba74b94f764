//! Route configuration.

use crate::api::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Creates the API router with permissive CORS.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Inventory
        .route(
            "/inventory",
            post(handlers::create_inventory).get(handlers::list_inventory),
        )
        // Market data
        .route("/market/{symbol}", get(handlers::get_market_quote))
        // Pricing
        .route("/pricing/calculate", post(handlers::calculate_price))
        // Futures contracts
        .route(
            "/futures",
            post(handlers::create_futures_contract).get(handlers::list_futures_contracts),
        )
        .fallback(handlers::not_found)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
