//! Integration tests for the BRidge API.
//!
//! By default each test starts its own server in-process on an ephemeral port,
//! so record identifiers start at 1 in every test. Set `API_BASE_URL` to run
//! the suite against an already running server instead.

use bridge_backend::api::create_router;
use bridge_backend::market::SyntheticQuoteProvider;
use bridge_backend::state::AppState;
use bridge_client::{BridgeClient, ClientConfig};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;

/// Gets the external API base URL from the environment, if configured.
#[must_use]
pub fn external_api_url() -> Option<String> {
    std::env::var("API_BASE_URL").ok()
}

/// Starts a server with fresh state and synthetic quotes.
///
/// # Panics
/// Panics if no local port can be bound.
pub async fn spawn_server() -> String {
    let state = Arc::new(AppState::new(Arc::new(SyntheticQuoteProvider::new())));
    let app = create_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("Listener has no address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Test server failed");
    });

    format!("http://{}", addr)
}

/// Creates a test client, starting a local server unless `API_BASE_URL` is set.
///
/// # Errors
/// Returns error if client creation fails.
pub async fn create_test_client() -> Result<BridgeClient, bridge_client::Error> {
    let base_url = match external_api_url() {
        Some(url) => url,
        None => spawn_server().await,
    };

    BridgeClient::new(ClientConfig {
        base_url,
        timeout: Duration::from_secs(10),
    })
}

/// Whether tests run against a fresh in-process server.
///
/// Assertions on exact identifiers only hold when this is true.
#[must_use]
pub fn fresh_server() -> bool {
    external_api_url().is_none()
}
