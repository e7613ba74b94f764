//! BRidge Backend Server
//!
//! REST API server for scrap-metal inventory, pricing and futures contracts.

use bridge_backend::api::create_router;
use bridge_backend::config::Config;
use bridge_backend::state::AppState;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use bridge_backend::models::{
    CreateFuturesContractRequest, CreateInventoryRequest, FuturesContract, HealthResponse,
    InventoryRecord, MarketQuote, PricingRequest, PurchasePriceResponse,
};

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        bridge_backend::api::handlers::health_check,
        bridge_backend::api::handlers::create_inventory,
        bridge_backend::api::handlers::list_inventory,
        bridge_backend::api::handlers::get_market_quote,
        bridge_backend::api::handlers::calculate_price,
        bridge_backend::api::handlers::create_futures_contract,
        bridge_backend::api::handlers::list_futures_contracts,
    ),
    components(
        schemas(
            HealthResponse,
            InventoryRecord,
            CreateInventoryRequest,
            MarketQuote,
            PricingRequest,
            PurchasePriceResponse,
            FuturesContract,
            CreateFuturesContractRequest,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Inventory", description = "Scrap-metal inventory records"),
        (name = "Market Data", description = "Commodity market quotes"),
        (name = "Pricing", description = "Purchase price calculation"),
        (name = "Futures", description = "Futures contract records"),
    ),
    info(
        title = "BRidge API",
        version = "0.1.0",
        description = "REST API for scrap-metal inventory, pricing and futures contracts",
        license(name = "MIT")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is not an error
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    // Create application state
    let state = Arc::new(AppState::from_config(&config)?);

    let host = &config.server.host;
    let port = config.server.port;

    info!("Starting BRidge Backend on {}:{}", host, port);
    info!("Swagger UI available at http://{}:{}/swagger-ui/", host, port);

    // Build the router
    let app = create_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    // Start the server
    let addr = format!("{}:{}", host, port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
