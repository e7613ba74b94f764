//! API request handlers.

use crate::error::ApiError;
use crate::market::QuotePayload;
use crate::models::{
    CreateFuturesContractRequest, CreateInventoryRequest, FUTURES_FIELDS_MESSAGE, FuturesContract,
    HealthResponse, INVENTORY_FIELDS_MESSAGE, InventoryRecord, MarketQuote, PricingRequest,
    PurchasePriceResponse,
};
use crate::pricing::PRICING_FIELDS_MESSAGE;
use crate::state::AppState;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::{StatusCode, Uri};
use std::sync::Arc;
use tracing::debug;


/// Unwraps a JSON body, reporting any parse or type failure as a
/// validation error with the endpoint's field list.
fn parse_body<T>(
    payload: Result<Json<T>, JsonRejection>,
    fields_message: &str,
) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(|rejection| {
        debug!("Rejected request body: {}", rejection.body_text());
        ApiError::Validation(fields_message.to_string())
    })
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Inventory
// ============================================================================

/// Add an inventory record.
#[utoipa::path(
    post,
    path = "/inventory",
    request_body = CreateInventoryRequest,
    responses(
        (status = 201, description = "Inventory record created", body = InventoryRecord),
        (status = 400, description = "Missing or mistyped field")
    ),
    tag = "Inventory"
)]
pub async fn create_inventory(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateInventoryRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<InventoryRecord>), ApiError> {
    let draft = parse_body(payload, INVENTORY_FIELDS_MESSAGE)?.validate()?;
    let record = state.inventory.create(draft);
    Ok((StatusCode::CREATED, Json(record)))
}

/// List all inventory records.
#[utoipa::path(
    get,
    path = "/inventory",
    responses(
        (status = 200, description = "Inventory records in creation order", body = [InventoryRecord])
    ),
    tag = "Inventory"
)]
pub async fn list_inventory(State(state): State<Arc<AppState>>) -> Json<Vec<InventoryRecord>> {
    Json(state.inventory.list_all())
}

// ============================================================================
// Market Data
// ============================================================================

/// Get a market quote for a symbol.
#[utoipa::path(
    get,
    path = "/market/{symbol}",
    params(
        ("symbol" = String, Path, description = "Ticker symbol (e.g., HG=F for copper futures)")
    ),
    responses(
        (status = 200, description = "Quote from the active provider", body = MarketQuote),
        (status = 500, description = "Upstream market data failure")
    ),
    tag = "Market Data"
)]
pub async fn get_market_quote(
    State(state): State<Arc<AppState>>,
    Path(symbol): Path<String>,
) -> Result<Json<QuotePayload>, ApiError> {
    let quote = state.quotes.get_quote(&symbol).await?;
    Ok(Json(quote))
}

// ============================================================================
// Pricing
// ============================================================================

/// Calculate a purchase price.
///
/// `marketPrice * (1 + adjustmentFactor) + operationalCosts + hedgingImpact`
#[utoipa::path(
    post,
    path = "/pricing/calculate",
    request_body = PricingRequest,
    responses(
        (status = 200, description = "Computed purchase price", body = PurchasePriceResponse),
        (status = 400, description = "An input is missing or not a number")
    ),
    tag = "Pricing"
)]
pub async fn calculate_price(
    payload: Result<Json<PricingRequest>, JsonRejection>,
) -> Result<Json<PurchasePriceResponse>, ApiError> {
    let request = parse_body(payload, PRICING_FIELDS_MESSAGE)?;
    let purchase_price = request.purchase_price()?;
    Ok(Json(PurchasePriceResponse { purchase_price }))
}

// ============================================================================
// Futures Contracts
// ============================================================================

/// Record a futures contract.
#[utoipa::path(
    post,
    path = "/futures",
    request_body = CreateFuturesContractRequest,
    responses(
        (status = 201, description = "Futures contract created", body = FuturesContract),
        (status = 400, description = "Missing or mistyped field")
    ),
    tag = "Futures"
)]
pub async fn create_futures_contract(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateFuturesContractRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<FuturesContract>), ApiError> {
    let draft = parse_body(payload, FUTURES_FIELDS_MESSAGE)?.validate()?;
    let contract = state.futures.create(draft);
    Ok((StatusCode::CREATED, Json(contract)))
}

/// List all futures contracts.
#[utoipa::path(
    get,
    path = "/futures",
    responses(
        (status = 200, description = "Futures contracts in creation order", body = [FuturesContract])
    ),
    tag = "Futures"
)]
pub async fn list_futures_contracts(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<FuturesContract>> {
    Json(state.futures.list_all())
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
