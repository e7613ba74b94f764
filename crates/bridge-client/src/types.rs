//! Request and response types for the BRidge API.

use serde::{Deserialize, Serialize};


// ============================================================================
// Health
// ============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Error body returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Error code.
    pub code: String,
}

// ============================================================================
// Inventory
// ============================================================================

/// Request to add an inventory record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInventoryRequest {
    /// Metal type.
    #[serde(rename = "type")]
    pub metal_type: String,
    /// Quantity.
    pub quantity: f64,
    /// Material condition.
    pub condition: String,
}

/// Stored inventory record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    /// Sequential identifier.
    pub id: u64,
    /// Metal type.
    #[serde(rename = "type")]
    pub metal_type: String,
    /// Quantity.
    pub quantity: f64,
    /// Material condition.
    pub condition: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}

// ============================================================================
// Market Data
// ============================================================================

/// Quote produced by the synthetic provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketQuote {
    /// Ticker symbol.
    pub symbol: String,
    /// Last traded price.
    pub last_price: f64,
    /// Absolute change.
    pub change: f64,
    /// Percentage change.
    pub change_percent: f64,
}

// ============================================================================
// Pricing
// ============================================================================

/// Inputs of the purchase price formula.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    /// Current market price.
    pub market_price: f64,
    /// Relative adjustment (0.1 = +10%).
    pub adjustment_factor: f64,
    /// Operational costs.
    pub operational_costs: f64,
    /// Hedging impact.
    pub hedging_impact: f64,
}

/// Computed purchase price.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePriceResponse {
    /// Purchase price.
    pub purchase_price: f64,
}

// ============================================================================
// Futures
// ============================================================================

/// Request to record a futures contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFuturesContractRequest {
    /// Commodity.
    pub commodity: String,
    /// Contract quantity.
    pub quantity: f64,
    /// Expiration date.
    pub expiration_date: String,
    /// Target price.
    pub target_price: f64,
    /// Position direction, conventionally "long" or "short".
    pub contract_type: String,
}

/// Stored futures contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuturesContract {
    /// Sequential identifier.
    pub id: u64,
    /// Commodity.
    pub commodity: String,
    /// Contract quantity.
    pub quantity: f64,
    /// Expiration date.
    pub expiration_date: String,
    /// Target price.
    pub target_price: f64,
    /// Position direction.
    pub contract_type: String,
    /// Creation timestamp (RFC 3339).
    pub created_at: String,
}
