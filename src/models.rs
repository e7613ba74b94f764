//! Request and response models for the REST API.

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Field list reported when an inventory payload is rejected.
pub const INVENTORY_FIELDS_MESSAGE: &str = "Please provide type, numeric quantity, and condition.";

/// Field list reported when a futures payload is rejected.
pub const FUTURES_FIELDS_MESSAGE: &str = "Please provide commodity, numeric quantity, expirationDate, numeric targetPrice, and contractType (e.g., \"long\" or \"short\").";

// ============================================================================
// Records
// ============================================================================

/// A scrap-metal lot held in inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    /// Sequential identifier, starting at 1.
    pub id: u64,
    /// Metal type (e.g., "copper", "aluminum").
    #[serde(rename = "type")]
    pub metal_type: String,
    /// Quantity on hand.
    pub quantity: f64,
    /// Material condition (e.g., "clean", "mixed").
    pub condition: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A validated inventory record that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInventoryRecord {
    /// Metal type.
    pub metal_type: String,
    /// Quantity on hand.
    pub quantity: f64,
    /// Material condition.
    pub condition: String,
}

/// A recorded futures contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FuturesContract {
    /// Sequential identifier, independent of inventory identifiers.
    pub id: u64,
    /// Commodity the contract is written on.
    pub commodity: String,
    /// Contract quantity.
    pub quantity: f64,
    /// Expiration date as supplied by the client.
    pub expiration_date: String,
    /// Target price.
    pub target_price: f64,
    /// Position direction, conventionally "long" or "short".
    pub contract_type: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// A validated futures contract that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFuturesContract {
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
}

// ============================================================================
// Market Data
// ============================================================================

/// Normalized quote snapshot for a ticker symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
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
// Requests
// ============================================================================

/// Request to add an inventory record.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateInventoryRequest {
    /// Metal type.
    #[serde(rename = "type", default)]
    pub metal_type: Option<String>,
    /// Quantity, must be a JSON number.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Material condition.
    #[serde(default)]
    pub condition: Option<String>,
}

impl CreateInventoryRequest {
    /// Checks presence and types of every field.
    ///
    /// # Errors
    /// Returns [`ValidationError`] listing the expected fields if any is
    /// missing, empty, or not a number.
    pub fn validate(self) -> Result<NewInventoryRecord, ValidationError> {
        match (
            non_empty(self.metal_type),
            self.quantity.filter(|q| !q.is_nan()),
            non_empty(self.condition),
        ) {
            (Some(metal_type), Some(quantity), Some(condition)) => Ok(NewInventoryRecord {
                metal_type,
                quantity,
                condition,
            }),
            _ => Err(ValidationError::new(INVENTORY_FIELDS_MESSAGE)),
        }
    }
}

/// Request to record a futures contract.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFuturesContractRequest {
    /// Commodity.
    #[serde(default)]
    pub commodity: Option<String>,
    /// Quantity, must be a JSON number.
    #[serde(default)]
    pub quantity: Option<f64>,
    /// Expiration date.
    #[serde(default)]
    pub expiration_date: Option<String>,
    /// Target price, must be a JSON number.
    #[serde(default)]
    pub target_price: Option<f64>,
    /// Position direction. Any non-empty value is accepted.
    #[serde(default)]
    pub contract_type: Option<String>,
}

impl CreateFuturesContractRequest {
    /// Checks presence and types of every field.
    ///
    /// # Errors
    /// Returns [`ValidationError`] listing the expected fields if any is
    /// missing, empty, or not a number.
    pub fn validate(self) -> Result<NewFuturesContract, ValidationError> {
        match (
            non_empty(self.commodity),
            self.quantity.filter(|q| !q.is_nan()),
            non_empty(self.expiration_date),
            self.target_price.filter(|p| !p.is_nan()),
            non_empty(self.contract_type),
        ) {
            (
                Some(commodity),
                Some(quantity),
                Some(expiration_date),
                Some(target_price),
                Some(contract_type),
            ) => Ok(NewFuturesContract {
                commodity,
                quantity,
                expiration_date,
                target_price,
                contract_type,
            }),
            _ => Err(ValidationError::new(FUTURES_FIELDS_MESSAGE)),
        }
    }
}

/// Inputs of the purchase price formula.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingRequest {
    /// Current market price.
    #[serde(default)]
    pub market_price: Option<f64>,
    /// Relative adjustment applied to the market price (0.1 = +10%).
    #[serde(default)]
    pub adjustment_factor: Option<f64>,
    /// Operational costs added to the adjusted price.
    #[serde(default)]
    pub operational_costs: Option<f64>,
    /// Hedging impact added to the adjusted price.
    #[serde(default)]
    pub hedging_impact: Option<f64>,
}

// ============================================================================
// Responses
// ============================================================================

/// Result of the purchase price formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PurchasePriceResponse {
    /// Computed purchase price, unrounded.
    pub purchase_price: f64,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inventory_request_valid() {
        let request = CreateInventoryRequest {
            metal_type: Some("copper".to_string()),
            quantity: Some(120.5),
            condition: Some("clean".to_string()),
        };

        let draft = request.validate().expect("should validate");
        assert_eq!(draft.metal_type, "copper");
        assert_eq!(draft.quantity, 120.5);
        assert_eq!(draft.condition, "clean");
    }

    #[test]
    fn test_inventory_request_missing_condition() {
        let request = CreateInventoryRequest {
            metal_type: Some("copper".to_string()),
            quantity: Some(1.0),
            condition: None,
        };

        let err = request.validate().unwrap_err();
        assert_eq!(err.0, INVENTORY_FIELDS_MESSAGE);
    }

    #[test]
    fn test_inventory_request_empty_type() {
        let request = CreateInventoryRequest {
            metal_type: Some(String::new()),
            quantity: Some(1.0),
            condition: Some("mixed".to_string()),
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_inventory_request_zero_and_negative_quantity_accepted() {
        for quantity in [0.0, -3.0] {
            let request = CreateInventoryRequest {
                metal_type: Some("brass".to_string()),
                quantity: Some(quantity),
                condition: Some("mixed".to_string()),
            };
            assert!(request.validate().is_ok());
        }
    }

    #[test]
    fn test_inventory_request_rejects_string_quantity() {
        let result = serde_json::from_str::<CreateInventoryRequest>(
            r#"{"type":"copper","quantity":"5","condition":"clean"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_inventory_request_deserializes_type_field() {
        let request: CreateInventoryRequest =
            serde_json::from_str(r#"{"type":"steel","quantity":3,"condition":"rusty"}"#).unwrap();
        assert_eq!(request.metal_type.as_deref(), Some("steel"));
        assert_eq!(request.quantity, Some(3.0));
    }

    #[test]
    fn test_futures_request_any_contract_type() {
        let request = CreateFuturesContractRequest {
            commodity: Some("HG=F".to_string()),
            quantity: Some(25000.0),
            expiration_date: Some("2025-12-31".to_string()),
            target_price: Some(4.12),
            contract_type: Some("straddle".to_string()),
        };

        let draft = request.validate().expect("should validate");
        assert_eq!(draft.contract_type, "straddle");
    }

    #[test]
    fn test_futures_request_missing_contract_type() {
        let request = CreateFuturesContractRequest {
            commodity: Some("HG=F".to_string()),
            quantity: Some(25000.0),
            expiration_date: Some("2025-12-31".to_string()),
            target_price: Some(4.12),
            contract_type: None,
        };

        let err = request.validate().unwrap_err();
        assert_eq!(err.0, FUTURES_FIELDS_MESSAGE);
    }

    #[test]
    fn test_futures_request_camel_case_fields() {
        let request: CreateFuturesContractRequest = serde_json::from_str(
            r#"{"commodity":"ALI","quantity":5,"expirationDate":"2026-03-01","targetPrice":2400,"contractType":"short"}"#,
        )
        .unwrap();

        assert_eq!(request.expiration_date.as_deref(), Some("2026-03-01"));
        assert_eq!(request.target_price, Some(2400.0));
        assert_eq!(request.contract_type.as_deref(), Some("short"));
    }

    #[test]
    fn test_inventory_record_serialization() {
        let record = InventoryRecord {
            id: 1,
            metal_type: "copper".to_string(),
            quantity: 10.0,
            condition: "clean".to_string(),
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["type"], "copper");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("metal_type").is_none());
    }

    #[test]
    fn test_market_quote_serialization() {
        let quote = MarketQuote {
            symbol: "HG=F".to_string(),
            last_price: 123.45,
            change: 1.5,
            change_percent: 0.75,
        };

        let json = serde_json::to_string(&quote).unwrap();
        assert!(json.contains("\"lastPrice\":123.45"));
        assert!(json.contains("\"changePercent\":0.75"));
    }
}
