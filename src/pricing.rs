//! Purchase price calculation for scrap-metal lots.

use crate::error::ValidationError;
use crate::models::PricingRequest;

/// Field list reported when pricing inputs are rejected.
pub const PRICING_FIELDS_MESSAGE: &str = "All inputs (marketPrice, adjustmentFactor, operationalCosts, hedgingImpact) must be numbers.";

/// Calculates the price paid for a lot.
///
/// `market_price * (1 + adjustment_factor) + operational_costs + hedging_impact`,
/// returned at full floating-point precision.
///
/// # Arguments
/// * `market_price` - Current market price of the commodity
/// * `adjustment_factor` - Relative adjustment (e.g., 0.1 for +10%)
/// * `operational_costs` - Handling and processing costs
/// * `hedging_impact` - Cost or credit from the hedge position
///
/// # Errors
/// Returns [`ValidationError`] naming all four inputs if any of them is NaN.
pub fn calculate_purchase_price(
    market_price: f64,
    adjustment_factor: f64,
    operational_costs: f64,
    hedging_impact: f64,
) -> Result<f64, ValidationError> {
    if [market_price, adjustment_factor, operational_costs, hedging_impact]
        .iter()
        .any(|v| v.is_nan())
    {
        return Err(ValidationError::new(PRICING_FIELDS_MESSAGE));
    }

    Ok(market_price * (1.0 + adjustment_factor) + operational_costs + hedging_impact)
}

impl PricingRequest {
    /// Validates every input and applies [`calculate_purchase_price`].
    ///
    /// # Errors
    /// Returns [`ValidationError`] if any input is missing or not numeric.
    pub fn purchase_price(&self) -> Result<f64, ValidationError> {
        match (
            self.market_price,
            self.adjustment_factor,
            self.operational_costs,
            self.hedging_impact,
        ) {
            (Some(m), Some(a), Some(o), Some(h)) => calculate_purchase_price(m, a, o, h),
            _ => Err(ValidationError::new(PRICING_FIELDS_MESSAGE)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_example() {
        let price = calculate_purchase_price(100.0, 0.1, 5.0, 2.0).unwrap();
        assert_eq!(price, 100.0 * (1.0 + 0.1) + 5.0 + 2.0);
        assert!((price - 117.0).abs() < 1e-9);
    }

    #[test]
    fn test_matches_formula_exactly() {
        let cases = [
            (0.0, 0.0, 0.0, 0.0),
            (3.85, -0.25, 0.12, -0.04),
            (9350.0, 0.035, 120.0, 45.5),
            (1e6, 1e-3, 1e2, -1e2),
            (-10.0, 2.5, -3.0, 7.25),
        ];

        for (m, a, o, h) in cases {
            let price = calculate_purchase_price(m, a, o, h).unwrap();
            assert_eq!(price, m * (1.0 + a) + o + h, "inputs {m} {a} {o} {h}");
        }
    }

    #[test]
    fn test_no_rounding_applied() {
        let price = calculate_purchase_price(1.0, 1.0 / 3.0, 0.0, 0.0).unwrap();
        assert_eq!(price, 1.0 + 1.0 / 3.0);
    }

    #[test]
    fn test_nan_rejected_with_full_field_list() {
        for position in 0..4 {
            let mut inputs = [1.0, 0.1, 2.0, 3.0];
            inputs[position] = f64::NAN;

            let err =
                calculate_purchase_price(inputs[0], inputs[1], inputs[2], inputs[3]).unwrap_err();
            assert_eq!(err.0, PRICING_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn test_request_missing_field() {
        let request = PricingRequest {
            market_price: Some(100.0),
            adjustment_factor: Some(0.1),
            operational_costs: None,
            hedging_impact: Some(2.0),
        };

        let err = request.purchase_price().unwrap_err();
        assert!(err.0.contains("marketPrice"));
        assert!(err.0.contains("adjustmentFactor"));
        assert!(err.0.contains("operationalCosts"));
        assert!(err.0.contains("hedgingImpact"));
    }

    #[test]
    fn test_request_complete() {
        let request = PricingRequest {
            market_price: Some(200.0),
            adjustment_factor: Some(-0.5),
            operational_costs: Some(10.0),
            hedging_impact: Some(-5.0),
        };

        assert_eq!(request.purchase_price().unwrap(), 105.0);
    }
}
