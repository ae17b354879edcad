//! Market configuration: threshold intensity and carbon price.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::credit_position::errors::CreditPositionError;

/// Benchmark intensity and credit price applied to every company in a run.
///
/// Only constructible through [`MarketConfiguration::new`], so a value in hand
/// is always non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketConfiguration {
    threshold_intensity: Decimal,
    carbon_price: Decimal,
}

impl MarketConfiguration {
    /// Validate and build a configuration.
    pub fn new(
        threshold_intensity: Decimal,
        carbon_price: Decimal,
    ) -> Result<Self, CreditPositionError> {
        if threshold_intensity < Decimal::ZERO {
            return Err(CreditPositionError::InvalidConfiguration {
                field: "threshold_intensity",
                value: threshold_intensity,
            });
        }
        if carbon_price < Decimal::ZERO {
            return Err(CreditPositionError::InvalidConfiguration {
                field: "carbon_price",
                value: carbon_price,
            });
        }
        Ok(Self {
            threshold_intensity,
            carbon_price,
        })
    }

    /// Regulatory/benchmark emission intensity (tCO2 per revenue-million).
    #[must_use]
    pub const fn threshold_intensity(&self) -> Decimal {
        self.threshold_intensity
    }

    /// Currency per tCO2.
    #[must_use]
    pub const fn carbon_price(&self) -> Decimal {
        self.carbon_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn accepts_zero_values() {
        let market = MarketConfiguration::new(dec!(0), dec!(0)).unwrap();
        assert!(market.threshold_intensity().is_zero());
        assert!(market.carbon_price().is_zero());
    }

    #[test]
    fn rejects_negative_threshold() {
        let err = MarketConfiguration::new(dec!(-20), dec!(50)).unwrap_err();
        assert_eq!(
            err,
            CreditPositionError::InvalidConfiguration {
                field: "threshold_intensity",
                value: dec!(-20),
            }
        );
    }

    #[test]
    fn rejects_negative_price() {
        let err = MarketConfiguration::new(dec!(20), dec!(-0.01)).unwrap_err();
        assert!(matches!(
            err,
            CreditPositionError::InvalidConfiguration {
                field: "carbon_price",
                ..
            }
        ));
    }
}
