//! Derived emission and credit figures for one company.

use serde::Serialize;

use super::{CompanyRecord, CreditStatus, MarketConfiguration};
use crate::domain::credit_position::errors::CreditPositionError;
use crate::domain::shared::{Money, Tonnes};

/// A company's position under the simulated credit market.
///
/// Built once by [`CompanyResult::compute`] and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyResult {
    record: CompanyRecord,
    emissions: Tonnes,
    target_emissions: Tonnes,
    excess_emissions: Tonnes,
    available_credits: Tonnes,
    status: CreditStatus,
    buy_cost: Money,
    sell_revenue: Money,
    net_position: Money,
}

impl CompanyResult {
    /// Derive all figures for `record` under `market`.
    ///
    /// The record is assumed to have passed [`CompanyRecord::validate`].
    pub fn compute(
        record: &CompanyRecord,
        market: &MarketConfiguration,
    ) -> Result<Self, CreditPositionError> {
        let overflow = |quantity: &'static str| CreditPositionError::ArithmeticOverflow {
            company: record.name.clone(),
            quantity,
        };

        let emissions = Tonnes::from_intensity(record.intensity, record.revenue_million)
            .ok_or_else(|| overflow("emissions"))?;
        let target_emissions =
            Tonnes::from_intensity(market.threshold_intensity(), record.revenue_million)
                .ok_or_else(|| overflow("target_emissions"))?;

        let excess_emissions = Tonnes::clipped_difference(emissions, target_emissions);
        let available_credits = Tonnes::clipped_difference(target_emissions, emissions);

        // Strict comparison: emissions exactly on target count as below threshold.
        let status = if excess_emissions.is_positive() {
            CreditStatus::Excess
        } else {
            CreditStatus::BelowThreshold
        };

        let buy_cost = Money::price(excess_emissions, market.carbon_price())
            .ok_or_else(|| overflow("buy_cost"))?;
        let sell_revenue = Money::price(available_credits, market.carbon_price())
            .ok_or_else(|| overflow("sell_revenue"))?;
        let net_position = sell_revenue - buy_cost;

        Ok(Self {
            record: record.clone(),
            emissions,
            target_emissions,
            excess_emissions,
            available_credits,
            status,
            buy_cost,
            sell_revenue,
            net_position,
        })
    }

    /// The input record.
    #[must_use]
    pub const fn record(&self) -> &CompanyRecord {
        &self.record
    }

    /// Company name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.record.name
    }

    /// Sector label.
    #[must_use]
    pub fn sector(&self) -> &str {
        &self.record.sector
    }

    /// `intensity * revenue_million`.
    #[must_use]
    pub const fn emissions(&self) -> Tonnes {
        self.emissions
    }

    /// `threshold_intensity * revenue_million`.
    #[must_use]
    pub const fn target_emissions(&self) -> Tonnes {
        self.target_emissions
    }

    /// `max(0, emissions - target)`.
    #[must_use]
    pub const fn excess_emissions(&self) -> Tonnes {
        self.excess_emissions
    }

    /// `max(0, target - emissions)`.
    #[must_use]
    pub const fn available_credits(&self) -> Tonnes {
        self.available_credits
    }

    /// Buyer or seller classification.
    #[must_use]
    pub const fn status(&self) -> CreditStatus {
        self.status
    }

    /// Cost of covering the excess at the carbon price.
    #[must_use]
    pub const fn buy_cost(&self) -> Money {
        self.buy_cost
    }

    /// Revenue from selling the available credits.
    #[must_use]
    pub const fn sell_revenue(&self) -> Money {
        self.sell_revenue
    }

    /// `sell_revenue - buy_cost`.
    #[must_use]
    pub const fn net_position(&self) -> Money {
        self.net_position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn market() -> MarketConfiguration {
        MarketConfiguration::new(dec!(20.0), dec!(50.0)).unwrap()
    }

    #[test]
    fn heavy_emitter_is_buyer() {
        let record = CompanyRecord::new("Ferro Works", "Steel", dec!(41.8), dec!(680));
        let result = CompanyResult::compute(&record, &market()).unwrap();

        assert_eq!(result.emissions().amount(), dec!(28424.0));
        assert_eq!(result.target_emissions().amount(), dec!(13600.0));
        assert_eq!(result.excess_emissions().amount(), dec!(14824.0));
        assert!(result.available_credits().is_zero());
        assert_eq!(result.buy_cost().amount(), dec!(741200.0));
        assert!(result.sell_revenue().is_zero());
        assert_eq!(result.net_position().amount(), dec!(-741200.0));
        assert_eq!(result.status(), CreditStatus::Excess);
    }

    #[test]
    fn light_emitter_is_seller() {
        let record = CompanyRecord::new("GreenGrid", "Utilities", dec!(6.8), dec!(1050));
        let result = CompanyResult::compute(&record, &market()).unwrap();

        assert_eq!(result.available_credits().amount(), dec!(13860.0));
        assert_eq!(result.sell_revenue().amount(), dec!(693000.0));
        assert_eq!(result.net_position().amount(), dec!(693000.0));
        assert_eq!(result.status(), CreditStatus::BelowThreshold);
    }

    #[test]
    fn exactly_on_target_is_below_threshold_with_nothing_to_trade() {
        let record = CompanyRecord::new("Par Corp", "Retail", dec!(20.0), dec!(500));
        let result = CompanyResult::compute(&record, &market()).unwrap();

        assert_eq!(result.status(), CreditStatus::BelowThreshold);
        assert!(result.excess_emissions().is_zero());
        assert!(result.available_credits().is_zero());
        assert!(result.net_position().is_zero());
    }

    #[test]
    fn zero_revenue_has_zero_everything() {
        let record = CompanyRecord::new("Shell Co", "Finance", dec!(99), dec!(0));
        let result = CompanyResult::compute(&record, &market()).unwrap();

        assert!(result.emissions().is_zero());
        assert!(result.target_emissions().is_zero());
        assert_eq!(result.status(), CreditStatus::BelowThreshold);
        assert!(result.net_position().is_zero());
    }

    #[test]
    fn overflow_is_reported_not_panicked() {
        let record = CompanyRecord::new("Huge", "Steel", rust_decimal::Decimal::MAX, dec!(2));
        let err = CompanyResult::compute(&record, &market()).unwrap_err();
        assert_eq!(
            err,
            CreditPositionError::ArithmeticOverflow {
                company: "Huge".to_string(),
                quantity: "emissions",
            }
        );
    }
}
