//! Sorted batch results with aggregate totals.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;

use super::{CompanyResult, MarketConfiguration};
use crate::domain::credit_position::errors::CreditPositionError;
use crate::domain::shared::{Money, Tonnes};

/// Output of one calculator run.
///
/// Results are sorted ascending by net position, ties in input order.
/// Totals and summaries are computed once, with checked addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositionReport {
    market: MarketConfiguration,
    results: Vec<CompanyResult>,
    total_seller_revenue: Money,
    total_buyer_cost: Money,
    market_summary: MarketSummary,
    sector_summaries: Vec<SectorSummary>,
}

impl PositionReport {
    /// Sort `results` by net position and compute totals and summaries.
    ///
    /// Fails with `ArithmeticOverflow` naming the company whose value no
    /// longer fits an aggregate.
    pub fn new(
        market: MarketConfiguration,
        mut results: Vec<CompanyResult>,
    ) -> Result<Self, CreditPositionError> {
        // Vec::sort_by is stable, which keeps input order for equal net positions.
        results.sort_by(|a, b| a.net_position().cmp(&b.net_position()));

        let mut total_seller_revenue = Money::ZERO;
        let mut total_buyer_cost = Money::ZERO;
        let mut credit_supply = Tonnes::ZERO;
        let mut credit_demand = Tonnes::ZERO;
        let mut buyer_count = 0;
        let mut seller_count = 0;

        for result in &results {
            if result.status().is_buyer() {
                buyer_count += 1;
                total_buyer_cost = total_buyer_cost
                    .checked_add(result.buy_cost())
                    .ok_or_else(|| overflow(result, "total_buyer_cost"))?;
                credit_demand = credit_demand
                    .checked_add(result.excess_emissions())
                    .ok_or_else(|| overflow(result, "credit_demand"))?;
            } else {
                seller_count += 1;
                total_seller_revenue = total_seller_revenue
                    .checked_add(result.sell_revenue())
                    .ok_or_else(|| overflow(result, "total_seller_revenue"))?;
                credit_supply = credit_supply
                    .checked_add(result.available_credits())
                    .ok_or_else(|| overflow(result, "credit_supply"))?;
            }
        }

        let market_summary = MarketSummary {
            buyer_count,
            seller_count,
            credit_supply,
            credit_demand,
            tradable_volume: credit_supply.min(credit_demand),
            residual_demand: Tonnes::clipped_difference(credit_demand, credit_supply),
            residual_supply: Tonnes::clipped_difference(credit_supply, credit_demand),
            // Both totals are non-negative, so the difference always fits.
            net_market_value: total_seller_revenue - total_buyer_cost,
        };

        let sector_summaries = summarize_sectors(&results)?;

        Ok(Self {
            market,
            results,
            total_seller_revenue,
            total_buyer_cost,
            market_summary,
            sector_summaries,
        })
    }

    /// Configuration the report was computed with.
    #[must_use]
    pub const fn market(&self) -> &MarketConfiguration {
        &self.market
    }

    /// All results, ascending by net position.
    #[must_use]
    pub fn results(&self) -> &[CompanyResult] {
        &self.results
    }

    /// Number of companies in the batch.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Returns true for an empty batch.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Sum of sell revenue over `BelowThreshold` companies.
    #[must_use]
    pub const fn total_seller_revenue(&self) -> Money {
        self.total_seller_revenue
    }

    /// Sum of buy cost over `Excess` companies.
    #[must_use]
    pub const fn total_buyer_cost(&self) -> Money {
        self.total_buyer_cost
    }

    /// Credit buyers in report order.
    pub fn buyers(&self) -> impl Iterator<Item = &CompanyResult> {
        self.results.iter().filter(|r| r.status().is_buyer())
    }

    /// Credit sellers in report order.
    pub fn sellers(&self) -> impl Iterator<Item = &CompanyResult> {
        self.results.iter().filter(|r| r.status().is_seller())
    }

    /// Supply/demand view of the simulated credit market.
    #[must_use]
    pub const fn market_summary(&self) -> MarketSummary {
        self.market_summary
    }

    /// Per-sector aggregates, ordered by sector name.
    #[must_use]
    pub fn sector_summaries(&self) -> &[SectorSummary] {
        &self.sector_summaries
    }
}

fn overflow(result: &CompanyResult, quantity: &'static str) -> CreditPositionError {
    CreditPositionError::ArithmeticOverflow {
        company: result.name().to_string(),
        quantity,
    }
}

fn summarize_sectors(
    results: &[CompanyResult],
) -> Result<Vec<SectorSummary>, CreditPositionError> {
    let mut by_sector: BTreeMap<&str, SectorSummary> = BTreeMap::new();

    for result in results {
        by_sector
            .entry(result.sector())
            .or_insert_with(|| SectorSummary::empty(result.sector()))
            .absorb(result)?;
    }

    Ok(by_sector
        .into_values()
        .map(SectorSummary::with_weighted_intensity)
        .collect())
}

/// Aggregate supply and demand across the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MarketSummary {
    /// Companies with excess emissions.
    pub buyer_count: usize,
    /// Companies at or below threshold.
    pub seller_count: usize,
    /// Total credits sellers could offer.
    pub credit_supply: Tonnes,
    /// Total excess buyers must cover.
    pub credit_demand: Tonnes,
    /// `min(supply, demand)`.
    pub tradable_volume: Tonnes,
    /// Demand the batch's sellers cannot cover.
    pub residual_demand: Tonnes,
    /// Supply left over once all demand is met.
    pub residual_supply: Tonnes,
    /// `total_seller_revenue - total_buyer_cost`.
    pub net_market_value: Money,
}

/// Aggregates for one sector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorSummary {
    /// Sector label (empty string for records without one).
    pub sector: String,
    /// Number of companies.
    pub companies: usize,
    /// Combined revenue in millions.
    pub revenue_million: Decimal,
    /// Combined emissions.
    pub emissions: Tonnes,
    /// Combined target emissions.
    pub target_emissions: Tonnes,
    /// Combined excess emissions.
    pub excess_emissions: Tonnes,
    /// Combined available credits.
    pub available_credits: Tonnes,
    /// Combined buy cost.
    pub buy_cost: Money,
    /// Combined sell revenue.
    pub sell_revenue: Money,
    /// Combined net position.
    pub net_position: Money,
    /// Revenue-weighted intensity (`emissions / revenue`); `None` when the sector has no revenue.
    pub weighted_intensity: Option<Decimal>,
}

impl SectorSummary {
    fn empty(sector: &str) -> Self {
        Self {
            sector: sector.to_string(),
            companies: 0,
            revenue_million: Decimal::ZERO,
            emissions: Tonnes::ZERO,
            target_emissions: Tonnes::ZERO,
            excess_emissions: Tonnes::ZERO,
            available_credits: Tonnes::ZERO,
            buy_cost: Money::ZERO,
            sell_revenue: Money::ZERO,
            net_position: Money::ZERO,
            weighted_intensity: None,
        }
    }

    fn absorb(&mut self, result: &CompanyResult) -> Result<(), CreditPositionError> {
        let tonnes = |total: Tonnes, value: Tonnes, quantity| {
            total.checked_add(value).ok_or_else(|| overflow(result, quantity))
        };
        let money = |total: Money, value: Money, quantity| {
            total.checked_add(value).ok_or_else(|| overflow(result, quantity))
        };

        self.revenue_million = self
            .revenue_million
            .checked_add(result.record().revenue_million)
            .ok_or_else(|| overflow(result, "sector_revenue_million"))?;
        self.emissions = tonnes(self.emissions, result.emissions(), "sector_emissions")?;
        self.target_emissions =
            tonnes(self.target_emissions, result.target_emissions(), "sector_target_emissions")?;
        self.excess_emissions =
            tonnes(self.excess_emissions, result.excess_emissions(), "sector_excess_emissions")?;
        self.available_credits = tonnes(
            self.available_credits,
            result.available_credits(),
            "sector_available_credits",
        )?;
        self.buy_cost = money(self.buy_cost, result.buy_cost(), "sector_buy_cost")?;
        self.sell_revenue = money(self.sell_revenue, result.sell_revenue(), "sector_sell_revenue")?;
        self.net_position = money(self.net_position, result.net_position(), "sector_net_position")?;
        self.companies += 1;
        Ok(())
    }

    fn with_weighted_intensity(mut self) -> Self {
        self.weighted_intensity = self.emissions.amount().checked_div(self.revenue_million);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credit_position::value_objects::{CompanyRecord, CreditStatus};
    use rust_decimal_macros::dec;

    fn market() -> MarketConfiguration {
        MarketConfiguration::new(dec!(20), dec!(50)).unwrap()
    }

    fn result(name: &str, sector: &str, intensity: Decimal, revenue: Decimal) -> CompanyResult {
        let record = CompanyRecord::new(name, sector, intensity, revenue);
        CompanyResult::compute(&record, &market()).unwrap()
    }

    fn sample_report() -> PositionReport {
        PositionReport::new(
            market(),
            vec![
                result("Ferro Works", "Steel", dec!(41.8), dec!(680)),
                result("GreenGrid", "Utilities", dec!(6.8), dec!(1050)),
                result("Cinder Cement", "Materials", dec!(30), dec!(100)),
                result("Hydro North", "Utilities", dec!(10), dec!(200)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn empty_report_has_zero_totals() {
        let report = PositionReport::new(market(), Vec::new()).unwrap();
        assert!(report.is_empty());
        assert!(report.total_buyer_cost().is_zero());
        assert!(report.total_seller_revenue().is_zero());
        assert!(report.sector_summaries().is_empty());

        let summary = report.market_summary();
        assert_eq!(summary.buyer_count, 0);
        assert!(summary.tradable_volume.is_zero());
    }

    #[test]
    fn sorted_ascending_by_net_position() {
        let report = sample_report();
        let names: Vec<&str> = report.results().iter().map(CompanyResult::name).collect();
        assert_eq!(
            names,
            vec!["Ferro Works", "Cinder Cement", "Hydro North", "GreenGrid"]
        );
    }

    #[test]
    fn totals_cover_each_partition() {
        let report = sample_report();
        // Ferro 741200 + Cinder (3000-2000)*50 = 50000
        assert_eq!(report.total_buyer_cost().amount(), dec!(791200));
        // GreenGrid 693000 + Hydro (4000-2000)*50 = 100000
        assert_eq!(report.total_seller_revenue().amount(), dec!(793000));
    }

    #[test]
    fn buyers_and_sellers_views() {
        let report = sample_report();
        assert!(report.buyers().all(|r| r.status() == CreditStatus::Excess));
        assert!(report.sellers().all(|r| r.status() == CreditStatus::BelowThreshold));
        assert_eq!(report.buyers().count() + report.sellers().count(), report.len());
    }

    #[test]
    fn market_summary_balances_supply_and_demand() {
        let summary = sample_report().market_summary();
        assert_eq!(summary.buyer_count, 2);
        assert_eq!(summary.seller_count, 2);
        assert_eq!(summary.credit_demand.amount(), dec!(15824));
        assert_eq!(summary.credit_supply.amount(), dec!(15860));
        assert_eq!(summary.tradable_volume.amount(), dec!(15824));
        assert!(summary.residual_demand.is_zero());
        assert_eq!(summary.residual_supply.amount(), dec!(36));
        assert_eq!(summary.net_market_value.amount(), dec!(1800));
    }

    #[test]
    fn sector_summaries_grouped_and_ordered() {
        let report = sample_report();
        let sectors = report.sector_summaries();
        let labels: Vec<&str> = sectors.iter().map(|s| s.sector.as_str()).collect();
        assert_eq!(labels, vec!["Materials", "Steel", "Utilities"]);

        let utilities = &sectors[2];
        assert_eq!(utilities.companies, 2);
        assert_eq!(utilities.revenue_million, dec!(1250));
        assert_eq!(utilities.emissions.amount(), dec!(9140));
        assert_eq!(utilities.sell_revenue.amount(), dec!(793000));
        assert_eq!(utilities.weighted_intensity, Some(dec!(7.312)));
    }

    #[test]
    fn sector_without_revenue_has_no_weighted_intensity() {
        let idle = result("Idle", "Finance", dec!(5), dec!(0));
        let report = PositionReport::new(market(), vec![idle]).unwrap();
        let sectors = report.sector_summaries();
        assert_eq!(sectors[0].weighted_intensity, None);
    }

    #[test]
    fn sector_overflow_names_company() {
        // Intensity equals the threshold, so only the sector sums grow.
        let market = MarketConfiguration::new(dec!(1), dec!(0)).unwrap();
        let huge = Decimal::from_i128_with_scale(50_000_000_000_000_000_000_000_000_000, 0);
        let results = ["North", "South"]
            .iter()
            .map(|name| {
                let record = CompanyRecord::new(*name, "Grid", dec!(1), huge);
                CompanyResult::compute(&record, &market).unwrap()
            })
            .collect();

        let err = PositionReport::new(market, results).unwrap_err();
        assert_eq!(
            err,
            CreditPositionError::ArithmeticOverflow {
                company: "South".to_string(),
                quantity: "sector_revenue_million",
            }
        );
    }
}
