//! Position report DTOs.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::credit_position::{
    CompanyResult, CreditStatus, MarketSummary, PositionReport, SectorSummary,
};

/// Presentation options applied when building a report DTO.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportOptions {
    /// Currency label printed next to monetary totals.
    pub currency: String,
    /// Decimal places for displayed values.
    pub decimal_places: u32,
    /// Include the per-sector breakdown.
    pub include_sector_summary: bool,
    /// Include the market supply/demand summary.
    pub include_market_summary: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            currency: "EUR".to_string(),
            decimal_places: 2,
            include_sector_summary: true,
            include_market_summary: true,
        }
    }
}

/// One table row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRowDto {
    /// Company name.
    pub company: String,
    /// Sector label.
    pub sector: String,
    /// Emission intensity (tCO2 / revenue-million).
    pub intensity: Decimal,
    /// Revenue in millions.
    pub revenue_million: Decimal,
    /// Emissions (tCO2).
    pub emissions: Decimal,
    /// Target emissions (tCO2).
    pub target_emissions: Decimal,
    /// Excess emissions (tCO2).
    pub excess_emissions: Decimal,
    /// Available credits (tCO2).
    pub available_credits: Decimal,
    /// Buyer/seller classification (computed on unrounded values).
    pub status: CreditStatus,
    /// Cost of buying credits.
    pub buy_cost: Decimal,
    /// Revenue from selling credits.
    pub sell_revenue: Decimal,
    /// Sell revenue minus buy cost.
    pub net_position: Decimal,
}

/// Batch totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsDto {
    /// Sum of sell revenue over sellers.
    pub total_seller_revenue: Decimal,
    /// Sum of buy cost over buyers.
    pub total_buyer_cost: Decimal,
}

/// Market supply/demand summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSummaryDto {
    /// Number of buyers.
    pub buyer_count: usize,
    /// Number of sellers.
    pub seller_count: usize,
    /// Credits on offer (tCO2).
    pub credit_supply: Decimal,
    /// Credits needed (tCO2).
    pub credit_demand: Decimal,
    /// Volume that can clear within the batch (tCO2).
    pub tradable_volume: Decimal,
    /// Uncovered demand (tCO2).
    pub residual_demand: Decimal,
    /// Unsold supply (tCO2).
    pub residual_supply: Decimal,
    /// Seller revenue minus buyer cost.
    pub net_market_value: Decimal,
}

/// Per-sector summary row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorSummaryDto {
    /// Sector label.
    pub sector: String,
    /// Number of companies.
    pub companies: usize,
    /// Revenue in millions.
    pub revenue_million: Decimal,
    /// Revenue-weighted intensity, absent when revenue is zero.
    pub weighted_intensity: Option<Decimal>,
    /// Emissions (tCO2).
    pub emissions: Decimal,
    /// Excess emissions (tCO2).
    pub excess_emissions: Decimal,
    /// Available credits (tCO2).
    pub available_credits: Decimal,
    /// Net position.
    pub net_position: Decimal,
}

/// The full, presentation-ready report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionReportDto {
    /// Unique id of this run.
    pub run_id: Uuid,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Where the records came from.
    pub source: String,
    /// Currency label for monetary values.
    pub currency: String,
    /// Threshold intensity used.
    pub threshold_intensity: Decimal,
    /// Carbon price used.
    pub carbon_price: Decimal,
    /// Rows sorted ascending by net position.
    pub rows: Vec<CompanyRowDto>,
    /// Batch totals.
    pub totals: TotalsDto,
    /// Market summary, if requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market: Option<MarketSummaryDto>,
    /// Sector breakdown, if requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sectors: Vec<SectorSummaryDto>,
}

impl PositionReportDto {
    /// Build a DTO with a fresh run id and the current time.
    #[must_use]
    pub fn from_report(
        report: &PositionReport,
        source: impl Into<String>,
        options: &ReportOptions,
    ) -> Self {
        Self::from_report_at(report, source, options, Uuid::new_v4(), Utc::now())
    }

    /// Build a DTO with explicit run metadata.
    #[must_use]
    pub fn from_report_at(
        report: &PositionReport,
        source: impl Into<String>,
        options: &ReportOptions,
        run_id: Uuid,
        generated_at: DateTime<Utc>,
    ) -> Self {
        let dp = options.decimal_places;

        let sectors = if options.include_sector_summary {
            report
                .sector_summaries()
                .iter()
                .map(|s| SectorSummaryDto::from_summary(s, dp))
                .collect()
        } else {
            Vec::new()
        };

        Self {
            run_id,
            generated_at,
            source: source.into(),
            currency: options.currency.clone(),
            threshold_intensity: report.market().threshold_intensity(),
            carbon_price: report.market().carbon_price(),
            rows: report
                .results()
                .iter()
                .map(|r| CompanyRowDto::from_result(r, dp))
                .collect(),
            totals: TotalsDto {
                total_seller_revenue: round(report.total_seller_revenue().amount(), dp),
                total_buyer_cost: round(report.total_buyer_cost().amount(), dp),
            },
            market: options
                .include_market_summary
                .then(|| MarketSummaryDto::from_summary(&report.market_summary(), dp)),
            sectors,
        }
    }
}

impl CompanyRowDto {
    fn from_result(result: &CompanyResult, dp: u32) -> Self {
        Self {
            company: result.name().to_string(),
            sector: result.sector().to_string(),
            intensity: result.record().intensity,
            revenue_million: result.record().revenue_million,
            emissions: round(result.emissions().amount(), dp),
            target_emissions: round(result.target_emissions().amount(), dp),
            excess_emissions: round(result.excess_emissions().amount(), dp),
            available_credits: round(result.available_credits().amount(), dp),
            status: result.status(),
            buy_cost: round(result.buy_cost().amount(), dp),
            sell_revenue: round(result.sell_revenue().amount(), dp),
            net_position: round(result.net_position().amount(), dp),
        }
    }
}

impl MarketSummaryDto {
    fn from_summary(summary: &MarketSummary, dp: u32) -> Self {
        Self {
            buyer_count: summary.buyer_count,
            seller_count: summary.seller_count,
            credit_supply: round(summary.credit_supply.amount(), dp),
            credit_demand: round(summary.credit_demand.amount(), dp),
            tradable_volume: round(summary.tradable_volume.amount(), dp),
            residual_demand: round(summary.residual_demand.amount(), dp),
            residual_supply: round(summary.residual_supply.amount(), dp),
            net_market_value: round(summary.net_market_value.amount(), dp),
        }
    }
}

impl SectorSummaryDto {
    fn from_summary(summary: &SectorSummary, dp: u32) -> Self {
        Self {
            sector: summary.sector.clone(),
            companies: summary.companies,
            revenue_million: summary.revenue_million,
            weighted_intensity: summary.weighted_intensity.map(|v| round(v, dp)),
            emissions: round(summary.emissions.amount(), dp),
            excess_emissions: round(summary.excess_emissions.amount(), dp),
            available_credits: round(summary.available_credits.amount(), dp),
            net_position: round(summary.net_position.amount(), dp),
        }
    }
}

fn round(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
