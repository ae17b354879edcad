//! Markdown report renderer.

use std::fmt::Write;

use rust_decimal::Decimal;

use crate::application::dto::PositionReportDto;
use crate::application::ports::{RenderError, ReportRendererPort};

const COMPANY_HEADER: [&str; 12] = [
    "Company",
    "Sector",
    "Intensity (tCO2/m)",
    "Revenue (m)",
    "Emissions (t)",
    "Target (t)",
    "Excess (t)",
    "Credits (t)",
    "Status",
    "Buy Cost",
    "Sell Revenue",
    "Net Position",
];

const SECTOR_HEADER: [&str; 7] = [
    "Sector",
    "Companies",
    "Revenue (m)",
    "Weighted Intensity",
    "Emissions (t)",
    "Excess (t)",
    "Net Position",
];

/// Renders the report as Markdown tables followed by totals.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownReportRenderer {
    decimal_places: u32,
}

impl MarkdownReportRenderer {
    /// Create a renderer printing derived values with `decimal_places` digits.
    #[must_use]
    pub const fn new(decimal_places: u32) -> Self {
        Self { decimal_places }
    }

    fn num(&self, value: Decimal) -> String {
        format!("{:.*}", self.decimal_places as usize, value)
    }

    fn write_company_table(
        &self,
        out: &mut String,
        report: &PositionReportDto,
    ) -> std::fmt::Result {
        write_header(out, &COMPANY_HEADER, 2)?;
        for row in &report.rows {
            let cells = [
                escape(&row.company),
                escape(&row.sector),
                row.intensity.to_string(),
                row.revenue_million.to_string(),
                self.num(row.emissions),
                self.num(row.target_emissions),
                self.num(row.excess_emissions),
                self.num(row.available_credits),
                row.status.to_string(),
                self.num(row.buy_cost),
                self.num(row.sell_revenue),
                self.num(row.net_position),
            ];
            writeln!(out, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }

    fn write_market_summary(
        &self,
        out: &mut String,
        report: &PositionReportDto,
    ) -> std::fmt::Result {
        let Some(market) = &report.market else {
            return Ok(());
        };
        let currency = &report.currency;

        writeln!(out)?;
        writeln!(out, "## Market Summary")?;
        writeln!(out)?;
        writeln!(out, "- Buyers: {}", market.buyer_count)?;
        writeln!(out, "- Sellers: {}", market.seller_count)?;
        writeln!(out, "- Credit supply: {} tCO2", self.num(market.credit_supply))?;
        writeln!(out, "- Credit demand: {} tCO2", self.num(market.credit_demand))?;
        writeln!(out, "- Tradable volume: {} tCO2", self.num(market.tradable_volume))?;
        writeln!(out, "- Residual demand: {} tCO2", self.num(market.residual_demand))?;
        writeln!(out, "- Residual supply: {} tCO2", self.num(market.residual_supply))?;
        writeln!(
            out,
            "- Net market value: {} {currency}",
            self.num(market.net_market_value)
        )
    }

    fn write_sector_table(&self, out: &mut String, report: &PositionReportDto) -> std::fmt::Result {
        if report.sectors.is_empty() {
            return Ok(());
        }

        writeln!(out)?;
        writeln!(out, "## Sector Summary")?;
        writeln!(out)?;
        write_header(out, &SECTOR_HEADER, 1)?;
        for sector in &report.sectors {
            let label = if sector.sector.is_empty() {
                "(unspecified)".to_string()
            } else {
                escape(&sector.sector)
            };
            let cells = [
                label,
                sector.companies.to_string(),
                sector.revenue_million.to_string(),
                sector
                    .weighted_intensity
                    .map_or_else(|| "n/a".to_string(), |v| self.num(v)),
                self.num(sector.emissions),
                self.num(sector.excess_emissions),
                self.num(sector.net_position),
            ];
            writeln!(out, "| {} |", cells.join(" | "))?;
        }
        Ok(())
    }
}

impl ReportRendererPort for MarkdownReportRenderer {
    fn render(&self, report: &PositionReportDto) -> Result<String, RenderError> {
        let mut out = String::new();
        let currency = &report.currency;

        writeln!(out, "# Carbon Credit Position Report")?;
        writeln!(out)?;
        writeln!(out, "- Run: {}", report.run_id)?;
        writeln!(out, "- Generated: {}", report.generated_at.to_rfc3339())?;
        writeln!(out, "- Source: {}", report.source)?;
        writeln!(
            out,
            "- Threshold intensity: {} tCO2 per {currency} million",
            report.threshold_intensity
        )?;
        writeln!(out, "- Carbon price: {} {currency} per tCO2", report.carbon_price)?;
        writeln!(out)?;

        if report.rows.is_empty() {
            writeln!(out, "_No companies in batch._")?;
        } else {
            self.write_company_table(&mut out, report)?;
        }

        writeln!(out)?;
        writeln!(
            out,
            "**Total revenue for sellers:** {} {currency}",
            self.num(report.totals.total_seller_revenue)
        )?;
        writeln!(
            out,
            "**Total cost for buyers:** {} {currency}",
            self.num(report.totals.total_buyer_cost)
        )?;

        self.write_market_summary(&mut out, report)?;
        self.write_sector_table(&mut out, report)?;

        Ok(out)
    }

    fn format_name(&self) -> &'static str {
        "markdown"
    }
}

/// Header row plus alignment row; the first `text_columns` are left-aligned.
fn write_header(out: &mut String, columns: &[&str], text_columns: usize) -> std::fmt::Result {
    writeln!(out, "| {} |", columns.join(" | "))?;
    let alignment: Vec<&str> = (0..columns.len())
        .map(|i| if i < text_columns { "---" } else { "---:" })
        .collect();
    writeln!(out, "|{}|", alignment.join("|"))
}

/// Keep a cell on one table row: pipes escaped, line breaks flattened.
fn escape(cell: &str) -> String {
    cell.replace("\r\n", " ")
        .replace(['\r', '\n'], " ")
        .replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ReportOptions;
    use crate::domain::credit_position::{
        CompanyRecord, CreditPositionCalculator, MarketConfiguration,
    };
    use rust_decimal_macros::dec;

    fn dto(records: &[CompanyRecord], options: &ReportOptions) -> PositionReportDto {
        let market = MarketConfiguration::new(dec!(20.0), dec!(50.0)).unwrap();
        let report = CreditPositionCalculator::new(market).calculate(records).unwrap();
        PositionReportDto::from_report(&report, "unit test", options)
    }

    fn two_companies() -> Vec<CompanyRecord> {
        vec![
            CompanyRecord::new("Ferro Works", "Steel", dec!(41.8), dec!(680)),
            CompanyRecord::new("GreenGrid", "Utilities", dec!(6.8), dec!(1050)),
        ]
    }

    #[test]
    fn renders_sorted_rows_and_totals() {
        let text = MarkdownReportRenderer::new(2)
            .render(&dto(&two_companies(), &ReportOptions::default()))
            .unwrap();

        assert!(text.contains("| Company | Sector | Intensity (tCO2/m) |"));
        assert!(text.contains(
            "| GreenGrid | Utilities | 6.8 | 1050 | 7140.00 | 21000.00 | 0.00 | 13860.00 | Below Threshold | 0.00 | 693000.00 | 693000.00 |"
        ));
        assert!(text.contains("**Total revenue for sellers:** 693000.00 EUR"));
        assert!(text.contains("**Total cost for buyers:** 741200.00 EUR"));

        let buyer_at = text.find("| Ferro Works |").unwrap();
        let seller_at = text.find("| GreenGrid |").unwrap();
        assert!(buyer_at < seller_at);
    }

    #[test]
    fn renders_summaries_when_present() {
        let text = MarkdownReportRenderer::new(2)
            .render(&dto(&two_companies(), &ReportOptions::default()))
            .unwrap();

        assert!(text.contains("## Market Summary"));
        assert!(text.contains("- Tradable volume: 13860.00 tCO2"));
        assert!(text.contains("- Residual demand: 964.00 tCO2"));
        assert!(text.contains("## Sector Summary"));
        assert!(text.contains("| Steel | 1 | 680 | 41.80 |"));
    }

    #[test]
    fn empty_batch_renders_zero_totals() {
        let options = ReportOptions {
            currency: "USD".to_string(),
            ..ReportOptions::default()
        };
        let text = MarkdownReportRenderer::new(2).render(&dto(&[], &options)).unwrap();

        assert!(text.contains("_No companies in batch._"));
        assert!(text.contains("**Total revenue for sellers:** 0.00 USD"));
        assert!(text.contains("**Total cost for buyers:** 0.00 USD"));
        assert!(!text.contains("## Sector Summary"));
    }

    #[test]
    fn escapes_pipes_in_names() {
        let records = vec![CompanyRecord::new("A|B Holdings", "X", dec!(1), dec!(1))];
        let text = MarkdownReportRenderer::new(2)
            .render(&dto(&records, &ReportOptions::default()))
            .unwrap();
        assert!(text.contains("| A\\|B Holdings |"));
    }

    #[test]
    fn line_breaks_in_names_stay_on_one_row() {
        let records = vec![CompanyRecord::new(
            "Multi\nLine\r\nCo",
            "Heavy\rIndustry",
            dec!(1),
            dec!(1),
        )];
        let text = MarkdownReportRenderer::new(2)
            .render(&dto(&records, &ReportOptions::default()))
            .unwrap();

        assert!(text.contains("| Multi Line Co | Heavy Industry |"));
        assert!(text.contains("| Heavy Industry | 1 |"));
    }
}
