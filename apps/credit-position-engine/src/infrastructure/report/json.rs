//! JSON report renderer.

use crate::application::dto::PositionReportDto;
use crate::application::ports::{RenderError, ReportRendererPort};

/// Renders the report DTO as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonReportRenderer;

impl JsonReportRenderer {
    /// Create a JSON renderer.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportRendererPort for JsonReportRenderer {
    fn render(&self, report: &PositionReportDto) -> Result<String, RenderError> {
        serde_json::to_string_pretty(report).map_err(|e| RenderError::Serialization(e.to_string()))
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::ReportOptions;
    use crate::domain::credit_position::{
        CompanyRecord, CreditPositionCalculator, MarketConfiguration,
    };
    use rust_decimal_macros::dec;

    #[test]
    fn renders_parseable_document() {
        let market = MarketConfiguration::new(dec!(20.0), dec!(50.0)).unwrap();
        let report = CreditPositionCalculator::new(market)
            .calculate(&[
                CompanyRecord::new("Ferro Works", "Steel", dec!(41.8), dec!(680)),
                CompanyRecord::new("GreenGrid", "Utilities", dec!(6.8), dec!(1050)),
            ])
            .unwrap();
        let dto = PositionReportDto::from_report(&report, "unit test", &ReportOptions::default());

        let text = JsonReportRenderer::new().render(&dto).unwrap();
        let parsed: PositionReportDto = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, dto);

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["rows"][0]["status"], "EXCESS");
        assert_eq!(value["rows"][1]["status"], "BELOW_THRESHOLD");
    }
}
