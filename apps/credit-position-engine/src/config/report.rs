//! Report presentation configuration.

use serde::{Deserialize, Serialize};

use crate::application::dto::ReportOptions;
use crate::infrastructure::report::ReportFormat;

use super::default_true;

/// Report section of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format.
    #[serde(default)]
    pub format: ReportFormat,
    /// Currency label for monetary values.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Decimal places for displayed values.
    #[serde(default = "default_decimal_places")]
    pub decimal_places: u32,
    /// Include the per-sector breakdown.
    #[serde(default = "default_true")]
    pub include_sector_summary: bool,
    /// Include the market supply/demand summary.
    #[serde(default = "default_true")]
    pub include_market_summary: bool,
}

impl ReportConfig {
    /// Options for building the report DTO.
    #[must_use]
    pub fn options(&self) -> ReportOptions {
        ReportOptions {
            currency: self.currency.clone(),
            decimal_places: self.decimal_places,
            include_sector_summary: self.include_sector_summary,
            include_market_summary: self.include_market_summary,
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            currency: default_currency(),
            decimal_places: default_decimal_places(),
            include_sector_summary: true,
            include_market_summary: true,
        }
    }
}

fn default_currency() -> String {
    "EUR".to_string()
}

pub(crate) const fn default_decimal_places() -> u32 {
    2
}
