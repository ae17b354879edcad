//! Market configuration: threshold intensity and carbon price.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Market section of the configuration file.
///
/// Validated into a domain `MarketConfiguration` at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Benchmark intensity in tCO2 per revenue-million.
    #[serde(default = "default_threshold_intensity")]
    pub threshold_intensity: Decimal,
    /// Currency per tCO2.
    #[serde(default = "default_carbon_price")]
    pub carbon_price: Decimal,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            threshold_intensity: default_threshold_intensity(),
            carbon_price: default_carbon_price(),
        }
    }
}

const fn default_threshold_intensity() -> Decimal {
    dec!(20.0)
}

const fn default_carbon_price() -> Decimal {
    dec!(50.0)
}
