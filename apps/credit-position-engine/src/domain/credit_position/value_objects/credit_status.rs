//! Credit status of a company relative to the threshold.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a company emits above or below its threshold allowance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreditStatus {
    /// Emissions strictly exceed the target; the company buys credits.
    Excess,
    /// Emissions at or under the target; the company can sell credits.
    BelowThreshold,
}

impl CreditStatus {
    /// Returns true for companies that must buy credits.
    #[must_use]
    pub const fn is_buyer(&self) -> bool {
        matches!(self, Self::Excess)
    }

    /// Returns true for companies with credits to sell.
    #[must_use]
    pub const fn is_seller(&self) -> bool {
        matches!(self, Self::BelowThreshold)
    }

    /// Metric/label form.
    #[must_use]
    pub const fn as_label(&self) -> &'static str {
        match self {
            Self::Excess => "excess",
            Self::BelowThreshold => "below_threshold",
        }
    }
}

impl fmt::Display for CreditStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excess => write!(f, "Excess"),
            Self::BelowThreshold => write!(f, "Below Threshold"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_are_exclusive() {
        assert!(CreditStatus::Excess.is_buyer());
        assert!(!CreditStatus::Excess.is_seller());
        assert!(CreditStatus::BelowThreshold.is_seller());
        assert!(!CreditStatus::BelowThreshold.is_buyer());
    }

    #[test]
    fn serde_uses_screaming_snake_case() {
        let json = serde_json::to_string(&CreditStatus::BelowThreshold).unwrap();
        assert_eq!(json, "\"BELOW_THRESHOLD\"");
    }

    #[test]
    fn display() {
        assert_eq!(CreditStatus::Excess.to_string(), "Excess");
        assert_eq!(CreditStatus::BelowThreshold.to_string(), "Below Threshold");
    }
}
