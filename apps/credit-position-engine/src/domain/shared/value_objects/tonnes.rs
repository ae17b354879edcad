//! Emission quantity value object (tonnes of CO2-equivalent).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A quantity of emissions in tCO2e.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tonnes(Decimal);

impl Tonnes {
    /// Create a new quantity from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Zero tonnes.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Emissions implied by an intensity (tCO2 per revenue-million) over a revenue in millions.
    ///
    /// Returns `None` if the multiplication overflows.
    #[must_use]
    pub fn from_intensity(intensity: Decimal, revenue_million: Decimal) -> Option<Self> {
        intensity.checked_mul(revenue_million).map(Self)
    }

    /// `max(0, minuend - subtrahend)`.
    #[must_use]
    pub fn clipped_difference(minuend: Self, subtrahend: Self) -> Self {
        Self((minuend.0 - subtrahend.0).max(Decimal::ZERO))
    }

    /// Add two quantities, returning `None` on overflow.
    #[must_use]
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this quantity is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if this quantity is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for Tonnes {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Tonnes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} t", self.0)
    }
}

impl PartialOrd for Tonnes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Tonnes {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}
