//! Company emission record (calculator input).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::credit_position::errors::{CreditPositionError, RecordField};

/// One company's emission profile as supplied to the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRecord {
    /// Company name, unique within a batch.
    pub name: String,
    /// Sector label. Informational only.
    #[serde(default)]
    pub sector: String,
    /// Emission intensity in tCO2 per revenue-million.
    pub intensity: Decimal,
    /// Revenue in millions of currency units.
    #[serde(alias = "revenueMillion")]
    pub revenue_million: Decimal,
}

impl CompanyRecord {
    /// Create a new record.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        sector: impl Into<String>,
        intensity: Decimal,
        revenue_million: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            sector: sector.into(),
            intensity,
            revenue_million,
        }
    }

    /// Check field constraints for the record at `index` in its batch.
    ///
    /// Uniqueness of `name` is a batch-level rule and is checked by the calculator.
    pub fn validate(&self, index: usize) -> Result<(), CreditPositionError> {
        if self.name.trim().is_empty() {
            return Err(CreditPositionError::InvalidRecord {
                index,
                company: self.name.clone(),
                field: RecordField::Name,
                message: "must not be empty".to_string(),
            });
        }

        if self.intensity < Decimal::ZERO {
            return Err(CreditPositionError::negative_field(
                index,
                &self.name,
                RecordField::Intensity,
                self.intensity,
            ));
        }

        if self.revenue_million < Decimal::ZERO {
            return Err(CreditPositionError::negative_field(
                index,
                &self.name,
                RecordField::RevenueMillion,
                self.revenue_million,
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn valid_record_passes() {
        let record = CompanyRecord::new("Ferro Works", "Steel", dec!(41.8), dec!(680));
        assert!(record.validate(0).is_ok());
    }

    #[test]
    fn zero_revenue_is_valid() {
        let record = CompanyRecord::new("Dormant Holdings", "Finance", dec!(12), dec!(0));
        assert!(record.validate(0).is_ok());
    }

    #[test]
    fn negative_intensity_rejected() {
        let record = CompanyRecord::new("Ferro Works", "Steel", dec!(-0.1), dec!(680));
        let Err(CreditPositionError::InvalidRecord { index, field, .. }) = record.validate(7) else {
            panic!("expected InvalidRecord");
        };
        assert_eq!(index, 7);
        assert_eq!(field, RecordField::Intensity);
    }

    #[test]
    fn negative_revenue_rejected() {
        let record = CompanyRecord::new("Ferro Works", "Steel", dec!(41.8), dec!(-680));
        let Err(CreditPositionError::InvalidRecord { field, company, .. }) = record.validate(0)
        else {
            panic!("expected InvalidRecord");
        };
        assert_eq!(field, RecordField::RevenueMillion);
        assert_eq!(company, "Ferro Works");
    }

    #[test]
    fn blank_name_rejected() {
        let record = CompanyRecord::new("  ", "Steel", dec!(1), dec!(1));
        let Err(CreditPositionError::InvalidRecord { field, .. }) = record.validate(0) else {
            panic!("expected InvalidRecord");
        };
        assert_eq!(field, RecordField::Name);
    }

    #[test]
    fn deserializes_camel_case_revenue_and_missing_sector() {
        let json = r#"{"name": "GreenGrid", "intensity": 6.8, "revenueMillion": 1050}"#;
        let record: CompanyRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.intensity, dec!(6.8));
        assert_eq!(record.revenue_million, dec!(1050));
        assert!(record.sector.is_empty());
    }
}
