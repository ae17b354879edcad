//! Credit position errors.

use std::fmt;

use rust_decimal::Decimal;
use thiserror::Error;

/// Field of a company record that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordField {
    /// Company name.
    Name,
    /// Emission intensity.
    Intensity,
    /// Revenue in millions.
    RevenueMillion,
}

impl RecordField {
    /// Field name as it appears in input files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Intensity => "intensity",
            Self::RevenueMillion => "revenue_million",
        }
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while validating or computing credit positions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CreditPositionError {
    /// A record failed input validation.
    #[error("invalid record[{index}] '{company}': {field} {message}")]
    InvalidRecord {
        /// Position of the record in the input batch.
        index: usize,
        /// Company name as supplied.
        company: String,
        /// Field that failed.
        field: RecordField,
        /// What was wrong with it.
        message: String,
    },

    /// The same company name appears twice in a batch.
    #[error("duplicate company '{company}' at record[{duplicate_index}] (first seen at record[{first_index}])")]
    DuplicateCompany {
        /// Company name.
        company: String,
        /// Index of the first occurrence.
        first_index: usize,
        /// Index of the repeated occurrence.
        duplicate_index: usize,
    },

    /// The market configuration is unusable; the whole run is rejected.
    #[error("invalid configuration: {field} must be non-negative, got {value}")]
    InvalidConfiguration {
        /// Configuration field name.
        field: &'static str,
        /// Supplied value.
        value: Decimal,
    },

    /// A product exceeded the decimal range.
    #[error("arithmetic overflow computing {quantity} for '{company}'")]
    ArithmeticOverflow {
        /// Company whose figures overflowed.
        company: String,
        /// Quantity being computed.
        quantity: &'static str,
    },
}

impl CreditPositionError {
    /// Build a negative-value record violation.
    #[must_use]
    pub fn negative_field(index: usize, company: &str, field: RecordField, value: Decimal) -> Self {
        Self::InvalidRecord {
            index,
            company: company.to_string(),
            field,
            message: format!("must be non-negative, got {value}"),
        }
    }

    /// Stable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRecord { .. } => "INVALID_RECORD",
            Self::DuplicateCompany { .. } => "DUPLICATE_COMPANY",
            Self::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            Self::ArithmeticOverflow { .. } => "ARITHMETIC_OVERFLOW",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn invalid_record_message_names_record_and_field() {
        let err = CreditPositionError::negative_field(
            3,
            "Ferro Works",
            RecordField::Intensity,
            dec!(-1.5),
        );
        assert_eq!(
            err.to_string(),
            "invalid record[3] 'Ferro Works': intensity must be non-negative, got -1.5"
        );
        assert_eq!(err.code(), "INVALID_RECORD");
    }

    #[test]
    fn configuration_error_names_field() {
        let err = CreditPositionError::InvalidConfiguration {
            field: "carbon_price",
            value: dec!(-50),
        };
        assert!(err.to_string().contains("carbon_price"));
        assert_eq!(err.code(), "INVALID_CONFIGURATION");
    }

    #[test]
    fn duplicate_message_names_both_indices() {
        let err = CreditPositionError::DuplicateCompany {
            company: "Acme".to_string(),
            first_index: 0,
            duplicate_index: 4,
        };
        assert_eq!(
            err.to_string(),
            "duplicate company 'Acme' at record[4] (first seen at record[0])"
        );
    }
}
