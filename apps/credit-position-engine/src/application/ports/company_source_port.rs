//! Company Source Port (Driven Port)
//!
//! Interface for obtaining the batch of company emission records.

use crate::domain::credit_position::CompanyRecord;

/// Company source error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The source could not be read at all.
    #[error("Company source '{source_name}' unavailable: {message}")]
    Unavailable {
        /// Source description (path, "built-in", ...).
        source_name: String,
        /// Error details.
        message: String,
    },

    /// The source was read but its content is not a valid batch.
    #[error("Company source '{source_name}' malformed: {message}")]
    Malformed {
        /// Source description.
        source_name: String,
        /// Error details.
        message: String,
    },

    /// The source format cannot be inferred.
    #[error("Unsupported company source format '{source_name}' (expected .json, .yaml or .yml)")]
    UnsupportedFormat {
        /// Source description.
        source_name: String,
    },
}

impl SourceError {
    /// Stable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => "SOURCE_UNAVAILABLE",
            Self::Malformed { .. } => "SOURCE_MALFORMED",
            Self::UnsupportedFormat { .. } => "SOURCE_UNSUPPORTED",
        }
    }
}

/// Port for loading company records.
///
/// Implementations return records in their natural order; that order is the
/// tie-break order of the final report.
pub trait CompanySourcePort: Send + Sync {
    /// Load the full batch.
    fn load(&self) -> Result<Vec<CompanyRecord>, SourceError>;

    /// Human-readable description used in logs and reports.
    fn describe(&self) -> String;
}
