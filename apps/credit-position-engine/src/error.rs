//! Top-level error handling for the credit position engine.
//!
//! Every layer keeps its own `thiserror` enum; [`EngineError`] aggregates
//! them for the binary and maps each failure to a stable [`ErrorCode`] and
//! a process exit code.
//!
//! # Exit Codes
//!
//! | Exit | Codes |
//! |------|-------|
//! | 0 | Success |
//! | 2 | `CONFIG_INVALID`, `INVALID_CONFIGURATION` |
//! | 3 | `INVALID_RECORD`, `DUPLICATE_COMPANY` |
//! | 4 | `SOURCE_UNAVAILABLE`, `SOURCE_MALFORMED`, `SOURCE_UNSUPPORTED` |
//! | 5 | `ARITHMETIC_OVERFLOW` |
//! | 6 | `RENDER_FAILED`, `METRICS_FAILED` |

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::{RenderError, SourceError};
use crate::application::use_cases::ComputePositionsError;
use crate::config::ConfigError;
use crate::domain::credit_position::CreditPositionError;
use crate::observability::MetricsError;

/// Error codes for the credit position engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Batch errors
    /// A record has an empty name or a negative numeric field.
    InvalidRecord,
    /// Two records share a company name.
    DuplicateCompany,
    /// Negative threshold intensity or carbon price.
    InvalidConfiguration,
    /// A derived quantity does not fit a decimal.
    ArithmeticOverflow,

    // Source errors
    /// The company source could not be read.
    SourceUnavailable,
    /// The company source could not be parsed.
    SourceMalformed,
    /// The company source has an unknown format.
    SourceUnsupported,

    // Output errors
    /// The report could not be rendered.
    RenderFailed,
    /// The metrics recorder or snapshot failed.
    MetricsFailed,

    // Configuration errors
    /// The configuration file is unreadable or invalid.
    ConfigInvalid,
}

impl ErrorCode {
    /// Get the stable reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRecord => "INVALID_RECORD",
            Self::DuplicateCompany => "DUPLICATE_COMPANY",
            Self::InvalidConfiguration => "INVALID_CONFIGURATION",
            Self::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
            Self::SourceUnavailable => "SOURCE_UNAVAILABLE",
            Self::SourceMalformed => "SOURCE_MALFORMED",
            Self::SourceUnsupported => "SOURCE_UNSUPPORTED",
            Self::RenderFailed => "RENDER_FAILED",
            Self::MetricsFailed => "METRICS_FAILED",
            Self::ConfigInvalid => "CONFIG_INVALID",
        }
    }

    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigInvalid | Self::InvalidConfiguration => 2,
            Self::InvalidRecord | Self::DuplicateCompany => 3,
            Self::SourceUnavailable | Self::SourceMalformed | Self::SourceUnsupported => 4,
            Self::ArithmeticOverflow => 5,
            Self::RenderFailed | Self::MetricsFailed => 6,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

impl From<&CreditPositionError> for ErrorCode {
    fn from(err: &CreditPositionError) -> Self {
        match err {
            CreditPositionError::InvalidRecord { .. } => Self::InvalidRecord,
            CreditPositionError::DuplicateCompany { .. } => Self::DuplicateCompany,
            CreditPositionError::InvalidConfiguration { .. } => Self::InvalidConfiguration,
            CreditPositionError::ArithmeticOverflow { .. } => Self::ArithmeticOverflow,
        }
    }
}

impl From<&SourceError> for ErrorCode {
    fn from(err: &SourceError) -> Self {
        match err {
            SourceError::Unavailable { .. } => Self::SourceUnavailable,
            SourceError::Malformed { .. } => Self::SourceMalformed,
            SourceError::UnsupportedFormat { .. } => Self::SourceUnsupported,
        }
    }
}

/// Any failure of an engine run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The batch could not be loaded or computed.
    #[error(transparent)]
    Compute(#[from] ComputePositionsError),

    /// The report could not be rendered.
    #[error("failed to render report: {0}")]
    Render(#[from] RenderError),

    /// Metrics could not be installed or exported.
    #[error(transparent)]
    Metrics(#[from] MetricsError),
}

impl EngineError {
    /// Stable error code.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Config(ConfigError::Market(e)) => ErrorCode::from(e),
            Self::Config(_) => ErrorCode::ConfigInvalid,
            Self::Compute(ComputePositionsError::Source(e)) => ErrorCode::from(e),
            Self::Compute(ComputePositionsError::Calculation(e)) => ErrorCode::from(e),
            Self::Render(_) => ErrorCode::RenderFailed,
            Self::Metrics(_) => ErrorCode::MetricsFailed,
        }
    }

    /// Process exit code.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        self.code().exit_code()
    }
}
