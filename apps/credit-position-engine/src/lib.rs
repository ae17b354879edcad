// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::items_after_statements
    )
)]

//! Credit Position Engine - Rust Core Library
//!
//! Carbon-credit position calculator for the Sust-Enablers emission
//! analytics. Each company's emissions (intensity x revenue) are compared
//! against a target derived from a market-wide threshold intensity; the
//! difference is either an excess that must be covered by buying credits
//! or a surplus of credits available for sale at the carbon price.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `shared`: `Money` and `Tonnes` value objects
//!   - `credit_position`: records, results, report, `CreditPositionCalculator`
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `CompanySourcePort`, `ReportRendererPort`
//!   - `use_cases`: `ComputePositions`
//!   - `dto`: Rounded report structures for presentation
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `company_source`: JSON/YAML files, in-memory batches
//!   - `report`: Markdown and JSON renderers
//!
//! Cross-cutting: `config` (YAML + env interpolation), `observability`
//! (tracing subscriber, Prometheus metrics), `error` (exit codes).

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

use std::sync::Arc;

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// Configuration loading and validation.
pub mod config;

/// Top-level error and exit codes.
pub mod error;

/// Logging and metrics.
pub mod observability;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::credit_position::{
    CompanyRecord, CompanyResult, CreditPositionCalculator, CreditPositionError, CreditStatus,
    MarketConfiguration, PositionReport,
};
pub use domain::shared::{Money, Tonnes};

// Application re-exports
pub use application::dto::{PositionReportDto, ReportOptions};
pub use application::ports::{CompanySourcePort, ReportRendererPort};
pub use application::use_cases::{ComputePositionsError, ComputePositionsUseCase};

// Infrastructure re-exports
pub use infrastructure::company_source::{FileCompanySource, InMemoryCompanySource};
pub use infrastructure::report::{ReportFormat, renderer_for};

pub use config::Config;
pub use error::{EngineError, ErrorCode};

/// Run one batch as configured and return the rendered report.
///
/// Reads `input.path` when set, otherwise the built-in sample batch.
pub fn run(config: &Config) -> Result<String, EngineError> {
    let calculator = config.calculator()?;
    let options = config.report.options();

    let dto = match config.input.path.as_deref() {
        Some(path) => compute(FileCompanySource::new(path), calculator, options)?,
        None => compute(InMemoryCompanySource::sample(), calculator, options)?,
    };

    let renderer = renderer_for(config.report.format, config.report.decimal_places);
    tracing::debug!(format = renderer.format_name(), "Rendering report");
    Ok(renderer.render(&dto)?)
}

fn compute<S: CompanySourcePort>(
    source: S,
    calculator: CreditPositionCalculator,
    options: ReportOptions,
) -> Result<PositionReportDto, ComputePositionsError> {
    ComputePositionsUseCase::new(Arc::new(source), calculator, options).execute()
}
