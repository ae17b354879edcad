//! Compute Positions Use Case

use std::sync::Arc;
use std::time::Instant;

use crate::application::dto::{PositionReportDto, ReportOptions};
use crate::application::ports::{CompanySourcePort, SourceError};
use crate::domain::credit_position::{CreditPositionCalculator, CreditPositionError};
use crate::observability;

/// Errors from the compute-positions use case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ComputePositionsError {
    /// The records could not be loaded.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The batch was rejected or could not be computed.
    #[error(transparent)]
    Calculation(#[from] CreditPositionError),
}

/// Use case for turning a company batch into a position report.
pub struct ComputePositionsUseCase<S>
where
    S: CompanySourcePort,
{
    source: Arc<S>,
    calculator: CreditPositionCalculator,
    options: ReportOptions,
}

impl<S> ComputePositionsUseCase<S>
where
    S: CompanySourcePort,
{
    /// Create a new ComputePositionsUseCase.
    pub fn new(
        source: Arc<S>,
        calculator: CreditPositionCalculator,
        options: ReportOptions,
    ) -> Self {
        Self {
            source,
            calculator,
            options,
        }
    }

    /// Execute the use case.
    pub fn execute(&self) -> Result<PositionReportDto, ComputePositionsError> {
        let source_name = self.source.describe();
        let span = tracing::info_span!("credit_positions.compute", source = %source_name);
        let _enter = span.enter();
        let started = Instant::now();

        // 1. Load records
        let records = self.source.load().inspect_err(|e| {
            tracing::error!(error = %e, "Failed to load company records");
            observability::record_batch_rejected(e.code());
        })?;
        tracing::info!(companies = records.len(), "Loaded company records");

        // 2. Validate and compute
        let report = self.calculator.calculate(&records).inspect_err(|e| {
            tracing::warn!(error = %e, "Company batch rejected");
            observability::record_batch_rejected(e.code());
        })?;

        // 3. Present
        let dto = PositionReportDto::from_report(&report, source_name, &self.options);

        observability::record_batch_processed(&report, started.elapsed().as_secs_f64());
        tracing::info!(
            run_id = %dto.run_id,
            companies = report.len(),
            buyers = report.buyers().count(),
            sellers = report.sellers().count(),
            total_buyer_cost = %dto.totals.total_buyer_cost,
            total_seller_revenue = %dto.totals.total_seller_revenue,
            "Credit position report ready"
        );

        Ok(dto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credit_position::{CompanyRecord, CreditStatus, MarketConfiguration};
    use crate::infrastructure::company_source::InMemoryCompanySource;
    use rust_decimal_macros::dec;

    fn calculator() -> CreditPositionCalculator {
        CreditPositionCalculator::new(MarketConfiguration::new(dec!(20), dec!(50)).unwrap())
    }

    struct FailingSource;

    impl CompanySourcePort for FailingSource {
        fn load(&self) -> Result<Vec<CompanyRecord>, SourceError> {
            Err(SourceError::Unavailable {
                source_name: "failing".to_string(),
                message: "disk on fire".to_string(),
            })
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[test]
    fn computes_report_from_source() {
        let source = Arc::new(InMemoryCompanySource::new(vec![
            CompanyRecord::new("Ferro Works", "Steel", dec!(41.8), dec!(680)),
            CompanyRecord::new("GreenGrid", "Utilities", dec!(6.8), dec!(1050)),
        ]));
        let use_case = ComputePositionsUseCase::new(source, calculator(), ReportOptions::default());

        let dto = use_case.execute().unwrap();
        assert_eq!(dto.source, "in-memory (2 companies)");
        assert_eq!(dto.rows[0].company, "Ferro Works");
        assert_eq!(dto.rows[0].status, CreditStatus::Excess);
        assert_eq!(dto.totals.total_buyer_cost, dec!(741200));
        assert_eq!(dto.totals.total_seller_revenue, dec!(693000));
    }

    #[test]
    fn propagates_source_errors() {
        let use_case = ComputePositionsUseCase::new(
            Arc::new(FailingSource),
            calculator(),
            ReportOptions::default(),
        );
        let err = use_case.execute().unwrap_err();
        assert!(matches!(err, ComputePositionsError::Source(SourceError::Unavailable { .. })));
    }

    #[test]
    fn propagates_validation_errors() {
        let source = Arc::new(InMemoryCompanySource::new(vec![CompanyRecord::new(
            "Negative", "Steel", dec!(-1), dec!(10),
        )]));
        let use_case = ComputePositionsUseCase::new(source, calculator(), ReportOptions::default());
        let err = use_case.execute().unwrap_err();
        assert!(matches!(
            err,
            ComputePositionsError::Calculation(CreditPositionError::InvalidRecord { index: 0, .. })
        ));
    }
}
