//! Credit Position Calculator
//!
//! Validates a batch of company records, derives each company's credit
//! position and assembles the sorted report.

use std::collections::HashMap;

use rayon::prelude::*;
use tracing::debug;

use crate::domain::credit_position::errors::CreditPositionError;
use crate::domain::credit_position::value_objects::{
    CompanyRecord, CompanyResult, MarketConfiguration, PositionReport,
};

/// Batch calculator for carbon-credit positions.
#[derive(Debug, Clone)]
pub struct CreditPositionCalculator {
    market: MarketConfiguration,
    parallel_threshold: usize,
}

impl CreditPositionCalculator {
    /// Batch size from which the per-record phase runs on the rayon pool.
    pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

    /// Create a calculator for the given market configuration.
    #[must_use]
    pub const fn new(market: MarketConfiguration) -> Self {
        Self {
            market,
            parallel_threshold: Self::DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Override the parallel threshold (clamped to at least 1).
    #[must_use]
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold.max(1);
        self
    }

    /// Market configuration in use.
    #[must_use]
    pub const fn market(&self) -> &MarketConfiguration {
        &self.market
    }

    /// Reject the batch if any record is invalid or a name repeats.
    pub fn validate(&self, records: &[CompanyRecord]) -> Result<(), CreditPositionError> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            record.validate(index)?;

            if let Some(&first_index) = seen.get(record.name.as_str()) {
                return Err(CreditPositionError::DuplicateCompany {
                    company: record.name.clone(),
                    first_index,
                    duplicate_index: index,
                });
            }
            seen.insert(record.name.as_str(), index);
        }

        Ok(())
    }

    /// Derive the position for a single, already validated record.
    pub fn evaluate(&self, record: &CompanyRecord) -> Result<CompanyResult, CreditPositionError> {
        CompanyResult::compute(record, &self.market)
    }

    /// Validate the batch, evaluate every record and build the sorted report.
    pub fn calculate(
        &self,
        records: &[CompanyRecord],
    ) -> Result<PositionReport, CreditPositionError> {
        let span = tracing::info_span!("credit_positions.calculate", batch_size = records.len());
        let _enter = span.enter();

        self.validate(records)?;

        let results = if records.len() >= self.parallel_threshold {
            self.evaluate_parallel(records)?
        } else {
            self.evaluate_sequential(records)?
        };

        let report = PositionReport::new(self.market, results)?;

        debug!(
            buyers = report.buyers().count(),
            sellers = report.sellers().count(),
            total_buyer_cost = %report.total_buyer_cost(),
            total_seller_revenue = %report.total_seller_revenue(),
            "Credit positions calculated"
        );

        Ok(report)
    }

    fn evaluate_sequential(
        &self,
        records: &[CompanyRecord],
    ) -> Result<Vec<CompanyResult>, CreditPositionError> {
        records.iter().map(|record| self.evaluate(record)).collect()
    }

    fn evaluate_parallel(
        &self,
        records: &[CompanyRecord],
    ) -> Result<Vec<CompanyResult>, CreditPositionError> {
        debug!(batch_size = records.len(), "Evaluating batch on rayon pool");

        // Collected in input order, so the first error matches the sequential path.
        let evaluated: Vec<Result<CompanyResult, CreditPositionError>> = records
            .par_iter()
            .map(|record| self.evaluate(record))
            .collect();

        evaluated.into_iter().collect()
    }
}
