//! Prometheus metrics for credit position batches.
//!
//! Without an installed recorder every `record_*` call is a no-op, so the
//! calculator can be used as a library without metrics setup.
//!
//! # Metrics
//!
//! - `credit_batches_total`: batches turned into a report
//! - `credit_companies_total{status}`: companies per credit status
//! - `credit_batch_rejections_total{code}`: batches rejected, by error code
//! - `credit_total_buyer_cost` / `credit_total_seller_revenue`: last batch totals
//! - `credit_batch_duration_seconds`: load-to-report latency

use std::path::Path;
use std::sync::OnceLock;

use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use rust_decimal::prelude::ToPrimitive;

use crate::config::MetricsConfig;
use crate::domain::credit_position::{CreditStatus, PositionReport};

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to install the Prometheus recorder.
    #[error("metrics installation error: {0}")]
    Installation(String),
    /// Failed to write the metrics snapshot.
    #[error("failed to write metrics snapshot to '{path}': {source}")]
    Export {
        /// Target file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },
}

/// Install the Prometheus recorder when metrics are enabled.
///
/// Returns the handle used to render the text snapshot, or `None` when
/// metrics are disabled. Calling this again returns the existing handle.
pub fn init_metrics(config: &MetricsConfig) -> Result<Option<PrometheusHandle>, MetricsError> {
    if !config.enabled {
        return Ok(None);
    }
    if let Some(handle) = PROMETHEUS_HANDLE.get() {
        return Ok(Some(handle.clone()));
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;
    register_metrics();

    let handle = PROMETHEUS_HANDLE.get_or_init(|| handle).clone();
    tracing::info!("Prometheus metrics recorder installed");
    Ok(Some(handle))
}

/// Render the current metrics and write them to `path`.
pub fn write_snapshot(
    handle: &PrometheusHandle,
    path: impl AsRef<Path>,
) -> Result<(), MetricsError> {
    let path = path.as_ref();
    std::fs::write(path, handle.render()).map_err(|e| MetricsError::Export {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!(path = %path.display(), "Wrote metrics snapshot");
    Ok(())
}

fn register_metrics() {
    describe_counter!(
        "credit_batches_total",
        "Company batches turned into a position report"
    );
    describe_counter!(
        "credit_companies_total",
        "Companies evaluated, labelled by credit status"
    );
    describe_counter!(
        "credit_batch_rejections_total",
        "Company batches rejected, labelled by error code"
    );
    describe_gauge!(
        "credit_total_buyer_cost",
        "Total credit purchase cost of the last batch"
    );
    describe_gauge!(
        "credit_total_seller_revenue",
        "Total credit sale revenue of the last batch"
    );
    describe_histogram!(
        "credit_batch_duration_seconds",
        "Time from loading a batch to a finished report"
    );
}

// ============================================================================
// Batch Metrics
// ============================================================================

/// Record a computed batch.
///
/// # Arguments
///
/// * `report` - The finished report
/// * `duration_secs` - Load-to-report latency in seconds
pub fn record_batch_processed(report: &PositionReport, duration_secs: f64) {
    counter!("credit_batches_total").increment(1);

    let buyers = report.buyers().count() as u64;
    let sellers = report.sellers().count() as u64;
    counter!("credit_companies_total", "status" => CreditStatus::Excess.as_label())
        .increment(buyers);
    counter!("credit_companies_total", "status" => CreditStatus::BelowThreshold.as_label())
        .increment(sellers);

    gauge!("credit_total_buyer_cost")
        .set(report.total_buyer_cost().amount().to_f64().unwrap_or(f64::MAX));
    gauge!("credit_total_seller_revenue")
        .set(report.total_seller_revenue().amount().to_f64().unwrap_or(f64::MAX));
    histogram!("credit_batch_duration_seconds").record(duration_secs);
}

/// Record a rejected batch.
///
/// # Arguments
///
/// * `code` - Stable error code (e.g. "INVALID_RECORD", "SOURCE_MALFORMED")
pub fn record_batch_rejected(code: &'static str) {
    counter!("credit_batch_rejections_total", "code" => code).increment(1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::credit_position::{
        CompanyRecord, CreditPositionCalculator, MarketConfiguration,
    };
    use rust_decimal_macros::dec;

    #[test]
    fn disabled_metrics_install_nothing() {
        let config = MetricsConfig::default();
        assert!(init_metrics(&config).unwrap().is_none());
    }

    #[test]
    fn recording_without_recorder_is_noop() {
        let market = MarketConfiguration::new(dec!(20.0), dec!(50.0)).unwrap();
        let report = CreditPositionCalculator::new(market)
            .calculate(&[CompanyRecord::new("Solo", "Steel", dec!(30), dec!(10))])
            .unwrap();

        record_batch_processed(&report, 0.01);
        record_batch_rejected("INVALID_RECORD");
    }
}
