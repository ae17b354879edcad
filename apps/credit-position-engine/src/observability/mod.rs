//! Observability module for logging and metrics.
//!
//! Structured logging goes through `tracing`; batch metrics through the
//! `metrics` facade with an optional Prometheus recorder.

mod logging;
mod metrics;

pub use logging::init_logging;
pub use self::metrics::{
    MetricsError, init_metrics, record_batch_processed, record_batch_rejected,
    write_snapshot,
};
