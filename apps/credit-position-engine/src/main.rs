//! Credit Position Engine Binary
//!
//! Computes the carbon-credit positions of one company batch and prints
//! the report to stdout. Logs go to stderr.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin credit-position-engine
//! ```
//!
//! # Environment Variables
//!
//! - `CREDIT_ENGINE_CONFIG`: Config file path (default: config.yaml, optional)
//! - `CREDIT_THRESHOLD_INTENSITY`, `CREDIT_CARBON_PRICE`: Referenced by the
//!   example config via `${VAR:-default}`
//! - `RUST_LOG`: Log filter (overrides `observability.logging.level`)

use std::process::ExitCode;

use credit_position_engine::config::{Config, load_config};
use credit_position_engine::observability::{init_logging, init_metrics, write_snapshot};
use credit_position_engine::{EngineError, run};

fn main() -> ExitCode {
    load_dotenv();

    let config_path = std::env::var("CREDIT_ENGINE_CONFIG").ok();
    let config = match load_config(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let err = EngineError::from(e);
            eprintln!("[{}] {err}", err.code());
            return ExitCode::from(err.exit_code());
        }
    };

    init_logging(&config.observability.logging);
    log_config(&config);

    match execute(&config) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(code = %e.code(), error = %e, "Credit position run failed");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Run the batch, then export the metrics snapshot if configured.
fn execute(config: &Config) -> Result<String, EngineError> {
    let handle = init_metrics(&config.observability.metrics)?;

    let result = run(config);

    if let (Some(handle), Some(path)) = (handle, &config.observability.metrics.export_path) {
        write_snapshot(&handle, path)?;
    }

    result
}

/// Log the loaded configuration.
fn log_config(config: &Config) {
    tracing::info!(
        threshold_intensity = %config.market.threshold_intensity,
        carbon_price = %config.market.carbon_price,
        input = config.input.path.as_deref().unwrap_or("built-in sample"),
        format = ?config.report.format,
        parallel_threshold = config.engine.parallel_threshold,
        "Configuration loaded"
    );
}

/// Load `.env` from the current directory or the nearest ancestor.
fn load_dotenv() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    if let Ok(cwd) = std::env::current_dir() {
        let mut dir = cwd.as_path();
        while let Some(parent) = dir.parent() {
            let env_path = parent.join(".env");
            if env_path.exists() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            dir = parent;
        }
    }
}
