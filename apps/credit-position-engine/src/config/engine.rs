//! Calculator tuning.

use serde::{Deserialize, Serialize};

use crate::domain::credit_position::CreditPositionCalculator;

/// Engine section of the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Batch size from which records are evaluated on the rayon pool.
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

const fn default_parallel_threshold() -> usize {
    CreditPositionCalculator::DEFAULT_PARALLEL_THRESHOLD
}
