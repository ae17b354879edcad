//! Input configuration.

use serde::{Deserialize, Serialize};

/// Where the company batch is read from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Path to a `.json`, `.yaml` or `.yml` batch file. Absent means the built-in demo batch.
    #[serde(default)]
    pub path: Option<String>,
}
