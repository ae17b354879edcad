//! File-backed company source (JSON or YAML).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::application::ports::{CompanySourcePort, SourceError};
use crate::domain::credit_position::CompanyRecord;

/// On-disk layout of a company batch.
///
/// ```yaml
/// companies:
///   - name: Nordhavn Steel AG
///     sector: Steel
///     intensity: 41.8
///     revenue_million: 680
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyBatchFile {
    /// Records in report tie-break order.
    pub companies: Vec<CompanyRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Json,
    Yaml,
}

/// Reads a batch from a `.json`, `.yaml` or `.yml` file.
#[derive(Debug, Clone)]
pub struct FileCompanySource {
    path: PathBuf,
}

impl FileCompanySource {
    /// Create a source for `path`. The file is read on [`CompanySourcePort::load`].
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn format(&self) -> Result<FileFormat, SourceError> {
        let extension = self
            .path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(FileFormat::Json),
            Some("yaml" | "yml") => Ok(FileFormat::Yaml),
            _ => Err(SourceError::UnsupportedFormat {
                source_name: self.describe(),
            }),
        }
    }

    fn malformed(&self, message: impl ToString) -> SourceError {
        SourceError::Malformed {
            source_name: self.describe(),
            message: message.to_string(),
        }
    }
}

impl CompanySourcePort for FileCompanySource {
    fn load(&self) -> Result<Vec<CompanyRecord>, SourceError> {
        let format = self.format()?;

        let contents =
            std::fs::read_to_string(&self.path).map_err(|e| SourceError::Unavailable {
                source_name: self.describe(),
                message: e.to_string(),
            })?;

        let batch: CompanyBatchFile = match format {
            FileFormat::Json => serde_json::from_str(&contents).map_err(|e| self.malformed(e))?,
            FileFormat::Yaml => {
                serde_yaml_bw::from_str(&contents).map_err(|e| self.malformed(e))?
            }
        };

        tracing::debug!(
            path = %self.path.display(),
            companies = batch.companies.len(),
            "Read company batch file"
        );

        Ok(batch.companies)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
