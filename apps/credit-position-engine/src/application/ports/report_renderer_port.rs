//! Report Renderer Port (Driven Port)

use crate::application::dto::PositionReportDto;

/// Renderer error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Serializing the report failed.
    #[error("Failed to serialize report: {0}")]
    Serialization(String),

    /// Writing into the output buffer failed.
    #[error("Failed to format report: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Port for turning a report into text.
pub trait ReportRendererPort: Send + Sync {
    /// Render the whole report.
    fn render(&self, report: &PositionReportDto) -> Result<String, RenderError>;

    /// Short format name ("markdown", "json").
    fn format_name(&self) -> &'static str;
}
