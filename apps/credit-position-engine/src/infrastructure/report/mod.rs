//! Report renderer adapters.

mod json;
mod markdown;

use serde::{Deserialize, Serialize};

pub use json::JsonReportRenderer;
pub use markdown::MarkdownReportRenderer;

use crate::application::ports::ReportRendererPort;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Markdown table plus totals.
    #[default]
    Markdown,
    /// Pretty-printed JSON document.
    Json,
}

/// Build the renderer for `format`.
#[must_use]
pub fn renderer_for(format: ReportFormat, decimal_places: u32) -> Box<dyn ReportRendererPort> {
    match format {
        ReportFormat::Markdown => Box::new(MarkdownReportRenderer::new(decimal_places)),
        ReportFormat::Json => Box::new(JsonReportRenderer::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factory_picks_renderer() {
        assert_eq!(renderer_for(ReportFormat::Markdown, 2).format_name(), "markdown");
        assert_eq!(renderer_for(ReportFormat::Json, 2).format_name(), "json");
    }

    #[test]
    fn format_parses_lowercase() {
        let format: ReportFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(format, ReportFormat::Json);
        assert_eq!(ReportFormat::default(), ReportFormat::Markdown);
    }
}
