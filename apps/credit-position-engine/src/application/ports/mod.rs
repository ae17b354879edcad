//! Application Ports (Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! - [`CompanySourcePort`]: where company records come from
//! - [`ReportRendererPort`]: how a finished report is presented

mod company_source_port;
mod report_renderer_port;

pub use company_source_port::{CompanySourcePort, SourceError};
pub use report_renderer_port::{RenderError, ReportRendererPort};
