//! Infrastructure Layer
//!
//! This module contains all adapters (implementations) for the ports defined
//! in the application layer. Following hexagonal architecture:
//!
//! - **Driven Adapters (Outbound)**
//!   - `company_source/`: File (JSON/YAML) and in-memory record sources
//!   - `report/`: Markdown and JSON report renderers

pub mod company_source;
pub mod report;
