//! Data Transfer Objects (DTOs)
//!
//! DTOs are the presentation boundary: values are rounded for display,
//! the domain report keeps full precision.

mod position_report_dto;

pub use position_report_dto::{
    CompanyRowDto, MarketSummaryDto, PositionReportDto, ReportOptions, SectorSummaryDto, TotalsDto,
};
