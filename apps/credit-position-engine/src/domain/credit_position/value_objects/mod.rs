//! Credit Position Value Objects

mod company_record;
mod company_result;
mod credit_status;
mod market_configuration;
mod position_report;

pub use company_record::CompanyRecord;
pub use company_result::CompanyResult;
pub use credit_status::CreditStatus;
pub use market_configuration::MarketConfiguration;
pub use position_report::{MarketSummary, PositionReport, SectorSummary};
