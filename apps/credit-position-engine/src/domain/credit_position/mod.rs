//! Credit Position Bounded Context
//!
//! Emission accounting against a threshold intensity and the resulting
//! carbon-credit positions (buyers with excess emissions, sellers with
//! surplus credits).

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{CreditPositionError, RecordField};
pub use services::CreditPositionCalculator;
pub use value_objects::{
    CompanyRecord, CompanyResult, CreditStatus, MarketConfiguration, MarketSummary,
    PositionReport, SectorSummary,
};
