//! Use Cases
//!
//! Application-specific orchestration of domain services and ports.

mod compute_positions;

pub use compute_positions::{ComputePositionsError, ComputePositionsUseCase};
