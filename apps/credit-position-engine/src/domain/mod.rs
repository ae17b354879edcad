//! Domain Layer
//!
//! The innermost layer containing business logic with zero infrastructure dependencies.
//! This layer defines:
//!
//! - **Value Objects**: Immutable domain types with equality by value
//! - **Domain Services**: Stateless business logic
//!
//! # Bounded Contexts
//!
//! - [`credit_position`]: Emission accounting and carbon-credit positions
//! - [`shared`]: Monetary amounts and emission quantities

pub mod credit_position;
pub mod shared;
