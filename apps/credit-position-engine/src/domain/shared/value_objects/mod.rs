//! Shared Value Objects
//!
//! Immutable domain types used across bounded contexts.
//! Value objects are compared by value, not identity.

mod money;
mod tonnes;

pub use money::Money;
pub use tonnes::Tonnes;
