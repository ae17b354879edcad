//! Application Layer
//!
//! The application layer orchestrates domain logic through use cases.
//! It defines:
//!
//! - **Ports**: Interfaces for company sources and report renderers
//! - **Use Cases**: Application-specific business rules
//! - **DTOs**: Presentation-ready report structures

pub mod dto;
pub mod ports;
pub mod use_cases;

pub use dto::*;
pub use ports::*;
pub use use_cases::*;
