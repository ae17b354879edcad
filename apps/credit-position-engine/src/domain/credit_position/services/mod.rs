//! Credit Position Domain Services

mod position_calculator;

pub use position_calculator::CreditPositionCalculator;
