//! Numeric helpers shared by every formula: decimal rounding and guarded division.

pub mod ratio;
pub mod round;

pub use ratio::*;
pub use round::*;
