//! The formula catalog.
//!
//! One pure function per statistic. Nothing here orders computations for the
//! caller: composites take previously computed primitives as arguments (e.g.
//! [`runs_created_per_27_outs`] takes a Runs Created value, [`wraa`] a wOBA).
//!
//! Fallible formulas return [`StatError::DivisionUndefined`](crate::error::StatError)
//! when their divisor is zero.

pub mod batting;
pub mod pitching;
pub mod runs_created;
pub mod woba;

pub use batting::*;
pub use pitching::*;
pub use runs_created::*;
pub use woba::*;
