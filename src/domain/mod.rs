//! Domain types used throughout the crate.
//!
//! This module defines:
//!
//! - the counting-stat type (`Count`)
//! - tunable formula constants (`FipOptions`, `WobaOptions`, `WraaOptions`)
//! - raw season lines (`BattingLine`, `PitchingLine`) and `LeagueContext`

pub mod types;

pub use types::*;
