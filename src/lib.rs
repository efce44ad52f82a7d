//! `sabr-stats` library crate.
//!
//! Sabermetric rate and value statistics (ERA, WHIP, FIP, OPS, Runs Created,
//! wOBA, wRAA, ...) computed from raw box-score counting stats.
//!
//! - `stats`: the formula catalog, one pure function per statistic
//! - `math`: rounding and guarded division shared by every formula
//! - `report`, `io`, `cli`, `app`: the `sabr` binary, a thin caller of `stats`
//!
//! ```
//! use sabr_stats::stats::{era, innings_pitched};
//!
//! let ip = innings_pitched(629);
//! assert_eq!(era(66, ip).unwrap(), 2.83);
//! ```

pub mod app;
pub mod cli;
pub mod domain;
pub mod error;
pub mod io;
pub mod math;
pub mod report;
pub mod stats;
