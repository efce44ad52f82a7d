//! Input/output helpers.
//!
//! - season-line JSON ingest (`lines`)
//! - report exports as JSON (`export`)

pub mod export;
pub mod lines;

pub use export::*;
pub use lines::*;
