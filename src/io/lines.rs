//! Read season lines from JSON.
//!
//! A file holds either a single line object or an array of them:
//!
//! ```json
//! [{"name": "Ichiro Suzuki", "at_bats": 704, "hits": 262, "doubles": 24}]
//! ```
//!
//! Field names follow `domain::BattingLine` / `domain::PitchingLine`.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::{BattingLine, PitchingLine};
use crate::error::AppError;

fn read_lines<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to open '{}': {e}", path.display())))?;
    let invalid = |e: serde_json::Error| {
        AppError::new(2, format!("Invalid season line JSON '{}': {e}", path.display()))
    };

    let lines = match text.bytes().find(|b| !b.is_ascii_whitespace()) {
        Some(b'[') => serde_json::from_str::<Vec<T>>(&text).map_err(invalid)?,
        Some(b'{') => vec![serde_json::from_str::<T>(&text).map_err(invalid)?],
        _ => {
            return Err(AppError::new(
                2,
                format!(
                    "Invalid season line JSON '{}': expected an object or an array of objects",
                    path.display()
                ),
            ));
        }
    };
    tracing::debug!(path = %path.display(), n_lines = lines.len(), "loaded season lines");
    Ok(lines)
}

/// Read one or more batting lines.
pub fn read_batting_lines(path: &Path) -> Result<Vec<BattingLine>, AppError> {
    read_lines(path)
}

/// Read one or more pitching lines.
pub fn read_pitching_lines(path: &Path) -> Result<Vec<PitchingLine>, AppError> {
    read_lines(path)
}
