//! Export reports to JSON.
//!
//! Undefined stats are written as `null`.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::error::AppError;

/// Write reports as a pretty-printed JSON array.
pub fn write_reports_json<T: Serialize>(path: &Path, reports: &[T]) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create report JSON '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, reports)
        .map_err(|e| AppError::new(2, format!("Failed to write report JSON: {e}")))?;
    tracing::info!(path = %path.display(), n_reports = reports.len(), "wrote report JSON");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{LeagueContext, PitchingLine};
    use crate::report::pitching_report;

    #[test]
    fn undefined_stats_are_null() {
        let line = PitchingLine {
            name: "Opener".to_string(),
            ..PitchingLine::default()
        };
        let report = pitching_report(&line, &LeagueContext::default());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        write_reports_json(&path, &[report]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["name"], "Opener");
        assert!(value[0]["era"].is_null());
        assert_eq!(value[0]["innings_pitched"], 0.0);
    }
}
