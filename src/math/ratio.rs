//! Guarded division.
//!
//! Every rate statistic divides by something that can legitimately be zero in a
//! real box score (a reliever with no recorded outs, a pinch runner with no
//! at-bats). The result is then undefined and we say so instead of returning
//! `NaN`, `inf` or a `0.0` placeholder.

use crate::error::StatError;

/// Divide `numerator` by `denominator`, failing with
/// [`StatError::DivisionUndefined`] when the denominator is zero.
///
/// `stat` and `denominator_name` only label the error.
pub fn divide(
    stat: &'static str,
    denominator_name: &'static str,
    numerator: f64,
    denominator: f64,
) -> Result<f64, StatError> {
    if denominator == 0.0 {
        tracing::debug!(stat, denominator = denominator_name, "zero denominator");
        return Err(StatError::DivisionUndefined {
            stat,
            denominator: denominator_name,
        });
    }
    Ok(numerator / denominator)
}
