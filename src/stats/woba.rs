//! Weighted on-base average (wOBA) and weighted runs above average (wRAA).
//!
//! wOBA is a linear-weights rate: each way of reaching base gets a run value,
//! and the weighted sum is divided by `AB + BB − IBB + HBP + SF`. Each weighted
//! term is rounded to 1 dp before summing, the same policy as Runs Created.

use crate::domain::{Count, WobaOptions, WraaOptions};
use crate::error::StatError;
use crate::math::{divide, round_to};

/// Linear weights for one league context.
struct Weights {
    unintentional_walk: f64,
    hit_by_pitch: f64,
    single: f64,
    reached_on_error: f64,
    double: f64,
    triple: f64,
    home_run: f64,
}

/// MLB weights; reached-on-error is not credited.
const MLB: Weights = Weights {
    unintentional_walk: 0.690,
    hit_by_pitch: 0.722,
    single: 0.888,
    reached_on_error: 0.0,
    double: 1.271,
    triple: 1.616,
    home_run: 2.101,
};

/// Weights for a league that records reached-on-error separately.
const WITH_ERRORS: Weights = Weights {
    unintentional_walk: 0.72,
    hit_by_pitch: 0.75,
    single: 0.90,
    reached_on_error: 0.92,
    double: 1.24,
    triple: 1.56,
    home_run: 1.95,
};

struct WobaLine {
    walks: Count,
    hit_by_pitch: Count,
    singles: Count,
    doubles: Count,
    triples: Count,
    home_runs: Count,
    at_bats: Count,
    sac_flies: Count,
    reached_on_error: Count,
    intentional_walks: Count,
}

fn weighted(weight: f64, count: Count) -> f64 {
    round_to(weight * count as f64, 1)
}

fn woba_with(stat: &'static str, w: &Weights, line: &WobaLine) -> Result<f64, StatError> {
    let numer = weighted(w.unintentional_walk, line.walks - line.intentional_walks)
        + weighted(w.hit_by_pitch, line.hit_by_pitch)
        + weighted(w.single, line.singles)
        + weighted(w.reached_on_error, line.reached_on_error)
        + weighted(w.double, line.doubles)
        + weighted(w.triple, line.triples)
        + weighted(w.home_run, line.home_runs);

    let denom =
        line.at_bats + line.walks - line.intentional_walks + line.hit_by_pitch + line.sac_flies;
    let v = divide(stat, "AB + BB - IBB + HBP + SF", numer, denom as f64)?;
    Ok(round_to(v, 3))
}

/// wOBA with MLB linear weights, 3 dp.
///
/// `options.reached_on_error` is ignored; MLB weights do not credit it.
#[allow(clippy::too_many_arguments)]
pub fn woba_mlb(
    walks: Count,
    hit_by_pitch: Count,
    singles: Count,
    doubles: Count,
    triples: Count,
    home_runs: Count,
    at_bats: Count,
    sac_flies: Count,
    options: WobaOptions,
) -> Result<f64, StatError> {
    let line = WobaLine {
        walks,
        hit_by_pitch,
        singles,
        doubles,
        triples,
        home_runs,
        at_bats,
        sac_flies,
        reached_on_error: 0,
        intentional_walks: options.intentional_walks,
    };
    woba_with("woba_mlb", &MLB, &line)
}

/// wOBA for a league that tracks times reached on error, 3 dp.
///
/// `options.reached_on_error` (default 0) is credited in the numerator only;
/// those plate appearances are already at-bats.
#[allow(clippy::too_many_arguments)]
pub fn woba_with_errors(
    walks: Count,
    hit_by_pitch: Count,
    singles: Count,
    doubles: Count,
    triples: Count,
    home_runs: Count,
    at_bats: Count,
    sac_flies: Count,
    options: WobaOptions,
) -> Result<f64, StatError> {
    let line = WobaLine {
        walks,
        hit_by_pitch,
        singles,
        doubles,
        triples,
        home_runs,
        at_bats,
        sac_flies,
        reached_on_error: options.reached_on_error,
        intentional_walks: options.intentional_walks,
    };
    woba_with("woba_with_errors", &WITH_ERRORS, &line)
}

/// Weighted runs above average: `((wOBA − lgwOBA) / scale) · PA`, 1 dp.
pub fn wraa(
    woba: f64,
    league_woba: f64,
    plate_appearances: Count,
    options: WraaOptions,
) -> Result<f64, StatError> {
    let per_pa = divide("wraa", "wOBA scale", woba - league_woba, options.woba_scale)?;
    Ok(round_to(per_pa * plate_appearances as f64, 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    const IBB2: WobaOptions = WobaOptions {
        intentional_walks: 2,
        reached_on_error: 0,
    };

    #[test]
    fn mlb_reference_line() {
        assert_close(woba_mlb(81, 0, 114, 28, 3, 23, 488, 6, IBB2).unwrap(), 0.427);
    }

    #[test]
    fn with_errors_credits_reached_on_error() {
        let without = woba_with_errors(81, 0, 114, 28, 3, 23, 488, 6, IBB2).unwrap();
        let roe = WobaOptions {
            reached_on_error: 7,
            ..IBB2
        };
        let with = woba_with_errors(81, 0, 114, 28, 3, 23, 488, 6, roe).unwrap();
        assert_close(without, 0.425);
        assert_close(with, 0.437);
    }

    #[test]
    fn reached_on_error_defaults_to_zero() {
        let ibb_only = WobaOptions {
            intentional_walks: 2,
            ..WobaOptions::default()
        };
        let v = woba_with_errors(81, 0, 114, 28, 3, 23, 488, 6, ibb_only).unwrap();
        assert_close(v, 0.425);

        // Fully defaulted: no IBB, no ROE.
        let v = woba_with_errors(81, 0, 114, 28, 3, 23, 488, 6, WobaOptions::default()).unwrap();
        assert_close(v, 0.426);
    }

    #[test]
    fn mlb_weights_ignore_reached_on_error() {
        let roe = WobaOptions {
            reached_on_error: 7,
            ..IBB2
        };
        assert_close(woba_mlb(81, 0, 114, 28, 3, 23, 488, 6, roe).unwrap(), 0.427);
    }

    #[test]
    fn intentional_walks_leave_the_denominator() {
        // All walks intentional: numerator and denominator both drop them.
        let all_ibb = WobaOptions {
            intentional_walks: 10,
            ..WobaOptions::default()
        };
        let v = woba_mlb(10, 0, 0, 0, 0, 0, 10, 0, all_ibb).unwrap();
        assert_close(v, 0.0);
    }

    #[test]
    fn empty_line_is_undefined() {
        assert!(woba_mlb(0, 0, 0, 0, 0, 0, 0, 0, WobaOptions::default()).is_err());
        assert!(woba_with_errors(0, 0, 0, 0, 0, 0, 0, 0, WobaOptions::default()).is_err());
    }

    #[test]
    fn wraa_default_and_custom_scale() {
        assert_close(wraa(0.428, 0.323, 576, WraaOptions::default()).unwrap(), 48.8);
        let custom = WraaOptions { woba_scale: 1.189 };
        assert_close(wraa(0.428, 0.323, 576, custom).unwrap(), 50.9);
    }

    #[test]
    fn wraa_below_average_is_negative() {
        assert!(wraa(0.300, 0.320, 600, WraaOptions::default()).unwrap() < 0.0);
        assert_close(wraa(0.320, 0.320, 600, WraaOptions::default()).unwrap(), 0.0);
    }

    #[test]
    fn zero_scale_is_undefined() {
        let zero = WraaOptions { woba_scale: 0.0 };
        assert_eq!(
            wraa(0.4, 0.3, 500, zero),
            Err(StatError::DivisionUndefined {
                stat: "wraa",
                denominator: "wOBA scale",
            })
        );
    }
}
