//! Runs Created (Bill James) and its 27-out normalization.
//!
//! Both variants share one shape:
//!
//! ```text
//! A = H + BB + HBP − CS − GIDP          on-base ability
//! B = weighted bases                    advancement ability
//! C = AB + BB + HBP + SF + SH           opportunities
//! RC = (A + 2.4C) · (B + 3C) / 9C − 0.9C
//! ```
//!
//! and differ only in how `B` is weighted. They are not interchangeable.
//!
//! Every weighted term of `B` is rounded to 1 dp before summing, and `A + 2.4C`,
//! `9C`, `0.9C` are rounded before combining. Published values depend on this,
//! so do not fold the rounding into the final step.

use crate::domain::Count;
use crate::error::StatError;
use crate::math::{divide, round_to, round_whole};

fn on_base_ability(
    hits: Count,
    walks: Count,
    hit_by_pitch: Count,
    caught_stealing: Count,
    gidp: Count,
) -> f64 {
    (hits + walks + hit_by_pitch - caught_stealing - gidp) as f64
}

fn opportunities(
    at_bats: Count,
    walks: Count,
    hit_by_pitch: Count,
    sac_flies: Count,
    sac_hits: Count,
) -> f64 {
    (at_bats + walks + hit_by_pitch + sac_flies + sac_hits) as f64
}

/// `(A' · (B + 3C)) / round(9C) − round(0.9C)`, where `A'` is the already rounded
/// `A + 2.4C`.
fn combine(stat: &'static str, a_rounded: f64, b: f64, c: f64) -> Result<f64, StatError> {
    let a_b = a_rounded * (b + 3.0 * c);
    let nine_c = round_to(9.0 * c, 1);
    let v = divide(stat, "AB + BB + HBP + SF + SH", a_b, nine_c)?;
    Ok(v - round_to(0.9 * c, 1))
}

/// Basic Runs Created, 2 dp.
///
/// `B = TB + 0.24·(BB + HBP − IBB) + 0.62·SB + 0.5·(SH + SF) − 0.03·SO`, and
/// `A + 2.4C` is rounded to a whole number.
#[allow(clippy::too_many_arguments)]
pub fn runs_created_basic(
    total_bases: Count,
    hits: Count,
    walks: Count,
    hit_by_pitch: Count,
    caught_stealing: Count,
    gidp: Count,
    sac_flies: Count,
    sac_hits: Count,
    stolen_bases: Count,
    strikeouts: Count,
    at_bats: Count,
    intentional_walks: Count,
) -> Result<f64, StatError> {
    let a = on_base_ability(hits, walks, hit_by_pitch, caught_stealing, gidp);
    let b = total_bases as f64
        + round_to(0.24 * (walks + hit_by_pitch - intentional_walks) as f64, 1)
        + round_to(0.62 * stolen_bases as f64, 1)
        + round_to(0.5 * (sac_hits + sac_flies) as f64, 1)
        - round_to(0.03 * strikeouts as f64, 1);
    let c = opportunities(at_bats, walks, hit_by_pitch, sac_flies, sac_hits);

    let rc = combine("runs_created_basic", round_whole(a + 2.4 * c), b, c)?;
    Ok(round_to(rc, 2))
}

/// Runs Created, 2002 version, 1 dp.
///
/// Total bases are replaced by
/// `1.125·1B + 1.69·2B + 3.02·3B + 3.73·HR`, and
/// `B = TB' + 0.29·(BB + HBP − IBB) + 0.492·(SF + SH + SB) − 0.04·SO`.
/// `A + 2.4C` is rounded to 1 dp.
#[allow(clippy::too_many_arguments)]
pub fn runs_created_2002(
    hits: Count,
    walks: Count,
    hit_by_pitch: Count,
    caught_stealing: Count,
    gidp: Count,
    sac_flies: Count,
    sac_hits: Count,
    stolen_bases: Count,
    strikeouts: Count,
    at_bats: Count,
    intentional_walks: Count,
    singles: Count,
    doubles: Count,
    triples: Count,
    home_runs: Count,
) -> Result<f64, StatError> {
    let weighted_tb = round_to(1.125 * singles as f64, 1)
        + round_to(1.69 * doubles as f64, 1)
        + round_to(3.02 * triples as f64, 1)
        + round_to(3.73 * home_runs as f64, 1);

    let a = on_base_ability(hits, walks, hit_by_pitch, caught_stealing, gidp);
    let b = weighted_tb
        + round_to(0.29 * (walks + hit_by_pitch - intentional_walks) as f64, 1)
        + round_to(0.492 * (sac_flies + sac_hits + stolen_bases) as f64, 1)
        - round_to(0.04 * strikeouts as f64, 1);
    let c = opportunities(at_bats, walks, hit_by_pitch, sac_flies, sac_hits);

    let rc = combine("runs_created_2002", round_to(a + 2.4 * c, 1), b, c)?;
    Ok(round_to(rc, 1))
}

/// Runs Created scaled to a 27-out game, 1 dp.
///
/// Outs made are `AB − H + SH + SF + CS + GIDP`.
pub fn runs_created_per_27_outs(
    runs_created: f64,
    at_bats: Count,
    hits: Count,
    sac_hits: Count,
    sac_flies: Count,
    caught_stealing: Count,
    gidp: Count,
) -> Result<f64, StatError> {
    let outs = (at_bats - hits + sac_hits + sac_flies + caught_stealing + gidp) as f64;
    let v = divide("runs_created_per_27_outs", "outs made", 27.0 * runs_created, outs)?;
    Ok(round_to(v, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::{single_hits, total_bases};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    // Ichiro Suzuki, 2004.
    fn ichiro_basic() -> Result<f64, StatError> {
        runs_created_basic(320, 262, 49, 4, 11, 6, 3, 2, 36, 63, 704, 19)
    }

    fn ichiro_2002() -> Result<f64, StatError> {
        let singles = single_hits(262, 8, 24, 5);
        runs_created_2002(262, 49, 4, 11, 6, 3, 2, 36, 63, 704, 19, singles, 24, 5, 8)
    }

    #[test]
    fn basic_reference_line() {
        assert_eq!(total_bases(single_hits(262, 8, 24, 5), 8, 24, 5), 320);
        assert_close(ichiro_basic().unwrap(), 132.09);
    }

    #[test]
    fn version_2002_reference_line() {
        assert_close(ichiro_2002().unwrap(), 136.7);
    }

    #[test]
    fn variants_differ() {
        assert!((ichiro_basic().unwrap() - ichiro_2002().unwrap()).abs() > 1.0);
    }

    #[test]
    fn per_27_outs_from_either_variant() {
        let basic = ichiro_basic().unwrap();
        assert_close(runs_created_per_27_outs(basic, 704, 262, 2, 3, 11, 6).unwrap(), 7.7);

        let v2002 = ichiro_2002().unwrap();
        assert_close(runs_created_per_27_outs(v2002, 704, 262, 2, 3, 11, 6).unwrap(), 8.0);
    }

    #[test]
    fn no_outs_made_is_undefined() {
        assert_eq!(
            runs_created_per_27_outs(1.5, 2, 2, 0, 0, 0, 0),
            Err(StatError::DivisionUndefined {
                stat: "runs_created_per_27_outs",
                denominator: "outs made",
            })
        );
    }

    #[test]
    fn no_opportunities_is_undefined() {
        assert!(runs_created_basic(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0).is_err());
        assert!(runs_created_2002(0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0).is_err());
    }

    #[test]
    fn deterministic() {
        assert_eq!(ichiro_basic(), ichiro_basic());
        assert_eq!(ichiro_2002(), ichiro_2002());
    }
}
