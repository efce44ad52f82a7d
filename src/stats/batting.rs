//! Batting rates and counting-stat identities.

use crate::domain::Count;
use crate::error::StatError;
use crate::math::{divide, round_to};

const AB: &str = "at-bats";

/// Singles: `H − (HR + 2B + 3B)`.
pub fn single_hits(hits: Count, home_runs: Count, doubles: Count, triples: Count) -> Count {
    hits - (home_runs + doubles + triples)
}

/// Plate appearances: `AB + BB + HBP + SF + SH`.
pub fn plate_appearances(
    at_bats: Count,
    walks: Count,
    hit_by_pitch: Count,
    sac_flies: Count,
    sac_hits: Count,
) -> Count {
    at_bats + walks + hit_by_pitch + sac_flies + sac_hits
}

/// Total bases: `4·HR + 3·3B + 2·2B + 1B`.
pub fn total_bases(singles: Count, home_runs: Count, doubles: Count, triples: Count) -> Count {
    home_runs * 4 + triples * 3 + doubles * 2 + singles
}

/// Batting average: `H / AB`, 3 dp.
pub fn batting_average(hits: Count, at_bats: Count) -> Result<f64, StatError> {
    let v = divide("batting_average", AB, hits as f64, at_bats as f64)?;
    Ok(round_to(v, 3))
}

/// Slugging percentage: `TB / AB`, 3 dp.
pub fn slugging(total_bases: Count, at_bats: Count) -> Result<f64, StatError> {
    let v = divide("slugging", AB, total_bases as f64, at_bats as f64)?;
    Ok(round_to(v, 3))
}

fn raw_on_base(
    stat: &'static str,
    hits: Count,
    walks: Count,
    hit_by_pitch: Count,
    at_bats: Count,
    sac_flies: Count,
) -> Result<f64, StatError> {
    divide(
        stat,
        "AB + BB + HBP + SF",
        (hits + walks + hit_by_pitch) as f64,
        (at_bats + walks + hit_by_pitch + sac_flies) as f64,
    )
}

/// On-base percentage: `(H + BB + HBP) / (AB + BB + HBP + SF)`, 3 dp.
pub fn on_base_pct(
    hits: Count,
    walks: Count,
    hit_by_pitch: Count,
    at_bats: Count,
    sac_flies: Count,
) -> Result<f64, StatError> {
    let v = raw_on_base("on_base_pct", hits, walks, hit_by_pitch, at_bats, sac_flies)?;
    Ok(round_to(v, 3))
}

/// On-base plus slugging, 3 dp.
///
/// Both components are summed unrounded and the total is rounded once, so the
/// result can differ by 0.001 from `on_base_pct(..) + slugging(..)`.
pub fn on_base_plus_slugging(
    hits: Count,
    walks: Count,
    hit_by_pitch: Count,
    at_bats: Count,
    sac_flies: Count,
    total_bases: Count,
) -> Result<f64, StatError> {
    let slg = divide("on_base_plus_slugging", AB, total_bases as f64, at_bats as f64)?;
    let obp = raw_on_base(
        "on_base_plus_slugging",
        hits,
        walks,
        hit_by_pitch,
        at_bats,
        sac_flies,
    )?;
    Ok(round_to(slg + obp, 3))
}

/// Batting average on balls in play: `(H − HR) / (AB − SO − HR + SF)`, 3 dp.
pub fn batting_avg_on_balls_in_play(
    hits: Count,
    home_runs: Count,
    at_bats: Count,
    strikeouts: Count,
    sac_flies: Count,
) -> Result<f64, StatError> {
    let v = divide(
        "batting_avg_on_balls_in_play",
        "balls in play",
        (hits - home_runs) as f64,
        (at_bats - strikeouts - home_runs + sac_flies) as f64,
    )?;
    Ok(round_to(v, 3))
}

/// "Three true outcomes" share for a batter, in percent:
/// `(HR + BB + SO) / PA · 100`, 1 dp.
pub fn adam_dunn_batter(
    home_runs: Count,
    walks: Count,
    strikeouts: Count,
    plate_appearances: Count,
) -> Result<f64, StatError> {
    let outcomes = (home_runs + walks + strikeouts) as f64;
    let v = divide(
        "adam_dunn_batter",
        "plate appearances",
        outcomes,
        plate_appearances as f64,
    )?;
    Ok(round_to(v * 100.0, 1))
}
