//! Pitching rates and composites.
//!
//! Innings pitched are fractional innings (`outs / 3`), so `209.2` in a box
//! score is *not* `209.2` here; use [`innings_pitched`] to get the value the
//! other pitching formulas expect.

use crate::domain::{Count, FipOptions};
use crate::error::StatError;
use crate::math::{divide, round_to};

const IP: &str = "innings pitched";

/// Innings pitched from recorded outs, 1 dp.
pub fn innings_pitched(outs: Count) -> f64 {
    round_to(outs as f64 / 3.0, 1)
}

/// Earned run average: `9·ER / IP`, 2 dp.
pub fn era(earned_runs: Count, ip: f64) -> Result<f64, StatError> {
    let v = divide("era", IP, 9.0 * earned_runs as f64, ip)?;
    Ok(round_to(v, 2))
}

/// Walks plus hits per inning pitched: `(BB + H) / IP`, 3 dp.
pub fn whip(walks: Count, hits: Count, ip: f64) -> Result<f64, StatError> {
    let v = divide("whip", IP, (walks + hits) as f64, ip)?;
    Ok(round_to(v, 3))
}

fn per_nine(stat: &'static str, count: Count, ip: f64) -> Result<f64, StatError> {
    let v = divide(stat, IP, 9.0 * count as f64, ip)?;
    Ok(round_to(v, 1))
}

/// Hits allowed per nine innings, 1 dp.
pub fn hits_per_9(hits: Count, ip: f64) -> Result<f64, StatError> {
    per_nine("hits_per_9", hits, ip)
}

/// Strikeouts per nine innings, 1 dp.
pub fn so_per_9(strikeouts: Count, ip: f64) -> Result<f64, StatError> {
    per_nine("so_per_9", strikeouts, ip)
}

/// Walks per nine innings, 1 dp.
pub fn bb_per_9(walks: Count, ip: f64) -> Result<f64, StatError> {
    per_nine("bb_per_9", walks, ip)
}

/// Home runs allowed per nine innings, 1 dp.
pub fn hr_per_9(home_runs: Count, ip: f64) -> Result<f64, StatError> {
    per_nine("hr_per_9", home_runs, ip)
}

/// Fielding independent pitching.
///
/// ```text
/// FIP = (13·HR + 3·(BB + HBP − IBB) − 2·SO) / IP + C
/// ```
///
/// `C` (league constant) and IBB come from `options`; see [`FipOptions::default`].
/// Rounded to 2 dp.
pub fn fip(
    home_runs: Count,
    walks: Count,
    hit_by_pitch: Count,
    strikeouts: Count,
    ip: f64,
    options: FipOptions,
) -> Result<f64, StatError> {
    let hr_term = 13.0 * home_runs as f64;
    let walk_term = 3.0 * (walks + hit_by_pitch - options.intentional_walks) as f64;
    let so_term = 2.0 * strikeouts as f64;
    let v = divide("fip", IP, hr_term + walk_term - so_term, ip)?;
    Ok(round_to(v + options.league_constant, 2))
}

/// Runs saved above average: the ERA gap to league average spread over the
/// pitcher's workload, `(lgERA − ERA) · IP / 9`, 1 dp.
///
/// Positive means better than league average.
pub fn rsaa(era: f64, league_era: f64, ip: f64) -> f64 {
    round_to((league_era - era) * ip / 9.0, 1)
}

/// "Three true outcomes" share for a pitcher, in percent:
/// `(HR + BB + HBP + SO) / BF · 100`, 1 dp.
pub fn adam_dunn_pitcher(
    home_runs: Count,
    walks: Count,
    hit_by_pitch: Count,
    strikeouts: Count,
    batters_faced: Count,
) -> Result<f64, StatError> {
    let outcomes = (home_runs + walks + hit_by_pitch + strikeouts) as f64;
    let v = divide("adam_dunn_pitcher", "batters faced", outcomes, batters_faced as f64)?;
    Ok(round_to(v * 100.0, 1))
}
