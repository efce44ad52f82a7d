//! Shared domain types.
//!
//! Formulas take plain numbers. The types here are for everything around them:
//!
//! - tunable constants with their documented defaults (`FipOptions`, `WobaOptions`,
//!   `WraaOptions`)
//! - raw season lines as they are read from JSON (`BattingLine`, `PitchingLine`)
//! - league context supplied by the caller (`LeagueContext`)

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// A counting stat (hits, walks, outs, ...).
///
/// Signed on purpose: counts are not validated, and a malformed line such as
/// more extra-base hits than hits should produce a negative single count rather
/// than wrap or panic.
pub type Count = i64;

/// League FIP constant used when the caller does not supply one.
pub const DEFAULT_FIP_CONSTANT: f64 = 3.12;

/// wOBA scale used by wRAA when the caller does not supply one.
pub const DEFAULT_WOBA_SCALE: f64 = 1.24;

/// Overridable inputs of [`crate::stats::fip`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FipOptions {
    /// Intentional walks, removed from the walk term.
    pub intentional_walks: Count,
    /// Constant that puts FIP on the league ERA scale.
    pub league_constant: f64,
}

impl Default for FipOptions {
    fn default() -> Self {
        Self {
            intentional_walks: 0,
            league_constant: DEFAULT_FIP_CONSTANT,
        }
    }
}

/// Overridable inputs of the wOBA variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WobaOptions {
    /// Intentional walks, removed from both the walk term and the denominator.
    pub intentional_walks: Count,
    /// Times reached on error. Only `woba_with_errors` credits them.
    pub reached_on_error: Count,
}

/// Overridable inputs of [`crate::stats::wraa`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WraaOptions {
    pub woba_scale: f64,
}

impl Default for WraaOptions {
    fn default() -> Self {
        Self {
            woba_scale: DEFAULT_WOBA_SCALE,
        }
    }
}

/// Which set of wOBA linear weights a report uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum WobaVariant {
    /// MLB weights; reached-on-error is ignored.
    #[default]
    Mlb,
    /// Weights for a league that records reached-on-error separately.
    WithErrors,
}

/// League-wide values a report needs beyond the player's own line.
///
/// This is derived from CLI flags / environment (plus defaults).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LeagueContext {
    pub fip_constant: f64,
    pub woba_scale: f64,
    pub woba_variant: WobaVariant,
    /// League wOBA; wRAA is skipped without it.
    pub league_woba: Option<f64>,
    /// League ERA; RSAA is skipped without it.
    pub league_era: Option<f64>,
}

impl Default for LeagueContext {
    fn default() -> Self {
        Self {
            fip_constant: DEFAULT_FIP_CONSTANT,
            woba_scale: DEFAULT_WOBA_SCALE,
            woba_variant: WobaVariant::Mlb,
            league_woba: None,
            league_era: None,
        }
    }
}

/// Raw batting season line.
///
/// Counts missing from the JSON default to 0; unknown keys are an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BattingLine {
    pub name: String,
    pub at_bats: Count,
    pub hits: Count,
    pub doubles: Count,
    pub triples: Count,
    pub home_runs: Count,
    pub walks: Count,
    pub intentional_walks: Count,
    pub hit_by_pitch: Count,
    pub strikeouts: Count,
    pub sac_flies: Count,
    pub sac_hits: Count,
    pub stolen_bases: Count,
    pub caught_stealing: Count,
    #[serde(alias = "gidp")]
    pub grounded_into_double_play: Count,
    #[serde(alias = "roe")]
    pub reached_on_error: Count,
}

/// Raw pitching season line.
///
/// Innings are given as recorded outs (`outs`), never as the `209.2` box-score
/// notation, so there is no ambiguity about thirds.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PitchingLine {
    pub name: String,
    pub outs: Count,
    pub earned_runs: Count,
    pub hits: Count,
    pub home_runs: Count,
    pub walks: Count,
    pub intentional_walks: Count,
    pub hit_by_pitch: Count,
    pub strikeouts: Count,
    pub batters_faced: Count,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_constants() {
        assert_eq!(FipOptions::default().league_constant, 3.12);
        assert_eq!(FipOptions::default().intentional_walks, 0);
        assert_eq!(WobaOptions::default().intentional_walks, 0);
        assert_eq!(WobaOptions::default().reached_on_error, 0);
        assert_eq!(WraaOptions::default().woba_scale, 1.24);
        assert_eq!(LeagueContext::default().league_woba, None);
    }

    #[test]
    fn batting_line_fills_missing_counts_with_zero() {
        let line: BattingLine =
            serde_json::from_str(r#"{"name":"x","at_bats":10,"hits":3,"gidp":2}"#).unwrap();
        assert_eq!(line.at_bats, 10);
        assert_eq!(line.hits, 3);
        assert_eq!(line.grounded_into_double_play, 2);
        assert_eq!(line.walks, 0);
    }

    #[test]
    fn misspelled_count_is_rejected() {
        let err = serde_json::from_str::<BattingLine>(r#"{"name":"x","homeruns":3}"#).unwrap_err();
        assert!(err.to_string().contains("homeruns"));
        assert!(serde_json::from_str::<PitchingLine>(r#"{"name":"x","ip":200}"#).is_err());
    }
}
