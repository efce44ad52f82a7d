//! Per-line reports: every derived stat for one season line.
//!
//! This is a caller of the formula catalog, not part of it. It computes the
//! primitives first and feeds them into the composites, the way any consumer of
//! `stats` is expected to. A formula that is undefined for the line (zero
//! at-bats, zero innings, ...) becomes `None` instead of failing the report.

use serde::Serialize;

use crate::domain::{
    BattingLine, Count, FipOptions, LeagueContext, PitchingLine, WobaOptions, WobaVariant,
    WraaOptions,
};
use crate::error::StatError;
use crate::stats;

pub mod format;

pub use format::*;

/// Derived batting stats for one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingReport {
    pub name: String,
    pub plate_appearances: Count,
    pub singles: Count,
    pub total_bases: Count,
    pub avg: Option<f64>,
    pub obp: Option<f64>,
    pub slg: Option<f64>,
    pub ops: Option<f64>,
    pub babip: Option<f64>,
    pub runs_created: Option<f64>,
    pub runs_created_2002: Option<f64>,
    pub runs_created_27: Option<f64>,
    pub woba: Option<f64>,
    pub wraa: Option<f64>,
    pub adam_dunn: Option<f64>,
}

/// Derived pitching stats for one line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PitchingReport {
    pub name: String,
    pub innings_pitched: f64,
    pub era: Option<f64>,
    pub whip: Option<f64>,
    pub hits_per_9: Option<f64>,
    pub so_per_9: Option<f64>,
    pub bb_per_9: Option<f64>,
    pub hr_per_9: Option<f64>,
    pub fip: Option<f64>,
    pub rsaa: Option<f64>,
    pub adam_dunn: Option<f64>,
}

fn defined(name: &str, result: Result<f64, StatError>) -> Option<f64> {
    match result {
        Ok(v) => Some(v),
        Err(err) => {
            tracing::debug!(player = name, %err, "stat left blank");
            None
        }
    }
}

/// Compute every batting stat for `line`.
pub fn batting_report(line: &BattingLine, ctx: &LeagueContext) -> BattingReport {
    let name = line.name.as_str();
    let singles = stats::single_hits(line.hits, line.home_runs, line.doubles, line.triples);
    let tb = stats::total_bases(singles, line.home_runs, line.doubles, line.triples);
    let pa = stats::plate_appearances(
        line.at_bats,
        line.walks,
        line.hit_by_pitch,
        line.sac_flies,
        line.sac_hits,
    );

    let runs_created = defined(
        name,
        stats::runs_created_basic(
            tb,
            line.hits,
            line.walks,
            line.hit_by_pitch,
            line.caught_stealing,
            line.grounded_into_double_play,
            line.sac_flies,
            line.sac_hits,
            line.stolen_bases,
            line.strikeouts,
            line.at_bats,
            line.intentional_walks,
        ),
    );
    let runs_created_2002 = defined(
        name,
        stats::runs_created_2002(
            line.hits,
            line.walks,
            line.hit_by_pitch,
            line.caught_stealing,
            line.grounded_into_double_play,
            line.sac_flies,
            line.sac_hits,
            line.stolen_bases,
            line.strikeouts,
            line.at_bats,
            line.intentional_walks,
            singles,
            line.doubles,
            line.triples,
            line.home_runs,
        ),
    );
    let runs_created_27 = runs_created.and_then(|rc| {
        defined(
            name,
            stats::runs_created_per_27_outs(
                rc,
                line.at_bats,
                line.hits,
                line.sac_hits,
                line.sac_flies,
                line.caught_stealing,
                line.grounded_into_double_play,
            ),
        )
    });

    let woba_options = WobaOptions {
        intentional_walks: line.intentional_walks,
        reached_on_error: line.reached_on_error,
    };
    let woba = defined(
        name,
        match ctx.woba_variant {
            WobaVariant::Mlb => stats::woba_mlb(
                line.walks,
                line.hit_by_pitch,
                singles,
                line.doubles,
                line.triples,
                line.home_runs,
                line.at_bats,
                line.sac_flies,
                woba_options,
            ),
            WobaVariant::WithErrors => stats::woba_with_errors(
                line.walks,
                line.hit_by_pitch,
                singles,
                line.doubles,
                line.triples,
                line.home_runs,
                line.at_bats,
                line.sac_flies,
                woba_options,
            ),
        },
    );
    let wraa = match (woba, ctx.league_woba) {
        (Some(woba), Some(league_woba)) => {
            let options = WraaOptions {
                woba_scale: ctx.woba_scale,
            };
            defined(name, stats::wraa(woba, league_woba, pa, options))
        }
        _ => None,
    };

    BattingReport {
        name: line.name.clone(),
        plate_appearances: pa,
        singles,
        total_bases: tb,
        avg: defined(name, stats::batting_average(line.hits, line.at_bats)),
        obp: defined(
            name,
            stats::on_base_pct(
                line.hits,
                line.walks,
                line.hit_by_pitch,
                line.at_bats,
                line.sac_flies,
            ),
        ),
        slg: defined(name, stats::slugging(tb, line.at_bats)),
        ops: defined(
            name,
            stats::on_base_plus_slugging(
                line.hits,
                line.walks,
                line.hit_by_pitch,
                line.at_bats,
                line.sac_flies,
                tb,
            ),
        ),
        babip: defined(
            name,
            stats::batting_avg_on_balls_in_play(
                line.hits,
                line.home_runs,
                line.at_bats,
                line.strikeouts,
                line.sac_flies,
            ),
        ),
        runs_created,
        runs_created_2002,
        runs_created_27,
        woba,
        wraa,
        adam_dunn: defined(
            name,
            stats::adam_dunn_batter(line.home_runs, line.walks, line.strikeouts, pa),
        ),
    }
}

/// Compute every pitching stat for `line`.
pub fn pitching_report(line: &PitchingLine, ctx: &LeagueContext) -> PitchingReport {
    let name = line.name.as_str();
    let ip = stats::innings_pitched(line.outs);
    let era = defined(name, stats::era(line.earned_runs, ip));

    let fip_options = FipOptions {
        intentional_walks: line.intentional_walks,
        league_constant: ctx.fip_constant,
    };
    let rsaa = match (era, ctx.league_era) {
        (Some(era), Some(league_era)) => Some(stats::rsaa(era, league_era, ip)),
        _ => None,
    };

    PitchingReport {
        name: line.name.clone(),
        innings_pitched: ip,
        era,
        whip: defined(name, stats::whip(line.walks, line.hits, ip)),
        hits_per_9: defined(name, stats::hits_per_9(line.hits, ip)),
        so_per_9: defined(name, stats::so_per_9(line.strikeouts, ip)),
        bb_per_9: defined(name, stats::bb_per_9(line.walks, ip)),
        hr_per_9: defined(name, stats::hr_per_9(line.home_runs, ip)),
        fip: defined(
            name,
            stats::fip(
                line.home_runs,
                line.walks,
                line.hit_by_pitch,
                line.strikeouts,
                ip,
                fip_options,
            ),
        ),
        rsaa,
        adam_dunn: defined(
            name,
            stats::adam_dunn_pitcher(
                line.home_runs,
                line.walks,
                line.hit_by_pitch,
                line.strikeouts,
                line.batters_faced,
            ),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_some_close(actual: Option<f64>, expected: f64) {
        match actual {
            Some(v) => assert!((v - expected).abs() < 1e-9, "expected {expected}, got {v}"),
            None => panic!("expected {expected}, got None"),
        }
    }

    fn ichiro_2004() -> BattingLine {
        BattingLine {
            name: "Ichiro Suzuki".to_string(),
            at_bats: 704,
            hits: 262,
            doubles: 24,
            triples: 5,
            home_runs: 8,
            walks: 49,
            intentional_walks: 19,
            hit_by_pitch: 4,
            strikeouts: 63,
            sac_flies: 3,
            sac_hits: 2,
            stolen_bases: 36,
            caught_stealing: 11,
            grounded_into_double_play: 6,
            reached_on_error: 0,
        }
    }

    fn darvish_2013() -> PitchingLine {
        PitchingLine {
            name: "Yu Darvish".to_string(),
            outs: 629,
            earned_runs: 66,
            hits: 145,
            home_runs: 26,
            walks: 80,
            intentional_walks: 1,
            hit_by_pitch: 8,
            strikeouts: 277,
            batters_faced: 841,
        }
    }

    #[test]
    fn batting_report_chains_primitives_into_composites() {
        let report = batting_report(&ichiro_2004(), &LeagueContext::default());
        assert_eq!(report.singles, 225);
        assert_eq!(report.total_bases, 320);
        assert_eq!(report.plate_appearances, 762);
        assert_some_close(report.runs_created, 132.09);
        assert_some_close(report.runs_created_2002, 136.7);
        assert_some_close(report.runs_created_27, 7.7);
        assert_some_close(report.babip, 0.399);
        assert_some_close(report.woba, 0.376);
        // No league wOBA supplied.
        assert_eq!(report.wraa, None);
    }

    #[test]
    fn wraa_uses_league_context() {
        let ctx = LeagueContext {
            league_woba: Some(0.330),
            ..LeagueContext::default()
        };
        let report = batting_report(&ichiro_2004(), &ctx);
        let woba = report.woba.unwrap();
        let expected = stats::wraa(woba, 0.330, 762, WraaOptions::default()).unwrap();
        assert_eq!(report.wraa, Some(expected));
    }

    #[test]
    fn with_errors_weights_read_reached_on_error_from_the_line() {
        let ctx = LeagueContext {
            woba_variant: WobaVariant::WithErrors,
            ..LeagueContext::default()
        };
        let line = BattingLine {
            reached_on_error: 7,
            ..ichiro_2004()
        };
        let with_roe = batting_report(&line, &ctx).woba.unwrap();
        let without = batting_report(&ichiro_2004(), &ctx).woba.unwrap();
        assert!(with_roe > without);

        let options = WobaOptions {
            intentional_walks: line.intentional_walks,
            reached_on_error: 7,
        };
        let direct = stats::woba_with_errors(49, 4, 225, 24, 5, 8, 704, 3, options).unwrap();
        assert_eq!(with_roe, direct);
    }

    #[test]
    fn pitching_report_for_reference_line() {
        let ctx = LeagueContext {
            league_era: Some(3.87),
            ..LeagueContext::default()
        };
        let report = pitching_report(&darvish_2013(), &ctx);
        assert_some_close(Some(report.innings_pitched), 209.7);
        assert_some_close(report.era, 2.83);
        assert_some_close(report.whip, 1.073);
        assert_some_close(report.so_per_9, 11.9);
        let era = report.era.unwrap();
        assert_eq!(report.rsaa, Some(stats::rsaa(era, 3.87, report.innings_pitched)));
    }

    #[test]
    fn undefined_stats_become_none() {
        let line = BattingLine {
            name: "Pinch Runner".to_string(),
            stolen_bases: 1,
            ..BattingLine::default()
        };
        let report = batting_report(&line, &LeagueContext::default());
        assert_eq!(report.avg, None);
        assert_eq!(report.ops, None);
        assert_eq!(report.runs_created, None);
        assert_eq!(report.runs_created_27, None);
        assert_eq!(report.woba, None);

        let pitcher = PitchingLine {
            name: "Opener".to_string(),
            ..PitchingLine::default()
        };
        let report = pitching_report(&pitcher, &LeagueContext::default());
        assert_eq!(report.innings_pitched, 0.0);
        assert_eq!(report.era, None);
        assert_eq!(report.fip, None);
        assert_eq!(report.adam_dunn, None);
    }
}
