//! Formatted terminal output for reports.
//!
//! Undefined stats print as `-`. Each column uses the stat's own precision so
//! the table shows exactly what the formula returned.

use crate::domain::LeagueContext;
use crate::report::{BattingReport, PitchingReport};

/// Format the league context header shared by both tables.
pub fn format_context(ctx: &LeagueContext) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "League: FIP constant={:.2} | wOBA scale={:.3} | wOBA weights={:?}",
        ctx.fip_constant, ctx.woba_scale, ctx.woba_variant
    ));
    if let Some(v) = ctx.league_woba {
        out.push_str(&format!(" | lgwOBA={v:.3}"));
    }
    if let Some(v) = ctx.league_era {
        out.push_str(&format!(" | lgERA={v:.2}"));
    }
    out.push('\n');
    out
}

/// Format batting reports as a fixed-width table.
pub fn format_batting_table(reports: &[BattingReport]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:>4} {:>4} {:>6} {:>6} {:>6} {:>6} {:>6} {:>7} {:>7} {:>5} {:>6} {:>6} {:>5}\n",
        "name", "PA", "TB", "AVG", "OBP", "SLG", "OPS", "BABIP", "RC", "RC2002", "RC27", "wOBA",
        "wRAA", "TTO%"
    ));
    for r in reports {
        out.push_str(&format!(
            "{:<20} {:>4} {:>4} {:>6} {:>6} {:>6} {:>6} {:>6} {:>7} {:>7} {:>5} {:>6} {:>6} {:>5}\n",
            truncate(&r.name, 20),
            r.plate_appearances,
            r.total_bases,
            fmt_opt(r.avg, 3),
            fmt_opt(r.obp, 3),
            fmt_opt(r.slg, 3),
            fmt_opt(r.ops, 3),
            fmt_opt(r.babip, 3),
            fmt_opt(r.runs_created, 2),
            fmt_opt(r.runs_created_2002, 1),
            fmt_opt(r.runs_created_27, 1),
            fmt_opt(r.woba, 3),
            fmt_opt(r.wraa, 1),
            fmt_opt(r.adam_dunn, 1),
        ));
    }
    out
}

/// Format pitching reports as a fixed-width table.
pub fn format_pitching_table(reports: &[PitchingReport]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<20} {:>6} {:>5} {:>6} {:>5} {:>5} {:>5} {:>5} {:>5} {:>6} {:>5}\n",
        "name", "IP", "ERA", "WHIP", "H/9", "SO/9", "BB/9", "HR/9", "FIP", "RSAA", "TTO%"
    ));
    for r in reports {
        out.push_str(&format!(
            "{:<20} {:>6.1} {:>5} {:>6} {:>5} {:>5} {:>5} {:>5} {:>5} {:>6} {:>5}\n",
            truncate(&r.name, 20),
            r.innings_pitched,
            fmt_opt(r.era, 2),
            fmt_opt(r.whip, 3),
            fmt_opt(r.hits_per_9, 1),
            fmt_opt(r.so_per_9, 1),
            fmt_opt(r.bb_per_9, 1),
            fmt_opt(r.hr_per_9, 1),
            fmt_opt(r.fip, 2),
            fmt_opt(r.rsaa, 1),
            fmt_opt(r.adam_dunn, 1),
        ));
    }
    out
}

fn fmt_opt(value: Option<f64>, places: usize) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{v:.places$}"),
        _ => "-".to_string(),
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        s.chars().take(max).collect()
    }
}
