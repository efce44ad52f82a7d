//! Command-line parsing for the `sabr` report tool.
//!
//! Argument parsing lives here; formulas never see clap types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{DEFAULT_FIP_CONSTANT, DEFAULT_WOBA_SCALE, LeagueContext, WobaVariant};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "sabr", version, about = "Sabermetric stats from box-score counting stats")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Report batting stats (AVG/OBP/SLG/OPS, BABIP, Runs Created, wOBA, wRAA).
    Batting(ReportArgs),
    /// Report pitching stats (ERA, WHIP, per-9 rates, FIP, RSAA).
    Pitching(ReportArgs),
}

/// Options shared by both report commands.
#[derive(Debug, Parser, Clone)]
pub struct ReportArgs {
    /// JSON file with one season line or an array of them.
    #[arg(short = 'i', long, value_name = "JSON")]
    pub input: PathBuf,

    /// Also write the reports to a JSON file.
    #[arg(long, value_name = "JSON")]
    pub json: Option<PathBuf>,

    #[command(flatten)]
    pub league: LeagueArgs,
}

/// League context. Every flag can also come from the environment (or `.env`).
#[derive(Debug, Args, Clone)]
pub struct LeagueArgs {
    /// League constant added to FIP.
    #[arg(long, env = "SABR_FIP_CONSTANT", default_value_t = DEFAULT_FIP_CONSTANT)]
    pub fip_constant: f64,

    /// wOBA scale used by wRAA.
    #[arg(long, env = "SABR_WOBA_SCALE", default_value_t = DEFAULT_WOBA_SCALE)]
    pub woba_scale: f64,

    /// Which wOBA linear weights to use.
    #[arg(long, env = "SABR_WOBA_WEIGHTS", value_enum, default_value_t = WobaVariant::Mlb)]
    pub woba_weights: WobaVariant,

    /// League wOBA (enables wRAA).
    #[arg(long, env = "SABR_LEAGUE_WOBA")]
    pub league_woba: Option<f64>,

    /// League ERA (enables RSAA).
    #[arg(long, env = "SABR_LEAGUE_ERA")]
    pub league_era: Option<f64>,
}

impl LeagueArgs {
    pub fn to_context(&self) -> LeagueContext {
        LeagueContext {
            fip_constant: self.fip_constant,
            woba_scale: self.woba_scale,
            woba_variant: self.woba_weights,
            league_woba: self.league_woba,
            league_era: self.league_era,
        }
    }
}
