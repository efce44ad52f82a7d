//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads `.env` and parses CLI arguments
//! - reads season lines
//! - builds one report per line
//! - prints the table and writes the optional JSON export

use clap::Parser;

use crate::cli::{Command, ReportArgs};
use crate::error::AppError;
use crate::report::{
    batting_report, format_batting_table, format_context, format_pitching_table, pitching_report,
};

/// Entry point for the `sabr` binary.
pub fn run() -> Result<(), AppError> {
    // League flags fall back to SABR_* variables, which may live in `.env`.
    dotenvy::dotenv().ok();
    let cli = crate::cli::Cli::parse();

    match cli.command {
        Command::Batting(args) => handle_batting(&args),
        Command::Pitching(args) => handle_pitching(&args),
    }
}

fn handle_batting(args: &ReportArgs) -> Result<(), AppError> {
    let ctx = args.league.to_context();
    tracing::debug!(?ctx, "league context");

    let lines = crate::io::read_batting_lines(&args.input)?;
    let reports: Vec<_> = lines.iter().map(|line| batting_report(line, &ctx)).collect();

    print!("{}", format_context(&ctx));
    print!("{}", format_batting_table(&reports));

    if let Some(path) = &args.json {
        crate::io::write_reports_json(path, &reports)?;
    }
    Ok(())
}

fn handle_pitching(args: &ReportArgs) -> Result<(), AppError> {
    let ctx = args.league.to_context();
    tracing::debug!(?ctx, "league context");

    let lines = crate::io::read_pitching_lines(&args.input)?;
    let reports: Vec<_> = lines.iter().map(|line| pitching_report(line, &ctx)).collect();

    print!("{}", format_context(&ctx));
    print!("{}", format_pitching_table(&reports));

    if let Some(path) = &args.json {
        crate::io::write_reports_json(path, &reports)?;
    }
    Ok(())
}
