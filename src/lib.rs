pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod seasons;
pub mod services;
pub mod stats;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use cli::Cli;

use crate::cli::Command;
use crate::config::settings::AppConfig;
use crate::errors::parse_context;
use crate::seasons::{Season, SeasonSource, SetFilter, season_for, season_list_with};
use crate::services::output;
use crate::services::report::{ReportService, ReportView};

pub fn interpret() -> Command {
    let cli = Cli::parse();
    cli.command
}

pub fn handle_report(input: Option<&str>, set: &str, player: Option<&str>, json: bool) -> Result<()> {
    let filter: SetFilter = set.parse().with_context(|| parse_context("set"))?;
    let view = ReportView::new(filter, player);
    let service = ReportService::new(AppConfig::new());
    service.run(input, &view, json)
}

pub fn handle_season(date: Option<&str>) -> Result<()> {
    let config = AppConfig::new();
    let today = resolve_date(date)?;
    println!("{}", season_for(today, &config.season));
    Ok(())
}

pub fn handle_seasons(first: Option<&str>, known: &[String], date: Option<&str>) -> Result<()> {
    let config = AppConfig::new();
    let today = resolve_date(date)?;

    let source = match first {
        Some(first) => SeasonSource::First(parse_season(first)?),
        None => SeasonSource::Known(
            known
                .iter()
                .map(|s| parse_season(s))
                .collect::<Result<Vec<_>>>()?,
        ),
    };

    let list = season_list_with(&source, today, &config.season);
    print!("{}", output::render_seasons(&list, season_for(today, &config.season)));
    Ok(())
}

pub fn handle_codes() -> Result<()> {
    print!("{}", output::render_codes());
    Ok(())
}

pub fn handle_completions(shell: Shell) -> Result<()> {
    let mut command = Cli::command();
    let name = command.get_name().to_string();
    clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
    Ok(())
}

fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", raw)),
        None => Ok(Local::now().date_naive()),
    }
}

fn parse_season(raw: &str) -> Result<Season> {
    raw.parse::<Season>().with_context(|| parse_context("season"))
}
