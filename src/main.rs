use anyhow::Result;

use volleyball_stats::cli::Command;
use volleyball_stats::{
    handle_codes, handle_completions, handle_report, handle_season, handle_seasons, interpret,
};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Report {
            input,
            set,
            player,
            json,
        } => handle_report(input.as_deref(), set, player.as_deref(), *json),
        Command::Season { date } => handle_season(date.as_deref()),
        Command::Seasons { first, known, date } => {
            handle_seasons(first.as_deref(), known, date.as_deref())
        }
        Command::Codes => handle_codes(),
        Command::Completions { shell } => handle_completions(*shell),
    }
}
