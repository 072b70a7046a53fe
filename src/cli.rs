use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(author, version, about = "volleyball match statistics")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Derive statistics from a JSON file of recorded events
    Report {
        /// Events file (falls back to $EVENTS_PATH, then ./events.json)
        #[arg(short, long)]
        input: Option<String>,
        /// Set number or "Ogółem" for the whole match
        #[arg(short, long, default_value = "Ogółem")]
        set: String,
        /// Limit the report to one player, by full name
        #[arg(short, long)]
        player: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the season a date belongs to
    Season {
        /// Date in YYYY-MM-DD format (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List selectable seasons, newest first
    Seasons {
        /// Earliest season the team played, e.g. 2022/2023
        #[arg(short, long, conflicts_with = "known")]
        first: Option<String>,
        /// Comma separated seasons that already have matches
        #[arg(short, long, value_delimiter = ',')]
        known: Vec<String>,
        /// Date in YYYY-MM-DD format (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List every action code with its label and scoring class
    Codes,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}
