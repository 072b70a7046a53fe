pub mod counting;
pub mod distribution;
pub mod labels;
pub mod report;
pub mod scoring;
pub mod skills;
pub mod types;

pub use counting::{count_by_codes, format_percentage, percentage};
pub use distribution::set_distribution;
pub use labels::abbreviate_name;
pub use report::{MatchReport, match_report};
pub use scoring::{points_and_errors, team_points_by_player, team_summary};
pub use skills::{attack_stats, reception_stats, serve_stats};
pub use types::*;
