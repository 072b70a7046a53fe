use serde::Serialize;

use super::distribution::set_distribution;
use super::scoring::{points_and_errors, team_points_by_player, team_summary};
use super::skills::{attack_stats, reception_stats, serve_stats};
use super::types::{
    AttackStats, PointsAndErrors, ReceptionStats, ServeStats, SetDistribution, TeamPoints,
    TeamSummary,
};
use crate::domain::StatEvent;

/// Every derivation for one slice of events
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub event_count: usize,
    pub summary: TeamSummary,
    pub scorers: TeamPoints,
    pub set_distribution: SetDistribution,
    pub points_and_errors: PointsAndErrors,
    pub attack: AttackStats,
    pub reception: ReceptionStats,
    pub serve: ServeStats,
}

pub fn match_report(events: &[StatEvent]) -> MatchReport {
    MatchReport {
        event_count: events.len(),
        summary: team_summary(events),
        scorers: team_points_by_player(events),
        set_distribution: set_distribution(events),
        points_and_errors: points_and_errors(events),
        attack: attack_stats(events),
        reception: reception_stats(events),
        serve: serve_stats(events),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Position;
    use crate::domain::codes::{ATTACK_KILL, RECEPTION_POSITIVE, SERVE_ERROR};

    #[test]
    fn test_report_ignores_input_order() {
        let mut events = vec![
            StatEvent::new(ATTACK_KILL, "Jan Kowalski", Position::Opposite, 1),
            StatEvent::new(RECEPTION_POSITIVE, "Adam Nowak", Position::OutsideHitter, 1),
            StatEvent::new(SERVE_ERROR, "Adam Nowak", Position::OutsideHitter, 2),
        ];
        let forward = match_report(&events);
        events.reverse();
        let backward = match_report(&events);

        assert_eq!(forward.summary, backward.summary);
        assert_eq!(forward.attack, backward.attack);
        assert_eq!(forward.reception, backward.reception);
        assert_eq!(forward.serve, backward.serve);
        assert_eq!(forward.points_and_errors, backward.points_and_errors);
    }

    #[test]
    fn test_empty_report_serializes() {
        let report = match_report(&[]);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["eventCount"], 0);
        assert_eq!(json["attack"]["percentage"], 0);
        assert_eq!(json["reception"]["positivePercentage"], 0);
        assert!(json["scorers"]["chartData"].as_array().unwrap().is_empty());
    }
}
