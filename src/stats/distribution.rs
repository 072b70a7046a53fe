use super::counting::{count_by_codes, group_by, percentage};
use super::labels::abbreviate_name;
use super::types::{Fill, LegendEntry, PlayerShare, PositionShare, SetDistribution};
use crate::domain::codes::{ATTACK_CODES, POINT_CODES};
use crate::domain::{Position, StatEvent};

/// Where the setter sends the ball: each attacking position's and each
/// player's share of all attacks in the slice.
pub fn set_distribution(events: &[StatEvent]) -> SetDistribution {
    let total_attacks = count_by_codes(events, &ATTACK_CODES);

    let by_pos = group_by(events, |event| event.position());
    let by_position = Position::ATTACKING_DISPLAY_ORDER
        .iter()
        .filter_map(|position| by_pos.get(position).map(|stats| (*position, stats)))
        .enumerate()
        .map(|(i, (position, stats))| PositionShare {
            position,
            distribution_percentage: percentage(
                count_by_codes(stats.iter().copied(), &ATTACK_CODES) as i64,
                total_attacks,
            ),
            fill: Fill::palette(i),
        })
        .collect();

    let by_name = group_by(events, |event| event.player_name());
    let mut by_player: Vec<PlayerShare> = by_name
        .iter()
        .filter(|(_, stats)| {
            stats
                .iter()
                .any(|event| event.position().is_attacking() || event.position() == Position::Unspecified)
        })
        .map(|(name, stats)| PlayerShare {
            name: name.to_string(),
            points: count_by_codes(stats.iter().copied(), &POINT_CODES),
            distribution_percentage: percentage(
                count_by_codes(stats.iter().copied(), &ATTACK_CODES) as i64,
                total_attacks,
            ),
            fill: Fill::Palette(1),
        })
        .filter(|share| share.distribution_percentage > 0)
        .collect();
    by_player.sort_by(|a, b| b.distribution_percentage.cmp(&a.distribution_percentage));

    for (i, share) in by_player.iter_mut().enumerate() {
        share.fill = Fill::palette(i);
    }

    let legend_by_player = by_player
        .iter()
        .map(|share| {
            (
                share.name.clone(),
                LegendEntry {
                    label: abbreviate_name(&share.name),
                },
            )
        })
        .collect();

    SetDistribution {
        total_attacks,
        by_position,
        by_player,
        legend_by_player,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ActionCode;
    use crate::domain::codes::{ATTACK_BLOCKED, ATTACK_DEFENDED, ATTACK_ERROR, ATTACK_KILL, OTHER_BLOCK, SERVE_ACE};

    fn event(code: ActionCode, name: &str, position: Position) -> StatEvent {
        StatEvent::new(code, name, position, 1)
    }

    fn sample() -> Vec<StatEvent> {
        vec![
            event(ATTACK_KILL, "Adam Nowak", Position::OutsideHitter),
            event(ATTACK_DEFENDED, "Adam Nowak", Position::OutsideHitter),
            event(ATTACK_KILL, "Jan Kowalski", Position::Opposite),
            event(ATTACK_KILL, "Jan Kowalski", Position::Opposite),
            event(ATTACK_ERROR, "Jan Kowalski", Position::Opposite),
            event(ATTACK_BLOCKED, "Ola Zych", Position::Middle),
            event(OTHER_BLOCK, "Ola Zych", Position::Middle),
            event(ATTACK_KILL, "Ewa Lis", Position::Setter),
            event(SERVE_ACE, "Kasia Kot", Position::Libero),
        ]
    }

    #[test]
    fn test_total_attacks_counts_all_four_outcomes() {
        assert_eq!(set_distribution(&sample()).total_attacks, 7);
    }

    #[test]
    fn test_positions_in_display_order() {
        let result = set_distribution(&sample());
        let positions: Vec<Position> = result.by_position.iter().map(|s| s.position).collect();
        let shares: Vec<i32> = result.by_position.iter().map(|s| s.distribution_percentage).collect();

        assert_eq!(
            positions,
            vec![Position::Opposite, Position::Middle, Position::OutsideHitter]
        );
        // 3/7, 1/7, 2/7
        assert_eq!(shares, vec![43, 14, 29]);
    }

    #[test]
    fn test_absent_positions_are_omitted() {
        let events = vec![event(ATTACK_KILL, "Ola Zych", Position::Middle)];
        let result = set_distribution(&events);

        assert_eq!(result.by_position.len(), 1);
        assert_eq!(result.by_position[0].position, Position::Middle);
        assert_eq!(result.by_position[0].distribution_percentage, 100);
    }

    #[test]
    fn test_players_ranked_by_share() {
        let result = set_distribution(&sample());
        let names: Vec<&str> = result.by_player.iter().map(|s| s.name.as_str()).collect();

        assert_eq!(names, vec!["Jan Kowalski", "Adam Nowak", "Ola Zych"]);
        assert_eq!(result.by_player[0].points, 2);
        assert_eq!(result.by_player[2].points, 1);
        assert_eq!(result.legend_by_player["Jan Kowalski"].label, "J.Kowalski");
        assert!(!result.legend_by_player.contains_key("Ewa Lis"));
    }

    #[test]
    fn test_unspecified_players_are_included() {
        let events = vec![
            event(ATTACK_KILL, "Jan Kowalski", Position::Unspecified),
            event(ATTACK_KILL, "Ola Zych", Position::Middle),
        ];
        let result = set_distribution(&events);

        assert_eq!(result.by_player.len(), 2);
        assert!(result.by_position.iter().all(|s| s.position != Position::Unspecified));
    }

    #[test]
    fn test_no_attacks() {
        let events = vec![event(SERVE_ACE, "Jan Kowalski", Position::Opposite)];
        let result = set_distribution(&events);

        assert_eq!(result.total_attacks, 0);
        assert_eq!(result.by_position[0].distribution_percentage, 0);
        assert!(result.by_player.is_empty());
    }
}
