use crate::domain::StatEvent;

/// Events recorded for one player, matched on the full display name
pub fn filter_by_player(events: &[StatEvent], name: &str) -> Vec<StatEvent> {
    let name = name.trim();
    events
        .iter()
        .filter(|event| event.player_name() == name)
        .cloned()
        .collect()
}
