use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::codes::ActionCode;
use crate::errors::ParseError;

/// Position a player held in a given team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "Przyjmujący")]
    OutsideHitter,
    #[serde(rename = "Rozgrywający")]
    Setter,
    #[serde(rename = "Atakujący")]
    Opposite,
    #[serde(rename = "Środkowy")]
    Middle,
    #[serde(rename = "Libero")]
    Libero,
    #[serde(rename = "Nieokreślona")]
    Unspecified,
}

impl Position {
    pub const ALL: [Position; 6] = [
        Position::OutsideHitter,
        Position::Setter,
        Position::Opposite,
        Position::Middle,
        Position::Libero,
        Position::Unspecified,
    ];

    /// Positions shown in set distribution, in chart order
    pub const ATTACKING_DISPLAY_ORDER: [Position; 3] =
        [Position::Opposite, Position::Middle, Position::OutsideHitter];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::OutsideHitter => "Przyjmujący",
            Position::Setter => "Rozgrywający",
            Position::Opposite => "Atakujący",
            Position::Middle => "Środkowy",
            Position::Libero => "Libero",
            Position::Unspecified => "Nieokreślona",
        }
    }

    pub fn is_attacking(&self) -> bool {
        matches!(
            self,
            Position::Opposite | Position::Middle | Position::OutsideHitter
        )
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| ParseError::UnknownPosition(s.to_string()))
    }
}

/// Player as seen by a single event: name plus the position held in that team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRef {
    pub name: String,
    pub position: Position,
}

/// One recorded rally event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEvent {
    pub code: ActionCode,
    pub player: PlayerRef,
    pub set: u32,
}

impl StatEvent {
    pub fn new(code: ActionCode, name: &str, position: Position, set: u32) -> Self {
        Self {
            code,
            player: PlayerRef {
                name: name.to_string(),
                position,
            },
            set,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player.name
    }

    pub fn position(&self) -> Position {
        self.player.position
    }
}

/// Reject events that cannot belong to any set
pub fn validate_events(events: &[StatEvent]) -> Result<(), ParseError> {
    match events.iter().position(|event| event.set == 0) {
        Some(index) => Err(ParseError::ZeroSet { index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::codes::ATTACK_KILL;

    #[test]
    fn test_position_round_trip_polish_names() {
        for position in Position::ALL {
            assert_eq!(position.as_str().parse::<Position>(), Ok(position));
        }
        assert!("Bramkarz".parse::<Position>().is_err());
    }

    #[test]
    fn test_attacking_positions() {
        let attacking: Vec<Position> = Position::ALL
            .into_iter()
            .filter(|p| p.is_attacking())
            .collect();
        assert_eq!(attacking.len(), 3);
        assert!(Position::ATTACKING_DISPLAY_ORDER.iter().all(|p| p.is_attacking()));
    }

    #[test]
    fn test_event_deserializes_from_record_shape() {
        let json = r#"{
            "code": "atk-kill",
            "player": { "name": "Jan Kowalski", "position": "Atakujący" },
            "set": 2
        }"#;
        let event: StatEvent = serde_json::from_str(json).unwrap();

        assert_eq!(event, StatEvent::new(ATTACK_KILL, "Jan Kowalski", Position::Opposite, 2));
    }

    #[test]
    fn test_set_zero_is_rejected() {
        let events = vec![
            StatEvent::new(ATTACK_KILL, "Jan Kowalski", Position::Opposite, 1),
            StatEvent::new(ATTACK_KILL, "Jan Kowalski", Position::Opposite, 0),
        ];

        assert_eq!(validate_events(&events), Err(ParseError::ZeroSet { index: 1 }));
        assert_eq!(validate_events(&events[..1]), Ok(()));
        assert_eq!(validate_events(&[]), Ok(()));
    }
}
