use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// Label used when a code cannot be resolved
pub const FALLBACK_LABEL: &str = "inne";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Attack,
    Reception,
    Serve,
    Other,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Attack => "attack",
            Category::Reception => "reception",
            Category::Serve => "serve",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Attack => "Atak",
            Category::Reception => "Przyjęcie",
            Category::Serve => "Zagrywka",
            Category::Other => "Inne",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackOutcome {
    Kill,
    Defended,
    Blocked,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReceptionOutcome {
    Perfect,
    Positive,
    Negative,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServeOutcome {
    Ace,
    Positive,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OtherOutcome {
    Block,
    Dig,
    Error,
}

/// One recorded rally outcome. The outcome type is fixed by the category,
/// so an outcome can never be paired with a foreign category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ActionCode {
    Attack(AttackOutcome),
    Reception(ReceptionOutcome),
    Serve(ServeOutcome),
    Other(OtherOutcome),
}

use self::ActionCode::{Attack, Other, Reception, Serve};

pub const ATTACK_KILL: ActionCode = Attack(AttackOutcome::Kill);
pub const ATTACK_DEFENDED: ActionCode = Attack(AttackOutcome::Defended);
pub const ATTACK_BLOCKED: ActionCode = Attack(AttackOutcome::Blocked);
pub const ATTACK_ERROR: ActionCode = Attack(AttackOutcome::Error);
pub const RECEPTION_PERFECT: ActionCode = Reception(ReceptionOutcome::Perfect);
pub const RECEPTION_POSITIVE: ActionCode = Reception(ReceptionOutcome::Positive);
pub const RECEPTION_NEGATIVE: ActionCode = Reception(ReceptionOutcome::Negative);
pub const RECEPTION_ERROR: ActionCode = Reception(ReceptionOutcome::Error);
pub const SERVE_ACE: ActionCode = Serve(ServeOutcome::Ace);
pub const SERVE_POSITIVE: ActionCode = Serve(ServeOutcome::Positive);
pub const SERVE_ERROR: ActionCode = Serve(ServeOutcome::Error);
pub const OTHER_BLOCK: ActionCode = Other(OtherOutcome::Block);
pub const OTHER_DIG: ActionCode = Other(OtherOutcome::Dig);
pub const OTHER_ERROR: ActionCode = Other(OtherOutcome::Error);

/// Codes that score a point for the recording team
pub const POINT_CODES: [ActionCode; 3] = [ATTACK_KILL, OTHER_BLOCK, SERVE_ACE];

/// Codes that hand a point to the opponent
pub const ERROR_CODES: [ActionCode; 5] = [
    ATTACK_BLOCKED,
    ATTACK_ERROR,
    RECEPTION_ERROR,
    SERVE_ERROR,
    OTHER_ERROR,
];

/// Every attack outcome; also the denominator for set distribution
pub const ATTACK_CODES: [ActionCode; 4] = [ATTACK_KILL, ATTACK_DEFENDED, ATTACK_BLOCKED, ATTACK_ERROR];

impl ActionCode {
    /// The full vocabulary in display order
    pub const ALL: [ActionCode; 14] = [
        ATTACK_KILL,
        ATTACK_DEFENDED,
        ATTACK_BLOCKED,
        ATTACK_ERROR,
        RECEPTION_PERFECT,
        RECEPTION_POSITIVE,
        RECEPTION_NEGATIVE,
        RECEPTION_ERROR,
        SERVE_ACE,
        SERVE_POSITIVE,
        SERVE_ERROR,
        OTHER_BLOCK,
        OTHER_DIG,
        OTHER_ERROR,
    ];

    pub fn category(&self) -> Category {
        match self {
            Attack(_) => Category::Attack,
            Reception(_) => Category::Reception,
            Serve(_) => Category::Serve,
            Other(_) => Category::Other,
        }
    }

    /// Outcome token in the canonical text form
    pub fn outcome_str(&self) -> &'static str {
        match self {
            Attack(AttackOutcome::Kill) => "kill",
            Attack(AttackOutcome::Defended) => "defended",
            Attack(AttackOutcome::Blocked) => "blocked",
            Attack(AttackOutcome::Error) => "error",
            Reception(ReceptionOutcome::Perfect) => "perfect",
            Reception(ReceptionOutcome::Positive) => "positive",
            Reception(ReceptionOutcome::Negative) => "negative",
            Reception(ReceptionOutcome::Error) => "error",
            Serve(ServeOutcome::Ace) => "ace",
            Serve(ServeOutcome::Positive) => "positive",
            Serve(ServeOutcome::Error) => "error",
            Other(OtherOutcome::Block) => "block",
            Other(OtherOutcome::Dig) => "dig",
            Other(OtherOutcome::Error) => "error",
        }
    }

    /// Compact form stored by older match records
    fn legacy_str(&self) -> &'static str {
        match self {
            Attack(AttackOutcome::Kill) => "atk-kill",
            Attack(AttackOutcome::Defended) => "atk-def",
            Attack(AttackOutcome::Blocked) => "atk-blk",
            Attack(AttackOutcome::Error) => "atk-err",
            Reception(ReceptionOutcome::Perfect) => "rec-perf",
            Reception(ReceptionOutcome::Positive) => "rec-pos",
            Reception(ReceptionOutcome::Negative) => "rec-neg",
            Reception(ReceptionOutcome::Error) => "rec-err",
            Serve(ServeOutcome::Ace) => "serve-ace",
            Serve(ServeOutcome::Positive) => "serve-pos",
            Serve(ServeOutcome::Error) => "serve-err",
            Other(OtherOutcome::Block) => "other-blk",
            Other(OtherOutcome::Dig) => "other-dig",
            Other(OtherOutcome::Error) => "other-err",
        }
    }

    pub fn outcome_label(&self) -> &'static str {
        match self {
            Attack(AttackOutcome::Kill) => "punkt",
            Attack(AttackOutcome::Defended) => "obroniony",
            Attack(AttackOutcome::Blocked) => "zablokowany",
            Attack(AttackOutcome::Error) => "błąd",
            Reception(ReceptionOutcome::Perfect) => "perfekcyjne",
            Reception(ReceptionOutcome::Positive) => "pozytywne",
            Reception(ReceptionOutcome::Negative) => "negatywne",
            Reception(ReceptionOutcome::Error) => "błąd",
            Serve(ServeOutcome::Ace) => "as",
            Serve(ServeOutcome::Positive) => "pozytywna",
            Serve(ServeOutcome::Error) => "błąd",
            Other(OtherOutcome::Block) => "blok",
            Other(OtherOutcome::Dig) => "obrona",
            Other(OtherOutcome::Error) => "błąd",
        }
    }
}

impl fmt::Display for ActionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category().as_str(), self.outcome_str())
    }
}

impl FromStr for ActionCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ActionCode::ALL
            .into_iter()
            .find(|code| code.to_string() == trimmed || code.legacy_str() == trimmed)
            .ok_or_else(|| ParseError::UnknownActionCode(s.to_string()))
    }
}

impl From<ActionCode> for String {
    fn from(code: ActionCode) -> Self {
        code.to_string()
    }
}

impl TryFrom<String> for ActionCode {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Localized label, e.g. `attack-kill` -> "atak - punkt"
pub fn label_for(code: ActionCode) -> String {
    format!(
        "{} - {}",
        code.category().label().to_lowercase(),
        code.outcome_label()
    )
}

/// Label lookup for untyped input. Never fails: anything outside the
/// vocabulary gets the fallback label.
pub fn label_for_raw(raw: &str) -> String {
    raw.parse::<ActionCode>()
        .map(label_for)
        .unwrap_or_else(|_| FALLBACK_LABEL.to_string())
}

pub fn is_point_code(code: ActionCode) -> bool {
    POINT_CODES.contains(&code)
}

pub fn is_error_code(code: ActionCode) -> bool {
    ERROR_CODES.contains(&code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(label_for(ATTACK_KILL), "atak - punkt");
        assert_eq!(label_for(RECEPTION_PERFECT), "przyjęcie - perfekcyjne");
        assert_eq!(label_for(SERVE_ACE), "zagrywka - as");
        assert_eq!(label_for(OTHER_DIG), "inne - obrona");
    }

    #[test]
    fn test_raw_label_fallback() {
        assert_eq!(label_for_raw("attack-kill"), "atak - punkt");
        assert_eq!(label_for_raw("atk-blk"), "atak - zablokowany");
        assert_eq!(label_for_raw("attack-smash"), FALLBACK_LABEL);
        assert_eq!(label_for_raw(""), FALLBACK_LABEL);
    }

    #[test]
    fn test_parse_both_forms() {
        for code in ActionCode::ALL {
            assert_eq!(code.to_string().parse::<ActionCode>(), Ok(code));
            assert_eq!(code.legacy_str().parse::<ActionCode>(), Ok(code));
        }
        assert_eq!(
            "serve-kill".parse::<ActionCode>(),
            Err(ParseError::UnknownActionCode("serve-kill".to_string()))
        );
    }

    #[test]
    fn test_points_and_errors_never_overlap() {
        for code in ActionCode::ALL {
            assert!(!(is_point_code(code) && is_error_code(code)), "{code}");
        }
    }

    #[test]
    fn test_neutral_codes() {
        for code in [ATTACK_DEFENDED, RECEPTION_POSITIVE, RECEPTION_PERFECT, SERVE_POSITIVE, OTHER_DIG] {
            assert!(!is_point_code(code));
            assert!(!is_error_code(code));
        }
    }

    #[test]
    fn test_serde_uses_canonical_form() {
        let json = serde_json::to_string(&ATTACK_BLOCKED).unwrap();
        assert_eq!(json, "\"attack-blocked\"");

        let legacy: ActionCode = serde_json::from_str("\"rec-perf\"").unwrap();
        assert_eq!(legacy, RECEPTION_PERFECT);

        assert!(serde_json::from_str::<ActionCode>("\"rec-great\"").is_err());
    }
}
