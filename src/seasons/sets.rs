use std::fmt;
use std::str::FromStr;

use crate::domain::StatEvent;
use crate::errors::ParseError;

/// Label of the "all sets" view
pub const OVERALL_LABEL: &str = "Ogółem";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetFilter {
    #[default]
    Overall,
    Set(u32),
}

impl SetFilter {
    pub fn matches(&self, event: &StatEvent) -> bool {
        match self {
            SetFilter::Overall => true,
            SetFilter::Set(n) => event.set == *n,
        }
    }
}

impl fmt::Display for SetFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetFilter::Overall => f.write_str(OVERALL_LABEL),
            SetFilter::Set(n) => write!(f, "{} set", n),
        }
    }
}

impl FromStr for SetFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == OVERALL_LABEL {
            return Ok(SetFilter::Overall);
        }
        match trimmed.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(SetFilter::Set(n)),
            _ => Err(ParseError::InvalidSet(s.to_string())),
        }
    }
}

/// Events belonging to the selected set; `Overall` passes everything through
pub fn filter_by_set(events: &[StatEvent], filter: SetFilter) -> Vec<StatEvent> {
    events
        .iter()
        .filter(|event| filter.matches(event))
        .cloned()
        .collect()
}
