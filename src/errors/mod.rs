use thiserror::Error;

/// Errors raised when turning user or file input into domain values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown action code: {0}")]
    UnknownActionCode(String),

    #[error("unknown position: {0}")]
    UnknownPosition(String),

    #[error("invalid season '{0}', expected YYYY/YYYY+1")]
    InvalidSeason(String),

    #[error("invalid set '{0}', expected 'Ogółem' or a set number starting at 1")]
    InvalidSet(String),

    #[error("event #{index} has set 0, sets are numbered from 1")]
    ZeroSet { index: usize },
}

/// Context message for file read failures
pub fn read_context(path: &str) -> String {
    format!("Failed to read events from: {}", path)
}

/// Context message for decode failures
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}
