use thiserror::Error;

/// Failures raised while assembling cards or deck options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("invalid value {value} for option '{option}': counts must not be negative")]
    InvalidOption { option: &'static str, value: i64 },
    #[error("jokers carry an identifier, not a rank")]
    JokerHasNoRank,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown rank '{0}'")]
    UnknownRank(String),
    #[error("unknown suit '{0}'")]
    UnknownSuit(String),
}
