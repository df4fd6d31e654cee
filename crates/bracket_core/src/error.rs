use thiserror::Error;

pub type Result<T> = std::result::Result<T, BracketError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BracketError {
    #[error("not enough candidates: requested {requested}, available {available}")]
    InsufficientCandidates { requested: usize, available: usize },

    #[error("bracket size must be a positive power of two, got {0}")]
    InvalidBracketSize(usize),

    #[error("invalid transition: {0}")]
    InvalidTransition(String),
}
