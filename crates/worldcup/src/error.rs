use bracket_core::BracketError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WorldcupError>;

#[derive(Debug, Error)]
pub enum WorldcupError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("invalid config: {0}")]
    Config(String),

    #[error("duplicate candidate id: {0}")]
    DuplicateCandidate(String),

    #[error("candidate not found: {0}")]
    UnknownCandidate(String),

    #[error(transparent)]
    Bracket(#[from] BracketError),

    #[error("game abandoned before a winner was chosen")]
    Aborted,
}

impl WorldcupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        WorldcupError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn parse(path: impl Into<PathBuf>, err: impl std::fmt::Display) -> Self {
        WorldcupError::Parse {
            path: path.into(),
            message: err.to_string(),
        }
    }
}
