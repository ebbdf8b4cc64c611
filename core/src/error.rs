use alloc::string::String;
use thiserror::Error;

use crate::Coord2;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid dimensions must be at least 1x1")]
    InvalidDimension,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Start cell {0:?} is covered by a wall")]
    StartBlocked(Coord2),
    #[error("Game state does not match its board")]
    InconsistentState,
}

pub type Result<T> = core::result::Result<T, GameError>;

/// Failures of the portable level encoding. None of them touch in-memory state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    #[error("Invalid level format: {0}")]
    InvalidFormat(FormatIssue),
    #[error("Could not decode level: {0}")]
    DecodeError(String),
    #[error("Could not encode level: {0}")]
    EncodeError(String),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FormatIssue {
    #[error("missing or invalid `{0}` field")]
    MissingField(&'static str),
    #[error("`{field}` must be between 1 and {max}, got {value}")]
    DimensionOutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },
    #[error("expected {expected} cells, got {actual}")]
    GridLength { expected: usize, actual: usize },
    #[error("unknown cell code {0}")]
    UnknownCell(u64),
    #[error("grid cells must be non-negative integers")]
    NonIntegerCell,
}

impl From<FormatIssue> for LevelError {
    fn from(issue: FormatIssue) -> Self {
        Self::InvalidFormat(issue)
    }
}
