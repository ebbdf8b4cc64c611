#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use config::*;
pub use editor::*;
pub use engine::*;
pub use error::*;
pub use grid::*;
pub use input::*;
pub use types::*;

pub mod level;

mod cell;
mod config;
mod editor;
mod engine;
mod error;
mod grid;
mod input;
mod types;

/// Why a move left the state unchanged.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// Not started yet, or already won or lost.
    Inactive,
    OutOfBounds,
    NotAdjacent,
    Wall,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    Rejected(RejectReason),
    Advanced,
    Won,
    Lost,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            Rejected(_) => false,
            Advanced => true,
            Won => true,
            Lost => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MarkOutcome {
    NoChange,
    Changed,
}

impl MarkOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}
