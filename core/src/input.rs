use serde::{Deserialize, Serialize};

use crate::*;

/// Abstract player input, after any device-specific key mapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Input {
    Move(Direction),
    Reset,
}

impl From<Direction> for Input {
    fn from(dir: Direction) -> Self {
        Self::Move(dir)
    }
}

/// What a single input did to a [`Session`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// The input reached the engine as a move.
    Move(MoveOutcome),
    /// The first direction started the game, but its step was rejected.
    Started(RejectReason),
    /// The board went back to its fresh state.
    Reset,
}

impl SessionOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::Move(outcome) => outcome.has_update(),
            Self::Started(_) | Self::Reset => true,
        }
    }
}

/// Holds the live game and feeds it one input at a time.
///
/// Every input replaces the held state with the value the engine returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    state: GameState,
}

impl Session {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            state: GameState::initialize(config),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Applies one input.
    ///
    /// The first directional input on a fresh board starts the game and makes the move. Finished
    /// games ignore directions until reset.
    pub fn handle(&mut self, input: Input) -> SessionOutcome {
        let dir = match input {
            Input::Reset => {
                self.state = self.state.reset();
                return SessionOutcome::Reset;
            }
            Input::Move(dir) => dir,
        };

        let starting = self.state.status().is_ready();
        if starting {
            self.state = self.state.start_game();
        }

        let outcome = match dir.step(self.state.last_position(), self.state.size()) {
            Some(target) => {
                let outcome = self.state.check_move(target);
                self.state = self.state.move_to(target);
                outcome
            }
            None if self.state.is_game_active() => {
                MoveOutcome::Rejected(RejectReason::OutOfBounds)
            }
            None => MoveOutcome::Rejected(RejectReason::Inactive),
        };
        log::trace!("{:?}: {:?}, head at {:?}", dir, outcome, self.state.last_position());

        match outcome {
            MoveOutcome::Rejected(reason) if starting => SessionOutcome::Started(reason),
            outcome => SessionOutcome::Move(outcome),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
