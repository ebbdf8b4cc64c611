use alloc::vec;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    /// Fresh board, no path drawn yet.
    #[default]
    Ready,
    Active,
    Won,
    /// The path ran into itself.
    Lost,
}

impl EngineState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Immutable snapshot of a path-drawing game.
///
/// Transitions never modify the snapshot they are called on, they return a new one. Callers keep
/// a single live value and replace it with whatever a transition hands back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameState", into = "RawGameState")]
pub struct GameState {
    config: GameConfig,
    grid: Grid,
    path: Vec<Coord2>,
    state: EngineState,
    wall_count: CellCount,
}

impl GameState {
    /// Canonical fresh board for the default configuration.
    pub fn new() -> Self {
        Self::initialize(&GameConfig::default())
    }

    /// Builds a fresh board: walls placed, start cell visited, `path = [start]`, not yet started.
    ///
    /// Deterministic, two calls with the same configuration yield equal states.
    pub fn initialize(config: &GameConfig) -> Self {
        let grid = config.build_grid();
        let wall_count = grid.count(Cell::Wall);
        log::trace!(
            "initialize {:?} board, start {:?}, {} walls",
            config.size(),
            config.start(),
            wall_count
        );
        Self {
            config: config.clone(),
            grid,
            path: vec![config.start()],
            state: EngineState::Ready,
            wall_count,
        }
    }

    /// Same as [`GameState::initialize`], kept as the name the reset input maps to.
    pub fn reset_game(config: &GameConfig) -> Self {
        Self::initialize(config)
    }

    /// Starts play on a clean board.
    ///
    /// The grid, path and status held by `self` are discarded, only its configuration is reused.
    /// Calling this mid-game does not resume the current path, it begins a new one.
    pub fn start_game(&self) -> Self {
        log::debug!("start game");
        Self {
            state: EngineState::Active,
            ..Self::initialize(&self.config)
        }
    }

    /// Canonical fresh board for this state's configuration, regardless of progress.
    pub fn reset(&self) -> Self {
        log::debug!("reset game");
        Self::reset_game(&self.config)
    }

    /// Classifies a move to `target` without performing it.
    ///
    /// Checks run in order: game active, target on the board, target adjacent to the path head,
    /// target not a wall. A legal move then either hits the path (`Lost`), completes coverage
    /// (`Won`) or extends the path (`Advanced`).
    pub fn check_move(&self, target: Coord2) -> MoveOutcome {
        use MoveOutcome::*;

        if !self.state.is_active() {
            return Rejected(RejectReason::Inactive);
        }
        let Some(cell) = self.grid.get(target) else {
            return Rejected(RejectReason::OutOfBounds);
        };
        if !is_adjacent(self.last_position(), target) {
            return Rejected(RejectReason::NotAdjacent);
        }

        match cell {
            Cell::Wall => Rejected(RejectReason::Wall),
            Cell::Visited => Lost,
            Cell::Empty if self.path.len() + 1 == usize::from(self.playable_cells()) => Won,
            Cell::Empty => Advanced,
        }
    }

    /// Attempts to extend the path by one step to `target`.
    ///
    /// Rejected moves return an equal copy of `self`. Stepping onto an already visited cell ends
    /// the game without appending the step.
    pub fn move_to(&self, target: Coord2) -> Self {
        let outcome = self.check_move(target);
        log::trace!("move to {:?}: {:?}", target, outcome);

        match outcome {
            MoveOutcome::Rejected(_) => self.clone(),
            MoveOutcome::Lost => {
                log::debug!("path crossed itself at {:?}", target);
                Self {
                    state: EngineState::Lost,
                    ..self.clone()
                }
            }
            MoveOutcome::Advanced | MoveOutcome::Won => self.advance(target),
        }
    }

    fn advance(&self, target: Coord2) -> Self {
        let mut grid = self.grid.clone();
        grid[target] = Cell::Visited;

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(target);

        let won = path.len() == usize::from(self.playable_cells());
        if won {
            log::debug!("all {} cells covered", path.len());
        }

        Self {
            config: self.config.clone(),
            grid,
            path,
            state: if won {
                EngineState::Won
            } else {
                EngineState::Active
            },
            wall_count: self.wall_count,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn status(&self) -> EngineState {
        self.state
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn rows(&self) -> Coord {
        self.grid.rows()
    }

    pub fn cols(&self) -> Coord {
        self.grid.cols()
    }

    /// Visited cells in visiting order, starting with the start cell.
    pub fn path(&self) -> &[Coord2] {
        &self.path
    }

    pub fn start(&self) -> Coord2 {
        self.config.start()
    }

    /// Head of the path, where the next step starts from.
    pub fn last_position(&self) -> Coord2 {
        self.path.last().copied().unwrap_or(self.config.start())
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords]
    }

    pub fn is_game_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.state, EngineState::Lost)
    }

    pub fn is_game_won(&self) -> bool {
        matches!(self.state, EngineState::Won)
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn wall_count(&self) -> CellCount {
        self.wall_count
    }

    /// Number of cells a winning path has to cover.
    pub fn playable_cells(&self) -> CellCount {
        self.grid.total_cells().saturating_sub(self.wall_count)
    }

    pub fn remaining_cells(&self) -> CellCount {
        self.playable_cells()
            .saturating_sub(self.path.len() as CellCount)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized form. The wall count is derived from the grid on the way back in.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawGameState {
    config: GameConfig,
    grid: Grid,
    path: Vec<Coord2>,
    state: EngineState,
}

impl TryFrom<RawGameState> for GameState {
    type Error = GameError;

    fn try_from(raw: RawGameState) -> Result<Self> {
        let RawGameState {
            config,
            grid,
            path,
            state,
        } = raw;

        // walls must be exactly the configured ones, the rest is path or empty
        let fresh = config.build_grid();
        if grid.size() != fresh.size() || path.first() != Some(&config.start()) {
            return Err(GameError::InconsistentState);
        }
        let walls_match = grid
            .iter()
            .all(|(coords, cell)| cell.is_wall() == fresh[coords].is_wall());
        let path_matches = path.iter().all(|&coords| grid.get(coords) == Some(Cell::Visited))
            && usize::from(grid.count(Cell::Visited)) == path.len()
            && path.windows(2).all(|step| is_adjacent(step[0], step[1]));
        if !walls_match || !path_matches {
            return Err(GameError::InconsistentState);
        }

        let wall_count = grid.count(Cell::Wall);
        let playable = usize::from(grid.total_cells() - wall_count);
        let status_matches = match state {
            EngineState::Ready => path.len() == 1,
            // a board with only the start playable stays active forever
            EngineState::Active | EngineState::Lost => path.len() < playable.max(2),
            EngineState::Won => path.len() == playable,
        };
        if !status_matches {
            return Err(GameError::InconsistentState);
        }

        Ok(Self {
            config,
            grid,
            path,
            state,
            wall_count,
        })
    }
}

impl From<GameState> for RawGameState {
    fn from(state: GameState) -> Self {
        Self {
            config: state.config,
            grid: state.grid,
            path: state.path,
            state: state.state,
        }
    }
}
