use alloc::string::String;

use crate::*;

/// Paint tool for wall layouts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelEditor {
    grid: Grid,
}

impl LevelEditor {
    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(rows, cols)?,
        })
    }

    pub fn from_grid(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Flips a cell between wall and empty. Any non-wall cell becomes a wall.
    pub fn toggle_wall(&mut self, coords: Coord2) -> MarkOutcome {
        let Some(cell) = self.grid.get(coords) else {
            log::warn!("ignoring toggle outside the grid at {:?}", coords);
            return MarkOutcome::NoChange;
        };

        self.grid[coords] = match cell {
            Cell::Wall => Cell::Empty,
            Cell::Empty | Cell::Visited => Cell::Wall,
        };
        log::trace!("toggle {:?}: {:?} -> {:?}", coords, cell, self.grid[coords]);
        MarkOutcome::Changed
    }

    /// Empties every cell, keeping the dimensions.
    pub fn clear(&mut self) -> MarkOutcome {
        if self.grid.iter().all(|(_, cell)| cell == Cell::Empty) {
            return MarkOutcome::NoChange;
        }
        self.grid = Grid::empty(self.grid.size());
        MarkOutcome::Changed
    }

    pub fn save(&self) -> core::result::Result<String, LevelError> {
        level::encode(&self.grid)
    }

    /// Replaces the painted grid with a decoded level.
    ///
    /// On failure the error is logged and returned, and the current grid stays as it was.
    pub fn load(&mut self, text: &str) -> core::result::Result<(), LevelError> {
        match level::decode(text) {
            Ok(grid) => {
                log::debug!("loaded {:?} level", grid.size());
                self.grid = grid;
                Ok(())
            }
            Err(err) => {
                log::error!("Could not load level: {}", err);
                Err(err)
            }
        }
    }

    /// Playable configuration using the painted walls.
    pub fn to_config(&self, start: Coord2) -> Result<GameConfig> {
        GameConfig::from_level(&self.grid, start)
    }
}

impl Default for LevelEditor {
    fn default() -> Self {
        Self {
            grid: Grid::empty(GameConfig::DEFAULT_SIZE),
        }
    }
}
