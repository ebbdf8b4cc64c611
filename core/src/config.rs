use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Wall placement applied when a board is initialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Obstacles {
    /// No walls at all.
    Open,
    /// A solid `extent x extent` square whose top-left corner is `origin`.
    Block { origin: Coord2, extent: Coord },
    /// An explicit list of wall cells, usually taken from a painted level.
    Layout { walls: Vec<Coord2> },
}

impl Obstacles {
    pub const fn centered_block() -> Self {
        Self::Block {
            origin: (3, 3),
            extent: 3,
        }
    }

    /// Every wall cell, possibly with repeats for hand-written layouts.
    pub fn cells(&self) -> Vec<Coord2> {
        match self {
            Self::Open => Vec::new(),
            Self::Block { origin, extent } => {
                let (row0, col0) = *origin;
                let mut cells = Vec::with_capacity(usize::from(*extent) * usize::from(*extent));
                for d_row in 0..*extent {
                    for d_col in 0..*extent {
                        cells.push((row0.saturating_add(d_row), col0.saturating_add(d_col)));
                    }
                }
                cells
            }
            Self::Layout { walls } => walls.clone(),
        }
    }

    fn validate(&self, size: Coord2) -> Result<()> {
        let (rows, cols) = size;
        match self {
            Self::Open => Ok(()),
            Self::Block { origin, extent } => {
                let end_row = u16::from(origin.0) + u16::from(*extent);
                let end_col = u16::from(origin.1) + u16::from(*extent);
                if origin.0 < rows
                    && origin.1 < cols
                    && end_row <= u16::from(rows)
                    && end_col <= u16::from(cols)
                {
                    Ok(())
                } else {
                    Err(GameError::InvalidCoords)
                }
            }
            Self::Layout { walls } => {
                if walls.iter().all(|&(row, col)| row < rows && col < cols) {
                    Ok(())
                } else {
                    Err(GameError::InvalidCoords)
                }
            }
        }
    }
}

impl Default for Obstacles {
    fn default() -> Self {
        Self::centered_block()
    }
}

/// Board parameters used by [`GameState::initialize`].
///
/// Only constructible through validation, so a board built from it always has the start cell
/// inside the grid and free of walls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGameConfig", into = "RawGameConfig")]
pub struct GameConfig {
    size: Coord2,
    start: Coord2,
    obstacles: Obstacles,
}

impl GameConfig {
    pub const DEFAULT_SIZE: Coord2 = (10, 10);

    pub fn new(size: Coord2, start: Coord2, obstacles: Obstacles) -> Result<Self> {
        let (rows, cols) = size;
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimension);
        }
        if start.0 >= rows || start.1 >= cols {
            return Err(GameError::InvalidCoords);
        }
        obstacles.validate(size)?;
        if obstacles.cells().contains(&start) {
            return Err(GameError::StartBlocked(start));
        }
        Ok(Self {
            size,
            start,
            obstacles,
        })
    }

    /// Board without walls, handy for small hand-checked layouts.
    pub fn open(size: Coord2, start: Coord2) -> Result<Self> {
        Self::new(size, start, Obstacles::Open)
    }

    /// Takes size and walls from a level grid. Visited cells in the level are ignored.
    pub fn from_level(level: &Grid, start: Coord2) -> Result<Self> {
        let walls = level
            .iter()
            .filter(|(_, cell)| cell.is_wall())
            .map(|(coords, _)| coords)
            .collect();
        Self::new(level.size(), start, Obstacles::Layout { walls })
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn start(&self) -> Coord2 {
        self.start
    }

    pub fn obstacles(&self) -> &Obstacles {
        &self.obstacles
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    /// Fresh board: walls placed, start cell visited, everything else empty.
    pub(crate) fn build_grid(&self) -> Grid {
        let mut grid = Grid::empty(self.size);
        for coords in self.obstacles.cells() {
            grid[coords] = Cell::Wall;
        }
        grid[self.start] = Cell::Visited;
        grid
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            start: (0, 0),
            obstacles: Obstacles::centered_block(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct RawGameConfig {
    size: Coord2,
    start: Coord2,
    obstacles: Option<Obstacles>,
}

impl Default for RawGameConfig {
    fn default() -> Self {
        Self {
            size: GameConfig::DEFAULT_SIZE,
            start: (0, 0),
            obstacles: None,
        }
    }
}

impl TryFrom<RawGameConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: RawGameConfig) -> Result<Self> {
        // without explicit obstacles, use the default block only where it fits
        let obstacles = raw.obstacles.unwrap_or_else(|| {
            let block = Obstacles::centered_block();
            if block.validate(raw.size).is_ok() && !block.cells().contains(&raw.start) {
                block
            } else {
                Obstacles::Open
            }
        });
        Self::new(raw.size, raw.start, obstacles)
    }
}

impl From<GameConfig> for RawGameConfig {
    fn from(config: GameConfig) -> Self {
        Self {
            size: config.size,
            start: config.start,
            obstacles: Some(config.obstacles),
        }
    }
}
