use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Fixed-size `rows x cols` matrix of cells, addressed by `(row, col)`.
///
/// Dimensions are fixed at construction. Cloning yields an independent matrix, so the engine's
/// transitions can derive new grids without touching older snapshots.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Cell>", into = "Array2<Cell>")]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Creates a grid of `rows x cols` cells, all [`Cell::Empty`].
    pub fn new(rows: Coord, cols: Coord) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GameError::InvalidDimension);
        }
        Ok(Self::empty((rows, cols)))
    }

    pub(crate) fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
        }
    }

    /// Builds a grid from row-major cells.
    pub fn from_cells(size: Coord2, cells: Vec<Cell>) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimension);
        }
        let cells = Array2::from_shape_vec(size.to_nd_index(), cells)
            .map_err(|_| GameError::InvalidDimension)?;
        Ok(Self { cells })
    }

    /// `(rows, cols)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn get(&self, coords: Coord2) -> Option<Cell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    pub fn count(&self, cell: Cell) -> CellCount {
        self.cells.iter().filter(|&&c| c == cell).count() as CellCount
    }

    /// All cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    /// Row-major copy of all cells.
    pub fn to_cells(&self) -> Vec<Cell> {
        self.cells.iter().copied().collect()
    }

    /// Returns a new grid with `coords` replaced by `cell`, leaving `self` untouched.
    pub fn with_cell(&self, coords: Coord2, cell: Cell) -> Result<Self> {
        let coords = self.validate_coords(coords)?;
        let mut grid = self.clone();
        grid[coords] = cell;
        Ok(grid)
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Grid {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<Array2<Cell>> for Grid {
    type Error = GameError;

    fn try_from(cells: Array2<Cell>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        let max = usize::from(Coord::MAX);
        if rows == 0 || cols == 0 || rows > max || cols > max {
            return Err(GameError::InvalidDimension);
        }
        Ok(Self { cells })
    }
}

impl From<Grid> for Array2<Cell> {
    fn from(grid: Grid) -> Self {
        grid.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn new_grid_is_all_empty() {
        let grid = Grid::new(3, 4).unwrap();

        assert_eq!(grid.size(), (3, 4));
        assert_eq!(grid.total_cells(), 12);
        assert_eq!(grid.count(Cell::Empty), 12);
        assert!(grid.iter().all(|(_, cell)| cell == Cell::Empty));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert_eq!(Grid::new(0, 4), Err(GameError::InvalidDimension));
        assert_eq!(Grid::new(4, 0), Err(GameError::InvalidDimension));
    }

    #[test]
    fn with_cell_leaves_source_untouched() {
        let grid = Grid::new(2, 2).unwrap();

        let walled = grid.with_cell((1, 0), Cell::Wall).unwrap();

        assert_eq!(grid[(1, 0)], Cell::Empty);
        assert_eq!(walled[(1, 0)], Cell::Wall);
        assert_eq!(grid.with_cell((2, 0), Cell::Wall), Err(GameError::InvalidCoords));
    }

    #[test]
    fn cells_are_row_major() {
        let cells = vec![
            Cell::Empty,
            Cell::Wall,
            Cell::Visited,
            Cell::Empty,
            Cell::Empty,
            Cell::Wall,
        ];
        let grid = Grid::from_cells((2, 3), cells.clone()).unwrap();

        assert_eq!(grid[(0, 1)], Cell::Wall);
        assert_eq!(grid[(1, 0)], Cell::Empty);
        assert_eq!(grid[(1, 2)], Cell::Wall);
        assert_eq!(grid.to_cells(), cells);
        assert_eq!(grid.iter().nth(3), Some(((1, 0), Cell::Empty)));
    }

    #[test]
    fn from_cells_rejects_wrong_length() {
        let cells = vec![Cell::Empty; 5];
        assert_eq!(Grid::from_cells((2, 3), cells), Err(GameError::InvalidDimension));
    }

    #[test]
    fn get_is_none_outside() {
        let grid = Grid::new(2, 2).unwrap();
        assert_eq!(grid.get((1, 1)), Some(Cell::Empty));
        assert_eq!(grid.get((2, 1)), None);
        assert!(!grid.contains((0, 2)));
    }
}
