use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board rows, columns, and positions.
pub type Coord = u8;

/// Count type used for wall counts, path lengths, and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// True when `a` and `b` are exactly one orthogonal step apart.
pub const fn is_adjacent(a: Coord2, b: Coord2) -> bool {
    a.0.abs_diff(b.0) as u16 + a.1.abs_diff(b.1) as u16 == 1
}

/// Unit step on the board, the only kind of movement a path can make.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// `(d_row, d_col)` displacement of a single step.
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Moves `from` one step, returning a value only when it remains inside `bounds`.
    pub fn step(self, from: Coord2, bounds: Coord2) -> Option<Coord2> {
        apply_delta(from, self.delta(), bounds)
    }
}

fn apply_delta(coords: Coord2, delta: (i8, i8), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_is_manhattan_distance_one() {
        assert!(is_adjacent((0, 0), (0, 1)));
        assert!(is_adjacent((4, 4), (3, 4)));
        assert!(!is_adjacent((0, 0), (0, 0)));
        assert!(!is_adjacent((0, 0), (1, 1)));
        assert!(!is_adjacent((0, 0), (0, 2)));
    }

    #[test]
    fn step_stays_inside_bounds() {
        assert_eq!(Direction::Up.step((0, 3), (5, 5)), None);
        assert_eq!(Direction::Left.step((2, 0), (5, 5)), None);
        assert_eq!(Direction::Down.step((4, 1), (5, 5)), None);
        assert_eq!(Direction::Right.step((1, 4), (5, 5)), None);
        assert_eq!(Direction::Down.step((1, 1), (5, 5)), Some((2, 1)));
        assert_eq!(Direction::Right.step((1, 1), (5, 5)), Some((1, 2)));
    }

    #[test]
    fn every_step_is_adjacent() {
        for dir in Direction::ALL {
            let next = dir.step((2, 2), (5, 5)).unwrap();
            assert!(is_adjacent((2, 2), next), "{dir:?}");
        }
    }
}
