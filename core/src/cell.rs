use serde::{Deserialize, Serialize};

/// State of a single board cell.
///
/// The discriminants are the integers used by the level encoding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Visited = 1,
    Wall = 2,
}

impl Cell {
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn is_wall(self) -> bool {
        matches!(self, Self::Wall)
    }

    pub const fn is_visited(self) -> bool {
        matches!(self, Self::Visited)
    }
}

impl TryFrom<u8> for Cell {
    type Error = u8;

    fn try_from(code: u8) -> core::result::Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Empty),
            1 => Ok(Self::Visited),
            2 => Ok(Self::Wall),
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_declaration_order() {
        assert_eq!(Cell::Empty.code(), 0);
        assert_eq!(Cell::Visited.code(), 1);
        assert_eq!(Cell::Wall.code(), 2);
        assert_eq!(Cell::try_from(2), Ok(Cell::Wall));
        assert_eq!(Cell::try_from(3), Err(3));
    }
}
