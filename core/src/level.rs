//! Portable level encoding.
//!
//! A level is a JSON record `{ "rows": R, "cols": C, "grid": [...] }` where `grid` holds `R * C`
//! cell codes in row-major order (`0` empty, `1` visited, `2` wall).

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Cell, Coord, FormatIssue, Grid, LevelError};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelData {
    pub rows: Coord,
    pub cols: Coord,
    pub grid: Vec<u8>,
}

impl LevelData {
    pub fn from_grid(grid: &Grid) -> Self {
        Self {
            rows: grid.rows(),
            cols: grid.cols(),
            grid: grid.to_cells().into_iter().map(Cell::code).collect(),
        }
    }

    /// Slices the flat cell list back into `rows` rows of `cols` cells.
    pub fn to_grid(&self) -> Result<Grid, LevelError> {
        check_dimension("rows", self.rows.into())?;
        check_dimension("cols", self.cols.into())?;

        let expected = usize::from(self.rows) * usize::from(self.cols);
        if self.grid.len() != expected {
            return Err(FormatIssue::GridLength {
                expected,
                actual: self.grid.len(),
            }
            .into());
        }

        let cells = self
            .grid
            .iter()
            .map(|&code| Cell::try_from(code).map_err(|code| FormatIssue::UnknownCell(code.into())))
            .collect::<Result<Vec<_>, _>>()?;

        Grid::from_cells((self.rows, self.cols), cells).map_err(|_| {
            FormatIssue::GridLength {
                expected,
                actual: self.grid.len(),
            }
            .into()
        })
    }
}

/// Serializes `grid` as a pretty-printed level record.
pub fn encode(grid: &Grid) -> Result<String, LevelError> {
    serde_json::to_string_pretty(&LevelData::from_grid(grid))
        .map_err(|err| LevelError::EncodeError(err.to_string()))
}

/// Parses a level record.
///
/// Unparsable text yields [`LevelError::DecodeError`]; a record with missing or malformed fields
/// yields [`LevelError::InvalidFormat`].
pub fn decode(text: &str) -> Result<Grid, LevelError> {
    let value: Value =
        serde_json::from_str(text).map_err(|err| LevelError::DecodeError(err.to_string()))?;
    parse_level_data(&value)?.to_grid()
}

fn parse_level_data(value: &Value) -> Result<LevelData, LevelError> {
    let rows = dimension(value, "rows")?;
    let cols = dimension(value, "cols")?;
    let grid = value
        .get("grid")
        .and_then(Value::as_array)
        .ok_or(FormatIssue::MissingField("grid"))?
        .iter()
        .map(|code| {
            let code = code.as_u64().ok_or(FormatIssue::NonIntegerCell)?;
            u8::try_from(code).map_err(|_| FormatIssue::UnknownCell(code))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(LevelData { rows, cols, grid })
}

fn dimension(value: &Value, field: &'static str) -> Result<Coord, LevelError> {
    let raw = value
        .get(field)
        .and_then(Value::as_u64)
        .ok_or(FormatIssue::MissingField(field))?;
    check_dimension(field, raw)?;
    Ok(raw as Coord)
}

fn check_dimension(field: &'static str, value: u64) -> Result<(), FormatIssue> {
    let max = u64::from(Coord::MAX);
    if value == 0 || value > max {
        Err(FormatIssue::DimensionOutOfRange { field, value, max })
    } else {
        Ok(())
    }
}
