use pathdraw_core::{Cell, Coord2, EngineState, GameState, Grid};

const EMPTY: char = '.';
const WALL: char = '#';
const VISITED: char = 'o';
const START: char = 'S';
const HEAD: char = '@';

fn cell_char(cell: Cell) -> char {
    match cell {
        Cell::Empty => EMPTY,
        Cell::Visited => VISITED,
        Cell::Wall => WALL,
    }
}

fn draw(grid: &Grid, mut glyph: impl FnMut(Coord2, Cell) -> char) -> String {
    let (rows, cols) = grid.size();
    let mut out = String::with_capacity(usize::from(rows) * (usize::from(cols) + 1));
    for row in 0..rows {
        for col in 0..cols {
            out.push(glyph((row, col), grid[(row, col)]));
        }
        out.push('\n');
    }
    out
}

/// Plain level layout, as painted in the editor.
pub fn render_grid(grid: &Grid) -> String {
    draw(grid, |_, cell| cell_char(cell))
}

pub fn status_line(state: &GameState) -> String {
    match state.status() {
        EngineState::Ready => "Press a direction to start".to_string(),
        EngineState::Active => format!(
            "{} of {} cells left",
            state.remaining_cells(),
            state.playable_cells()
        ),
        EngineState::Won => "*** WON *** every cell covered".to_string(),
        EngineState::Lost => format!(
            "*** GAME OVER *** path crossed itself after {} cells",
            state.path().len()
        ),
    }
}

/// Board with the start cell and path head marked, followed by a status line.
pub fn render_state(state: &GameState) -> String {
    let start = state.start();
    let head = state.last_position();
    let mut out = draw(state.grid(), |coords, cell| {
        if coords == head && state.path().len() > 1 {
            HEAD
        } else if coords == start {
            START
        } else {
            cell_char(cell)
        }
    });
    out.push_str(&status_line(state));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathdraw_core::{GameConfig, Obstacles};

    #[test]
    fn fresh_board_marks_start_and_walls() {
        let config = GameConfig::new(
            (2, 3),
            (0, 0),
            Obstacles::Layout {
                walls: vec![(1, 2)],
            },
        )
        .unwrap();
        let state = GameState::initialize(&config);

        assert_eq!(
            render_state(&state),
            "S..\n..#\nPress a direction to start\n"
        );
    }

    #[test]
    fn path_head_is_marked() {
        let config = GameConfig::open((2, 2), (0, 0)).unwrap();
        let state = GameState::initialize(&config)
            .start_game()
            .move_to((0, 1))
            .move_to((1, 1));

        assert_eq!(render_state(&state), "So\n.@\n1 of 4 cells left\n");
    }

    #[test]
    fn banners_for_finished_games() {
        let config = GameConfig::open((1, 2), (0, 0)).unwrap();
        let won = GameState::initialize(&config).start_game().move_to((0, 1));
        assert!(status_line(&won).contains("WON"));

        let lost = GameState::new()
            .start_game()
            .move_to((0, 1))
            .move_to((0, 0));
        assert!(status_line(&lost).contains("GAME OVER"));
    }

    #[test]
    fn render_grid_uses_cell_glyphs() {
        let grid = Grid::new(1, 3)
            .unwrap()
            .with_cell((0, 1), Cell::Wall)
            .unwrap()
            .with_cell((0, 2), Cell::Visited)
            .unwrap();

        assert_eq!(render_grid(&grid), ".#o\n");
    }
}
