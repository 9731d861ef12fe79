use std::fmt;

use crate::engine::{Board, CellState, Coordinate};

const WATER: char = 'O';
const SHIP: char = '■';
const HIT: char = 'X';
const MISS: char = 'T';

/// Text rendering of a board, 1-based labels on both axes.
///
/// With `hide_ships` intact vessel cells are drawn as water, which is how the
/// opponent's board is shown to the human.
pub struct BoardView<'a, const N: usize> {
    board: &'a Board<N>,
    hide_ships: bool,
}

impl<'a, const N: usize> BoardView<'a, N> {
    pub fn new(board: &'a Board<N>, hide_ships: bool) -> Self {
        Self { board, hide_ships }
    }

    fn glyph(&self, state: CellState) -> char {
        match state {
            CellState::Empty => WATER,
            CellState::Ship if self.hide_ships => WATER,
            CellState::Ship => SHIP,
            CellState::Hit => HIT,
            CellState::Miss => MISS,
        }
    }
}

impl<const N: usize> fmt::Display for BoardView<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 0..N {
            write!(f, " {} |", c + 1)?;
        }
        for r in 0..N {
            write!(f, "\n{} |", r + 1)?;
            for c in 0..N {
                let state = self
                    .board
                    .cell(Coordinate::new(r as i32, c as i32))
                    .unwrap_or(CellState::Empty);
                write!(f, " {} |", self.glyph(state))?;
            }
        }
        Ok(())
    }
}

/// Render `board` to a string.
pub fn render<const N: usize>(board: &Board<N>, hide_ships: bool) -> String {
    BoardView::new(board, hide_ships).to_string()
}
