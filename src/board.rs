//! Text grid rebuilt from entity positions every turn.

use alloc::{format, string::String, vec, vec::Vec};
use core::fmt;

use crate::common::Position;
use crate::interface::DisplaySink;

pub const EMPTY_GLYPH: char = ' ';
pub const GOAL_GLYPH: char = 'G';
pub const STAR_GLYPH: char = '*';
pub const ENEMY_GLYPH: char = 'E';
pub const PLAYER_GLYPH: char = '@';
pub const BORDER: char = '|';

pub const LEGEND: &str =
    "Controls: W A S D + Enter. Reach 'G' to win. Collect '*' for +1. Avoid 'E'.";

/// Rendered view of the grid. Only a picture: the engine's entity lists
/// stay authoritative for occupancy.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<char>>,
}

/// A `rows` x `cols` grid of blank cells.
pub fn make_empty_board(rows: usize, cols: usize) -> Board {
    Board {
        cells: vec![vec![EMPTY_GLYPH; cols]; rows],
    }
}

impl Board {
    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells.first().map_or(0, Vec::len)
    }

    /// Glyph at `pos`, or `None` off the grid.
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        self.cells
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
    }

    /// Overwrite the cell at `pos`. Off-grid positions are ignored.
    pub fn stamp(&mut self, pos: Position, glyph: char) {
        if pos.row < 0 || pos.col < 0 {
            return;
        }
        if let Some(cell) = self
            .cells
            .get_mut(pos.row as usize)
            .and_then(|row| row.get_mut(pos.col as usize))
        {
            *cell = glyph;
        }
    }

    /// Each row framed by border characters.
    pub fn framed_rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|row| {
            let mut line = String::with_capacity(row.len() + 2);
            line.push(BORDER);
            line.extend(row.iter());
            line.push(BORDER);
            line
        })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.rows(), self.cols())?;
        for line in self.framed_rows() {
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}

/// Status line shown under the grid.
pub fn status_line(score: u32, turns: u32) -> String {
    format!("Score: {}    Turns: {}", score, turns)
}

/// All lines of one screen, in order. Pure: same input, same bytes.
pub fn render_frame(board: &Board, score: u32, turns: u32) -> Vec<String> {
    let mut lines: Vec<String> = board.framed_rows().collect();
    lines.push(String::new());
    lines.push(status_line(score, turns));
    lines.push(String::from(LEGEND));
    lines
}

/// Clear the display and write the framed board, status line and legend.
pub fn draw_board<D: DisplaySink + ?Sized>(
    display: &mut D,
    board: &Board,
    score: u32,
    turns: u32,
) -> anyhow::Result<()> {
    display.clear()?;
    for line in render_frame(board, score, turns) {
        display.write_line(&line)?;
    }
    Ok(())
}
