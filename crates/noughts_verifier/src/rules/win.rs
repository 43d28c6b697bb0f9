//! Win detection.

use super::super::types::{Board, Cell, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A line of three cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Line {
    /// Row by index (0-2).
    #[display("row {}", _0)]
    Row(usize),
    /// Column by index (0-2).
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Lines in the order they are checked.
    ///
    /// Rows and columns are interleaved per index, diagonals come last.
    pub const SCAN_ORDER: [Line; 8] = [
        Line::Row(0),
        Line::Column(0),
        Line::Row(1),
        Line::Column(1),
        Line::Row(2),
        Line::Column(2),
        Line::Diagonal,
        Line::AntiDiagonal,
    ];

    /// `(row, col)` coordinates of the three cells.
    pub fn coordinates(self) -> [(usize, usize); 3] {
        match self {
            Line::Row(r) => [(r, 0), (r, 1), (r, 2)],
            Line::Column(c) => [(0, c), (1, c), (2, c)],
            Line::Diagonal => [(0, 0), (1, 1), (2, 2)],
            Line::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }

    /// Returns the player holding all three cells of this line.
    ///
    /// Three empty cells are equal but never a match.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.coordinates().map(|(row, col)| board.get(row, col));
        match a {
            Some(Cell::Occupied(player)) if a == b && b == c => Some(player),
            _ => None,
        }
    }
}

/// Finds the first completed line in scan order.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    Line::SCAN_ORDER.into_iter().find_map(|line| {
        let player = line.owner(board)?;
        debug!(%line, %player, "Completed line");
        Some((line, player))
    })
}

/// Returns the player with three in a row, if any.
#[instrument(skip(board))]
pub fn detect_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}

/// Maps the board to its outcome label.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Outcome {
    Outcome::from(detect_winner(board))
}
