//! Win detection for N×N tic-tac-toe.

use super::lines::{WinningLine, winning_lines};
use crate::board::Board;
use crate::types::{Player, Square};
use serde::Serialize;
use tracing::{debug, instrument};

/// A detected win: the player and the line that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WinResult {
    winner: Player,
    line: WinningLine,
}

impl WinResult {
    /// Returns the winning player.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// Returns the winning line.
    pub fn line(&self) -> &WinningLine {
        &self.line
    }
}

/// Finds the first complete line in scan order.
///
/// A line wins when its first cell is marked and every other cell on it
/// carries the same mark. Lines are scanned rows, columns, main diagonal,
/// anti-diagonal; the first hit is returned. Indices past the end of
/// `squares` count as empty, so a short slice never panics.
///
/// Draws are not reported: a full board without a line returns `None`, the
/// same as a board still in play.
#[instrument(skip(squares), fields(len = squares.len()))]
pub fn evaluate(squares: &[Square], n: usize) -> Option<WinResult> {
    let result = winning_lines(n).into_iter().find_map(|line| {
        let (&first, rest) = line.cells().split_first()?;
        let mark = squares.get(first).copied()?;
        let Square::Occupied(winner) = mark else {
            return None;
        };
        let complete = rest.iter().all(|&index| squares.get(index) == Some(&mark));
        complete.then(|| WinResult { winner, line })
    });

    if let Some(win) = &result {
        debug!(winner = %win.winner, line = %win.line.kind(), "Winning line found");
    }
    result
}

/// Returns the winner of a board, if any.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    board.evaluate().map(|win| win.winner())
}
