//! Draw detection for N×N tic-tac-toe.
//!
//! Kept separate from [`evaluate`](super::evaluate), which never reports a
//! draw.

use super::win::check_winner;
use crate::board::Board;
use crate::types::Square;
use tracing::instrument;

/// Checks if every cell is marked.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks for a full board with no winning line.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}
