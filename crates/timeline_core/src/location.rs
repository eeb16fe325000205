//! Row/column locations recorded alongside moves.

use crate::board::BoardSize;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Zero-based (row, column) of a cell, kept for display in move lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display("({row}, {col})")]
pub struct MoveLocation {
    row: usize,
    col: usize,
}

impl MoveLocation {
    /// Creates a location from row and column.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Derives the location of a row-major index, or `None` if off the board.
    pub fn from_index(index: usize, size: BoardSize) -> Option<Self> {
        let n = size.get();
        (index < size.cell_count()).then(|| Self::new(index / n, index % n))
    }

    /// Converts back to a row-major index, or `None` if off the board.
    pub fn to_index(self, size: BoardSize) -> Option<usize> {
        let n = size.get();
        (self.row < n && self.col < n).then_some(self.row * n + self.col)
    }

    /// Returns the row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(self) -> usize {
        self.col
    }
}
