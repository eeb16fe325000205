//! Board snapshots and validated board sizes.

use crate::location::MoveLocation;
use crate::rules::{self, WinResult};
use crate::types::{Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Side length N of a square board.
///
/// Always positive, with N² representable as a cell count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
#[display("{_0}")]
pub struct BoardSize(usize);

impl BoardSize {
    /// The classic 3x3 board.
    pub const CLASSIC: Self = Self(3);

    /// Validates a raw side length.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] for `value ≤ 0` and
    /// [`BoardError::SizeTooLarge`] when N² does not fit in a `usize`.
    #[instrument]
    pub fn new(value: i64) -> Result<Self, BoardError> {
        if value <= 0 {
            return Err(BoardError::InvalidSize { value });
        }
        usize::try_from(value)
            .ok()
            .filter(|side| side.checked_mul(*side).is_some())
            .map(Self)
            .ok_or(BoardError::SizeTooLarge { value })
    }

    /// Returns the side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns N², the number of cells on the board.
    pub fn cell_count(self) -> usize {
        self.0 * self.0
    }
}

impl Default for BoardSize {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<i64> for BoardSize {
    type Error = BoardError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BoardSize> for i64 {
    fn from(size: BoardSize) -> Self {
        size.0 as i64
    }
}

impl From<BoardSize> for usize {
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

/// Errors raised while building or marking a board.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Side length outside the accepted range.
    #[display("Invalid board size {value}: must be positive")]
    InvalidSize {
        /// The rejected value.
        value: i64,
    },
    /// Side length whose N² cell count overflows.
    #[display("Board size {value} is too large: N² cells overflow")]
    SizeTooLarge {
        /// The rejected value.
        value: i64,
    },
    /// Square list length does not equal N².
    #[display("Board needs {expected} squares, got {found}")]
    LengthMismatch {
        /// N² for the requested size.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },
    /// Cell index past the end of the board.
    #[display("Cell {index} is outside a board of {cells} cells")]
    IndexOutOfBounds {
        /// The rejected index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },
    /// Cell already holds a mark.
    #[display("Cell {index} is already occupied")]
    CellOccupied {
        /// The occupied index.
        index: usize,
    },
}

/// One immutable board state: N² squares in row-major order.
///
/// Moves never mutate a snapshot; [`Board::with_mark`] returns a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: BoardSize,
    squares: Vec<Square>,
}

impl Board {
    /// Creates an all-empty board of the given size.
    #[instrument]
    pub fn empty(size: BoardSize) -> Self {
        Self {
            size,
            squares: vec![Square::Empty; size.cell_count()],
        }
    }

    /// Builds a board from row-major squares.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::LengthMismatch`] unless `squares.len()` is N².
    #[instrument(skip(squares), fields(len = squares.len()))]
    pub fn from_squares(size: BoardSize, squares: Vec<Square>) -> Result<Self, BoardError> {
        if squares.len() != size.cell_count() {
            return Err(BoardError::LengthMismatch {
                expected: size.cell_count(),
                found: squares.len(),
            });
        }
        Ok(Self { size, squares })
    }

    /// Returns the side length.
    pub fn size(&self) -> BoardSize {
        self.size
    }

    /// Returns the number of cells (N²).
    pub fn cell_count(&self) -> usize {
        self.squares.len()
    }

    /// Gets the square at the given row-major index.
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a cell exists and is empty.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Counts the marked cells.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Converts a cell index into its (row, column) location.
    pub fn location_of(&self, index: usize) -> Option<MoveLocation> {
        MoveLocation::from_index(index, self.size)
    }

    /// Returns a new snapshot with `player`'s mark at `index`.
    ///
    /// # Errors
    ///
    /// Fails if the index is off the board or the cell is already marked.
    #[instrument(skip(self), fields(size = %self.size))]
    pub fn with_mark(&self, index: usize, player: Player) -> Result<Board, BoardError> {
        match self.get(index) {
            None => Err(BoardError::IndexOutOfBounds {
                index,
                cells: self.cell_count(),
            }),
            Some(Square::Occupied(_)) => Err(BoardError::CellOccupied { index }),
            Some(Square::Empty) => {
                let mut squares = self.squares.clone();
                squares[index] = Square::Occupied(player);
                debug!(index, %player, "Mark placed on new snapshot");
                Ok(Self {
                    size: self.size,
                    squares,
                })
            }
        }
    }

    /// Evaluates this snapshot for a winner.
    pub fn evaluate(&self) -> Option<WinResult> {
        rules::evaluate(&self.squares, self.size.get())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.squares.chunks(self.size.get()).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, square) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", square)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_rejects_non_positive() {
        assert_eq!(BoardSize::new(0), Err(BoardError::InvalidSize { value: 0 }));
        assert_eq!(BoardSize::new(-3), Err(BoardError::InvalidSize { value: -3 }));
        assert_eq!(BoardSize::new(4).map(BoardSize::cell_count), Ok(16));
    }

    #[test]
    fn test_size_accepts_large_positive() {
        assert_eq!(BoardSize::new(65).map(BoardSize::get), Ok(65));
        assert_eq!(BoardSize::new(1000).map(BoardSize::cell_count), Ok(1_000_000));
    }

    #[test]
    fn test_size_rejects_overflowing_cell_count() {
        assert_eq!(
            BoardSize::new(i64::MAX),
            Err(BoardError::SizeTooLarge { value: i64::MAX })
        );
    }

    #[test]
    fn test_empty_board_has_n_squared_cells() {
        let board = Board::empty(BoardSize::new(5).unwrap());
        assert_eq!(board.cell_count(), 25);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_from_squares_checks_length() {
        let size = BoardSize::CLASSIC;
        let err = Board::from_squares(size, vec![Square::Empty; 8]).unwrap_err();
        assert_eq!(err, BoardError::LengthMismatch { expected: 9, found: 8 });
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::empty(BoardSize::CLASSIC);
        let next = board.with_mark(4, Player::X).unwrap();
        assert!(board.is_empty_at(4));
        assert_eq!(next.get(4), Some(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_with_mark_rejects_occupied_and_out_of_bounds() {
        let board = Board::empty(BoardSize::CLASSIC).with_mark(0, Player::X).unwrap();
        assert_eq!(
            board.with_mark(0, Player::O),
            Err(BoardError::CellOccupied { index: 0 })
        );
        assert_eq!(
            board.with_mark(9, Player::O),
            Err(BoardError::IndexOutOfBounds { index: 9, cells: 9 })
        );
    }

    #[test]
    fn test_display_rows() {
        let board = Board::empty(BoardSize::new(2).unwrap())
            .with_mark(1, Player::X)
            .unwrap()
            .with_mark(2, Player::O)
            .unwrap();
        assert_eq!(board.to_string(), ". X\nO .");
    }
}
