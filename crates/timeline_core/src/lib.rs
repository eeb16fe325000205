//! Pure tic-tac-toe logic for square boards of any side length.
//!
//! The crate has two halves that never call each other:
//!
//! - **Rules**: winning-line generation and evaluation for an N×N board,
//!   plus a separate full-board query.
//! - **History**: an ordered timeline of immutable board snapshots with an
//!   active pointer, supporting time travel and branch truncation.
//!
//! A caller (usually a UI controller) combines them: it asks the rules
//! whether a move is still allowed, builds the next snapshot, and commits it
//! to the history.
//!
//! ```
//! use timeline_core::{Board, BoardSize, MoveHistory, Player};
//!
//! let size = BoardSize::new(3)?;
//! let mut history = MoveHistory::new(size);
//! let next = history.active_snapshot().with_mark(4, history.current_player())?;
//! history.commit_move(next, None)?;
//! assert_eq!(history.current_player(), Player::O);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod history;
pub mod invariants;
mod location;
pub mod rules;
mod types;

pub use board::{Board, BoardError, BoardSize};
pub use history::{HistoryEntry, HistoryError, MoveHistory};
pub use invariants::{HistoryInvariants, Invariant, InvariantSet, InvariantViolation};
pub use location::MoveLocation;
pub use rules::{LineKind, WinResult, WinningLine, check_winner, evaluate, is_draw, is_full, winning_lines};
pub use types::{Player, Square};
