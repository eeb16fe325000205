//! Move timeline with time travel and branch truncation.

use crate::board::{Board, BoardSize};
use crate::invariants;
use crate::location::MoveLocation;
use crate::types::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// One step of the timeline: a snapshot and where its move was played.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct HistoryEntry {
    /// Board after this step.
    board: Board,
    /// Cell played to reach this step. `None` for the initial board.
    location: Option<MoveLocation>,
}

/// Errors raised by history operations. State is unchanged on error.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Jump target past the end of the timeline.
    #[display("History index {index} out of range (history has {len} entries)")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Current number of entries.
        len: usize,
    },
    /// Committed snapshot has a different cell count than the active one.
    #[display("Snapshot has {found} cells, expected {expected}")]
    SnapshotSizeMismatch {
        /// Cell count of the active snapshot.
        expected: usize,
        /// Cell count of the rejected snapshot.
        found: usize,
    },
}

/// Ordered board snapshots plus a pointer to the one in play.
///
/// Entry 0 is always the empty board. Committing from an earlier step drops
/// every later step before appending, so there is no redo branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
    active: usize,
}

impl MoveHistory {
    /// Creates a timeline holding only the empty board of `size`.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        Self {
            entries: vec![HistoryEntry {
                board: Board::empty(size),
                location: None,
            }],
            active: 0,
        }
    }

    /// Replaces the whole timeline with a single empty board of `size`.
    #[instrument(skip(self), fields(old_len = self.entries.len()))]
    pub fn reset(&mut self, size: BoardSize) {
        *self = Self::new(size);
        debug!(%size, "History reset");
    }

    /// Appends `next` after the active step and makes it active.
    ///
    /// Steps after the active one are discarded first. The move's legality is
    /// the caller's concern; only the cell count is checked here.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::SnapshotSizeMismatch`] if `next` does not have
    /// the same N² as the active snapshot.
    #[instrument(skip(self, next), fields(active = self.active, len = self.entries.len()))]
    pub fn commit_move(
        &mut self,
        next: Board,
        location: Option<MoveLocation>,
    ) -> Result<usize, HistoryError> {
        let expected = self.active_snapshot().cell_count();
        if next.cell_count() != expected {
            warn!(expected, found = next.cell_count(), "Rejected snapshot of wrong size");
            return Err(HistoryError::SnapshotSizeMismatch {
                expected,
                found: next.cell_count(),
            });
        }

        let discarded = self.entries.len() - (self.active + 1);
        self.entries.truncate(self.active + 1);
        self.entries.push(HistoryEntry {
            board: next,
            location,
        });
        self.active = self.entries.len() - 1;
        debug!(active = self.active, discarded, "Move committed");

        invariants::assert_structure(self);
        Ok(self.active)
    }

    /// Makes step `index` the active one.
    ///
    /// Jumping to step 0 also collapses the timeline to a single empty board
    /// of the current size; every later step is lost.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::IndexOutOfRange`] if `index` is not a step.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.entries.len() {
            warn!(index, "Rejected jump outside history");
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }

        if index == 0 {
            let size = self.size();
            self.reset(size);
        } else {
            self.active = index;
            debug!(active = index, "Jumped to step");
        }

        invariants::assert_structure(self);
        Ok(())
    }

    /// Returns the snapshot at the active step.
    pub fn active_snapshot(&self) -> &Board {
        &self.entries[self.active].board
    }

    /// Returns the location recorded for the active step.
    pub fn active_location(&self) -> Option<MoveLocation> {
        self.entries[self.active].location
    }

    /// Returns the active step index.
    pub fn active_index(&self) -> usize {
        self.active
    }

    /// Returns the index of the newest step.
    pub fn last_index(&self) -> usize {
        self.entries.len() - 1
    }

    /// Returns every step, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the board size of this timeline.
    pub fn size(&self) -> BoardSize {
        self.entries[0].board.size()
    }

    /// Returns whose turn it is at the active step.
    ///
    /// Derived from step parity: X on even steps, O on odd ones.
    pub fn current_player(&self) -> Player {
        Player::for_ply(self.active)
    }
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(history: &mut MoveHistory, index: usize) {
        let next = history
            .active_snapshot()
            .with_mark(index, history.current_player())
            .unwrap();
        let location = next.location_of(index);
        history.commit_move(next, location).unwrap();
    }

    #[test]
    fn test_new_history_has_empty_initial_board() {
        let history = MoveHistory::new(BoardSize::CLASSIC);
        assert_eq!(history.entries().len(), 1);
        assert_eq!(history.active_index(), 0);
        assert_eq!(history.active_snapshot().occupied_count(), 0);
        assert_eq!(history.current_player(), Player::X);
        assert_eq!(history.active_location(), None);
    }

    #[test]
    fn test_commit_advances_active_and_player() {
        let mut history = MoveHistory::new(BoardSize::CLASSIC);
        play(&mut history, 4);
        assert_eq!(history.active_index(), 1);
        assert_eq!(history.current_player(), Player::O);
        assert_eq!(history.active_location(), Some(MoveLocation::new(1, 1)));
    }

    #[test]
    fn test_commit_after_jump_truncates_future() {
        let mut history = MoveHistory::new(BoardSize::CLASSIC);
        play(&mut history, 0);
        play(&mut history, 1);
        history.jump_to(1).unwrap();
        play(&mut history, 8);
        assert_eq!(history.entries().len(), 3);
        assert_eq!(history.active_index(), 2);
        assert!(history.active_snapshot().is_empty_at(1));
    }

    #[test]
    fn test_jump_to_zero_collapses_history() {
        let mut history = MoveHistory::new(BoardSize::new(4).unwrap());
        play(&mut history, 0);
        play(&mut history, 5);
        play(&mut history, 6);
        history.jump_to(0).unwrap();
        assert_eq!(history.entries().len(), 1);
        assert_eq!(history.size(), BoardSize::new(4).unwrap());
        assert_eq!(history.current_player(), Player::X);
    }

    #[test]
    fn test_jump_keeps_later_steps() {
        let mut history = MoveHistory::new(BoardSize::CLASSIC);
        play(&mut history, 0);
        play(&mut history, 1);
        play(&mut history, 2);
        history.jump_to(2).unwrap();
        assert_eq!(history.entries().len(), 4);
        assert_eq!(history.last_index(), 3);
        assert_eq!(history.current_player(), Player::X);
    }

    #[test]
    fn test_jump_out_of_range_is_rejected() {
        let mut history = MoveHistory::new(BoardSize::CLASSIC);
        play(&mut history, 0);
        let before = history.clone();
        assert_eq!(
            history.jump_to(2),
            Err(HistoryError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(history, before);
    }

    #[test]
    fn test_commit_rejects_wrong_size() {
        let mut history = MoveHistory::new(BoardSize::CLASSIC);
        let other = Board::empty(BoardSize::new(4).unwrap());
        assert_eq!(
            history.commit_move(other, None),
            Err(HistoryError::SnapshotSizeMismatch { expected: 9, found: 16 })
        );
        assert_eq!(history.entries().len(), 1);
    }

    #[test]
    fn test_reset_changes_size() {
        let mut history = MoveHistory::new(BoardSize::CLASSIC);
        play(&mut history, 3);
        history.reset(BoardSize::new(5).unwrap());
        assert_eq!(history.entries().len(), 1);
        assert_eq!(history.active_snapshot().cell_count(), 25);
    }
}
