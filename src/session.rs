//! Game session: the controller between UI events and the core.
//!
//! A [`GameSession`] owns one move timeline and the move-list sort order.
//! Every operation runs to completion and either changes state or returns an
//! error with the state untouched.

use crate::config::TimelineConfig;
use crate::events::UiEvent;
use crate::view::{GameStatus, MoveListEntry, SessionView, SortOrder};
use derive_more::{Display, Error};
use timeline_core::{
    BoardError, BoardSize, HistoryError, HistoryInvariants, InvariantSet, MoveHistory, MoveLocation,
    Player, WinResult, is_draw,
};
use tracing::{debug, info, instrument, warn};

/// Why a cell click was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveRejection {
    /// The active snapshot already has a winner.
    #[display("game already won by {winner}")]
    GameOver {
        /// Winner of the active snapshot.
        winner: Player,
    },
    /// The cell is occupied or off the board.
    #[display("{_0}")]
    Cell(BoardError),
}

/// Errors returned by session operations.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum SessionError {
    /// Submitted board size was zero or negative.
    #[display("Board size {value} rejected: must be positive")]
    InvalidSize {
        /// The rejected value.
        value: i64,
    },
    /// Submitted board size whose N² cell count overflows.
    #[display("Board size {value} rejected: too large")]
    SizeTooLarge {
        /// The rejected value.
        value: i64,
    },
    /// Cell click that cannot become a move.
    #[display("Move rejected: {_0}")]
    InvalidMoveTarget(MoveRejection),
    /// History click outside the timeline.
    #[display("History step {step} out of range (history has {len} entries)")]
    IndexOutOfRange {
        /// The rejected step.
        step: usize,
        /// Current number of entries.
        len: usize,
    },
    /// The timeline refused a snapshot.
    #[display("History rejected move: {_0}")]
    History(HistoryError),
}

impl From<MoveRejection> for SessionError {
    fn from(rejection: MoveRejection) -> Self {
        SessionError::InvalidMoveTarget(rejection)
    }
}

impl From<HistoryError> for SessionError {
    fn from(err: HistoryError) -> Self {
        match err {
            HistoryError::IndexOutOfRange { index, len } => {
                SessionError::IndexOutOfRange { step: index, len }
            }
            other => SessionError::History(other),
        }
    }
}

/// One game in play, with its timeline and display preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    history: MoveHistory,
    sort_order: SortOrder,
}

impl GameSession {
    /// Creates a session with an empty board of `size`.
    #[instrument]
    pub fn new(size: BoardSize) -> Self {
        info!(%size, "Creating new game session");
        Self {
            history: MoveHistory::new(size),
            sort_order: SortOrder::default(),
        }
    }

    /// Creates a session from configured defaults.
    #[instrument(skip(config))]
    pub fn from_config(config: &TimelineConfig) -> Self {
        let mut session = Self::new(*config.board_size());
        session.sort_order = *config.sort_order();
        session
    }

    /// Returns the move timeline.
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Returns the current board size.
    pub fn board_size(&self) -> BoardSize {
        self.history.size()
    }

    /// Returns the move-list order.
    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    /// Plays the current player's mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidMoveTarget`] when the active snapshot
    /// already has a winner, or the cell is occupied or off the board.
    #[instrument(skip(self), fields(step = self.history.active_index()))]
    pub fn click_cell(&mut self, index: usize) -> Result<Option<MoveLocation>, SessionError> {
        let board = self.history.active_snapshot();

        if let Some(win) = board.evaluate() {
            warn!(winner = %win.winner(), "Click ignored, game is over");
            return Err(MoveRejection::GameOver {
                winner: win.winner(),
            }
            .into());
        }

        let player = self.history.current_player();
        let next = board.with_mark(index, player).map_err(|err| {
            warn!(%err, "Click ignored");
            MoveRejection::Cell(err)
        })?;
        let location = next.location_of(index);

        let step = self.history.commit_move(next, location)?;
        debug!(step, %player, ?location, "Move played");
        assert_invariants(&self.history);
        Ok(location)
    }

    /// Jumps to history step `step`. Step 0 also wipes later moves.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::IndexOutOfRange`] if no such step exists.
    #[instrument(skip(self))]
    pub fn select_history(&mut self, step: usize) -> Result<(), SessionError> {
        self.history.jump_to(step)?;
        debug!(step, "History step selected");
        Ok(())
    }

    /// Returns to an empty board of the current size.
    #[instrument(skip(self))]
    pub fn go_to_start(&mut self) {
        let size = self.board_size();
        self.history.reset(size);
        debug!("Returned to start");
    }

    /// Applies a submitted board size, starting a fresh game.
    ///
    /// The game resets even when `value` equals the current size.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::InvalidSize`] for `value ≤ 0` and
    /// [`SessionError::SizeTooLarge`] when N² overflows; the current game is
    /// kept.
    #[instrument(skip(self))]
    pub fn submit_board_size(&mut self, value: i64) -> Result<BoardSize, SessionError> {
        let size = BoardSize::new(value).map_err(|err| {
            warn!(value, %err, "Board size rejected");
            match err {
                BoardError::SizeTooLarge { .. } => SessionError::SizeTooLarge { value },
                _ => SessionError::InvalidSize { value },
            }
        })?;
        self.history.reset(size);
        info!(%size, "Board resized, game reset");
        Ok(size)
    }

    /// Flips the move-list order and returns the new one.
    #[instrument(skip(self))]
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggle();
        debug!(order = %self.sort_order, "Sort order toggled");
        self.sort_order
    }

    /// Dispatches one UI event.
    ///
    /// # Errors
    ///
    /// Propagates the error of the operation the event maps to.
    #[instrument(skip(self))]
    pub fn handle(&mut self, event: &UiEvent) -> Result<(), SessionError> {
        match *event {
            UiEvent::CellClick { index } => self.click_cell(index).map(|_| ()),
            UiEvent::HistoryClick { step } => self.select_history(step),
            UiEvent::GoToStart => {
                self.go_to_start();
                Ok(())
            }
            UiEvent::BoardSizeSubmit { value } => self.submit_board_size(value).map(|_| ()),
            UiEvent::SortToggle => {
                self.toggle_sort();
                Ok(())
            }
        }
    }

    /// Returns the win on the active snapshot, if any.
    pub fn winner(&self) -> Option<WinResult> {
        self.history.active_snapshot().evaluate()
    }

    /// Returns the status of the active snapshot.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        let board = self.history.active_snapshot();
        match board.evaluate() {
            Some(win) => GameStatus::Won(win.winner()),
            None if is_draw(board) => GameStatus::Draw,
            None => GameStatus::NextPlayer(self.history.current_player()),
        }
    }

    /// Returns move-list entries for steps 1 and later, in display order.
    #[instrument(skip(self))]
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let active = self.history.active_index();
        let latest = self.history.last_index();
        let entries = self
            .history
            .entries()
            .iter()
            .enumerate()
            .skip(1)
            .map(|(step, entry)| {
                MoveListEntry::new(step, *entry.location(), step == active, step == latest)
            });

        match self.sort_order {
            SortOrder::Ascending => entries.collect(),
            SortOrder::Descending => entries.rev().collect(),
        }
    }

    /// Builds the full render view of the active step.
    #[instrument(skip(self))]
    pub fn view(&self) -> SessionView {
        let status = self.status();
        SessionView {
            board: self.history.active_snapshot().clone(),
            status,
            status_text: status.to_string(),
            current_player: self.history.current_player(),
            winning_line: self.winner().map(|win| win.line().clone()),
            active_step: self.history.active_index(),
            moves: self.move_list(),
            sort_order: self.sort_order,
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(BoardSize::default())
    }
}

/// Checks every history invariant in debug builds.
///
/// Only the session guarantees legal moves, so the full set is asserted here
/// rather than inside the history.
fn assert_invariants(history: &MoveHistory) {
    debug_assert!(
        HistoryInvariants::check_all(history).is_ok(),
        "History invariants violated: {:?}",
        HistoryInvariants::check_all(history)
    );
}
