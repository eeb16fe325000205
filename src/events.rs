//! UI events that drive a game session.

use serde::{Deserialize, Serialize};

/// One discrete user action, as delivered by a presentation layer.
///
/// Serialized with an `event` tag so recorded sessions read as
/// `{"event": "cell_click", "index": 4}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(tag = "event", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum UiEvent {
    /// A board cell was clicked.
    CellClick {
        /// Row-major cell index.
        index: usize,
    },
    /// A move-list entry was clicked.
    HistoryClick {
        /// History step to jump to.
        step: usize,
    },
    /// The "go to start" control was clicked.
    GoToStart,
    /// A new board size was submitted.
    BoardSizeSubmit {
        /// Raw value from the size input.
        value: i64,
    },
    /// The move-list sort control was toggled.
    SortToggle,
}
