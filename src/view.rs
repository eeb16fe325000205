//! Read-only views a presentation layer renders from.

use serde::{Deserialize, Serialize};
use timeline_core::{Board, MoveLocation, Player, WinningLine};

/// Display order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Oldest move first.
    #[default]
    Ascending,
    /// Newest move first.
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Status line for the active snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
#[serde(tag = "state", content = "player", rename_all = "snake_case")]
pub enum GameStatus {
    /// A line is complete.
    #[display("Winner is: {_0}")]
    Won(Player),
    /// Board full, no line.
    #[display("Draw")]
    Draw,
    /// Play continues.
    #[display("Next Player: {_0}")]
    NextPlayer(Player),
}

/// One clickable entry in the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveListEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Cell played at this step, when recorded.
    pub location: Option<MoveLocation>,
    /// Whether this is the step on display.
    pub is_active: bool,
    /// Whether this is the newest step in the timeline.
    pub is_latest: bool,
    /// Button text.
    pub label: String,
}

impl MoveListEntry {
    /// Builds an entry. The "You are at" wording marks the newest step.
    pub(crate) fn new(
        step: usize,
        location: Option<MoveLocation>,
        is_active: bool,
        is_latest: bool,
    ) -> Self {
        let mut label = if is_latest {
            format!("You are at move #{}", step)
        } else {
            format!("Go to move #{}", step)
        };
        if let Some(location) = location {
            label.push_str(&format!(" {}", location));
        }
        Self {
            step,
            location,
            is_active,
            is_latest,
            label,
        }
    }
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    /// Active snapshot.
    pub board: Board,
    /// Status of the active snapshot.
    pub status: GameStatus,
    /// Status rendered as text.
    pub status_text: String,
    /// Player to move at the active step.
    pub current_player: Player,
    /// Cells to highlight, if a line is complete.
    pub winning_line: Option<WinningLine>,
    /// Step on display.
    pub active_step: usize,
    /// Move list in display order.
    pub moves: Vec<MoveListEntry>,
    /// Move list order.
    pub sort_order: SortOrder,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_toggle_round_trip() {
        assert_eq!(SortOrder::Ascending.toggle(), SortOrder::Descending);
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }

    #[test]
    fn test_status_text() {
        assert_eq!(GameStatus::Won(Player::O).to_string(), "Winner is: O");
        assert_eq!(GameStatus::NextPlayer(Player::X).to_string(), "Next Player: X");
        assert_eq!(GameStatus::Draw.to_string(), "Draw");
    }

    #[test]
    fn test_entry_labels() {
        let newest = MoveListEntry::new(2, Some(MoveLocation::new(0, 1)), false, true);
        assert_eq!(newest.label, "You are at move #2 (0, 1)");
        let viewed = MoveListEntry::new(1, None, true, false);
        assert_eq!(viewed.label, "Go to move #1");
        assert!(viewed.is_active);
    }
}
