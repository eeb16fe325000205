//! First-class invariants for move histories.
//!
//! Invariants are logical properties a timeline must satisfy. They are
//! testable on their own and the structural ones are asserted in debug
//! builds after every history mutation.

use crate::history::MoveHistory;
use crate::types::{Player, Square};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("{description}")]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples so sets compose by type alias.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn finish(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() { Ok(()) } else { Err(violations) }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        finish(violations)
    }
}

impl<S, I1, I2, I3, I4, I5> InvariantSet<S> for (I1, I2, I3, I4, I5)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
    I5: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        check::<S, I4>(state, &mut violations);
        check::<S, I5>(state, &mut violations);
        finish(violations)
    }
}

/// Invariant: step 0 is an empty board.
pub struct InitialBoardEmpty;

impl Invariant<MoveHistory> for InitialBoardEmpty {
    fn holds(history: &MoveHistory) -> bool {
        history
            .entries()
            .first()
            .is_some_and(|entry| entry.board().occupied_count() == 0 && entry.location().is_none())
    }

    fn description() -> &'static str {
        "Initial snapshot is an empty board"
    }
}

/// Invariant: every snapshot has the same side length.
pub struct UniformBoardSize;

impl Invariant<MoveHistory> for UniformBoardSize {
    fn holds(history: &MoveHistory) -> bool {
        let size = history.size();
        history.entries().iter().all(|entry| entry.board().size() == size)
    }

    fn description() -> &'static str {
        "All snapshots share one board size"
    }
}

/// Invariant: the active pointer names an existing step.
pub struct ActiveIndexInBounds;

impl Invariant<MoveHistory> for ActiveIndexInBounds {
    fn holds(history: &MoveHistory) -> bool {
        history.active_index() < history.entries().len()
    }

    fn description() -> &'static str {
        "Active index points inside the history"
    }
}

/// Invariant: each step marks exactly one cell that was empty before.
///
/// The recorded location, when present, must name that cell.
pub struct SingleMarkPerStep;

impl Invariant<MoveHistory> for SingleMarkPerStep {
    fn holds(history: &MoveHistory) -> bool {
        history.entries().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            let mut changed = before
                .squares()
                .iter()
                .zip(after.squares())
                .enumerate()
                .filter(|(_, (old, new))| old != new);
            match (changed.next(), changed.next()) {
                (Some((index, (Square::Empty, Square::Occupied(_)))), None) => pair[1]
                    .location()
                    .is_none_or(|loc| loc.to_index(after.size()) == Some(index)),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each step fills exactly one previously empty cell"
    }
}

/// Invariant: X marks on odd steps, O on even ones (X moves first).
pub struct AlternatingMarks;

impl Invariant<MoveHistory> for AlternatingMarks {
    fn holds(history: &MoveHistory) -> bool {
        history.entries().windows(2).enumerate().all(|(ply, pair)| {
            let expected = Square::Occupied(Player::for_ply(ply));
            let before = pair[0].board().squares();
            pair[1]
                .board()
                .squares()
                .iter()
                .zip(before)
                .filter(|(new, old)| new != old)
                .all(|(new, _)| *new == expected)
        })
    }

    fn description() -> &'static str {
        "Players alternate, starting with X"
    }
}

/// Every history invariant as a composable set.
pub type HistoryInvariants = (
    InitialBoardEmpty,
    UniformBoardSize,
    ActiveIndexInBounds,
    SingleMarkPerStep,
    AlternatingMarks,
);

/// Shape-only invariants. Move legality is the caller's concern, so these are
/// the only ones the history asserts on itself.
type StructuralInvariants = (InitialBoardEmpty, UniformBoardSize, ActiveIndexInBounds);

/// Asserts structural invariants in debug builds.
pub(crate) fn assert_structure(history: &MoveHistory) {
    debug_assert!(
        StructuralInvariants::check_all(history).is_ok(),
        "History structure violated: {:?}",
        StructuralInvariants::check_all(history)
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, BoardSize};

    fn played(cells: &[usize]) -> MoveHistory {
        let mut history = MoveHistory::new(BoardSize::CLASSIC);
        for &index in cells {
            let next = history
                .active_snapshot()
                .with_mark(index, history.current_player())
                .unwrap();
            let location = next.location_of(index);
            history.commit_move(next, location).unwrap();
        }
        history
    }

    #[test]
    fn test_invariant_set_holds_for_new_history() {
        assert!(HistoryInvariants::check_all(&MoveHistory::default()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves_and_jumps() {
        let mut history = played(&[4, 0, 8]);
        history.jump_to(2).unwrap();
        assert!(HistoryInvariants::check_all(&history).is_ok());
    }

    #[test]
    fn test_skipped_step_is_detected() {
        let mut history = MoveHistory::new(BoardSize::CLASSIC);
        let two_marks = Board::empty(BoardSize::CLASSIC)
            .with_mark(0, Player::X)
            .unwrap()
            .with_mark(1, Player::O)
            .unwrap();
        history.commit_move(two_marks, None).unwrap();

        let violations = HistoryInvariants::check_all(&history).unwrap_err();
        assert!(violations
            .iter()
            .any(|v| v.description == SingleMarkPerStep::description()));
    }

    #[test]
    fn test_wrong_player_is_detected() {
        let mut history = MoveHistory::new(BoardSize::CLASSIC);
        let o_first = Board::empty(BoardSize::CLASSIC).with_mark(4, Player::O).unwrap();
        history.commit_move(o_first, None).unwrap();

        assert!(SingleMarkPerStep::holds(&history));
        assert!(!AlternatingMarks::holds(&history));
    }

    #[test]
    fn test_mismatched_location_is_detected() {
        let mut history = MoveHistory::new(BoardSize::CLASSIC);
        let next = Board::empty(BoardSize::CLASSIC).with_mark(4, Player::X).unwrap();
        history
            .commit_move(next, Some(crate::MoveLocation::new(0, 0)))
            .unwrap();
        assert!(!SingleMarkPerStep::holds(&history));
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (InitialBoardEmpty, ActiveIndexInBounds);
        assert!(TwoInvariants::check_all(&played(&[1, 2])).is_ok());
    }
}
