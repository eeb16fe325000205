//! Property-based tests for event streams driven through a session.

use proptest::prelude::*;
use tictactoe_timeline::{GameSession, ReplayMode, UiEvent, replay};
use timeline_core::{HistoryInvariants, InvariantSet};

fn arb_event() -> impl Strategy<Value = UiEvent> {
    prop_oneof![
        4 => (0usize..20).prop_map(|index| UiEvent::CellClick { index }),
        2 => (0usize..12).prop_map(|step| UiEvent::HistoryClick { step }),
        1 => Just(UiEvent::GoToStart),
        1 => (-2i64..=5).prop_map(|value| UiEvent::BoardSizeSubmit { value }),
        1 => Just(UiEvent::SortToggle),
    ]
}

proptest! {
    #[test]
    fn rejected_events_leave_session_unchanged(
        events in proptest::collection::vec(arb_event(), 0..60),
    ) {
        let mut session = GameSession::default();
        for event in &events {
            let before = session.clone();
            if session.handle(event).is_err() {
                prop_assert_eq!(&session, &before);
            }
            prop_assert!(HistoryInvariants::check_all(session.history()).is_ok());
        }
    }

    #[test]
    fn lenient_replay_accounts_for_every_event(
        events in proptest::collection::vec(arb_event(), 0..60),
    ) {
        let mut session = GameSession::default();
        let report = replay(&mut session, &events, ReplayMode::Lenient).unwrap();
        prop_assert_eq!(report.applied + report.rejected.len(), events.len());
        prop_assert_eq!(report.view, session.view());
    }

    #[test]
    fn strict_replay_matches_lenient_until_first_rejection(
        events in proptest::collection::vec(arb_event(), 0..60),
    ) {
        let mut strict = GameSession::default();
        let mut lenient = GameSession::default();
        let lenient_report = replay(&mut lenient, &events, ReplayMode::Lenient).unwrap();

        match replay(&mut strict, &events, ReplayMode::Strict) {
            Ok(report) => {
                prop_assert!(lenient_report.rejected.is_empty());
                prop_assert_eq!(report.view, lenient_report.view);
            }
            Err(err) => {
                prop_assert_eq!(Some(err.position), lenient_report.rejected.first().map(|r| r.position));
            }
        }
    }
}
