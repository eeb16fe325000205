//! Apply a recorded stream of UI events to a session.

use crate::events::UiEvent;
use crate::session::{GameSession, SessionError};
use crate::view::SessionView;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// How rejected events are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplayMode {
    /// Log and skip, as a UI silently ignores a bad click.
    #[default]
    Lenient,
    /// Stop at the first rejected event.
    Strict,
}

/// An event the session refused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEvent {
    /// Zero-based position in the event stream.
    pub position: usize,
    /// The event itself.
    pub event: UiEvent,
    /// Why it was refused.
    pub reason: String,
}

/// Outcome of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    /// Number of events that changed or queried state successfully.
    pub applied: usize,
    /// Events skipped in lenient mode.
    pub rejected: Vec<RejectedEvent>,
    /// Session view after the last event.
    pub view: SessionView,
}

/// Strict replay stopped on a rejected event.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Event #{position} ({event}) rejected: {source}")]
pub struct ReplayError {
    /// Zero-based position in the event stream.
    pub position: usize,
    /// The rejected event.
    pub event: UiEvent,
    /// Session error it produced.
    pub source: SessionError,
}

/// Feeds `events` to `session` in order.
///
/// # Errors
///
/// In [`ReplayMode::Strict`], returns the first rejection. Events before it
/// stay applied.
#[instrument(skip(session, events), fields(events = events.len()))]
pub fn replay(
    session: &mut GameSession,
    events: &[UiEvent],
    mode: ReplayMode,
) -> Result<ReplayReport, ReplayError> {
    let mut applied = 0;
    let mut rejected = Vec::new();

    for (position, event) in events.iter().enumerate() {
        match session.handle(event) {
            Ok(()) => applied += 1,
            Err(source) if mode == ReplayMode::Strict => {
                return Err(ReplayError {
                    position,
                    event: event.clone(),
                    source,
                });
            }
            Err(err) => {
                warn!(position, %event, %err, "Event skipped");
                rejected.push(RejectedEvent {
                    position,
                    event: event.clone(),
                    reason: err.to_string(),
                });
            }
        }
    }

    info!(applied, rejected = rejected.len(), "Replay finished");
    Ok(ReplayReport {
        applied,
        rejected,
        view: session.view(),
    })
}
