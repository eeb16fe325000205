//! N×N tic-tac-toe sessions with time-travel move history.
//!
//! This crate sits between a presentation layer and [`timeline_core`]:
//!
//! - **Session**: [`GameSession`] turns UI events into core calls and keeps
//!   rejected actions from touching state.
//! - **Views**: [`SessionView`] and friends carry everything a frame needs.
//! - **Replay**: [`replay`] feeds a recorded event stream to a session.
//! - **Config**: [`TimelineConfig`] holds session defaults from TOML.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline::{GameSession, GameStatus, UiEvent};
//! use timeline_core::Player;
//!
//! let mut session = GameSession::default();
//! for index in [0, 3, 1, 4, 2] {
//!     session.handle(&UiEvent::CellClick { index })?;
//! }
//! assert_eq!(session.status(), GameStatus::Won(Player::X));
//! # Ok::<(), tictactoe_timeline::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod events;
mod replay;
mod session;
mod view;

pub use config::{ConfigError, TimelineConfig};
pub use events::UiEvent;
pub use replay::{RejectedEvent, ReplayError, ReplayMode, ReplayReport, replay};
pub use session::{GameSession, MoveRejection, SessionError};
pub use view::{GameStatus, MoveListEntry, SessionView, SortOrder};
