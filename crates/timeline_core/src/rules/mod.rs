//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over squares and side length. Rules are kept apart from
//! history storage so callers can combine them however they render.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{LineKind, WinningLine, winning_lines};
pub use win::{WinResult, check_winner, evaluate};
