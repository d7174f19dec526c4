//! Text rendering collaborator: colors, the board frame, and screen clearing.

pub mod ansi;
mod board;
mod clear;

pub use board::{board_frame, render_board};
pub use clear::{ClearAction, Screen};
