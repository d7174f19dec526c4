//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating game state
//! according to tic-tac-toe rules. Rules are separated from board
//! storage so the engine and the renderer can both consult them.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, Win, check_winner};

use super::Board;
use tracing::instrument;

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Win),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Returns the winning line, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            GameStatus::Won(win) => Some(win.line()),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}

/// Evaluates the board: a complete line wins, otherwise a full board draws.
#[instrument]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(win) = check_winner(board) {
        GameStatus::Won(win)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
