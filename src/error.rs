//! Error types for the console game.

use crate::games::tictactoe::{MoveError, Position};
use derive_more::{Display, Error, From};

/// A line of input that could not be turned into a move.
///
/// Every variant is recoverable: the loop prints the message and asks the
/// same player again. The display text is exactly what the player sees.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InputError {
    /// The line was not an integer.
    #[display("ERROR: could not read from standard in!")]
    Unreadable(#[error(not(source))] String),

    /// The integer was not a cell number (1-9).
    #[display("ERROR: input out of bounds!")]
    OutOfBounds(#[error(not(source))] i64),

    /// The cell already holds a mark.
    #[display("ERROR: cell already taken!")]
    CellTaken(#[error(not(source))] Position),
}

/// Errors that end a game loop early.
#[derive(Debug, Display, Error, From)]
pub enum GameError {
    /// Reading input or writing output failed.
    #[display("I/O error: {}", _0)]
    #[from]
    Io(#[error(source)] std::io::Error),

    /// Input ended before the game reached a result.
    #[display("Input closed before the game finished")]
    InputClosed,

    /// The engine refused a move the loop should never have offered.
    #[display("Move rejected: {}", _0)]
    #[from]
    Move(#[error(source)] MoveError),
}
