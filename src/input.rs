//! Parsing a typed line into a board position.

use crate::error::InputError;
use crate::games::tictactoe::Position;
use tracing::instrument;

/// Parses one line of player input into a position.
///
/// Surrounding whitespace is ignored. The rest must be a single integer in
/// 1-9. Whether the cell is free is for the engine to decide.
///
/// # Errors
///
/// - [`InputError::Unreadable`] if the line is not an integer.
/// - [`InputError::OutOfBounds`] if the integer is not a cell number.
#[instrument]
pub fn parse_selection(line: &str) -> Result<Position, InputError> {
    let text = line.trim();
    let number: i64 = text
        .parse()
        .map_err(|_| InputError::Unreadable(text.to_string()))?;
    Position::from_number(number).ok_or(InputError::OutOfBounds(number))
}
