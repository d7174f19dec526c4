//! Final result of a finished game.

use super::{GameStatus, Player};

/// Outcome of a finished game.
///
/// Displays as the token printed on the result line: `X`, `O`, or `D`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Outcome {
    /// Player won the game.
    #[display("{}", _0)]
    Winner(Player),
    /// Game ended in a draw.
    #[display("D")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Converts a terminal status into an outcome; `None` while in progress.
    pub fn from_status(status: &GameStatus) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Won(win) => Some(Outcome::Winner(win.player())),
            GameStatus::Draw => Some(Outcome::Draw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_tokens() {
        assert_eq!(Outcome::Winner(Player::X).to_string(), "X");
        assert_eq!(Outcome::Winner(Player::O).to_string(), "O");
        assert_eq!(Outcome::Draw.to_string(), "D");
    }

    #[test]
    fn test_winner() {
        assert_eq!(Outcome::Winner(Player::O).winner(), Some(Player::O));
        assert_eq!(Outcome::Draw.winner(), None);
    }

    #[test]
    fn test_in_progress_has_no_outcome() {
        assert_eq!(Outcome::from_status(&GameStatus::InProgress), None);
        assert!(Outcome::from_status(&GameStatus::Draw).unwrap().is_draw());
    }
}
