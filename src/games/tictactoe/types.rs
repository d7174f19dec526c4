//! Core domain types for tic-tac-toe.

use super::action::MoveError;
use super::position::Position;
use tracing::instrument;

/// Player in the game, and the mark they place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the player occupying this square, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Places `player`'s mark at `pos`.
    ///
    /// This is the only way to change a board. It succeeds only while the
    /// square is still empty.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, player: Player, pos: Position) -> Result<(), MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        self.squares[pos.index()] = Square::Occupied(player);
        Ok(())
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Positions that are still empty, in board order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|pos| self.is_empty(*pos))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.squares().iter().all(|s| *s == Square::Empty));
        assert_eq!(board.empty_positions().len(), 9);
    }

    #[test]
    fn test_place_on_empty_square() {
        let mut board = Board::new();
        board.place(Player::X, Position::Center).unwrap();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert!(!board.empty_positions().contains(&Position::Center));
    }

    #[test]
    fn test_place_on_taken_square_is_rejected() {
        let mut board = Board::new();
        board.place(Player::X, Position::TopLeft).unwrap();
        let before = board.clone();

        let result = board.place(Player::O, Position::TopLeft);
        assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.to_string(), "X");
    }
}
