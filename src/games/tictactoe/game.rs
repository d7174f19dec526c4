//! Game engine for tic-tac-toe.
//!
//! Owns the board and whose turn it is. Every accepted move flips the turn
//! exactly once and re-evaluates the status; a rejected move changes nothing.

use super::action::{Move, MoveError};
use super::rules::{GameStatus, evaluate};
use super::types::{Board, Player};
use super::Position;
use tracing::{debug, instrument};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    moves_played: usize,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            status: GameStatus::InProgress,
            moves_played: 0,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose move is awaited.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the number of accepted moves.
    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Places the current player's mark at `pos`.
    ///
    /// On success the turn passes to the opponent and the status is
    /// re-evaluated; the new status is returned.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game has been won or drawn.
    /// - [`MoveError::SquareOccupied`] if `pos` already holds a mark.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn play(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        let action = Move::new(self.to_move, pos);
        self.board.place(action.player, action.position)?;
        self.to_move = self.to_move.opponent();
        self.moves_played += 1;
        self.status = evaluate(&self.board);

        debug!(
            %action,
            status = ?self.status,
            empty = ?self.board.empty_positions(),
            "Move applied"
        );
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
