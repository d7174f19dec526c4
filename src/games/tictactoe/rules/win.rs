//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position};
use tracing::instrument;

/// Three positions that win the game when uniformly marked.
pub type Line = [Position; 3];

/// Every winning line, in evaluation order: rows, then columns, then diagonals.
///
/// The order decides which line is reported when two complete at once.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who completed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Win {
    /// The winning player.
    player: Player,
    /// The winning line.
    line: Line,
}

impl Win {
    /// Returns the winning player.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the winning line.
    pub fn line(&self) -> Line {
        self.line
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first complete line in [`LINES`] order, or `None`.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Win> {
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let player = board.get(a).player()?;
        if board.get(b).player() == Some(player) && board.get(c).player() == Some(player) {
            Some(Win { player, line })
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(moves: &[(Player, Position)]) -> Board {
        let mut board = Board::new();
        for &(player, pos) in moves {
            board.place(player, pos).unwrap();
        }
        board
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = board_with(&[
            (Player::X, Position::TopLeft),
            (Player::X, Position::TopCenter),
            (Player::X, Position::TopRight),
        ]);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.player(), Player::X);
        assert_eq!(win.line(), LINES[0]);
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Player::O, Position::TopLeft),
            (Player::O, Position::Center),
            (Player::O, Position::BottomRight),
        ]);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.player(), Player::O);
        assert_eq!(win.line().map(Position::index), [0, 4, 8]);
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = board_with(&[
            (Player::X, Position::TopRight),
            (Player::X, Position::Center),
            (Player::X, Position::BottomLeft),
        ]);
        assert_eq!(check_winner(&board).unwrap().line().map(Position::index), [2, 4, 6]);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Player::X, Position::TopLeft),
            (Player::O, Position::TopCenter),
            (Player::X, Position::TopRight),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[
            (Player::X, Position::TopLeft),
            (Player::X, Position::TopCenter),
        ]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_tie() {
        // Top row and left column both complete; the row is checked first.
        let board = board_with(&[
            (Player::X, Position::TopLeft),
            (Player::X, Position::TopCenter),
            (Player::X, Position::TopRight),
            (Player::X, Position::MiddleLeft),
            (Player::X, Position::BottomLeft),
        ]);
        assert_eq!(check_winner(&board).unwrap().line().map(Position::index), [0, 1, 2]);
    }

    #[test]
    fn test_column_beats_diagonal() {
        let board = board_with(&[
            (Player::O, Position::TopRight),
            (Player::O, Position::MiddleRight),
            (Player::O, Position::BottomRight),
            (Player::O, Position::Center),
            (Player::O, Position::TopLeft),
        ]);
        assert_eq!(check_winner(&board).unwrap().line().map(Position::index), [2, 5, 8]);
    }
}
