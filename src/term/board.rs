//! Tic-tac-toe board rendering.
//!
//! The frame is seven lines: spacer rows `|---|---|---|` alternate with
//! content rows `| 1 | 2 | 3 |`. Empty squares show their cell number.

use super::ansi::{
    BORDER_COLOR, EMPTY_COLOR, O_COLOR, SPACER_COLOR, WINNER_COLOR, X_COLOR, paint,
};
use crate::games::tictactoe::{Board, Line, Player, Position, Square};
use std::io::Write;
use tracing::instrument;

const BORDER: &str = "|";
const SPACER: &str = "---";

/// Picks the color for the square at `pos`.
///
/// Squares on the highlighted line are drawn in the winner color regardless
/// of their content.
fn square_color(square: Square, pos: Position, highlight: Option<&Line>) -> &'static str {
    if highlight.is_some_and(|line| line.contains(&pos)) {
        return WINNER_COLOR;
    }
    match square {
        Square::Occupied(Player::X) => X_COLOR,
        Square::Occupied(Player::O) => O_COLOR,
        Square::Empty => EMPTY_COLOR,
    }
}

fn square_text(square: Square, pos: Position) -> String {
    match square {
        Square::Empty => pos.number().to_string(),
        Square::Occupied(player) => player.to_string(),
    }
}

fn spacer_row() -> String {
    let border = paint(BORDER_COLOR, BORDER);
    let spacer = paint(SPACER_COLOR, SPACER);
    format!("{border}{spacer}{border}{spacer}{border}{spacer}{border}")
}

fn content_row(board: &Board, row: usize, highlight: Option<&Line>) -> String {
    let border = paint(BORDER_COLOR, BORDER);
    let mut line = border.clone();
    for pos in &Position::ALL[row * 3..row * 3 + 3] {
        let square = board.get(*pos);
        let cell = paint(square_color(square, *pos, highlight), square_text(square, *pos));
        line.push_str(&format!(" {cell} {border}"));
    }
    line
}

/// Builds the colored frame for `board`, one `\n`-terminated line per row.
///
/// `highlight` is the winning line, passed only when the game was won.
#[instrument(skip(board))]
pub fn board_frame(board: &Board, highlight: Option<&Line>) -> String {
    let mut frame = String::new();
    for row in 0..7 {
        if row % 2 == 0 {
            frame.push_str(&spacer_row());
        } else {
            frame.push_str(&content_row(board, row / 2, highlight));
        }
        frame.push('\n');
    }
    frame
}

/// Writes the frame for `board` to `out`.
#[instrument(skip_all)]
pub fn render_board<W: Write>(
    out: &mut W,
    board: &Board,
    highlight: Option<&Line>,
) -> std::io::Result<()> {
    out.write_all(board_frame(board, highlight).as_bytes())
}

#[cfg(test)]
mod tests {
    use super::super::ansi::RESET;
    use super::*;
    use crate::games::tictactoe::LINES;

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == '\u{1b}' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                plain.push(c);
            }
        }
        plain
    }

    #[test]
    fn test_empty_board_layout() {
        let frame = board_frame(&Board::new(), None);
        assert_eq!(
            strip_ansi(&frame),
            "|---|---|---|\n| 1 | 2 | 3 |\n|---|---|---|\n| 4 | 5 | 6 |\n|---|---|---|\n| 7 | 8 | 9 |\n|---|---|---|\n"
        );
    }

    #[test]
    fn test_marks_replace_numbers() {
        let mut board = Board::new();
        board.place(Player::X, Position::Center).unwrap();
        board.place(Player::O, Position::BottomRight).unwrap();
        let plain = strip_ansi(&board_frame(&board, None));
        assert!(plain.contains("| 4 | X | 6 |"));
        assert!(plain.contains("| 7 | 8 | O |"));
    }

    #[test]
    fn test_cell_colors() {
        let mut board = Board::new();
        board.place(Player::X, Position::TopLeft).unwrap();
        board.place(Player::O, Position::TopCenter).unwrap();
        let frame = board_frame(&board, None);
        assert!(frame.contains(&format!("{X_COLOR}X{RESET}")));
        assert!(frame.contains(&format!("{O_COLOR}O{RESET}")));
        assert!(frame.contains(&format!("{EMPTY_COLOR}3{RESET}")));
        assert!(!frame.contains(WINNER_COLOR));
    }

    #[test]
    fn test_highlight_overrides_cell_color() {
        let mut board = Board::new();
        for pos in LINES[0] {
            board.place(Player::O, pos).unwrap();
        }
        let frame = board_frame(&board, Some(&LINES[0]));
        assert_eq!(frame.matches(&format!("{WINNER_COLOR}O{RESET}")).count(), 3);
        assert!(!frame.contains(&format!("{O_COLOR}O{RESET}")));
    }

    #[test]
    fn test_render_writes_frame() {
        let board = Board::new();
        let mut out = Vec::new();
        render_board(&mut out, &board, None).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), board_frame(&board, None));
    }
}
