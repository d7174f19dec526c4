//! ANSI escape sequences and the colors each board element is drawn in.

/// Restores the terminal's default attributes.
pub const RESET: &str = "\u{1b}[0m";
/// Red foreground.
pub const RED: &str = "\u{1b}[31m";
/// Green foreground.
pub const GREEN: &str = "\u{1b}[32m";
/// Yellow foreground.
pub const YELLOW: &str = "\u{1b}[33m";
/// Blue foreground.
pub const BLUE: &str = "\u{1b}[34m";
/// Purple foreground.
pub const PURPLE: &str = "\u{1b}[35m";
/// Cyan foreground.
pub const CYAN: &str = "\u{1b}[36m";

/// Color of X marks.
pub const X_COLOR: &str = RED;
/// Color of O marks.
pub const O_COLOR: &str = BLUE;
/// Color of empty squares' cell numbers.
pub const EMPTY_COLOR: &str = PURPLE;
/// Color of the winning line and the result line.
pub const WINNER_COLOR: &str = GREEN;
/// Color of the `|` borders.
pub const BORDER_COLOR: &str = YELLOW;
/// Color of the `---` spacers.
pub const SPACER_COLOR: &str = YELLOW;
/// Color of prompts.
pub const INFO_COLOR: &str = CYAN;
/// Color of error notices.
pub const ERROR_COLOR: &str = RED;

/// Wraps `text` in `color` and a trailing reset.
pub fn paint(color: &str, text: impl std::fmt::Display) -> String {
    format!("{color}{text}{RESET}")
}
