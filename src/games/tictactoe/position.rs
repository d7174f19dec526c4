//! Named board positions and their numeric forms.
//!
//! Players type cell numbers 1-9; the board stores squares at indices 0-8.
//! Both conversions live here so nothing else does arithmetic on raw numbers.

use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board, in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Position {
    /// Top-left (cell 1)
    TopLeft,
    /// Top-center (cell 2)
    TopCenter,
    /// Top-right (cell 3)
    TopRight,
    /// Middle-left (cell 4)
    MiddleLeft,
    /// Center (cell 5)
    Center,
    /// Middle-right (cell 6)
    MiddleRight,
    /// Bottom-left (cell 7)
    BottomLeft,
    /// Bottom-center (cell 8)
    BottomCenter,
    /// Bottom-right (cell 9)
    BottomRight,
}

impl Position {
    /// All 9 positions.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Converts position to the cell number a player types (1-9).
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Creates position from board index (0-8).
    #[instrument]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Creates position from a typed cell number (1-9).
    ///
    /// Anything outside 1-9, including zero and negatives, yields `None`.
    #[instrument]
    pub fn from_number(number: i64) -> Option<Self> {
        if !(1..=9).contains(&number) {
            return None;
        }
        usize::try_from(number - 1).ok().and_then(Self::from_index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.number())
    }
}
