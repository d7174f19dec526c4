//! Strictly Console - two-player tic-tac-toe in the terminal
//!
//! Players take turns typing a cell number (1-9). The board is redrawn in
//! ANSI colors after every move, and the winning line is highlighted.
//!
//! # Architecture
//!
//! - **Games**: board model, move engine, and win/draw rules
//! - **Term**: ANSI palette, board frame, and per-platform screen clearing
//! - **Game loop**: prompt, validate, apply, redraw, until a result
//!
//! # Example
//!
//! ```no_run
//! use strictly_console::{GameLoop, Settings};
//!
//! # fn example() -> anyhow::Result<()> {
//! let stdin = std::io::stdin();
//! let mut game = GameLoop::new(stdin.lock(), std::io::stdout(), Settings::default());
//! let outcome = game.run()?;
//! println!("{outcome}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod error;
mod game_loop;
pub mod games;
mod input;
mod settings;
pub mod term;

// Crate-level exports - Command line
pub use cli::Cli;

// Crate-level exports - Errors
pub use error::{GameError, InputError};

// Crate-level exports - Game loop
pub use game_loop::GameLoop;
pub use input::parse_selection;
pub use settings::{DEFAULT_END_PAUSE, Settings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Game, GameStatus, LINES, Line, Move, MoveError, Outcome, Player, Position, Square,
    Win, check_winner, evaluate, is_full,
};
