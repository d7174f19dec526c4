//! Tic-tac-toe: board model, move engine, and rules.

mod action;
mod game;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::Game;
pub use outcome::Outcome;
pub use position::Position;
pub use rules::{GameStatus, LINES, Line, Win, check_winner, evaluate, is_full};
pub use types::{Board, Player, Square};
