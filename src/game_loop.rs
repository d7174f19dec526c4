//! The interactive game loop.
//!
//! Prompts the player to move, validates the typed cell, applies it, and
//! redraws until the game is won or drawn. Input and output are generic so
//! the loop runs the same against a terminal or in-memory buffers.

use crate::error::{GameError, InputError};
use crate::games::tictactoe::{Game, MoveError, Outcome};
use crate::input::parse_selection;
use crate::settings::Settings;
use crate::term::ansi::{ERROR_COLOR, INFO_COLOR, RESET, WINNER_COLOR};
use crate::term::{Screen, render_board};
use std::io::{BufRead, ErrorKind, Write};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// One game of tic-tac-toe between two players sharing a terminal.
pub struct GameLoop<R, W> {
    input: R,
    output: W,
    screen: Screen,
    end_pause: Duration,
    game: Game,
}

impl<R: BufRead, W: Write> GameLoop<R, W> {
    /// Creates a loop reading moves from `input` and drawing to `output`.
    pub fn new(input: R, output: W, settings: Settings) -> Self {
        let end_pause = *settings.end_pause();
        Self {
            input,
            output,
            screen: Screen::new(settings.clear().clone()),
            end_pause,
            game: Game::new(),
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Returns the output the game has been drawn to.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Plays until the game is won or drawn and returns the outcome.
    ///
    /// After the result line is printed the loop pauses for the configured
    /// time and clears the console once more.
    ///
    /// # Errors
    ///
    /// - [`GameError::InputClosed`] if input ends before a result.
    /// - [`GameError::Io`] if reading or writing fails.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome, GameError> {
        self.redraw()?;

        let outcome = loop {
            if let Some(outcome) = Outcome::from_status(self.game.status()) {
                break outcome;
            }
            self.turn()?;
        };

        info!(
            %outcome,
            winner = ?outcome.winner(),
            moves = self.game.moves_played(),
            "Game over"
        );
        write!(self.output, "{WINNER_COLOR}WINNER: {outcome}\n{RESET}")?;
        self.output.flush()?;

        std::thread::sleep(self.end_pause);
        self.screen.clear(&mut self.output)?;
        self.output.flush()?;
        Ok(outcome)
    }

    /// Prompts once and handles the reply.
    ///
    /// A rejected reply prints its error and leaves the game untouched, so
    /// the next prompt goes to the same player.
    fn turn(&mut self) -> Result<(), GameError> {
        let player = self.game.to_move();
        write!(
            self.output,
            "{INFO_COLOR}Enter integer to place {player} into: "
        )?;
        self.output.flush()?;

        let line = self.read_line();
        write!(self.output, "{RESET}")?;

        let position = match line? {
            None => return Err(GameError::InputClosed),
            Some(Err(err)) => return self.reject(err),
            Some(Ok(line)) => match parse_selection(&line) {
                Ok(position) => position,
                Err(err) => return self.reject(err),
            },
        };

        match self.game.play(position) {
            Ok(_) => self.redraw(),
            Err(MoveError::SquareOccupied(position)) => {
                self.reject(InputError::CellTaken(position))
            }
            Err(err @ MoveError::GameOver) => Err(err.into()),
        }
    }

    /// Reads one line. `None` means input has ended; undecodable bytes are
    /// reported as unreadable input rather than an I/O failure.
    fn read_line(&mut self) -> Result<Option<Result<String, InputError>>, GameError> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => Ok(None),
            Ok(_) => Ok(Some(Ok(line))),
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                Ok(Some(Err(InputError::Unreadable(err.to_string()))))
            }
            Err(err) => Err(err.into()),
        }
    }

    fn reject(&mut self, err: InputError) -> Result<(), GameError> {
        debug!(?err, player = %self.game.to_move(), "Input rejected");
        write!(self.output, "{ERROR_COLOR}{err}\n{RESET}")?;
        Ok(())
    }

    fn redraw(&mut self) -> Result<(), GameError> {
        self.screen.clear(&mut self.output)?;
        let highlight = self.game.status().winning_line();
        render_board(&mut self.output, self.game.board(), highlight.as_ref())?;
        Ok(())
    }
}

impl<R, W> std::fmt::Debug for GameLoop<R, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameLoop")
            .field("screen", &self.screen)
            .field("end_pause", &self.end_pause)
            .field("game", &self.game)
            .finish_non_exhaustive()
    }
}
