//! Command-line interface for the tic-tac-toe binary.

use crate::settings::Settings;
use crate::term::ClearAction;
use clap::Parser;
use std::time::Duration;
use tracing::instrument;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seconds to keep the result on screen before exiting
    #[arg(long, default_value_t = 4)]
    pub pause_secs: u64,

    /// Never clear the console between moves
    #[arg(long)]
    pub no_clear: bool,
}

impl Cli {
    /// Resolves the settings for this run.
    #[instrument]
    pub fn settings(&self) -> Settings {
        let clear = if self.no_clear {
            ClearAction::Disabled
        } else {
            ClearAction::for_current_os()
        };
        Settings::new(clear, Duration::from_secs(self.pause_secs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::DEFAULT_END_PAUSE;

    #[test]
    fn test_defaults_match_plain_run() {
        let cli = Cli::parse_from(["tictactoe"]);
        assert_eq!(cli.settings(), Settings::default());
        assert_eq!(*cli.settings().end_pause(), DEFAULT_END_PAUSE);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["tictactoe", "--pause-secs", "0", "--no-clear"]);
        let settings = cli.settings();
        assert_eq!(*settings.end_pause(), Duration::ZERO);
        assert_eq!(settings.clear(), &ClearAction::Disabled);
    }
}
