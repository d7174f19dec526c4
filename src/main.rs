//! Strictly Console - terminal tic-tac-toe for two players.

use anyhow::Result;
use clap::Parser;
use strictly_console::{Cli, GameLoop};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr so they never land inside the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = cli.settings();
    info!(?settings, "Starting tic-tac-toe");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let outcome = GameLoop::new(stdin.lock(), stdout.lock(), settings).run()?;

    info!(%outcome, "Exiting");
    Ok(())
}
