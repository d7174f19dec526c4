//! Screen clearing.
//!
//! Each supported operating system has one shell command that clears the
//! console. The action is resolved once at startup and handed to [`Screen`].

use super::ansi::{ERROR_COLOR, RESET};
use std::io::Write;
use std::process::Command;
use tracing::{debug, instrument, warn};

/// How the console gets cleared before each render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClearAction {
    /// Run an external command that clears the console.
    Command {
        /// Program to execute.
        program: &'static str,
        /// Arguments passed to the program.
        args: &'static [&'static str],
    },
    /// The platform has no known clear command; boards stack up instead.
    Unsupported,
    /// Clearing was switched off by the user.
    Disabled,
}

impl ClearAction {
    /// Resolves the clear action for an operating system name as reported
    /// by [`std::env::consts::OS`].
    #[instrument]
    pub fn for_os(os: &str) -> Self {
        match os {
            "linux" | "macos" => ClearAction::Command {
                program: "clear",
                args: &[],
            },
            "windows" => ClearAction::Command {
                program: "cmd",
                args: &["/c", "cls"],
            },
            _ => ClearAction::Unsupported,
        }
    }

    /// Resolves the clear action for the platform this binary runs on.
    pub fn for_current_os() -> Self {
        Self::for_os(std::env::consts::OS)
    }
}

/// The console the game draws on.
#[derive(Debug)]
pub struct Screen {
    action: ClearAction,
    notice_shown: bool,
}

impl Screen {
    /// Creates a screen that clears with `action`.
    pub fn new(action: ClearAction) -> Self {
        Self {
            action,
            notice_shown: false,
        }
    }

    /// Clears the console.
    ///
    /// Pending output is flushed first so the command cannot overtake it.
    /// On an unsupported platform a notice is written to `out` the first
    /// time only; later calls do nothing. A failing clear command is logged
    /// and otherwise ignored.
    #[instrument(skip_all, fields(action = ?self.action))]
    pub fn clear<W: Write>(&mut self, out: &mut W) -> std::io::Result<()> {
        out.flush()?;
        match &self.action {
            ClearAction::Command { program, args } => {
                match Command::new(program).args(*args).status() {
                    Ok(status) if status.success() => debug!("Console cleared"),
                    Ok(status) => warn!(%status, program, "Clear command exited unsuccessfully"),
                    Err(error) => warn!(%error, program, "Failed to run clear command"),
                }
            }
            ClearAction::Unsupported => {
                if !self.notice_shown {
                    write!(
                        out,
                        "{ERROR_COLOR}ERROR: clear console for platform not implemented.\nContinuing without it...\n{RESET}"
                    )?;
                    self.notice_shown = true;
                }
            }
            ClearAction::Disabled => {}
        }
        Ok(())
    }
}
