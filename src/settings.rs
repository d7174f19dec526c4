//! Runtime settings, resolved once at startup and passed to the game loop.

use crate::term::ClearAction;
use derive_getters::Getters;
use std::time::Duration;

/// How long the result stays on screen before the final clear.
pub const DEFAULT_END_PAUSE: Duration = Duration::from_secs(4);

/// Settings for one run of the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, derive_new::new)]
pub struct Settings {
    /// How the console is cleared before each render.
    clear: ClearAction,
    /// Pause between printing the result and exiting.
    end_pause: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(ClearAction::for_current_os(), DEFAULT_END_PAUSE)
    }
}
