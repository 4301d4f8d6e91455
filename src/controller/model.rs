use std::path::PathBuf;
use std::time::Duration;

/// Transport state of the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackStatus {
    Stopped,
    Playing,
    Paused,
}

impl Default for PlaybackStatus {
    fn default() -> Self {
        Self::Stopped
    }
}

/// What the controller knows about the current selection.
#[derive(Clone, Debug, Default)]
pub struct PlaybackState {
    pub selected_file: Option<PathBuf>,
    /// Length of `selected_file`, when the engine could read it.
    pub duration: Option<Duration>,
    pub status: PlaybackStatus,
}
