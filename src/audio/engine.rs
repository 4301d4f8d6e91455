use std::path::Path;
use std::time::Duration;

use crate::error::PlayerError;

/// One-stream-at-a-time playback primitives.
///
/// All calls happen on the UI thread. Implementations keep a single active
/// stream: `load` replaces whatever was loaded before.
pub trait AudioEngine {
    /// Prepare `path` for playback at position zero, paused.
    fn load(&mut self, path: &Path) -> Result<(), PlayerError>;
    /// Start the loaded stream.
    fn play(&mut self);
    /// Pause the active stream. No-op when nothing is playing.
    fn pause(&mut self);
    /// Continue a paused stream from where it stopped.
    fn resume(&mut self);
    /// Stop and discard the active stream.
    fn stop(&mut self);
    /// Set the output volume, `0.0..=1.0`. Persists across `load` calls.
    fn set_volume(&mut self, volume: f32);
    fn volume(&self) -> f32;
    /// True while a stream is audible: loaded, not paused, not finished.
    fn is_playing(&self) -> bool;
    /// Playback position of the active stream.
    fn position(&self) -> Duration;
    /// Move the active stream to `position`, keeping its paused state.
    fn set_position(&mut self, position: Duration) -> Result<(), PlayerError>;
    /// Total length of the audio file at `path`.
    fn duration(&self, path: &Path) -> Result<Duration, PlayerError>;
}
