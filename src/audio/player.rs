use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use crate::error::PlayerError;

use super::engine::AudioEngine;
use super::probe_duration;
use super::sink::create_sink_at;

/// `AudioEngine` backed by the default `rodio` output device.
///
/// Mixing runs on rodio's own output thread; this type is only touched from
/// the UI thread.
pub struct RodioEngine {
    stream: OutputStream,
    sink: Option<Sink>,
    current: Option<PathBuf>,
    // Position the current sink started at; `Sink::get_pos` counts from there.
    offset: Duration,
    volume: f32,
}

impl RodioEngine {
    /// Open the default output device.
    pub fn new() -> Result<Self, PlayerError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
        // but noisy for a TUI app.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            sink: None,
            current: None,
            offset: Duration::ZERO,
            volume: 1.0,
        })
    }

    fn drop_sink(&mut self) {
        if let Some(old) = self.sink.take() {
            old.stop();
        }
    }
}

impl AudioEngine for RodioEngine {
    fn load(&mut self, path: &Path) -> Result<(), PlayerError> {
        // Only one stream at a time, even if the caller never stopped the last one.
        self.drop_sink();
        self.current = None;

        let sink = create_sink_at(&self.stream, path, Duration::ZERO, self.volume)?;
        self.sink = Some(sink);
        self.current = Some(path.to_path_buf());
        self.offset = Duration::ZERO;
        debug!(path = %path.display(), "loaded");
        Ok(())
    }

    fn play(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn pause(&mut self) {
        if let Some(sink) = &self.sink {
            sink.pause();
        }
    }

    fn resume(&mut self) {
        if let Some(sink) = &self.sink {
            sink.play();
        }
    }

    fn stop(&mut self) {
        self.drop_sink();
        self.current = None;
        self.offset = Duration::ZERO;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
        if let Some(sink) = &self.sink {
            sink.set_volume(self.volume);
        }
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn is_playing(&self) -> bool {
        self.sink
            .as_ref()
            .map(|s| !s.is_paused() && !s.empty())
            .unwrap_or(false)
    }

    fn position(&self) -> Duration {
        self.sink
            .as_ref()
            .map(|s| self.offset + s.get_pos())
            .unwrap_or(Duration::ZERO)
    }

    fn set_position(&mut self, position: Duration) -> Result<(), PlayerError> {
        let Some(path) = self.current.clone() else {
            return Ok(());
        };
        let was_paused = self.sink.as_ref().map(Sink::is_paused).unwrap_or(true);

        // Scrubbing: rebuild the current sink and skip into the file.
        // This uses `Source::skip_duration` (works for common formats).
        self.drop_sink();
        let sink = create_sink_at(&self.stream, &path, position, self.volume)?;
        if !was_paused {
            sink.play();
        }
        self.sink = Some(sink);
        self.offset = position;
        debug!(path = %path.display(), position = ?position, "seeked");
        Ok(())
    }

    fn duration(&self, path: &Path) -> Result<Duration, PlayerError> {
        probe_duration(path)
    }
}
