//! In-memory `AudioEngine` for tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::PlayerError;

use super::engine::AudioEngine;

/// Records what the controller asked for; reports durations from a table.
#[derive(Default)]
pub(crate) struct MockEngine {
    pub(crate) durations: HashMap<PathBuf, Duration>,
    pub(crate) loaded: Option<PathBuf>,
    pub(crate) started: bool,
    pub(crate) paused: bool,
    pub(crate) volume: f32,
    pub(crate) position: Duration,
    pub(crate) load_calls: usize,
    pub(crate) fail_load: bool,
}

impl MockEngine {
    pub(crate) fn with_file(path: &str, secs: u64) -> Self {
        let mut e = Self::default();
        e.durations.insert(PathBuf::from(path), Duration::from_secs(secs));
        e
    }

    pub(crate) fn finish(&mut self) {
        self.started = false;
    }
}

impl AudioEngine for MockEngine {
    fn load(&mut self, path: &Path) -> Result<(), PlayerError> {
        self.load_calls += 1;
        if self.fail_load {
            return Err(PlayerError::Probe {
                path: path.to_path_buf(),
                reason: "unsupported codec".into(),
            });
        }
        self.loaded = Some(path.to_path_buf());
        self.started = false;
        self.paused = false;
        self.position = Duration::ZERO;
        Ok(())
    }

    fn play(&mut self) {
        if self.loaded.is_some() {
            self.started = true;
        }
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn resume(&mut self) {
        self.paused = false;
    }

    fn stop(&mut self) {
        self.loaded = None;
        self.started = false;
        self.paused = false;
        self.position = Duration::ZERO;
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume.clamp(0.0, 1.0);
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn is_playing(&self) -> bool {
        self.started && !self.paused
    }

    fn position(&self) -> Duration {
        self.position
    }

    fn set_position(&mut self, position: Duration) -> Result<(), PlayerError> {
        self.position = position;
        Ok(())
    }

    fn duration(&self, path: &Path) -> Result<Duration, PlayerError> {
        self.durations
            .get(path)
            .copied()
            .ok_or_else(|| PlayerError::Probe {
                path: path.to_path_buf(),
                reason: "not audio".into(),
            })
    }
}
