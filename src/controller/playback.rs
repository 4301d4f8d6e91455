use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::audio::AudioEngine;
use crate::error::PlayerError;

use super::model::{PlaybackState, PlaybackStatus};
use super::timer::RefreshTimer;
use super::view::{PlayerView, format_mmss, format_optional_mmss};

/// Translates UI events into audio engine calls and keeps the view in sync.
pub struct PlaybackController<E: AudioEngine> {
    engine: E,
    state: PlaybackState,
    timer: RefreshTimer,
    view: PlayerView,
}

impl<E: AudioEngine> PlaybackController<E> {
    /// Create a stopped controller with nothing selected.
    ///
    /// `initial_volume` is a slider position in `0..=100` and is applied to
    /// the engine right away.
    pub fn new(engine: E, refresh_interval: Duration, initial_volume: f32) -> Self {
        let mut controller = Self {
            engine,
            state: PlaybackState::default(),
            timer: RefreshTimer::new(refresh_interval),
            view: PlayerView::new(0.0),
        };
        controller.set_volume(initial_volume);
        controller
    }

    pub fn status(&self) -> PlaybackStatus {
        self.state.status
    }

    pub fn view(&self) -> &PlayerView {
        &self.view
    }

    /// True while the refresh timer is scheduled.
    pub fn is_refreshing(&self) -> bool {
        self.timer.is_active()
    }

    /// Handle a change of the file chooser's selection.
    ///
    /// Only the first entry counts; an empty selection clears it. Playback is
    /// left alone: a stream that is already running keeps playing the old file
    /// until the next `play`.
    pub fn on_file_selected(&mut self, selection: &[PathBuf]) {
        let selected = selection.first().cloned();

        if self.state.status != PlaybackStatus::Stopped && selected != self.state.selected_file {
            debug!("selection changed while a stream is active; it keeps playing");
        }

        self.state.duration = match &selected {
            Some(path) => match self.engine.duration(path) {
                Ok(d) => Some(d),
                Err(e) => {
                    warn!(error = %e, "cannot read duration");
                    None
                }
            },
            None => None,
        };

        self.view.show_selection(selected.as_deref());
        self.view.duration_label = format_optional_mmss(self.state.duration);
        self.state.selected_file = selected;
    }

    /// Load the selected file and play it from the start.
    ///
    /// Does nothing when no file is selected. On an engine error neither the
    /// status nor the timer change.
    pub fn play(&mut self) -> Result<(), PlayerError> {
        let Some(path) = self.state.selected_file.clone() else {
            debug!("play ignored: no file selected");
            return Ok(());
        };

        self.engine.load(&path)?;
        self.engine.play();

        match self.engine.duration(&path) {
            Ok(d) => self.view.seek.set_max(d.as_secs_f64()),
            Err(e) => debug!(error = %e, "keeping previous seek range"),
        }
        self.view.seek.set_value(0.0);
        self.view.time_label = format_mmss(Duration::ZERO);

        self.state.status = PlaybackStatus::Playing;
        if self.timer.start(Instant::now()) {
            debug!(interval = ?self.timer.interval(), "refresh timer started");
        }
        info!(path = %path.display(), "playing");
        Ok(())
    }

    pub fn pause(&mut self) {
        self.engine.pause();
        if self.state.status == PlaybackStatus::Playing {
            self.state.status = PlaybackStatus::Paused;
            debug!("paused");
        }
    }

    /// Continue a paused stream. No-op in any other state.
    pub fn resume(&mut self) {
        if self.state.status != PlaybackStatus::Paused {
            return;
        }
        self.engine.resume();
        self.state.status = PlaybackStatus::Playing;
        // A tick during the pause saw "not playing" and cancelled the timer.
        if self.timer.start(Instant::now()) {
            debug!("refresh timer restarted");
        }
    }

    /// Space-bar semantics: pause, resume or start depending on the status.
    pub fn toggle_pause(&mut self) -> Result<(), PlayerError> {
        match self.state.status {
            PlaybackStatus::Playing => self.pause(),
            PlaybackStatus::Paused => self.resume(),
            PlaybackStatus::Stopped => self.play()?,
        }
        Ok(())
    }

    pub fn stop(&mut self) {
        self.engine.stop();
        self.timer.cancel();
        let _ = self.view.seek.release();
        self.view.seek.set_value(0.0);
        self.view.time_label = format_mmss(Duration::ZERO);
        if self.state.status != PlaybackStatus::Stopped {
            debug!("stopped");
        }
        self.state.status = PlaybackStatus::Stopped;
    }

    /// Apply a volume slider position in `0..=100`.
    pub fn set_volume(&mut self, volume: f32) {
        let volume = if volume.is_nan() {
            0.0
        } else {
            volume.clamp(0.0, 100.0)
        };
        self.view.volume = volume;
        self.engine.set_volume(volume / 100.0);
    }

    /// Move playback to `position` seconds, clamped to the seek range.
    ///
    /// While stopped only the handle moves: the engine is not touched and the
    /// time label keeps showing the reset position.
    pub fn seek(&mut self, position: f64) -> Result<(), PlayerError> {
        if !position.is_finite() {
            return Ok(());
        }
        let position = position.clamp(0.0, self.view.seek.max());
        self.view.seek.set_value(position);

        if self.state.status == PlaybackStatus::Stopped {
            debug!("seek ignored: nothing playing");
            return Ok(());
        }

        let target = Duration::from_secs_f64(position);
        self.engine.set_position(target)?;
        self.view.time_label = format_mmss(target);
        Ok(())
    }

    /// Move the seek handle without touching playback.
    pub fn begin_seek_drag(&mut self, position: f64) {
        self.view.seek.drag_to(position);
    }

    /// Move the seek handle by `delta` seconds without touching playback.
    pub fn nudge_seek(&mut self, delta: f64) {
        let target = self.view.seek.value() + delta;
        self.view.seek.drag_to(target);
    }

    /// Finish a seek drag: seek to wherever the handle was released.
    pub fn release_seek(&mut self) -> Result<(), PlayerError> {
        match self.view.seek.release() {
            Some(position) => self.seek(position),
            None => Ok(()),
        }
    }

    /// Poll the refresh timer. True at most once per interval while running.
    pub fn refresh_due(&mut self, now: Instant) -> bool {
        self.timer.poll(now)
    }

    /// Sync the time label and seek handle with the engine, or stop
    /// refreshing once nothing is audible.
    pub fn on_timer_tick(&mut self) {
        if !self.engine.is_playing() {
            if self.timer.is_active() {
                debug!("nothing playing; refresh timer cancelled");
            }
            self.timer.cancel();
            if self.state.status == PlaybackStatus::Playing {
                self.state.status = PlaybackStatus::Stopped;
                info!("playback finished");
            }
            return;
        }

        let position = self.engine.position();
        self.view.time_label = format_mmss(position);
        if !self.view.seek.is_dragging() {
            self.view.seek.set_value(position.as_secs_f64());
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &PlaybackState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn engine(&self) -> &E {
        &self.engine
    }

    #[cfg(test)]
    pub(crate) fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }
}
