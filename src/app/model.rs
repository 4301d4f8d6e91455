//! Application model: `App`.

use std::time::{Duration, Instant};

use tracing::warn;

use crate::audio::AudioEngine;
use crate::browser::{Activation, FileBrowser};
use crate::controller::PlaybackController;
use crate::error::PlayerError;

/// The main application model.
pub struct App<E: AudioEngine> {
    pub browser: FileBrowser,
    pub controller: PlaybackController<E>,
    /// Last playback error, shown in the status box until the next success.
    pub status_message: Option<String>,
    last_seek_nudge: Option<Instant>,
    mouse_seek: bool,
}

impl<E: AudioEngine> App<E> {
    pub fn new(browser: FileBrowser, controller: PlaybackController<E>) -> Self {
        Self {
            browser,
            controller,
            status_message: None,
            last_seek_nudge: None,
            mouse_seek: false,
        }
    }

    /// Open the directory or select the file under the cursor.
    pub fn activate_entry(&mut self) {
        if self.browser.activate() == Activation::Selected {
            self.sync_selection();
        }
    }

    /// Move the cursor to `index` and activate it (mouse click on a row).
    pub fn click_entry(&mut self, index: usize) {
        if self.browser.select_at(index) {
            self.activate_entry();
        }
    }

    pub fn clear_selection(&mut self) {
        if self.browser.clear_selection() {
            self.sync_selection();
        }
    }

    fn sync_selection(&mut self) {
        self.controller.on_file_selected(self.browser.selection());
    }

    pub fn play(&mut self) {
        let result = self.controller.play();
        self.report(result);
    }

    pub fn pause(&mut self) {
        self.controller.pause();
    }

    pub fn stop(&mut self) {
        self.last_seek_nudge = None;
        self.mouse_seek = false;
        self.controller.stop();
    }

    pub fn toggle_pause(&mut self) {
        let result = self.controller.toggle_pause();
        self.report(result);
    }

    /// Move the volume slider by `delta` points.
    pub fn change_volume(&mut self, delta: f32) {
        let volume = self.controller.view().volume + delta;
        self.controller.set_volume(volume);
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.controller.set_volume(volume);
    }

    /// Keyboard scrub: move the seek handle; playback follows on release.
    pub fn nudge_seek(&mut self, delta_secs: f64, now: Instant) {
        self.controller.nudge_seek(delta_secs);
        self.last_seek_nudge = Some(now);
    }

    /// Mouse drag on the seek bar.
    pub fn drag_seek(&mut self, position: f64) {
        self.mouse_seek = true;
        self.controller.begin_seek_drag(position);
    }

    /// True while the mouse holds the seek handle. A pending keyboard scrub
    /// does not count.
    pub fn is_mouse_seeking(&self) -> bool {
        self.mouse_seek
    }

    /// Let go of the seek handle and seek to where it was left.
    pub fn release_seek(&mut self) {
        self.last_seek_nudge = None;
        self.mouse_seek = false;
        let result = self.controller.release_seek();
        self.report(result);
    }

    /// Keyboard scrubbing has no release event: treat `idle` without a
    /// nudge as letting go of the handle.
    pub fn release_idle_seek(&mut self, now: Instant, idle: Duration) {
        if let Some(last) = self.last_seek_nudge {
            if now.saturating_duration_since(last) >= idle {
                self.release_seek();
            }
        }
    }

    /// Run the refresh timer callback if it is due.
    pub fn tick(&mut self, now: Instant) {
        if self.controller.refresh_due(now) {
            self.controller.on_timer_tick();
        }
    }

    fn report(&mut self, result: Result<(), PlayerError>) {
        match result {
            Ok(()) => self.status_message = None,
            Err(e) => {
                warn!(path = ?e.path(), error = %e, "playback failed");
                self.status_message = Some(e.to_string());
            }
        }
    }
}
