use std::path::Path;
use std::time::Duration;

/// Placeholder shown when no duration is known.
pub const UNKNOWN_TIME: &str = "--:--";
pub const NO_FILE_SELECTED: &str = "No file selected";

/// Upper bound of the seek slider before anything has been played.
pub const DEFAULT_SEEK_MAX: f64 = 100.0;

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Format an optional duration, falling back to `--:--`.
pub fn format_optional_mmss(d: Option<Duration>) -> String {
    d.map(format_mmss).unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

/// A horizontal value slider in `[0, max]`.
///
/// While `dragging` the value follows the user; the owner decides what a
/// release means.
#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    value: f64,
    max: f64,
    dragging: bool,
}

impl Slider {
    pub fn new(value: f64, max: f64) -> Self {
        let max = max.max(0.0);
        Self {
            value: value.clamp(0.0, max),
            max,
            dragging: false,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Fraction of the range covered by the handle, `0.0..=1.0`.
    pub fn ratio(&self) -> f64 {
        if self.max <= 0.0 {
            0.0
        } else {
            (self.value / self.max).clamp(0.0, 1.0)
        }
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value.clamp(0.0, self.max);
    }

    /// Change the range; the value is pulled inside it.
    pub fn set_max(&mut self, max: f64) {
        self.max = max.max(0.0);
        self.value = self.value.clamp(0.0, self.max);
    }

    pub fn drag_to(&mut self, value: f64) {
        self.dragging = true;
        self.set_value(value);
    }

    /// End a drag. Returns the released value, or `None` if no drag was active.
    pub fn release(&mut self) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        self.dragging = false;
        Some(self.value)
    }
}

/// Everything the UI shows about playback.
#[derive(Debug, Clone)]
pub struct PlayerView {
    pub selected_file_label: String,
    pub time_label: String,
    pub duration_label: String,
    pub seek: Slider,
    /// Volume slider position, `0.0..=100.0`.
    pub volume: f32,
}

impl PlayerView {
    pub fn new(volume: f32) -> Self {
        Self {
            selected_file_label: NO_FILE_SELECTED.to_string(),
            time_label: format_mmss(Duration::ZERO),
            duration_label: UNKNOWN_TIME.to_string(),
            seek: Slider::new(0.0, DEFAULT_SEEK_MAX),
            volume,
        }
    }

    pub(super) fn show_selection(&mut self, path: Option<&Path>) {
        self.selected_file_label = match path {
            Some(p) => p.display().to_string(),
            None => NO_FILE_SELECTED.to_string(),
        };
    }
}
