use std::path::PathBuf;

use serde::Deserialize;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/melody/config.toml` or `~/.config/melody/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `MELODY__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub controls: ControlsSettings,
    pub browser: BrowserSettings,
    pub ui: UiSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume slider position at start-up, 0-100.
    pub initial_volume: u8,
    /// How often the elapsed-time label is refreshed while playing (milliseconds).
    pub refresh_interval_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            initial_volume: 70,
            refresh_interval_ms: 1000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Volume change per `+` / `-` press.
    pub volume_step: u8,
    /// Number of seconds the seek handle moves per `H` / `L` press.
    pub seek_step_seconds: u64,
    /// Idle time after the last `H` / `L` press that counts as releasing
    /// the seek handle (milliseconds).
    pub seek_release_ms: u64,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            volume_step: 5,
            seek_step_seconds: 5,
            seek_release_ms: 400,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BrowserSettings {
    /// File extensions to treat as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Whether to list hidden files/directories (dotfiles).
    pub include_hidden: bool,
    /// Directory shown at start-up when none is given on the command line.
    pub start_dir: Option<PathBuf>,
}

impl Default for BrowserSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "flac".into(), "wav".into(), "ogg".into()],
            include_hidden: false,
            start_dir: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ melody ~ ".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Log file; defaults to `$XDG_STATE_HOME/melody/melody.log`.
    pub file: Option<PathBuf>,
    /// `tracing` filter directive, e.g. `info` or `melody=debug`.
    /// `RUST_LOG` wins when set.
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            filter: "info".to_string(),
        }
    }
}
