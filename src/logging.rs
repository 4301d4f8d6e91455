//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so log lines go to a file instead of
//! stderr.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LogSettings, default_log_path};

/// Where logs for `settings` end up, if anywhere.
pub fn log_path(settings: &LogSettings) -> Option<PathBuf> {
    settings.file.clone().or_else(default_log_path)
}

/// Install the global subscriber. Returns the log file path on success.
///
/// Failing to open the log file is not fatal; the player runs without logs.
pub fn init(settings: &LogSettings) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let path = log_path(settings).ok_or("no log directory (HOME unset)")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let log_file = OpenOptions::new().create(true).append(true).open(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| e as Box<dyn std::error::Error>)?;

    Ok(path)
}
