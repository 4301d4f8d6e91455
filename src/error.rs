//! Error types surfaced by the audio engine.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by an [`AudioEngine`](crate::audio::AudioEngine).
#[derive(Debug, Error)]
pub enum PlayerError {
    #[error("cannot open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },

    #[error("no audio output device: {0}")]
    Stream(#[from] rodio::StreamError),

    #[error("cannot read duration of {path}: {reason}")]
    Probe { path: PathBuf, reason: String },
}

impl PlayerError {
    /// Path of the file involved, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            PlayerError::Open { path, .. }
            | PlayerError::Decode { path, .. }
            | PlayerError::Probe { path, .. } => Some(path),
            PlayerError::Stream(_) => None,
        }
    }
}
