use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::{Decoder, Source};
use tracing::debug;

use crate::error::PlayerError;

/// Read the total length of the audio file at `path`.
///
/// Container headers are tried first (cheap, no decoding). Formats whose
/// headers carry no length fall back to the decoder's own estimate.
pub fn probe_duration(path: &Path) -> Result<Duration, PlayerError> {
    match lofty::read_from_path(path) {
        Ok(tagged) => {
            let duration = tagged.properties().duration();
            if !duration.is_zero() {
                return Ok(duration);
            }
        }
        Err(e) => debug!(path = %path.display(), error = %e, "no usable header"),
    }

    let file = File::open(path).map_err(|source| PlayerError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|e| PlayerError::Probe {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    decoder.total_duration().ok_or_else(|| PlayerError::Probe {
        path: path.to_path_buf(),
        reason: "length unknown".to_string(),
    })
}
