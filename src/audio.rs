//! Audio engine: the playback capability the controller drives.
//!
//! `AudioEngine` is the seam between playback control and the actual mixer.
//! `RodioEngine` implements it on top of a `rodio` output stream; durations
//! are probed from file headers with `lofty`.

mod engine;
mod player;
mod probe;
mod sink;

pub use engine::AudioEngine;
pub use player::RodioEngine;
pub use probe::probe_duration;

#[cfg(test)]
pub(crate) mod mock;
