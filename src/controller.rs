//! Playback control: turns UI events into audio engine calls.
//!
//! `PlaybackController` owns the selected file, the refresh timer and the
//! view values the UI renders. It is generic over the audio engine so the
//! UI layer and the mixer can both be swapped for test doubles.

mod model;
mod playback;
mod timer;
mod view;

pub use model::*;
pub use playback::PlaybackController;
pub use view::*;
