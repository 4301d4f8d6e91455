//! File chooser: one directory at a time, audio files and subdirectories.
//!
//! `FileBrowser` keeps the listed directory, a cursor and the current
//! selection. The playback controller only ever sees the selection.

mod chooser;
mod listing;
mod model;

pub use chooser::{Activation, FileBrowser};
pub use model::*;

#[cfg(test)]
mod tests;
