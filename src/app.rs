//! Application module: the UI-side model the runtime drives and `ui` draws.
//!
//! `App` pairs the file chooser with the playback controller and keeps the
//! bits of interaction state that belong to neither (status line, pending
//! keyboard seek release).

mod model;

pub use model::*;
