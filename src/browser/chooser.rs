use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::BrowserSettings;

use super::listing::list_dir;
use super::model::Entry;

/// Outcome of activating the entry under the cursor.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Activation {
    /// A directory was opened.
    Opened,
    /// The selection changed to the audio file under the cursor.
    Selected,
    /// Empty listing; nothing happened.
    Nothing,
}

/// Directory-at-a-time file chooser state.
pub struct FileBrowser {
    dir: PathBuf,
    entries: Vec<Entry>,
    cursor: usize,
    selection: Vec<PathBuf>,
    settings: BrowserSettings,
}

impl FileBrowser {
    /// Create a browser showing `dir`.
    pub fn new(dir: impl Into<PathBuf>, settings: BrowserSettings) -> Self {
        let mut browser = Self {
            dir: PathBuf::new(),
            entries: Vec::new(),
            cursor: 0,
            selection: Vec::new(),
            settings,
        };
        browser.open(dir);
        browser
    }

    /// Show the contents of `dir` with the cursor on the first entry.
    ///
    /// The selection survives directory changes.
    pub fn open(&mut self, dir: impl Into<PathBuf>) {
        let dir = dir.into();
        let dir = dir.canonicalize().unwrap_or(dir);

        self.entries = match list_dir(&dir, &self.settings) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), error = %e, "cannot list directory");
                Vec::new()
            }
        };
        debug!(dir = %dir.display(), entries = self.entries.len(), "opened");
        self.dir = dir;
        self.cursor = 0;
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    pub fn selection(&self) -> &[PathBuf] {
        &self.selection
    }

    pub fn is_selected(&self, entry: &Entry) -> bool {
        self.selection.iter().any(|p| p == &entry.path)
    }

    pub fn include_hidden(&self) -> bool {
        self.settings.include_hidden
    }

    /// Move the cursor down, wrapping to the first entry.
    pub fn next(&mut self) {
        if !self.entries.is_empty() {
            self.cursor = (self.cursor + 1) % self.entries.len();
        }
    }

    /// Move the cursor up, wrapping to the last entry.
    pub fn prev(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.cursor = match self.cursor {
            0 => self.entries.len() - 1,
            c => c - 1,
        };
    }

    pub fn first(&mut self) {
        self.cursor = 0;
    }

    pub fn last(&mut self) {
        self.cursor = self.entries.len().saturating_sub(1);
    }

    /// Put the cursor on `index`. Returns false if out of range.
    pub fn select_at(&mut self, index: usize) -> bool {
        if index < self.entries.len() {
            self.cursor = index;
            true
        } else {
            false
        }
    }

    /// Open the directory under the cursor, or select the file under it.
    pub fn activate(&mut self) -> Activation {
        let Some(entry) = self.current().cloned() else {
            return Activation::Nothing;
        };

        if entry.is_dir() {
            self.open(entry.path);
            Activation::Opened
        } else {
            self.selection = vec![entry.path];
            Activation::Selected
        }
    }

    /// Go up one directory, keeping the cursor on the directory we left.
    pub fn parent(&mut self) -> bool {
        let Some(parent) = self.dir.parent().map(Path::to_path_buf) else {
            return false;
        };
        let left = self.dir.clone();
        self.open(parent);
        if let Some(pos) = self.entries.iter().position(|e| e.path == left) {
            self.cursor = pos;
        }
        true
    }

    /// Forget the selection. Returns true if there was one.
    pub fn clear_selection(&mut self) -> bool {
        let had = !self.selection.is_empty();
        self.selection.clear();
        had
    }

    /// Show or hide dotfiles and re-list, keeping the cursor on the same path.
    pub fn toggle_hidden(&mut self) {
        self.settings.include_hidden = !self.settings.include_hidden;
        let keep = self.current().map(|e| e.path.clone());
        let dir = self.dir.clone();
        self.open(dir);
        if let Some(keep) = keep {
            if let Some(pos) = self.entries.iter().position(|e| e.path == keep) {
                self.cursor = pos;
            }
        }
    }
}
