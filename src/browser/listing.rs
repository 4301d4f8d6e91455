use std::path::Path;

use walkdir::WalkDir;

use crate::config::BrowserSettings;

use super::model::{Entry, EntryKind};

fn is_audio_file(path: &Path, settings: &BrowserSettings) -> bool {
    let exts: Vec<String> = settings
        .extensions
        .iter()
        .map(|e| e.trim().trim_start_matches('.').to_ascii_lowercase())
        .filter(|e| !e.is_empty())
        .collect();

    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            exts.iter().any(|e| e == &ext)
        })
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// List the direct children of `dir` that the chooser should show.
///
/// Subdirectories come first, then audio files; both groups are sorted by
/// name, case-insensitively. Unreadable children are skipped; an unreadable
/// `dir` is an error.
pub fn list_dir(dir: &Path, settings: &BrowserSettings) -> Result<Vec<Entry>, walkdir::Error> {
    let mut entries: Vec<Entry> = Vec::new();

    let walker = WalkDir::new(dir)
        .follow_links(true)
        .min_depth(1)
        .max_depth(1);

    for item in walker {
        let entry = match item {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(e),
            Err(_) => continue,
        };

        let path = entry.path();
        if !settings.include_hidden && is_hidden(path) {
            continue;
        }

        let kind = if entry.file_type().is_dir() {
            EntryKind::Directory
        } else if entry.file_type().is_file() && is_audio_file(path, settings) {
            EntryKind::AudioFile
        } else {
            continue;
        };

        let name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        entries.push(Entry {
            path: path.to_path_buf(),
            name,
            kind,
        });
    }

    entries.sort_by(|a, b| {
        a.kind
            .cmp(&b.kind)
            .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
    });
    Ok(entries)
}
