use super::listing::list_dir;
use super::*;
use crate::config::BrowserSettings;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn names(entries: &[Entry]) -> Vec<&str> {
    entries.iter().map(|e| e.name.as_str()).collect()
}

fn fixture(root: &Path) {
    fs::write(root.join("b.MP3"), b"not a real mp3").unwrap();
    fs::write(root.join("A.ogg"), b"not a real ogg").unwrap();
    fs::write(root.join("c.txt"), b"ignore me").unwrap();
    fs::write(root.join(".hidden.wav"), b"shh").unwrap();
    fs::create_dir(root.join("Zeta")).unwrap();
    fs::create_dir(root.join("alpha")).unwrap();
    fs::create_dir(root.join(".cache")).unwrap();
    fs::write(root.join("alpha").join("inner.flac"), b"x").unwrap();
}

#[test]
fn list_dir_puts_directories_first_and_filters_non_audio() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let entries = list_dir(dir.path(), &BrowserSettings::default()).unwrap();
    assert_eq!(names(&entries), vec!["alpha", "Zeta", "A.ogg", "b.MP3"]);
    assert!(entries[0].is_dir());
    assert_eq!(entries[2].kind, EntryKind::AudioFile);
}

#[test]
fn list_dir_can_include_hidden_entries() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let settings = BrowserSettings {
        include_hidden: true,
        ..BrowserSettings::default()
    };
    let entries = list_dir(dir.path(), &settings).unwrap();
    assert_eq!(
        names(&entries),
        vec![".cache", "alpha", "Zeta", ".hidden.wav", "A.ogg", "b.MP3"]
    );
}

#[test]
fn list_dir_respects_configured_extensions() {
    let dir = tempdir().unwrap();
    fixture(dir.path());

    let settings = BrowserSettings {
        extensions: vec![".OGG".into(), " ".into()],
        ..BrowserSettings::default()
    };
    let entries = list_dir(dir.path(), &settings).unwrap();
    assert_eq!(names(&entries), vec!["alpha", "Zeta", "A.ogg"]);
}

#[test]
fn list_dir_fails_for_missing_directory() {
    let dir = tempdir().unwrap();
    assert!(list_dir(&dir.path().join("nope"), &BrowserSettings::default()).is_err());
}

#[test]
fn activate_opens_directories_and_selects_files() {
    let dir = tempdir().unwrap();
    fixture(dir.path());
    let mut b = FileBrowser::new(dir.path(), BrowserSettings::default());

    // cursor on "alpha"
    assert_eq!(b.activate(), Activation::Opened);
    assert_eq!(names(b.entries()), vec!["inner.flac"]);
    assert!(b.selection().is_empty());

    assert_eq!(b.activate(), Activation::Selected);
    assert_eq!(b.selection().len(), 1);
    assert!(b.selection()[0].ends_with("alpha/inner.flac"));
    let selected = b.current().cloned().unwrap();
    assert!(b.is_selected(&selected));
}

#[test]
fn parent_returns_cursor_to_the_directory_left() {
    let dir = tempdir().unwrap();
    fixture(dir.path());
    let mut b = FileBrowser::new(dir.path(), BrowserSettings::default());

    b.next(); // Zeta
    assert_eq!(b.activate(), Activation::Opened);
    assert!(b.entries().is_empty());
    assert_eq!(b.activate(), Activation::Nothing);

    assert!(b.parent());
    assert_eq!(b.current().unwrap().name, "Zeta");
}

#[test]
fn cursor_wraps_in_both_directions() {
    let dir = tempdir().unwrap();
    fixture(dir.path());
    let mut b = FileBrowser::new(dir.path(), BrowserSettings::default());

    b.prev();
    assert_eq!(b.cursor(), 3);
    b.next();
    assert_eq!(b.cursor(), 0);
    b.last();
    assert_eq!(b.current().unwrap().name, "b.MP3");
    b.first();
    assert_eq!(b.cursor(), 0);
    assert!(b.select_at(2));
    assert!(!b.select_at(4));
    assert_eq!(b.cursor(), 2);
}

#[test]
fn selection_survives_navigation_until_cleared() {
    let dir = tempdir().unwrap();
    fixture(dir.path());
    let mut b = FileBrowser::new(dir.path(), BrowserSettings::default());

    b.select_at(2);
    assert_eq!(b.activate(), Activation::Selected);
    b.first();
    b.activate();
    assert_eq!(b.selection().len(), 1);

    assert!(b.clear_selection());
    assert!(!b.clear_selection());
    assert!(b.selection().is_empty());
}

#[test]
fn toggle_hidden_keeps_cursor_on_same_entry() {
    let dir = tempdir().unwrap();
    fixture(dir.path());
    let mut b = FileBrowser::new(dir.path(), BrowserSettings::default());

    b.select_at(2); // A.ogg
    b.toggle_hidden();
    assert!(b.include_hidden());
    assert_eq!(b.current().unwrap().name, "A.ogg");
    assert_eq!(b.entries().len(), 6);
}

#[test]
fn missing_directory_gives_empty_listing() {
    let dir = tempdir().unwrap();
    let b = FileBrowser::new(dir.path().join("gone"), BrowserSettings::default());
    assert!(b.entries().is_empty());
    assert!(b.current().is_none());
}
