use std::time::{Duration, Instant};

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::AudioEngine;
use crate::config;
use crate::ui::{self, Areas};

/// Main terminal event loop: handles input, drives the refresh timer and
/// redraws. Returns `Ok(())` when the user quits.
pub fn run<E: AudioEngine>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App<E>,
) -> Result<(), Box<dyn std::error::Error>> {
    let seek_idle = Duration::from_millis(settings.controls.seek_release_ms);

    loop {
        let now = Instant::now();
        app.release_idle_seek(now, seek_idle);
        app.tick(now);

        let mut areas: Option<Areas> = None;
        terminal.draw(|f| areas = Some(ui::draw(f, app, &settings.ui, &settings.controls)))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, settings, app) {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(areas) = areas {
                        handle_mouse_event(mouse, &areas, app);
                    }
                }
                _ => {}
            }
        }
    }
}

/// Returns true when the user asked to quit.
fn handle_key_event<E: AudioEngine>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App<E>,
) -> bool {
    let volume_step = f32::from(settings.controls.volume_step);
    let seek_step = settings.controls.seek_step_seconds as f64;

    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char('j') | KeyCode::Down => app.browser.next(),
        KeyCode::Char('k') | KeyCode::Up => app.browser.prev(),
        KeyCode::Char('g') | KeyCode::Home => app.browser.first(),
        KeyCode::Char('G') | KeyCode::End => app.browser.last(),
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Right => app.activate_entry(),
        KeyCode::Backspace | KeyCode::Char('h') | KeyCode::Left => {
            app.browser.parent();
        }
        KeyCode::Esc => app.clear_selection(),
        KeyCode::Char('.') => app.browser.toggle_hidden(),
        KeyCode::Char('p') => app.play(),
        KeyCode::Char(' ') => app.toggle_pause(),
        KeyCode::Char('s') => app.stop(),
        KeyCode::Char('+') | KeyCode::Char('=') => app.change_volume(volume_step),
        KeyCode::Char('-') => app.change_volume(-volume_step),
        KeyCode::Char('L') => app.nudge_seek(seek_step, Instant::now()),
        KeyCode::Char('H') => app.nudge_seek(-seek_step, Instant::now()),
        _ => {}
    }

    false
}

fn handle_mouse_event<E: AudioEngine>(mouse: MouseEvent, areas: &Areas, app: &mut App<E>) {
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
            if ui::contains(areas.volume, col, row) {
                app.set_volume(ui::slider_value_at(areas.volume, col, 100.0) as f32);
            } else if ui::contains(areas.seek, col, row) || app.is_mouse_seeking() {
                let max = app.controller.view().seek.max();
                app.drag_seek(ui::slider_value_at(areas.seek, col, max));
            } else if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                && ui::contains(areas.list, col, row)
            {
                let total = app.browser.entries().len();
                if let Some(index) = ui::list_index_at(areas.list, row, total, app.browser.cursor())
                {
                    app.click_entry(index);
                }
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            // Buttons fire on release.
            if app.is_mouse_seeking() {
                app.release_seek();
            } else if ui::contains(areas.play, col, row) {
                app.play();
            } else if ui::contains(areas.pause, col, row) {
                app.pause();
            } else if ui::contains(areas.stop, col, row) {
                app.stop();
            }
        }
        MouseEventKind::ScrollDown if ui::contains(areas.list, col, row) => app.browser.next(),
        MouseEventKind::ScrollUp if ui::contains(areas.list, col, row) => app.browser.prev(),
        _ => {}
    }
}
