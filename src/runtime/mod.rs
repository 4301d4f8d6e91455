use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::audio::RodioEngine;
use crate::browser::FileBrowser;
use crate::config;
use crate::controller::PlaybackController;
use crate::logging;

mod event_loop;
mod settings;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (settings, settings_problem) = settings::load_settings();

    match logging::init(&settings.log) {
        Ok(path) => info!(log = %path.display(), "melody starting"),
        Err(e) => eprintln!("melody: logging disabled: {e}"),
    }
    settings::report(settings_problem.as_deref());

    let dir = start_dir(&settings);
    let engine = RodioEngine::new()?;
    let controller = PlaybackController::new(
        engine,
        Duration::from_millis(settings.audio.refresh_interval_ms),
        f32::from(settings.audio.initial_volume),
    );
    let browser = FileBrowser::new(dir, settings.browser.clone());
    let mut app = App::new(browser, controller);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &settings, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    app.stop();
    info!("melody exiting");
    run_result
}

/// Directory the chooser opens first: CLI argument, then config, then cwd.
fn start_dir(settings: &config::Settings) -> PathBuf {
    env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.browser.start_dir.clone())
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
