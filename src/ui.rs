//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`, and
//! the geometry helpers the event loop uses to map mouse positions back to
//! widgets.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style, Stylize},
    widgets::{Block, Borders, Gauge, List, ListItem, ListState, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::audio::AudioEngine;
use crate::browser::EntryKind;
use crate::config::{ControlsSettings, UiSettings};
use crate::controller::PlaybackStatus;

/// Screen rectangles of every interactive widget.
#[derive(Debug, Clone, Copy)]
pub struct Areas {
    pub header: Rect,
    pub selected: Rect,
    pub list: Rect,
    pub play: Rect,
    pub pause: Rect,
    pub stop: Rect,
    pub volume: Rect,
    pub time: Rect,
    pub seek: Rect,
    pub footer: Rect,
}

/// Split the terminal into the player's widgets.
pub fn layout(area: Rect) -> Areas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(4),
        ])
        .split(area);

    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[3]);

    let position = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Min(10)])
        .split(rows[5]);

    Areas {
        header: rows[0],
        selected: rows[1],
        list: rows[2],
        play: buttons[0],
        pause: buttons[1],
        stop: buttons[2],
        volume: rows[4],
        time: position[0],
        seek: position[1],
        footer: rows[6],
    }
}

/// Inside of a bordered block.
fn inner(r: Rect) -> Rect {
    Rect {
        x: r.x.saturating_add(1),
        y: r.y.saturating_add(1),
        width: r.width.saturating_sub(2),
        height: r.height.saturating_sub(2),
    }
}

pub fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

/// Slider value under `column` for a bordered slider spanning `[0, max]`.
pub fn slider_value_at(area: Rect, column: u16, max: f64) -> f64 {
    let inner = inner(area);
    if inner.width <= 1 {
        return 0.0;
    }
    let offset = column.saturating_sub(inner.x).min(inner.width - 1);
    max * f64::from(offset) / f64::from(inner.width - 1)
}

/// Window `[start, end)` of a list of `total` rows shown in `height` rows,
/// centered on `selected` when possible.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize) {
    if total <= height || height == 0 {
        return (0, total);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height)
}

/// Index of the browser entry drawn at terminal `row`, if any.
pub fn list_index_at(area: Rect, row: u16, total: usize, cursor: usize) -> Option<usize> {
    let inner = inner(area);
    if row < inner.y || row >= inner.y + inner.height {
        return None;
    }
    let (start, end) = visible_window(total, inner.height as usize, cursor);
    let index = start + (row - inner.y) as usize;
    (index < end).then_some(index)
}

/// Render the controls help text, incorporating step sizes.
fn controls_text(controls: &ControlsSettings) -> String {
    [
        "[j/k] move".to_string(),
        "[enter/l] open/select".to_string(),
        "[backspace/h] up".to_string(),
        "[esc] clear selection".to_string(),
        "[p] play".to_string(),
        "[space] pause/resume".to_string(),
        "[s] stop".to_string(),
        format!("[+/-] volume ±{}", controls.volume_step),
        format!("[H/L] seek -/+{}s", controls.seek_step_seconds),
        "[.] hidden".to_string(),
        "[q] quit".to_string(),
    ]
    .join(" | ")
}

fn button(label: &str, active: bool) -> Paragraph<'_> {
    let style = if active {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        Style::default()
    };
    Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::default().borders(Borders::ALL))
}

/// Render the entire UI into the provided `frame` using `app` state and settings.
///
/// Returns where each widget was drawn, for mouse hit-testing.
pub fn draw<E: AudioEngine>(
    frame: &mut Frame,
    app: &App<E>,
    ui_settings: &UiSettings,
    controls_settings: &ControlsSettings,
) -> Areas {
    let areas = layout(frame.area());
    let view = app.controller.view();
    let status = app.controller.status();

    // Header
    let header = Paragraph::new(ui_settings.header_text.as_str())
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" melody ")
                .title_alignment(Alignment::Center),
        );
    frame.render_widget(header, areas.header);

    // Selected file
    let selected = Paragraph::new(view.selected_file_label.as_str()).block(
        Block::bordered()
            .padding(Padding {
                left: 1,
                right: 0,
                top: 0,
                bottom: 0,
            })
            .title(" selected "),
    );
    frame.render_widget(selected, areas.selected);

    // File chooser
    {
        let entries = app.browser.entries();
        let list_height = inner(areas.list).height as usize;
        let (start, end) = visible_window(entries.len(), list_height, app.browser.cursor());

        let visible_items: Vec<ListItem> = entries[start..end]
            .iter()
            .map(|e| {
                let item = match e.kind {
                    EntryKind::Directory => ListItem::new(format!("{}/", e.name)),
                    EntryKind::AudioFile => ListItem::new(e.name.as_str()),
                };
                if app.browser.is_selected(e) {
                    item.bold()
                } else {
                    item
                }
            })
            .collect();

        let mut title = format!(" {} ", app.browser.dir().display());
        if app.browser.include_hidden() {
            title.push_str("(hidden shown) ");
        }
        let list = List::new(visible_items)
            .block(Block::default().borders(Borders::ALL).title(title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut state = ListState::default();
        if !entries.is_empty() {
            state.select(Some(app.browser.cursor() - start));
        }
        frame.render_stateful_widget(list, areas.list, &mut state);
    }

    // Buttons
    frame.render_widget(button("Play", status == PlaybackStatus::Playing), areas.play);
    frame.render_widget(button("Pause", status == PlaybackStatus::Paused), areas.pause);
    frame.render_widget(button("Stop", status == PlaybackStatus::Stopped), areas.stop);

    // Volume slider
    let volume = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" volume "))
        .ratio(f64::from(view.volume / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}", view.volume));
    frame.render_widget(volume, areas.volume);

    // Elapsed time
    let time = Paragraph::new(format!("Playback Time: {}", view.time_label))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(time, areas.time);

    // Seek slider
    let seek_title = format!(" Duration: {} ", view.duration_label);
    let seek = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(seek_title))
        .ratio(view.seek.ratio())
        .label(format!("{:.0}s / {:.0}s", view.seek.value(), view.seek.max()));
    frame.render_widget(seek, areas.seek);

    // Footer: last error, else controls
    let (footer_text, footer_title) = match &app.status_message {
        Some(msg) => (msg.clone(), " error "),
        None => (controls_text(controls_settings), " controls "),
    };
    let footer = Paragraph::new(footer_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(footer_title)
                .padding(Padding {
                    left: 1,
                    right: 0,
                    top: 0,
                    bottom: 0,
                }),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, areas.footer);

    areas
}
