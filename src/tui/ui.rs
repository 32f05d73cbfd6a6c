//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

use crate::exercise::{format_duration_mmss, Cue, ExerciseSession, SessionState};
use crate::tui::app::{App, Screen};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.screen {
        Screen::Settings => render_form(frame, app, chunks[1]),
        Screen::Exercise => {
            if let Some(session) = app.session.as_ref() {
                render_exercise(frame, app, session, chunks[1]);
            }
        }
    }
    render_status_bar(frame, app, chunks[2]);
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Settings => " breathbox - set up the exercise ".to_string(),
        Screen::Exercise => {
            let (lap, laps) = app
                .session
                .as_ref()
                .map_or((0, 0), |s| (s.lap(), s.laps()));
            format!(" breathbox - lap {lap} / {laps} ")
        }
    };

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the settings form.
fn render_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(u16::try_from(app.form.fields.len()).unwrap_or(5) + 2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let items: Vec<ListItem<'_>> = app
        .form
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let is_selected = i == app.form.selected;
            let marker = if is_selected { "> " } else { "  " };
            let value = if field.value.is_empty() {
                "_"
            } else {
                field.value.as_str()
            };

            let spans = vec![
                Span::styled(
                    format!("{marker}{:<28}", field.label),
                    Style::default().add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::styled(
                    value.to_string(),
                    Style::default().fg(if is_selected {
                        Color::Yellow
                    } else {
                        Color::White
                    }),
                ),
            ];

            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL));
    frame.render_widget(list, chunks[0]);

    // Live total, like the original form's readout.
    let total = format_duration_mmss(app.form.to_config().total_duration());
    let total_line = Paragraph::new(format!("Total time is {total}"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(total_line, chunks[1]);
}

/// Render the running exercise.
fn render_exercise(frame: &mut Frame<'_>, app: &App, session: &ExerciseSession, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Phase title
            Constraint::Length(2), // Remaining time
            Constraint::Length(1), // Cue indicator
            Constraint::Length(3), // Progress gauge
            Constraint::Min(0),
        ])
        .split(area);

    let phase = Paragraph::new(session.phase().display_name())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(phase, chunks[0]);

    let paused = session.state() == SessionState::Paused;
    let time_text = if paused {
        format!("{} (paused)", format_duration_mmss(session.remaining()))
    } else {
        format_duration_mmss(session.remaining())
    };
    let time = Paragraph::new(time_text)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(time, chunks[1]);

    let cue_text = match app.cue {
        Some(Cue::Imminent) => "·",
        Some(Cue::Transition) => "switch",
        Some(Cue::Final) => "done",
        None => "",
    };
    let cue = Paragraph::new(cue_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(cue, chunks[2]);

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (session.progress() * 100.0).clamp(0.0, 100.0) as u16;
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(if paused { Color::DarkGray } else { Color::Green }))
        .percent(percent);
    frame.render_widget(gauge, chunks[3]);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let text = app.status.clone().unwrap_or_else(|| match app.screen {
        Screen::Settings => "up/down:field | 0-9:edit | Enter:start | q:quit".to_string(),
        Screen::Exercise => "space:pause/resume | q:exit".to_string(),
    });

    let bar = Paragraph::new(text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(bar, area);
}
