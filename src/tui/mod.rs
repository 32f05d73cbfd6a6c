//! Terminal User Interface (TUI) for breathbox.
//!
//! Two views: a settings form and the running exercise, swapped the way the
//! session dictates (completion and exit both land back on the form).
//! Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, ExerciseOutcome, Screen, SettingsForm};

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::BreathboxError;
use crate::exercise::ExerciseConfig;

/// Run the interactive TUI: settings form first, exercises from there.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run() -> Result<(), BreathboxError> {
    let settings = Config::load()?;
    let app = App::with_form(settings.exercise, settings.general.bell);
    run_app(app).map(|_| ())
}

/// Run a single exercise session full-screen and report how it ended.
///
/// # Errors
///
/// Returns a configuration error before touching the terminal when the
/// config is invalid, or an error if the TUI fails.
pub fn run_exercise(
    config: &ExerciseConfig,
    bell: bool,
) -> Result<ExerciseOutcome, BreathboxError> {
    let settings = Config::load()?;
    let app = App::with_exercise(config, settings.exercise, bell)?;
    run_app(app)
}

/// Set up the terminal, run the main loop, and restore the terminal.
fn run_app(mut app: App) -> Result<ExerciseOutcome, BreathboxError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| BreathboxError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| BreathboxError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| BreathboxError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result.map(|()| app.outcome)
}

/// Run the main application loop.
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), BreathboxError> {
    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| BreathboxError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events, blocking no longer than the next tick deadline
        let timeout = app.poll_timeout(Instant::now());
        if let Some(action) = event::handle_events(app, timeout)? {
            match action {
                event::Action::Quit => break,
                event::Action::Submit => app.submit_form(),
                event::Action::TogglePause => app.toggle_pause(),
                event::Action::ExitExercise => app.exit_exercise(),
            }
        }

        // Drive the tick clock
        app.advance_clock(Instant::now());

        // Cue playback: the terminal bell is our external player
        if app.take_bell() {
            let mut out = io::stdout();
            let _ = out.write_all(b"\x07");
            let _ = out.flush();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
