//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::BreathboxError;
use crate::tui::app::{App, Screen};

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start the exercise from the settings form.
    Submit,
    /// Pause or resume the running exercise.
    TogglePause,
    /// Exit the running exercise.
    ExitExercise,
}

/// Handle terminal events, blocking at most `timeout`.
///
/// Returns an action to take, or None if no action is needed. Form
/// navigation and editing mutate the app directly.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App, timeout: Duration) -> Result<Option<Action>, BreathboxError> {
    if !event::poll(timeout)
        .map_err(|e| BreathboxError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) =
        event::read().map_err(|e| BreathboxError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    match app.screen {
        Screen::Settings => Ok(handle_settings_key(app, key.code)),
        Screen::Exercise => Ok(handle_exercise_key(key.code)),
    }
}

fn handle_settings_key(app: &mut App, code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Some(Action::Quit),
        KeyCode::Enter => return Some(Action::Submit),

        KeyCode::Up | KeyCode::BackTab => app.form.select_previous(),
        KeyCode::Down | KeyCode::Tab => app.form.select_next(),

        KeyCode::Backspace => app.form.backspace(),
        KeyCode::Char('?') => {
            app.status = Some(
                "up/down:field | 0-9:edit | Enter:start | q:quit".to_string(),
            );
        }
        KeyCode::Char(c) => app.form.input_char(c),

        _ => {}
    }
    None
}

fn handle_exercise_key(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::ExitExercise),
        KeyCode::Char(' ') | KeyCode::Char('p') => Some(Action::TogglePause),
        _ => None,
    }
}
