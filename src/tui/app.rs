//! Application state for the TUI.

use std::time::{Duration as StdDuration, Instant};

use crate::config::ExerciseDefaults;
use crate::error::BreathboxError;
use crate::exercise::{Cue, ExerciseConfig, ExerciseSession, SessionEvent};

/// One cadence unit of the tick clock.
const TICK_INTERVAL: StdDuration = StdDuration::from_millis(1000);

/// How the exercise ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseOutcome {
    /// All laps finished.
    Completed,
    /// The user exited before completion.
    Exited,
}

/// Which view is on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The settings form.
    Settings,
    /// The running exercise.
    Exercise,
}

/// One numeric field of the settings form.
#[derive(Debug, Clone)]
pub struct FormField {
    /// Field label.
    pub label: &'static str,
    /// Current text, digits only.
    pub value: String,
}

/// The settings form: the four phase durations (in seconds) and the lap
/// count, in display order.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    /// The five fields.
    pub fields: [FormField; 5],
    /// Currently selected field index.
    pub selected: usize,
}

impl SettingsForm {
    /// Build the form pre-filled from configured defaults.
    #[must_use]
    pub fn from_defaults(defaults: ExerciseDefaults) -> Self {
        let field = |label, value: i64| FormField {
            label,
            value: value.to_string(),
        };

        Self {
            fields: [
                field("Inhale time", defaults.inhale_secs),
                field("Inhale hold time", defaults.inhale_hold_secs),
                field("Exhale time", defaults.exhale_secs),
                field("Exhale hold time (optional)", defaults.exhale_hold_secs),
                field("Laps count", i64::from(defaults.laps)),
            ],
            selected: 0,
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if self.selected < self.fields.len() - 1 {
            self.selected += 1;
        }
    }

    /// Append a digit to the selected field.
    pub fn input_char(&mut self, c: char) {
        if c.is_ascii_digit() && self.fields[self.selected].value.len() < 4 {
            self.fields[self.selected].value.push(c);
        }
    }

    /// Delete the last digit of the selected field.
    pub fn backspace(&mut self) {
        self.fields[self.selected].value.pop();
    }

    /// Parse the form into an exercise config.
    ///
    /// Empty or unparseable fields read as zero, which the required-phase
    /// validation then rejects with the field's name.
    #[must_use]
    pub fn to_config(&self) -> ExerciseConfig {
        let secs = |index: usize| -> i64 { self.fields[index].value.parse().unwrap_or(0) };
        let laps: u32 = self.fields[4].value.parse().unwrap_or(0);

        ExerciseConfig::from_seconds(secs(0), secs(1), secs(2), secs(3), laps)
    }
}

/// Application state.
pub struct App {
    /// Which view is showing.
    pub screen: Screen,
    /// The settings form (also kept while exercising, to return to).
    pub form: SettingsForm,
    /// The running session, if any.
    pub session: Option<ExerciseSession>,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Last cue of the current phase, for the cue indicator.
    pub cue: Option<Cue>,
    /// How the last exercise ended.
    pub outcome: ExerciseOutcome,
    /// Deadline of the next tick; fixed schedule, immune to poll jitter.
    next_tick: Option<Instant>,
    /// Ring the terminal bell on cues.
    bell_enabled: bool,
    /// A cue fired since the last frame; the run loop rings the bell.
    bell_pending: bool,
    /// `start` mode: quit when the session ends instead of returning to
    /// the settings form.
    standalone: bool,
}

impl App {
    /// Create an app showing the settings form.
    #[must_use]
    pub fn with_form(defaults: ExerciseDefaults, bell: bool) -> Self {
        Self {
            screen: Screen::Settings,
            form: SettingsForm::from_defaults(defaults),
            session: None,
            status: Some("Press ? for help".to_string()),
            should_quit: false,
            cue: None,
            outcome: ExerciseOutcome::Exited,
            next_tick: None,
            bell_enabled: bell,
            bell_pending: false,
            standalone: false,
        }
    }

    /// Create an app running an exercise directly, quitting when it ends.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the config is invalid.
    pub fn with_exercise(
        config: &ExerciseConfig,
        defaults: ExerciseDefaults,
        bell: bool,
    ) -> Result<Self, BreathboxError> {
        let mut app = Self::with_form(defaults, bell);
        app.standalone = true;
        app.begin_session(config)?;
        Ok(app)
    }

    /// Start a session and switch to the exercise view.
    fn begin_session(&mut self, config: &ExerciseConfig) -> Result<(), BreathboxError> {
        let session = ExerciseSession::new(config)?;
        self.session = Some(session);
        self.screen = Screen::Exercise;
        self.cue = None;
        self.status = None;
        self.next_tick = Some(Instant::now() + TICK_INTERVAL);
        Ok(())
    }

    /// Validate the form and start the exercise, or show the error.
    pub fn submit_form(&mut self) {
        let config = self.form.to_config();
        if let Err(e) = config.validate().and_then(|()| self.begin_session(&config)) {
            self.status = Some(e.to_string());
        }
    }

    /// Toggle pause/resume on the running session.
    pub fn toggle_pause(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if session.state() == crate::exercise::SessionState::Paused {
                session.resume();
            } else {
                session.pause();
            }
        }
    }

    /// Exit the running exercise without completing it.
    pub fn exit_exercise(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.stop();
        }
        self.outcome = ExerciseOutcome::Exited;
        self.leave_exercise(Some("Exercise exited".to_string()));
    }

    /// Tear down the exercise view and either quit or return to settings.
    fn leave_exercise(&mut self, status: Option<String>) {
        // Stop the clock driver so no tick fires into a torn-down session.
        self.next_tick = None;
        self.session = None;
        self.cue = None;

        if self.standalone {
            self.should_quit = true;
        } else {
            self.screen = Screen::Settings;
            self.status = status;
        }
    }

    /// How long the event loop may block before the next tick is due.
    #[must_use]
    pub fn poll_timeout(&self, now: Instant) -> StdDuration {
        const IDLE_POLL: StdDuration = StdDuration::from_millis(100);

        self.next_tick.map_or(IDLE_POLL, |due| {
            due.saturating_duration_since(now).min(IDLE_POLL)
        })
    }

    /// Fire every tick whose deadline has passed.
    ///
    /// The clock runs on a fixed schedule (each deadline is the previous
    /// one plus the interval, not "now" plus the interval) and keeps firing
    /// while the session is paused; pausing gates effect, not the clock.
    pub fn advance_clock(&mut self, now: Instant) {
        while let Some(due) = self.next_tick {
            if now < due {
                break;
            }
            self.next_tick = Some(due + TICK_INTERVAL);

            let Some(session) = self.session.as_mut() else {
                break;
            };

            for event in session.tick() {
                match event {
                    SessionEvent::Tick { cue, .. } => {
                        if let Some(cue) = cue {
                            self.cue = Some(cue);
                            self.bell_pending = self.bell_enabled;
                        }
                    }
                    SessionEvent::PhaseStarted { .. } => {
                        self.cue = None;
                    }
                    SessionEvent::Completed => {
                        self.outcome = ExerciseOutcome::Completed;
                        self.leave_exercise(Some("Exercise complete!".to_string()));
                        return;
                    }
                }
            }
        }
    }

    /// Take the pending bell flag, if set.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.bell_pending)
    }
}
