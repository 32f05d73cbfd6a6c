//! Exercise session controller.
//!
//! Owns the phase sequencer and the countdown timer, and turns raw timer
//! ticks into the events the presentation layer consumes: remaining time for
//! display, phase/lap changes, sound cues, and session completion.

use chrono::Duration;

use crate::error::BreathboxError;
use crate::exercise::phase::{ExerciseConfig, PhaseKind, Sequencer, Step};
use crate::exercise::timer::{CountdownTimer, TICK};

/// State of an exercise session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Session is actively running.
    Running,
    /// Session is paused.
    Paused,
    /// All laps finished.
    Completed,
    /// The user exited before completion.
    Stopped,
}

/// A sound cue for the external player (the TUI rings the terminal bell).
///
/// The session never owns playback resources; it only tags the moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    /// A phase is about to end: fires on each of its last three seconds.
    Imminent,
    /// A phase or lap boundary was crossed and the exercise continues.
    Transition,
    /// The last phase of the last lap just ended.
    Final,
}

/// An event produced by one session tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The running timer advanced by one second.
    Tick {
        /// Remaining time in the current phase.
        remaining: Duration,
        /// Sound cue to play, if any.
        cue: Option<Cue>,
    },
    /// A new phase became current.
    PhaseStarted {
        /// The phase that just started.
        kind: PhaseKind,
        /// The lap it belongs to.
        lap: u32,
    },
    /// The session finished all laps. Terminal.
    Completed,
}

/// Number of cadence units before a phase boundary on which the imminent
/// cue fires.
const IMMINENT_TICKS: i32 = 3;

/// One full breathing exercise.
///
/// Constructed from a validated [`ExerciseConfig`], already running with the
/// first meaningful phase armed. A single external clock drives it through
/// [`ExerciseSession::tick`]; all state transitions happen synchronously
/// inside that call, so an expiry finishes its phase advancement (including
/// the re-arm) before the next tick can land.
#[derive(Debug, Clone)]
pub struct ExerciseSession {
    sequencer: Sequencer,
    timer: CountdownTimer,
    state: SessionState,
}

impl ExerciseSession {
    /// Start a session from a config.
    ///
    /// # Errors
    ///
    /// Returns a configuration error naming the invalid settings; no timer
    /// is armed in that case.
    pub fn new(config: &ExerciseConfig) -> Result<Self, BreathboxError> {
        let sequencer = Sequencer::new(config)?;
        let mut timer = CountdownTimer::new(sequencer.current_phase().planned);
        timer.start();

        Ok(Self {
            sequencer,
            timer,
            state: SessionState::Running,
        })
    }

    /// The phase currently underway.
    #[must_use]
    pub const fn phase(&self) -> PhaseKind {
        self.sequencer.current_phase().kind
    }

    /// The current lap, starting at 1.
    #[must_use]
    pub const fn lap(&self) -> u32 {
        self.sequencer.lap()
    }

    /// The configured lap count.
    #[must_use]
    pub const fn laps(&self) -> u32 {
        self.sequencer.laps()
    }

    /// Remaining time in the current phase.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.timer.remaining()
    }

    /// Get the current state.
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Check if the session is active (running or paused).
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.state, SessionState::Running | SessionState::Paused)
    }

    /// Progress through the current phase (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let planned = self.sequencer.current_phase().planned.num_milliseconds();
        if planned == 0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let ratio = self.timer.remaining().num_milliseconds() as f64 / planned as f64;
        1.0 - ratio
    }

    /// Pause the session. Phase and lap are untouched.
    pub fn pause(&mut self) {
        if self.state == SessionState::Running {
            self.timer.pause();
            self.state = SessionState::Paused;
        }
    }

    /// Resume a paused session.
    pub fn resume(&mut self) {
        if self.state == SessionState::Paused {
            self.timer.start();
            self.state = SessionState::Running;
        }
    }

    /// Exit the session immediately, whatever the timer state.
    ///
    /// Does not emit a completion event.
    pub fn stop(&mut self) {
        if self.is_active() {
            self.timer.pause();
            self.state = SessionState::Stopped;
        }
    }

    /// Apply one cadence unit of the external clock.
    ///
    /// Returns the events this tick produced, in order. Empty while paused
    /// or after the session has ended; the caller's clock may keep firing
    /// regardless.
    pub fn tick(&mut self) -> Vec<SessionEvent> {
        if self.state != SessionState::Running {
            return Vec::new();
        }

        let Some(t) = self.timer.tick() else {
            return Vec::new();
        };

        let mut events = Vec::with_capacity(2);
        events.push(SessionEvent::Tick {
            remaining: t.remaining,
            cue: self.classify_cue(t.remaining, t.expired),
        });

        if t.expired {
            match self.sequencer.advance() {
                Step::Complete => {
                    self.state = SessionState::Completed;
                    events.push(SessionEvent::Completed);
                }
                Step::Phase(phase) => {
                    self.timer.reset(phase.planned);
                    self.timer.start();
                    events.push(SessionEvent::PhaseStarted {
                        kind: phase.kind,
                        lap: self.sequencer.lap(),
                    });
                }
            }
        }

        events
    }

    /// Tag the tick with a sound cue.
    ///
    /// Boundary cues are classified before advancement: a final cue is an
    /// expiry that is simultaneously the last phase of the last lap.
    fn classify_cue(&self, remaining: Duration, expired: bool) -> Option<Cue> {
        if expired {
            if self.sequencer.is_last_phase() && self.sequencer.is_last_lap() {
                Some(Cue::Final)
            } else {
                Some(Cue::Transition)
            }
        } else if remaining <= TICK * IMMINENT_TICKS {
            Some(Cue::Imminent)
        } else {
            None
        }
    }
}
