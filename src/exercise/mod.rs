//! The breathing exercise core.
//!
//! Three pieces, composed bottom-up:
//! - a pausable countdown timer that ticks at a fixed one-second cadence
//! - a phase sequencer that walks the inhale/hold/exhale/hold cycle across laps
//! - a session controller that owns both and emits display/cue events

pub mod phase;
pub mod session;
pub mod timer;

pub use phase::{ExerciseConfig, Phase, PhaseKind, PhaseSequence, Sequencer, Step};
pub use session::{Cue, ExerciseSession, SessionEvent, SessionState};
pub use timer::{format_duration_mmss, parse_duration, CountdownTimer, TimerTick, TICK};
