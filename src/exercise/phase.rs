//! Breathing phases and the phase sequencer.
//!
//! A session walks a fixed four-entry sequence (inhale, inhale hold, exhale,
//! exhale hold) once per lap. Phases configured with a zero duration are
//! skipped entirely: they never become current and the timer is never armed
//! with zero.

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::BreathboxError;

/// The four kinds of breathing phase, in canonical cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseKind {
    /// Breathing in.
    Inhale,
    /// Holding with full lungs.
    InhaleHold,
    /// Breathing out.
    Exhale,
    /// Holding with empty lungs (optional).
    ExhaleHold,
}

impl PhaseKind {
    /// All phase kinds in cycle order.
    pub const ALL: [Self; 4] = [Self::Inhale, Self::InhaleHold, Self::Exhale, Self::ExhaleHold];

    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Inhale => "Inhale",
            Self::InhaleHold => "Inhale hold",
            Self::Exhale => "Exhale",
            Self::ExhaleHold => "Exhale hold",
        }
    }

    /// Whether the phase must have a positive duration.
    ///
    /// Only the final hold may be skipped.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        !matches!(self, Self::ExhaleHold)
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One segment of the breathing cycle with its planned duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    /// Which phase this is.
    pub kind: PhaseKind,
    /// Planned duration; immutable for the session.
    pub planned: Duration,
}

impl Phase {
    /// Whether this phase takes part in the cycle.
    #[must_use]
    pub fn is_meaningful(&self) -> bool {
        self.planned > Duration::zero()
    }
}

/// Validated input for one exercise session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExerciseConfig {
    /// Inhale duration. Required, > 0.
    pub inhale: Duration,
    /// Inhale-hold duration. Required, > 0.
    pub inhale_hold: Duration,
    /// Exhale duration. Required, > 0.
    pub exhale: Duration,
    /// Exhale-hold duration. Optional, 0 skips the phase.
    pub exhale_hold: Duration,
    /// Number of laps, at least 1.
    pub laps: u32,
}

impl ExerciseConfig {
    /// Build a config from whole-second durations.
    #[must_use]
    pub const fn from_seconds(
        inhale: i64,
        inhale_hold: i64,
        exhale: i64,
        exhale_hold: i64,
        laps: u32,
    ) -> Self {
        Self {
            inhale: Duration::seconds(inhale),
            inhale_hold: Duration::seconds(inhale_hold),
            exhale: Duration::seconds(exhale),
            exhale_hold: Duration::seconds(exhale_hold),
            laps,
        }
    }

    /// Get the configured duration for a phase kind.
    #[must_use]
    pub const fn duration_of(&self, kind: PhaseKind) -> Duration {
        match kind {
            PhaseKind::Inhale => self.inhale,
            PhaseKind::InhaleHold => self.inhale_hold,
            PhaseKind::Exhale => self.exhale,
            PhaseKind::ExhaleHold => self.exhale_hold,
        }
    }

    /// Validate the required-phase and lap-count invariants.
    ///
    /// # Errors
    ///
    /// Returns [`BreathboxError::InvalidSettings`] naming every required
    /// phase whose duration is not positive, or [`BreathboxError::Config`]
    /// when the lap count is zero.
    pub fn validate(&self) -> Result<(), BreathboxError> {
        let invalid: Vec<&str> = PhaseKind::ALL
            .iter()
            .filter(|kind| kind.is_required() && self.duration_of(**kind) <= Duration::zero())
            .map(PhaseKind::display_name)
            .collect();

        if !invalid.is_empty() {
            return Err(BreathboxError::invalid_settings(&invalid));
        }

        if self.exhale_hold < Duration::zero() {
            return Err(BreathboxError::Config(
                "Exhale hold duration cannot be negative".to_string(),
            ));
        }

        if self.laps == 0 {
            return Err(BreathboxError::Config(
                "Laps count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    /// Total planned time for one lap.
    #[must_use]
    pub fn lap_duration(&self) -> Duration {
        self.inhale + self.inhale_hold + self.exhale + self.exhale_hold
    }

    /// Total planned time for the whole session.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        self.lap_duration() * i32::try_from(self.laps).unwrap_or(i32::MAX)
    }
}

impl Default for ExerciseConfig {
    /// The form's initial values: 5s / 5s / 5s / no final hold, 2 laps.
    fn default() -> Self {
        Self::from_seconds(5, 5, 5, 0, 2)
    }
}

/// The ordered, fixed-length phase list for one session.
#[derive(Debug, Clone, Copy)]
pub struct PhaseSequence {
    phases: [Phase; 4],
}

impl PhaseSequence {
    /// Build the canonical sequence from a config.
    #[must_use]
    pub fn from_config(config: &ExerciseConfig) -> Self {
        let phases = PhaseKind::ALL.map(|kind| Phase {
            kind,
            planned: config.duration_of(kind),
        });
        Self { phases }
    }

    /// Get the phase at an index.
    #[must_use]
    pub const fn get(&self, index: usize) -> Phase {
        self.phases[index % 4]
    }

    /// Index of the first meaningful phase.
    ///
    /// Falls back to index 0 if no phase is meaningful; unreachable once
    /// the required-phase invariant has been validated, but kept so a
    /// relaxed config cannot panic the sequencer.
    #[must_use]
    pub fn first_meaningful(&self) -> usize {
        self.phases
            .iter()
            .position(Phase::is_meaningful)
            .unwrap_or(0)
    }

    /// Index of the first meaningful phase strictly after `index`, if any.
    #[must_use]
    pub fn next_meaningful_after(&self, index: usize) -> Option<usize> {
        self.phases
            .iter()
            .enumerate()
            .skip(index + 1)
            .find(|(_, phase)| phase.is_meaningful())
            .map(|(i, _)| i)
    }

    /// Index of the last meaningful phase.
    ///
    /// Not necessarily the fourth slot: with a zero exhale hold, the exhale
    /// is the last meaningful phase.
    #[must_use]
    pub fn last_meaningful(&self) -> usize {
        self.phases
            .iter()
            .rposition(Phase::is_meaningful)
            .unwrap_or(0)
    }
}

/// What the sequencer decided at a phase boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Move on to this phase (possibly on a new lap).
    Phase(Phase),
    /// The last phase of the last lap just finished.
    Complete,
}

/// Walks the phase sequence across laps.
///
/// Advancement is driven only by timer expiry, never by elapsed time
/// directly; the session controller calls [`Sequencer::advance`] once per
/// expiry and re-arms the timer from the returned phase.
#[derive(Debug, Clone)]
pub struct Sequencer {
    sequence: PhaseSequence,
    current: usize,
    lap: u32,
    laps: u32,
}

impl Sequencer {
    /// Build a sequencer from a validated config, positioned at the first
    /// meaningful phase of lap 1.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the config is invalid.
    pub fn new(config: &ExerciseConfig) -> Result<Self, BreathboxError> {
        config.validate()?;
        let sequence = PhaseSequence::from_config(config);

        Ok(Self {
            current: sequence.first_meaningful(),
            sequence,
            lap: 1,
            laps: config.laps,
        })
    }

    /// The phase currently underway.
    #[must_use]
    pub const fn current_phase(&self) -> Phase {
        self.sequence.get(self.current)
    }

    /// The current lap, starting at 1.
    #[must_use]
    pub const fn lap(&self) -> u32 {
        self.lap
    }

    /// The configured lap count.
    #[must_use]
    pub const fn laps(&self) -> u32 {
        self.laps
    }

    /// Whether the current phase is the last meaningful phase of its lap.
    #[must_use]
    pub fn is_last_phase(&self) -> bool {
        self.current == self.sequence.last_meaningful()
    }

    /// Whether this is the final lap.
    #[must_use]
    pub const fn is_last_lap(&self) -> bool {
        self.lap == self.laps
    }

    /// Decide what follows the expiry of the current phase.
    ///
    /// Terminal once it returns [`Step::Complete`]; callers must not call
    /// `advance` again after that.
    pub fn advance(&mut self) -> Step {
        if self.is_last_phase() {
            if self.is_last_lap() {
                return Step::Complete;
            }
            self.lap += 1;
            self.current = self.sequence.first_meaningful();
        } else {
            self.current = self
                .sequence
                .next_meaningful_after(self.current)
                .unwrap_or_else(|| self.sequence.first_meaningful());
        }

        Step::Phase(self.current_phase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_kind_display_names() {
        assert_eq!(PhaseKind::Inhale.display_name(), "Inhale");
        assert_eq!(PhaseKind::InhaleHold.display_name(), "Inhale hold");
        assert_eq!(PhaseKind::Exhale.display_name(), "Exhale");
        assert_eq!(PhaseKind::ExhaleHold.display_name(), "Exhale hold");
    }

    #[test]
    fn test_required_phases() {
        assert!(PhaseKind::Inhale.is_required());
        assert!(PhaseKind::InhaleHold.is_required());
        assert!(PhaseKind::Exhale.is_required());
        assert!(!PhaseKind::ExhaleHold.is_required());
    }

    #[test]
    fn test_validate_accepts_zero_exhale_hold() {
        let config = ExerciseConfig::from_seconds(5, 5, 5, 0, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_names_invalid_phases() {
        let config = ExerciseConfig::from_seconds(0, 5, 0, 0, 1);
        let err = config.validate().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Inhale"));
        assert!(msg.contains("Exhale"));
        assert!(!msg.contains("Inhale hold"));
    }

    #[test]
    fn test_validate_rejects_zero_laps() {
        let config = ExerciseConfig::from_seconds(5, 5, 5, 0, 0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_total_duration() {
        let config = ExerciseConfig::from_seconds(5, 5, 5, 3, 2);
        assert_eq!(config.lap_duration(), Duration::seconds(18));
        assert_eq!(config.total_duration(), Duration::seconds(36));
    }

    #[test]
    fn test_sequence_skips_zero_phases() {
        let config = ExerciseConfig::from_seconds(5, 5, 5, 0, 1);
        let seq = PhaseSequence::from_config(&config);

        assert_eq!(seq.first_meaningful(), 0);
        assert_eq!(seq.last_meaningful(), 2); // exhale, not exhale hold
        assert_eq!(seq.next_meaningful_after(2), None);
    }

    #[test]
    fn test_sequence_last_slot_meaningful() {
        let config = ExerciseConfig::from_seconds(4, 4, 4, 4, 1);
        let seq = PhaseSequence::from_config(&config);
        assert_eq!(seq.last_meaningful(), 3);
    }

    #[test]
    fn test_sequence_fallback_when_nothing_meaningful() {
        let config = ExerciseConfig::from_seconds(0, 0, 0, 0, 1);
        let seq = PhaseSequence::from_config(&config);
        assert_eq!(seq.first_meaningful(), 0);
    }

    #[test]
    fn test_sequencer_full_lap_with_final_hold() {
        let config = ExerciseConfig::from_seconds(5, 5, 5, 3, 1);
        let mut seq = Sequencer::new(&config).unwrap();

        assert_eq!(seq.current_phase().kind, PhaseKind::Inhale);

        for expected in [PhaseKind::InhaleHold, PhaseKind::Exhale, PhaseKind::ExhaleHold] {
            match seq.advance() {
                Step::Phase(phase) => assert_eq!(phase.kind, expected),
                Step::Complete => panic!("ended early before {expected}"),
            }
        }

        assert_eq!(seq.advance(), Step::Complete);
    }

    #[test]
    fn test_sequencer_laps_wrap_and_skip() {
        // Exhale hold is zero: exhale ends the lap.
        let config = ExerciseConfig::from_seconds(5, 5, 5, 0, 2);
        let mut seq = Sequencer::new(&config).unwrap();

        assert_eq!(seq.current_phase().kind, PhaseKind::Inhale);
        assert_eq!(seq.lap(), 1);

        seq.advance(); // inhale hold
        seq.advance(); // exhale

        match seq.advance() {
            Step::Phase(phase) => {
                assert_eq!(phase.kind, PhaseKind::Inhale);
                assert_eq!(seq.lap(), 2);
            }
            Step::Complete => panic!("session ended after one lap"),
        }

        seq.advance();
        seq.advance();
        assert_eq!(seq.advance(), Step::Complete);
    }

    #[test]
    fn test_sequencer_rejects_invalid_config() {
        let config = ExerciseConfig::from_seconds(0, 5, 5, 0, 1);
        assert!(Sequencer::new(&config).is_err());
    }
}
