//! Configuration settings for breathbox.
//!
//! Settings are loaded from `~/.breathbox/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::BreathboxError;
use crate::exercise::ExerciseConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Default exercise settings.
    pub exercise: ExerciseDefaults,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Ring the terminal bell on sound cues.
    #[serde(default = "default_true")]
    pub bell: bool,
}

/// Default durations and lap count for new exercises.
///
/// Durations are whole seconds; `exhale_hold_secs` may be 0 to skip the
/// final hold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct ExerciseDefaults {
    /// Inhale time in seconds.
    #[serde(default = "default_phase_secs")]
    pub inhale_secs: i64,
    /// Inhale breath-holding time in seconds.
    #[serde(default = "default_phase_secs")]
    pub inhale_hold_secs: i64,
    /// Exhale time in seconds.
    #[serde(default = "default_phase_secs")]
    pub exhale_secs: i64,
    /// Exhale breath-holding time in seconds (0 skips the phase).
    #[serde(default)]
    pub exhale_hold_secs: i64,
    /// Number of laps.
    #[serde(default = "default_laps")]
    pub laps: u32,
}

impl ExerciseDefaults {
    /// Build an exercise config from these defaults.
    #[must_use]
    pub const fn to_config(self) -> ExerciseConfig {
        ExerciseConfig::from_seconds(
            self.inhale_secs,
            self.inhale_hold_secs,
            self.exhale_secs,
            self.exhale_hold_secs,
            self.laps,
        )
    }
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_true() -> bool {
    true
}

const fn default_phase_secs() -> i64 {
    5
}

const fn default_laps() -> u32 {
    2
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            bell: default_true(),
        }
    }
}

impl Default for ExerciseDefaults {
    fn default() -> Self {
        Self {
            inhale_secs: default_phase_secs(),
            inhale_hold_secs: default_phase_secs(),
            exhale_secs: default_phase_secs(),
            exhale_hold_secs: 0,
            laps: default_laps(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self, BreathboxError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, BreathboxError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            BreathboxError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            BreathboxError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }
}
