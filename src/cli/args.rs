use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::ExerciseDefaults;
use crate::error::BreathboxError;
use crate::exercise::{parse_duration, ExerciseConfig};

#[derive(Parser)]
#[command(name = "breathbox")]
#[command(about = "A box-breathing exercise timer for the terminal")]
#[command(long_about = "breathbox - A box-breathing exercise timer for the terminal

Guides you through a timed breathing exercise: inhale, hold, exhale, hold,
repeated for a configured number of laps. Durations for the three required
phases must be positive; the final hold is optional and skipped when zero.

QUICK START:
  breathbox start                      Run an exercise with your defaults
  breathbox start -i 4 -e 6 --laps 5   Override phase durations and laps
  breathbox tui                        Interactive settings form
  breathbox plan                       Preview the schedule and total time

Defaults are read from ~/.breathbox/config.yaml when present.

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  breathbox <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a breathing exercise
    ///
    /// Takes over the terminal for the duration of the exercise and shows
    /// the current phase, lap, and remaining time. Space pauses and
    /// resumes; q exits early.
    ///
    /// # Examples
    ///
    ///   breathbox start
    ///   breathbox start --inhale 4 --exhale 6 --laps 5
    ///   breathbox start --exhale-hold 4    Full box breathing
    #[command(alias = "s")]
    Start(ExerciseArgs),

    /// Preview the exercise schedule without running it
    ///
    /// Prints each phase with its duration, the lap time, and the total
    /// session time.
    ///
    /// # Examples
    ///
    ///   breathbox plan
    ///   breathbox plan --laps 10 -o json
    #[command(alias = "p")]
    Plan(ExerciseArgs),

    /// Interactive mode
    ///
    /// Opens a settings form for the five exercise values. Enter starts
    /// the exercise; finishing or exiting it returns to the form.
    Tui,

    /// Generate shell completions
    ///
    /// Supports bash, zsh, fish, powershell, and elvish.
    ///
    /// # Examples
    ///
    ///   breathbox completions zsh > ~/.zsh/completions/_breathbox
    Completions {
        /// Shell to generate completions for
        shell: String,
    },
}

/// Exercise settings shared by `start` and `plan`.
///
/// Durations accept "5", "5s", or "1m30s"; bare numbers are seconds.
/// Anything not given falls back to the config file, then to the built-in
/// defaults (5s / 5s / 5s / no final hold, 2 laps).
#[derive(Args, Debug, Default)]
pub struct ExerciseArgs {
    /// Inhale duration (required phase, must be positive)
    #[arg(long, short = 'i')]
    pub inhale: Option<String>,

    /// Inhale breath-holding duration (required phase, must be positive)
    #[arg(long)]
    pub inhale_hold: Option<String>,

    /// Exhale duration (required phase, must be positive)
    #[arg(long, short = 'e')]
    pub exhale: Option<String>,

    /// Exhale breath-holding duration (optional phase, 0 skips it)
    #[arg(long)]
    pub exhale_hold: Option<String>,

    /// Number of laps
    #[arg(long, short = 'l')]
    pub laps: Option<u32>,
}

impl ExerciseArgs {
    /// Resolve the arguments against configured defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for any duration that does not parse.
    pub fn resolve(&self, defaults: ExerciseDefaults) -> Result<ExerciseConfig, BreathboxError> {
        let mut config = defaults.to_config();

        if let Some(ref s) = self.inhale {
            config.inhale = parse_flag_duration(s, "--inhale")?;
        }
        if let Some(ref s) = self.inhale_hold {
            config.inhale_hold = parse_flag_duration(s, "--inhale-hold")?;
        }
        if let Some(ref s) = self.exhale {
            config.exhale = parse_flag_duration(s, "--exhale")?;
        }
        if let Some(ref s) = self.exhale_hold {
            config.exhale_hold = parse_flag_duration(s, "--exhale-hold")?;
        }
        if let Some(laps) = self.laps {
            config.laps = laps;
        }

        Ok(config)
    }
}

fn parse_flag_duration(s: &str, flag: &str) -> Result<chrono::Duration, BreathboxError> {
    parse_duration(s).ok_or_else(|| {
        BreathboxError::Config(format!(
            "Invalid duration '{s}' for {flag} (try '5', '5s', or '1m30s')"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_start_args_parse() {
        let cli = Cli::parse_from(["breathbox", "start", "-i", "4", "--exhale", "6", "-l", "5"]);
        if let Commands::Start(args) = cli.command {
            assert_eq!(args.inhale.as_deref(), Some("4"));
            assert_eq!(args.exhale.as_deref(), Some("6"));
            assert_eq!(args.laps, Some(5));
        } else {
            panic!("expected start command");
        }
    }

    #[test]
    fn test_global_output_flag() {
        let cli = Cli::parse_from(["breathbox", "plan", "-o", "json"]);
        assert_eq!(cli.output, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_uses_defaults_for_missing_flags() {
        let args = ExerciseArgs {
            inhale: Some("4s".to_string()),
            ..ExerciseArgs::default()
        };
        let config = args.resolve(ExerciseDefaults::default()).unwrap();

        assert_eq!(config.inhale, chrono::Duration::seconds(4));
        assert_eq!(config.inhale_hold, chrono::Duration::seconds(5));
        assert_eq!(config.laps, 2);
    }

    #[test]
    fn test_resolve_rejects_bad_duration() {
        let args = ExerciseArgs {
            exhale: Some("soon".to_string()),
            ..ExerciseArgs::default()
        };
        let err = args.resolve(ExerciseDefaults::default()).unwrap_err();
        assert!(err.to_string().contains("--exhale"));
    }
}
