//! The `start` command: run one exercise session in the terminal.

use crate::cli::args::{ExerciseArgs, OutputFormat};
use crate::config::Config;
use crate::error::BreathboxError;
use crate::output::format_outcome;
use crate::tui;

/// Run a breathing exercise and report how it ended.
///
/// # Errors
///
/// Returns a configuration error before touching the terminal when the
/// resolved settings are invalid, or a terminal error if the TUI fails.
pub fn start(args: &ExerciseArgs, format: OutputFormat) -> Result<String, BreathboxError> {
    let settings = Config::load()?;
    let config = args.resolve(settings.exercise)?;
    config.validate()?;

    let outcome = tui::run_exercise(&config, settings.general.bell)?;
    format_outcome(outcome, &config, format)
}
