//! The `plan` command: preview the exercise schedule.

use crate::cli::args::{ExerciseArgs, OutputFormat};
use crate::config::Config;
use crate::error::BreathboxError;
use crate::output::format_plan;

/// Print the phase schedule and total time for the given settings.
///
/// # Errors
///
/// Returns a configuration error when the resolved settings are invalid.
pub fn plan(args: &ExerciseArgs, format: OutputFormat) -> Result<String, BreathboxError> {
    let settings = Config::load()?;
    let config = args.resolve(settings.exercise)?;
    config.validate()?;

    format_plan(&config, format)
}
