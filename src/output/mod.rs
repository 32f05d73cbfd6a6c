//! Output formatting for breathbox.
//!
//! This module provides formatters for the exercise plan and the session
//! outcome in both human-readable and JSON form.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::BreathboxError;
use crate::exercise::ExerciseConfig;
use crate::tui::ExerciseOutcome;

pub use json::*;
pub use pretty::*;

/// Format an exercise plan based on output format.
///
/// # Errors
///
/// Returns `BreathboxError::Parse` if JSON serialization fails.
pub fn format_plan(config: &ExerciseConfig, format: OutputFormat) -> Result<String, BreathboxError> {
    match format {
        OutputFormat::Pretty => Ok(format_plan_pretty(config)),
        OutputFormat::Json => format_plan_json(config),
    }
}

/// Format a session outcome based on output format.
///
/// # Errors
///
/// Returns `BreathboxError::Parse` if JSON serialization fails.
pub fn format_outcome(
    outcome: ExerciseOutcome,
    config: &ExerciseConfig,
    format: OutputFormat,
) -> Result<String, BreathboxError> {
    match format {
        OutputFormat::Pretty => Ok(format_outcome_pretty(outcome, config)),
        OutputFormat::Json => format_outcome_json(outcome, config),
    }
}
