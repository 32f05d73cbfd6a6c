//! JSON output formatting for breathbox.

use serde_json::json;

use crate::error::BreathboxError;
use crate::exercise::{format_duration_mmss, ExerciseConfig, PhaseKind};
use crate::tui::ExerciseOutcome;

/// Format an exercise plan as JSON.
///
/// # Errors
///
/// Returns `BreathboxError::Parse` if JSON serialization fails.
pub fn format_plan_json(config: &ExerciseConfig) -> Result<String, BreathboxError> {
    let phases: Vec<_> = PhaseKind::ALL
        .iter()
        .map(|kind| {
            let seconds = config.duration_of(*kind).num_seconds();
            json!({
                "phase": kind.display_name(),
                "seconds": seconds,
                "skipped": seconds == 0,
            })
        })
        .collect();

    let output = json!({
        "phases": phases,
        "laps": config.laps,
        "lap_seconds": config.lap_duration().num_seconds(),
        "total_seconds": config.total_duration().num_seconds(),
        "total": format_duration_mmss(config.total_duration()),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a session outcome as JSON.
///
/// # Errors
///
/// Returns `BreathboxError::Parse` if JSON serialization fails.
pub fn format_outcome_json(
    outcome: ExerciseOutcome,
    config: &ExerciseConfig,
) -> Result<String, BreathboxError> {
    let output = json!({
        "completed": outcome == ExerciseOutcome::Completed,
        "laps": config.laps,
        "total_seconds": config.total_duration().num_seconds(),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_json_marks_skipped_phases() {
        let config = ExerciseConfig::from_seconds(5, 5, 5, 0, 2);
        let out = format_plan_json(&config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["laps"], 2);
        assert_eq!(value["total_seconds"], 30);
        assert_eq!(value["phases"][3]["skipped"], true);
        assert_eq!(value["phases"][0]["skipped"], false);
    }

    #[test]
    fn test_outcome_json() {
        let config = ExerciseConfig::from_seconds(5, 5, 5, 0, 1);
        let out = format_outcome_json(ExerciseOutcome::Exited, &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["completed"], false);
    }
}
