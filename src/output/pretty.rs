//! Pretty output formatting for breathbox.

use colored::Colorize;

use crate::exercise::{format_duration_mmss, ExerciseConfig, PhaseKind};
use crate::tui::ExerciseOutcome;

/// Format an exercise plan as a readable table.
#[must_use]
pub fn format_plan_pretty(config: &ExerciseConfig) -> String {
    let mut output = format!("Breathing exercise ({} laps)\n", config.laps);
    output.push_str(&"─".repeat(40));
    output.push('\n');

    for kind in PhaseKind::ALL {
        let duration = config.duration_of(kind);
        let value = if duration.num_seconds() == 0 {
            "skipped".dimmed().to_string()
        } else {
            format_duration_mmss(duration)
        };
        output.push_str(&format!("  {:<14} {value}\n", kind.display_name().bold()));
    }

    output.push('\n');
    output.push_str(&format!(
        "  {:<14} {}\n",
        "Lap time",
        format_duration_mmss(config.lap_duration()).yellow()
    ));
    output.push_str(&format!(
        "  {:<14} {}",
        "Total time",
        format_duration_mmss(config.total_duration()).yellow()
    ));

    output
}

/// Format a session outcome as a short message.
#[must_use]
pub fn format_outcome_pretty(outcome: ExerciseOutcome, config: &ExerciseConfig) -> String {
    match outcome {
        ExerciseOutcome::Completed => format!(
            "{} {} laps in {}",
            "Exercise complete!".green().bold(),
            config.laps,
            format_duration_mmss(config.total_duration())
        ),
        ExerciseOutcome::Exited => "Exercise exited early.".dimmed().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_pretty_lists_phases_and_total() {
        colored::control::set_override(false);
        let config = ExerciseConfig::from_seconds(5, 5, 5, 0, 2);
        let out = format_plan_pretty(&config);

        assert!(out.contains("Inhale"));
        assert!(out.contains("Exhale hold"));
        assert!(out.contains("skipped"));
        assert!(out.contains("00:30"));
    }

    #[test]
    fn test_outcome_pretty() {
        colored::control::set_override(false);
        let config = ExerciseConfig::from_seconds(5, 5, 5, 0, 2);

        let done = format_outcome_pretty(ExerciseOutcome::Completed, &config);
        assert!(done.contains("complete"));

        let exited = format_outcome_pretty(ExerciseOutcome::Exited, &config);
        assert!(exited.contains("exited"));
    }
}
