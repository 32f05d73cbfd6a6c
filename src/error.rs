//! Error types for breathbox.

use thiserror::Error;

/// Errors that can occur in breathbox.
#[derive(Debug, Error)]
pub enum BreathboxError {
    /// Configuration or environment error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// One or more required exercise settings is invalid.
    ///
    /// Carries the display names of the offending settings so the user
    /// knows exactly which fields to fix.
    #[error("Invalid values for required settings: {0}. Value must be greater than 0.")]
    InvalidSettings(String),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Terminal setup or rendering failed.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

impl BreathboxError {
    /// Build an `InvalidSettings` error from the offending setting names.
    #[must_use]
    pub fn invalid_settings(names: &[&str]) -> Self {
        Self::InvalidSettings(names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_settings_message_names_fields() {
        let err = BreathboxError::invalid_settings(&["Inhale", "Exhale"]);
        let msg = err.to_string();
        assert!(msg.contains("Inhale, Exhale"));
        assert!(msg.contains("greater than 0"));
    }
}
