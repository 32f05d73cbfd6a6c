//! Path resolution for breathbox configuration files.
//!
//! All breathbox data lives in `~/.breathbox/`:
//! - `config.yaml` - default exercise settings and output preferences

use std::path::PathBuf;

use crate::error::BreathboxError;

/// Paths to breathbox configuration files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.breathbox/`
    pub root: PathBuf,
    /// Config file: `~/.breathbox/config.yaml`
    pub config_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, BreathboxError> {
        let home = std::env::var("HOME").map_err(|_| {
            BreathboxError::Config("Could not determine home directory".to_string())
        })?;

        let root = PathBuf::from(home).join(".breathbox");

        Ok(Self {
            config_file: root.join("config.yaml"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            root,
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".breathbox"))
        })
    }
}
