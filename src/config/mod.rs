//! Configuration management for breathbox.
//!
//! This module handles loading defaults from `~/.breathbox/`. The config
//! file is read-only: settings entered for a session are never written back.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, ExerciseDefaults, GeneralConfig};
