//! breathbox - A box-breathing exercise timer for the terminal
//!
//! This crate guides the user through a timed breathing exercise made of
//! repeating phases (inhale, inhale hold, exhale, exhale hold), repeated
//! for a configured number of laps.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod exercise;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::BreathboxError;
pub use exercise::{CountdownTimer, ExerciseConfig, ExerciseSession, PhaseKind};
