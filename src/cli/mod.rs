//! Command-line interface for breathbox.

pub mod args;
pub mod commands;
