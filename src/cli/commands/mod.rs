//! Command implementations for the breathbox CLI.

mod completions;
mod plan;
mod start;

pub use completions::completions;
pub use plan::plan;
pub use start::start;
