//! Child process execution.

pub mod runner;

pub use runner::{run_command, CommandOutput};
