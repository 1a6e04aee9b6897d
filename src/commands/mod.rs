//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the library components to perform user tasks.

pub mod capture;
pub mod cleanup;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use capture::{execute_capture, validate_args};
pub use cleanup::execute_cleanup;
pub use models::{CaptureArgs, CleanupArgs, CleanupReport, Invocation};
pub use utils::{display_usage, print_path};
