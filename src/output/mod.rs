//! Output writers for captured command output.
//!
//! Captured files are created in the temp directory under a random name
//! and hold the raw stdout bytes of a single command run.

pub mod capture_file;

// Re-export main functions
pub use capture_file::{create_capture_file, write_capture, CaptureFile};
