//! Utility modules for configuration, error handling, and path conversion.

pub mod error;
pub mod config;
pub mod path;

// Re-export commonly used error types for convenience
pub use error::{CleanupError, ManifestError, OutputError, ProcessError};
