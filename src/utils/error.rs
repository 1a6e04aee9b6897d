//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {}: {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write manifest {}: {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while running the captured command
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("No command given")]
    EmptyCommand,

    #[error("Failed to run '{program}': {source}")]
    SpawnFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur while creating or writing a capture file
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to create temporary file in {}: {source}", .dir.display())]
    CreateFailed {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to keep temporary file: {0}")]
    PersistFailed(#[from] tempfile::PersistError),

    #[error("Failed to write file: {0}")]
    WriteFailed(#[source] std::io::Error),
}

/// Errors that can occur during cleanup
#[derive(Error, Debug)]
pub enum CleanupError {
    #[error("Failed to remove {}: {source}", .path.display())]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
