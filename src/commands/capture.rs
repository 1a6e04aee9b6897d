//! Capture command implementation.
//!
//! The capture command:
//! 1. Creates a uniquely named file in the temp directory
//! 2. Records it in the manifest
//! 3. Runs the command with stdout buffered in memory
//! 4. Writes the buffered output to the file
//!
//! The file is recorded before the command runs, so a command that fails
//! to spawn still leaves an (empty) file that the next cleanup removes.

use super::models::CaptureArgs;
use crate::output::{create_capture_file, write_capture};
use crate::process::run_command;
use anyhow::{Context, Result};
use log::{debug, warn};
use std::path::PathBuf;

/// Execute the capture command
///
/// **Public** - main entry point called from main.rs
///
/// # Returns
/// Path of the file holding the command's stdout
///
/// # Errors
/// * Temp file creation or write failures
/// * Manifest write failures
/// * Command spawn failures (not found, permission denied)
///
/// A command that runs but exits non-zero is not an error; its output is
/// still captured.
pub fn execute_capture(args: CaptureArgs) -> Result<PathBuf> {
    validate_args(&args)?;

    let capture = create_capture_file(&args.temp_dir)
        .context("Failed to create capture file")?;

    args.manifest
        .append(capture.path())
        .context("Failed to record capture file in manifest")?;

    let output = run_command(&args.command)
        .context("Failed to run command")?;

    if !output.status.success() {
        warn!(
            "{} exited with {}",
            args.command[0].to_string_lossy(),
            output.status
        );
    }

    let path = write_capture(capture, &output.stdout)
        .context("Failed to write captured output")?;

    debug!("Captured {} bytes into {}", output.stdout.len(), path.display());

    Ok(path)
}

/// Validate capture arguments
///
/// **Public** - can be called before execute_capture for early validation
pub fn validate_args(args: &CaptureArgs) -> Result<()> {
    if args.command.is_empty() {
        anyhow::bail!("Command cannot be empty");
    }

    if args.command[0].is_empty() {
        anyhow::bail!("Program name cannot be empty");
    }

    Ok(())
}
