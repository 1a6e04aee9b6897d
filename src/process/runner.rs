//! Runs a command and buffers its standard output.

use crate::utils::error::ProcessError;
use log::debug;
use std::ffi::OsString;
use std::process::{Command, ExitStatus, Stdio};

/// Result of running a command to completion
#[derive(Debug)]
pub struct CommandOutput {
    /// Raw stdout bytes, unmodified
    pub stdout: Vec<u8>,

    /// Exit status of the child
    pub status: ExitStatus,
}

/// Run `argv[0]` with the remaining arguments and wait for it to exit.
///
/// Stdout is piped into memory. Stderr and stdin stay attached to the
/// caller's terminal. Blocks until the child has exited; there is no timeout.
///
/// # Errors
/// * `ProcessError::EmptyCommand` - `argv` is empty
/// * `ProcessError::SpawnFailed` - command not found, not executable, etc.
pub fn run_command(argv: &[OsString]) -> Result<CommandOutput, ProcessError> {
    let (program, args) = argv.split_first().ok_or(ProcessError::EmptyCommand)?;

    debug!("Running {:?}", argv);

    let output = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| ProcessError::SpawnFailed {
            program: program.to_string_lossy().into_owned(),
            source,
        })?;

    debug!(
        "{} exited with {} ({} bytes of output)",
        program.to_string_lossy(),
        output.status,
        output.stdout.len()
    );

    Ok(CommandOutput {
        stdout: output.stdout,
        status: output.status,
    })
}
