//! capout CLI
//!
//! Runs a command, saves its output to a temporary file, and prints the
//! file's name. `capout -c` removes every file captured so far.

use anyhow::{Context, Result};
use env_logger::Env;
use log::info;
use std::process::ExitCode;

use capout::commands::{
    display_usage, execute_capture, execute_cleanup, print_path, CaptureArgs, CleanupArgs,
    Invocation,
};

fn main() -> Result<ExitCode> {
    // Every argument, including a leading `--`, belongs to the captured command
    let invocation = Invocation::from_args(std::env::args_os().skip(1).collect());

    // Setup logging (stderr; stdout carries the captured path)
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match invocation {
        Invocation::Usage => {
            display_usage();
            return Ok(ExitCode::from(1));
        }

        Invocation::Cleanup => {
            let report = execute_cleanup(CleanupArgs::default())?;
            info!("Cleanup: {}", report.summary());
        }

        Invocation::Capture(command) => {
            let path = execute_capture(CaptureArgs::new(command))?;
            print_path(&path).context("Failed to print capture path")?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
