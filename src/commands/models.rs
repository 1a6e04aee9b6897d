use crate::manifest::Manifest;
use crate::utils::config::{self, CLEANUP_FLAG};
use std::ffi::OsString;
use std::path::PathBuf;

/// What a command line asks capout to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// No arguments: print usage and exit 1
    Usage,

    /// `-c` as the only argument
    Cleanup,

    /// Anything else: the whole argument list is the command to run
    Capture(Vec<OsString>),
}

impl Invocation {
    /// Classify the arguments that follow the program name.
    ///
    /// `-c` only selects cleanup when it stands alone; `capout -c foo`
    /// runs a program named `-c`.
    pub fn from_args(args: Vec<OsString>) -> Self {
        match args.as_slice() {
            [] => Invocation::Usage,
            [only] if only == CLEANUP_FLAG => Invocation::Cleanup,
            _ => Invocation::Capture(args),
        }
    }
}

/// Arguments for the capture command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CaptureArgs {
    /// Program followed by its arguments
    pub command: Vec<OsString>,

    /// Directory the capture file is created in
    pub temp_dir: PathBuf,

    /// Manifest the new file is recorded in
    pub manifest: Manifest,
}

impl CaptureArgs {
    /// Capture `command` using the default temp dir and manifest
    pub fn new(command: Vec<OsString>) -> Self {
        Self {
            command,
            ..Default::default()
        }
    }
}

impl Default for CaptureArgs {
    fn default() -> Self {
        Self {
            command: Vec::new(),
            temp_dir: config::temp_dir(),
            manifest: Manifest::at_default_location(),
        }
    }
}

/// Arguments for the cleanup command
#[derive(Debug, Clone)]
pub struct CleanupArgs {
    /// Only manifest entries directly inside this directory are deleted
    pub temp_dir: PathBuf,

    /// Manifest listing the files to delete
    pub manifest: Manifest,
}

impl Default for CleanupArgs {
    fn default() -> Self {
        Self {
            temp_dir: config::temp_dir(),
            manifest: Manifest::at_default_location(),
        }
    }
}

/// Outcome of a cleanup run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupReport {
    /// Files deleted
    pub removed: usize,

    /// Entries outside the temp directory, left alone
    pub skipped: usize,
}

impl CleanupReport {
    pub fn summary(&self) -> String {
        format!(
            "removed {} file(s), skipped {} outside the temp directory",
            self.removed, self.skipped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(parts: &[&str]) -> Vec<OsString> {
        parts.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_no_args_is_usage() {
        assert_eq!(Invocation::from_args(vec![]), Invocation::Usage);
    }

    #[test]
    fn test_lone_flag_is_cleanup() {
        assert_eq!(Invocation::from_args(args(&["-c"])), Invocation::Cleanup);
    }

    #[test]
    fn test_flag_with_more_args_is_capture() {
        assert_eq!(
            Invocation::from_args(args(&["-c", "extra"])),
            Invocation::Capture(args(&["-c", "extra"]))
        );
    }

    #[test]
    fn test_flag_after_command_is_capture() {
        assert_eq!(
            Invocation::from_args(args(&["ls", "-c"])),
            Invocation::Capture(args(&["ls", "-c"]))
        );
    }

    #[test]
    fn test_leading_separator_is_capture() {
        assert_eq!(
            Invocation::from_args(args(&["--", "-c"])),
            Invocation::Capture(args(&["--", "-c"]))
        );
        assert_eq!(
            Invocation::from_args(args(&["--"])),
            Invocation::Capture(args(&["--"]))
        );
    }

    #[test]
    fn test_report_summary() {
        let report = CleanupReport { removed: 2, skipped: 1 };
        assert_eq!(
            report.summary(),
            "removed 2 file(s), skipped 1 outside the temp directory"
        );
    }
}
