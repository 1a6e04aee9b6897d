//! Configuration and constants for the CLI.

use std::path::PathBuf;

/// File name of the manifest inside the temp directory
pub const MANIFEST_FILE_NAME: &str = "capout.manifest";

/// Sole argument that selects cleanup mode
pub const CLEANUP_FLAG: &str = "-c";

/// Prefix for captured output files (suffix is random)
pub const CAPTURE_FILE_PREFIX: &str = "tmp";

/// Usage text printed when no command is given
pub const USAGE: &str = "\
Usage: capout [-c] | <command...>
    Runs a command, saves the output to a temporary file, and prints
    the name of the temporary file.

  Options:
  -c Cleans the temporary files created by capout.";

/// Directory where captured files and the manifest live.
///
/// Honors `TMPDIR` on Unix.
pub fn temp_dir() -> PathBuf {
    std::env::temp_dir()
}

/// Manifest location for the current environment
pub fn default_manifest_path() -> PathBuf {
    temp_dir().join(MANIFEST_FILE_NAME)
}
