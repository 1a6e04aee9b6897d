use crate::utils::config::USAGE;
use crate::utils::path::path_to_bytes;
use std::io::{self, Write};
use std::path::Path;

/// Display usage information
pub fn display_usage() {
    println!("{}", USAGE);
}

/// Print a captured file's path on its own line
///
/// Writes the raw path bytes on Unix so non-UTF-8 temp dirs survive.
pub fn print_path(path: &Path) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(&path_to_bytes(path))?;
    stdout.write_all(b"\n")?;
    stdout.flush()
}
