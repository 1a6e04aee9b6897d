//! Captured output files.
//!
//! Creates uniquely named files in the temp directory and writes
//! captured bytes into them.

use crate::utils::config::CAPTURE_FILE_PREFIX;
use crate::utils::error::OutputError;
use log::debug;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// A freshly created, kept temp file waiting for captured output
#[derive(Debug)]
pub struct CaptureFile {
    file: File,
    path: PathBuf,
}

impl CaptureFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Create a new uniquely named file in `dir`
///
/// **Public** - first step of a capture
///
/// The file is created exclusively under a random name and is not removed
/// when the handle is dropped.
///
/// # Arguments
/// * `dir` - Directory to create the file in (normally the temp directory)
///
/// # Errors
/// * `OutputError::CreateFailed` - directory missing or not writable
/// * `OutputError::PersistFailed` - the file could not be detached from cleanup
pub fn create_capture_file(dir: &Path) -> Result<CaptureFile, OutputError> {
    let named = tempfile::Builder::new()
        .prefix(CAPTURE_FILE_PREFIX)
        .tempfile_in(dir)
        .map_err(|source| OutputError::CreateFailed {
            dir: dir.to_path_buf(),
            source,
        })?;

    let (file, path) = named.keep()?;

    debug!("Created capture file: {}", path.display());

    Ok(CaptureFile { file, path })
}

/// Write captured bytes into the file and close it
///
/// **Public** - last step of a capture
///
/// # Returns
/// Path of the written file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write (e.g. disk full)
pub fn write_capture(capture: CaptureFile, content: &[u8]) -> Result<PathBuf, OutputError> {
    let CaptureFile { file, path } = capture;

    let mut writer = BufWriter::new(file);

    writer.write_all(content)
        .map_err(OutputError::WriteFailed)?;

    writer.flush()
        .map_err(OutputError::WriteFailed)?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_capture_file_in_dir() {
        let dir = TempDir::new().unwrap();

        let capture = create_capture_file(dir.path()).unwrap();
        let path = capture.path().to_path_buf();

        assert_eq!(path.parent(), Some(dir.path()));
        assert!(path.file_name().unwrap().to_string_lossy().starts_with(CAPTURE_FILE_PREFIX));
        assert!(path.exists());
    }

    #[test]
    fn test_capture_file_survives_drop() {
        let dir = TempDir::new().unwrap();

        let path = create_capture_file(dir.path()).unwrap().path().to_path_buf();

        assert!(path.exists());
    }

    #[test]
    fn test_create_capture_file_names_are_unique() {
        let dir = TempDir::new().unwrap();

        let a = create_capture_file(dir.path()).unwrap();
        let b = create_capture_file(dir.path()).unwrap();

        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn test_create_in_missing_dir_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = create_capture_file(&missing).unwrap_err();
        assert!(matches!(err, OutputError::CreateFailed { .. }));
    }

    #[test]
    fn test_write_capture_is_byte_exact() {
        let dir = TempDir::new().unwrap();
        let content = [0u8, 159, 146, 150, b'\n', b'x'];

        let capture = create_capture_file(dir.path()).unwrap();
        let path = write_capture(capture, &content).unwrap();

        assert_eq!(fs::read(path).unwrap(), content);
    }
}
