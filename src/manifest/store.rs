//! On-disk manifest file.

use crate::utils::config::default_manifest_path;
use crate::utils::error::ManifestError;
use crate::utils::path::{bytes_to_path, path_to_bytes};
use log::debug;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Handle to a manifest file
///
/// Holds only the location; every operation goes to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    /// Manifest stored at an explicit path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Manifest at `<temp dir>/capout.manifest`
    pub fn at_default_location() -> Self {
        Self::new(default_manifest_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one entry followed by a newline, creating the file if absent
    pub fn append(&self, entry: &Path) -> Result<(), ManifestError> {
        let mut line = path_to_bytes(entry);
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|source| self.write_error(source))?;

        // Whole line in a single write
        file.write_all(&line)
            .map_err(|source| self.write_error(source))?;

        debug!("Recorded {} in {}", entry.display(), self.path.display());
        Ok(())
    }

    /// Read every entry in the manifest
    ///
    /// # Errors
    /// * `ManifestError::ReadFailed` - the manifest is missing or unreadable
    pub fn read_entries(&self) -> Result<Vec<PathBuf>, ManifestError> {
        let contents = fs::read(&self.path).map_err(|source| ManifestError::ReadFailed {
            path: self.path.clone(),
            source,
        })?;

        Ok(parse_entries(&contents))
    }

    /// Truncate the manifest to zero length
    pub fn clear(&self) -> Result<(), ManifestError> {
        fs::write(&self.path, b"").map_err(|source| self.write_error(source))
    }

    fn write_error(&self, source: std::io::Error) -> ManifestError {
        ManifestError::WriteFailed {
            path: self.path.clone(),
            source,
        }
    }
}

/// Split raw manifest contents into entries.
///
/// Blank lines (including the one after the final newline) are dropped.
/// Nothing else is validated.
pub fn parse_entries(contents: &[u8]) -> Vec<PathBuf> {
    contents
        .split(|&b| b == b'\n')
        .filter(|line| !line.is_empty())
        .map(bytes_to_path)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_entries_tolerates_trailing_newline() {
        let entries = parse_entries(b"/tmp/tmpA\n/tmp/tmpB\n");
        assert_eq!(entries, vec![PathBuf::from("/tmp/tmpA"), PathBuf::from("/tmp/tmpB")]);
    }

    #[test]
    fn test_parse_entries_empty() {
        assert!(parse_entries(b"").is_empty());
        assert!(parse_entries(b"\n\n").is_empty());
    }

    #[test]
    fn test_parse_entries_keeps_unterminated_last_line() {
        let entries = parse_entries(b"/tmp/tmpA\n/elsewhere/file");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], PathBuf::from("/elsewhere/file"));
    }

    #[test]
    fn test_append_creates_manifest() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::new(dir.path().join("capout.manifest"));

        manifest.append(Path::new("/tmp/tmpA")).unwrap();
        manifest.append(Path::new("/tmp/tmpB")).unwrap();

        let raw = fs::read_to_string(manifest.path()).unwrap();
        assert_eq!(raw, "/tmp/tmpA\n/tmp/tmpB\n");
    }

    #[test]
    fn test_clear_truncates() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::new(dir.path().join("capout.manifest"));
        manifest.append(Path::new("/tmp/tmpA")).unwrap();

        manifest.clear().unwrap();

        assert!(manifest.read_entries().unwrap().is_empty());
        assert_eq!(fs::metadata(manifest.path()).unwrap().len(), 0);
    }

    #[test]
    fn test_read_missing_manifest_fails() {
        let dir = TempDir::new().unwrap();
        let manifest = Manifest::new(dir.path().join("absent.manifest"));

        let err = manifest.read_entries().unwrap_err();
        assert!(matches!(err, ManifestError::ReadFailed { .. }));
    }
}
