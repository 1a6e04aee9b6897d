//! Cleanup command implementation.
//!
//! Deletes every manifest entry that sits directly in the temp directory,
//! then empties the manifest. Entries anywhere else are left alone so a
//! hand-edited manifest cannot be used to delete arbitrary files.

use super::models::{CleanupArgs, CleanupReport};
use crate::utils::error::CleanupError;
use anyhow::{Context, Result};
use log::debug;
use std::fs;

/// Execute the cleanup command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Manifest missing or unreadable (nothing is deleted)
/// * A listed file in the temp directory cannot be removed, including one
///   that no longer exists (manifest is left as is)
/// * Manifest cannot be truncated
pub fn execute_cleanup(args: CleanupArgs) -> Result<CleanupReport> {
    let entries = args
        .manifest
        .read_entries()
        .context("Failed to read manifest")?;

    debug!("Manifest lists {} entries", entries.len());

    let mut report = CleanupReport::default();

    for entry in entries {
        if entry.parent() != Some(args.temp_dir.as_path()) {
            debug!("Skipping {} (not in {})", entry.display(), args.temp_dir.display());
            report.skipped += 1;
            continue;
        }

        if let Err(source) = fs::remove_file(&entry) {
            return Err(CleanupError::RemoveFailed { path: entry, source })
                .context("Failed to remove captured file");
        }

        debug!("Removed {}", entry.display());
        report.removed += 1;
    }

    args.manifest
        .clear()
        .context("Failed to clear manifest")?;

    Ok(report)
}
