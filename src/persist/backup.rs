//! Timestamped backup copies.

use std::fs;
use std::path::{Path, PathBuf};

use crate::time::Clock;

use super::error::BackupError;
use super::path::with_suffix;

/// Returns `<path>.<YYYYMMDD_HHMMSS>.backup`.
#[must_use]
pub fn backup_path(path: &Path, clock: &dyn Clock) -> PathBuf {
    with_suffix(path, &format!(".{}.backup", clock.stamp()))
}

/// Copies the current bytes of `path` next to it, keeping its permissions.
///
/// Backups are never pruned. Two backups within the same second share a
/// name and the later one wins.
///
/// # Errors
///
/// Returns [`BackupError::Read`] if `path` cannot be read and
/// [`BackupError::Write`] if the copy cannot be written.
pub fn create_backup(path: &Path, clock: &dyn Clock) -> Result<PathBuf, BackupError> {
    let content = fs::read(path).map_err(|source| BackupError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let permissions = fs::metadata(path)
        .map_err(|source| BackupError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .permissions();

    let backup = backup_path(path, clock);
    let write_err = |source| BackupError::Write {
        path: backup.clone(),
        source,
    };
    fs::write(&backup, content).map_err(write_err)?;
    fs::set_permissions(&backup, permissions).map_err(write_err)?;

    tracing::info!(from = %path.display(), to = %backup.display(), "backup created");
    Ok(backup)
}
