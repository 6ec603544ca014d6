//! File-based configuration store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::model::Config;
use crate::serialize::serialize;
use crate::time::{Clock, SystemClock};

use super::backup::create_backup;
use super::path::{Target, with_suffix};
use super::{ConfigStore, PersistError, SaveOutcome};

/// Writes snapshots to a [`Target`] as canonical text.
///
/// # Atomic Writes
///
/// Uses the write-to-temp-then-rename pattern:
/// 1. Back up the current file (when enabled and the file exists)
/// 2. Write to `{path}.tmp` with the current file's permissions
/// 3. Rename `{path}.tmp` to `{path}`
///
/// The file is either fully written or left as it was.
#[derive(Clone)]
pub struct FileStore {
    target: Target,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

impl FileStore {
    /// Creates a store using the system clock for backup names.
    #[must_use]
    pub fn new(target: Target) -> Self {
        Self::with_clock(target, SystemClock)
    }

    #[must_use]
    pub fn with_clock(target: Target, clock: impl Clock + 'static) -> Self {
        Self {
            target,
            clock: Arc::new(clock),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }
}

impl ConfigStore for FileStore {
    fn write(&self, snapshot: &Config) -> Result<SaveOutcome, PersistError> {
        let path = &self.target.path;

        let backup = if self.target.backup && path.exists() {
            Some(create_backup(path, self.clock.as_ref())?)
        } else {
            None
        };

        let text = serialize(snapshot);
        write_atomic(path, &text).map_err(|source| PersistError::Write {
            path: path.clone(),
            source,
        })?;

        Ok(SaveOutcome {
            path: path.clone(),
            backup,
            bytes: text.len(),
        })
    }
}

/// Replaces `path` with `content` via a sibling temp file.
///
/// Missing parent directories are created. An existing file's permissions
/// carry over to the replacement.
///
/// # Errors
///
/// Returns the first I/O error; the temp file may be left behind.
pub fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let temp_path: PathBuf = with_suffix(path, ".tmp");
    fs::write(&temp_path, content)?;

    match fs::metadata(path) {
        Ok(existing) => fs::set_permissions(&temp_path, existing.permissions())?,
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    fs::rename(&temp_path, path)
}
