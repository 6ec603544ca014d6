//! Persistence: path resolution, backups and the save worker.
//!
//! This module provides:
//! - Target path resolution ([`Target`], [`expand_home`])
//! - Timestamped backups ([`create_backup`])
//! - Atomic file writes ([`FileStore`], [`write_atomic`])
//! - The single-consumer save queue ([`PersistHandle`], [`SaveTicket`])

mod backup;
mod error;
mod path;
mod store;
mod worker;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;

pub use backup::{backup_path, create_backup};
pub use error::{BackupError, HomeDirError, PersistError};
pub use path::{DEFAULT_CONFIG_PATH, TEST_CONFIG_PATH, Target, expand_home};
pub use store::{FileStore, write_atomic};
pub use worker::{PersistHandle, SaveTicket};

use std::path::PathBuf;

use crate::model::Config;

/// What a successful save did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    /// The file written.
    pub path: PathBuf,
    /// The backup made first, if any.
    pub backup: Option<PathBuf>,
    /// Size of the written text.
    pub bytes: usize,
}

/// Abstraction over where snapshots are written.
///
/// `write` is blocking; the worker runs it on the blocking pool.
///
/// # Testing
///
/// Use [`mock::MockStore`] in tests to avoid filesystem dependencies.
pub trait ConfigStore: Send + Sync + 'static {
    /// Writes one snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if the backup or the write fails.
    fn write(&self, snapshot: &Config) -> Result<SaveOutcome, PersistError>;
}
