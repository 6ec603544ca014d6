//! Error types for persistence.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// The home directory could not be determined for `~/` expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot expand '~/': home directory is unknown")]
pub struct HomeDirError;

/// A backup copy could not be made.
#[derive(Debug, Error)]
pub enum BackupError {
    /// The file to back up could not be read.
    #[error("Failed to read {path} for backup: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The backup copy could not be written.
    #[error("Failed to write backup {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A save request failed.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Backing up the previous file failed; the target was left untouched.
    #[error(transparent)]
    Backup(#[from] BackupError),

    /// Writing the new file failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The blocking write task did not complete.
    #[error("Save task failed: {0}")]
    Task(#[source] tokio::task::JoinError),

    /// The worker stopped before answering.
    #[error("Persistence worker is no longer running")]
    WorkerGone,
}
