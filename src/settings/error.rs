//! Error types for settings parsing and resolution.

use std::path::PathBuf;

use thiserror::Error;

use crate::persist::HomeDirError;

/// Error type for settings operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the settings file.
    #[error("Failed to read settings file '{}': {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML settings.
    #[error("Failed to parse TOML settings: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write the settings file (for the init command).
    #[error("Failed to write settings file '{}': {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The target path starts with `~/` and there is no home directory.
    #[error(transparent)]
    HomeDir(#[from] HomeDirError),

    /// Two options that cannot be combined.
    #[error("Conflicting options: {0}")]
    Conflict(&'static str),
}
