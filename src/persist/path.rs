//! Target path resolution.

use std::path::{Path, PathBuf};

use super::error::HomeDirError;

/// Used when no path is configured.
pub const DEFAULT_CONFIG_PATH: &str = "~/.config/hypr/hyprland.conf";

/// Used in test mode, relative to the working directory.
pub const TEST_CONFIG_PATH: &str = "config/testdata/hyprland.conf";

/// A resolved configuration file and whether it may be backed up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: PathBuf,
    /// Copy the current file aside before it is read for editing or
    /// overwritten. Always off in test mode.
    pub backup: bool,
}

impl Target {
    /// Resolves a configured path.
    ///
    /// Test mode ignores `raw` and uses [`TEST_CONFIG_PATH`] as is, with
    /// backups disabled. Otherwise an empty path means
    /// [`DEFAULT_CONFIG_PATH`] and a leading `~/` is expanded.
    ///
    /// # Errors
    ///
    /// Returns [`HomeDirError`] if `~/` needs expanding and the home
    /// directory is unknown.
    pub fn resolve(raw: &str, test_mode: bool, backup: bool) -> Result<Self, HomeDirError> {
        if test_mode {
            return Ok(Self {
                path: PathBuf::from(TEST_CONFIG_PATH),
                backup: false,
            });
        }
        let raw = if raw.is_empty() { DEFAULT_CONFIG_PATH } else { raw };
        Ok(Self {
            path: expand_home(raw)?,
            backup,
        })
    }

    /// A target at an already resolved path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>, backup: bool) -> Self {
        Self {
            path: path.into(),
            backup,
        }
    }
}

/// Expands a leading `~/` against the user's home directory.
///
/// # Errors
///
/// Returns [`HomeDirError`] if the path starts with `~/` and the home
/// directory cannot be determined.
pub fn expand_home(raw: &str) -> Result<PathBuf, HomeDirError> {
    match raw.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .ok_or(HomeDirError),
        None => Ok(PathBuf::from(raw)),
    }
}

/// Appends `suffix` to the full file name (`a.conf` becomes `a.conf.tmp`).
pub(super) fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(suffix);
    PathBuf::from(name)
}
