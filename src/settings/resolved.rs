//! Settings after merging CLI and file sources.

use std::fmt;
use std::path::Path;

use crate::load::LoadOptions;
use crate::persist::Target;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::file::SettingsFile;

/// Fully resolved settings ready for use by the application.
///
/// Use [`Settings::from_raw`] to build from CLI args and an optional
/// settings file.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct Settings {
    /// The Hyprland file to edit, with its backup policy applied.
    pub target: Target,

    /// Operating on the bundled sample.
    pub test_mode: bool,

    /// Unknown sections, keys and top-level assignments are fatal.
    pub strict: bool,

    /// Keep unknown sections verbatim.
    pub preserve_unknown: bool,

    /// Verbose logging enabled.
    pub verbose: bool,
}

impl fmt::Display for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Settings {{ target: {}, backup: {}, test_mode: {}, strict: {}, preserve_unknown: {} }}",
            self.target.path.display(),
            self.target.backup,
            self.test_mode,
            self.strict,
            self.preserve_unknown,
        )
    }
}

impl Settings {
    /// Creates settings from CLI arguments and an optional settings file.
    ///
    /// CLI arguments take precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `strict` and `preserve_unknown` are both requested
    /// - The target needs `~/` expansion and the home directory is unknown
    pub fn from_raw(cli: &Cli, file: Option<&SettingsFile>) -> Result<Self, ConfigError> {
        let strict = cli.strict || file.is_some_and(|f| f.parser.strict);
        let preserve_unknown =
            cli.preserve_unknown || file.is_some_and(|f| f.parser.preserve_unknown);

        if strict && preserve_unknown {
            return Err(ConfigError::Conflict(
                "preserve_unknown only applies in lenient mode, not with strict",
            ));
        }

        let target = Self::resolve_target(cli, file)?;

        Ok(Self {
            target,
            test_mode: cli.test_mode,
            strict,
            preserve_unknown,
            verbose: cli.verbose,
        })
    }

    /// Loads the settings file named by `--settings`, if any, and merges.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be read or parsed, or
    /// the merged settings are invalid.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = if let Some(ref path) = cli.settings {
            Some(SettingsFile::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, file.as_ref())
    }

    /// Parser and mapper policy for loading the target.
    #[must_use]
    pub const fn load_options(&self) -> LoadOptions {
        LoadOptions {
            strict: self.strict,
            preserve_unknown: self.preserve_unknown,
        }
    }

    fn resolve_target(cli: &Cli, file: Option<&SettingsFile>) -> Result<Target, ConfigError> {
        // Priority: CLI explicit > file > default
        let raw = cli
            .target
            .as_deref()
            .or_else(|| file.and_then(|f| f.target.path.as_deref()))
            .unwrap_or(defaults::TARGET_PATH);

        let backup = !cli.no_backup
            && file
                .and_then(|f| f.backup.enabled)
                .unwrap_or(defaults::BACKUP);

        Ok(Target::resolve(raw, cli.test_mode, backup)?)
    }
}

/// Writes the default settings template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_settings(path: &Path) -> Result<(), ConfigError> {
    let template = super::file::default_settings_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}
