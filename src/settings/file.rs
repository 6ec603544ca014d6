//! TOML settings file parsing.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root structure of the settings file.
///
/// Every field is optional so a partial file merges with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsFile {
    #[serde(default)]
    pub target: TargetSection,

    #[serde(default)]
    pub parser: ParserSection,

    #[serde(default)]
    pub backup: BackupSection,
}

/// Which Hyprland file to edit.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetSection {
    /// Path to `hyprland.conf`; empty means the default location.
    pub path: Option<String>,
}

/// Parser policy.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParserSection {
    #[serde(default)]
    pub strict: bool,

    #[serde(default)]
    pub preserve_unknown: bool,
}

/// Backup policy for the real file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BackupSection {
    pub enabled: Option<bool>,
}

impl SettingsFile {
    /// Loads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or has unknown fields.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a commented settings file.
#[must_use]
pub fn default_settings_template() -> String {
    r#"# hyprmax settings

[target]
# Hyprland configuration to edit (default: ~/.config/hypr/hyprland.conf)
# A leading ~/ is expanded to the home directory.
# path = "~/.config/hypr/hyprland.conf"

[parser]
# Treat unknown sections, unknown keys and top-level assignments as errors
# strict = false

# Keep unknown sections and write them back unchanged (lenient mode only)
# preserve_unknown = false

[backup]
# Copy the file to <path>.<YYYYMMDD_HHMMSS>.backup before loading or saving
enabled = true
"#
    .to_string()
}
