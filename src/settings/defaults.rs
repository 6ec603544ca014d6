//! Default values for settings.

use crate::persist::DEFAULT_CONFIG_PATH;

/// Hyprland configuration edited when none is given.
pub const TARGET_PATH: &str = DEFAULT_CONFIG_PATH;

/// Backups of the real file are on unless disabled.
pub const BACKUP: bool = true;

/// File name written by `init`.
pub const SETTINGS_FILE: &str = "hyprmax.toml";
