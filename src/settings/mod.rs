//! Settings of the tool itself, as opposed to the Hyprland file it edits.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - The optional TOML settings file ([`SettingsFile`])
//! - Resolved settings ([`Settings`])
//! - Settings file generation ([`write_default_settings`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML settings file** (`--settings PATH`)
//! 3. **Built-in defaults**
//!
//! # Boolean Flag Semantics
//!
//! `--strict` and `--preserve-unknown` use OR semantics: set in either the
//! CLI or the file, the result is `true`. `--no-backup` only disables;
//! without it the file's `backup.enabled` applies, then the default (on).
//!
//! `--test-mode` exists only on the command line. It replaces the target
//! with the bundled sample and turns backups off.

mod cli;
pub mod defaults;
mod error;
mod file;
mod resolved;


pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use file::{SettingsFile, default_settings_template};
pub use resolved::{Settings, write_default_settings};
