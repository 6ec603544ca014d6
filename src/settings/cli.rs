//! CLI argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::defaults;

/// hyprmax: a settings editor for Hyprland configuration files
///
/// Loads hyprland.conf into a typed model, validates it and writes it
/// back in canonical form.
#[derive(Debug, Parser)]
#[command(name = "hyprmax")]
#[command(version, about, long_about = None)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run (default: check)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the hyprmax settings file
    #[arg(long, short, global = true)]
    pub settings: Option<PathBuf>,

    /// Hyprland configuration file to edit
    #[arg(long, short, global = true)]
    pub target: Option<String>,

    /// Work on the bundled sample file, without backups
    #[arg(long = "test-mode", global = true)]
    pub test_mode: bool,

    /// Fail on unknown sections, unknown keys and top-level assignments
    #[arg(long, global = true)]
    pub strict: bool,

    /// Keep unknown sections and write them back unchanged
    #[arg(long = "preserve-unknown", global = true)]
    pub preserve_unknown: bool,

    /// Do not back up the file before loading or saving
    #[arg(long = "no-backup", global = true)]
    pub no_backup: bool,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for hyprmax
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Load the file and report diagnostics
    Check,

    /// Print the configuration in canonical form
    Show {
        /// Print the typed model as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Rewrite the file in canonical form
    Format,

    /// Print the editor menu and the fields of each section
    Menu,

    /// Print one field
    Get {
        /// Section id, block name or menu title (e.g. `general`, `input.touchpad`)
        section: String,
        /// Field key
        key: String,
    },

    /// Validate and store one field, then save
    Set {
        section: String,
        key: String,
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Add a keybinding `MODS,KEY,DISPATCHER[,PARAMS]`, then save
    AddBind {
        #[arg(allow_hyphen_values = true)]
        spec: String,
        /// Text shown next to the bind in listings
        #[arg(long, short)]
        description: Option<String>,
    },

    /// Add a window rule `RULE,VALUE,TARGET`, then save
    AddRule { spec: String },

    /// Generate a default settings file
    Init {
        /// Output path for the settings file
        #[arg(long, short, default_value = defaults::SETTINGS_FILE)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// The subcommand to run, `check` when none was given.
    #[must_use]
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Check)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}
