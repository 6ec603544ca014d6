//! The load operation: read, back up, parse, map and validate.
//!
//! A load either fails with a single fatal [`LoadError`] or succeeds with a
//! [`Config`] plus zero or more non-fatal [`Diagnostic`]s. Diagnostics are
//! returned next to the config, never inside it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::lang::{ParseOptions, SyntaxError, parse_with};
use crate::model::Config;
use crate::persist::{BackupError, HomeDirError, Target, create_backup};
use crate::schema::{MapError, MapOptions, map_document};
use crate::time::Clock;
use crate::validate::validate_config;

pub use crate::diagnostic::{Diagnostic, DiagnosticKind};

/// Parser and mapper policy for a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    /// Unknown keys, unknown sections and top-level assignments are fatal.
    pub strict: bool,
    /// In lenient mode, keep unknown sections for re-serialization.
    pub preserve_unknown: bool,
}

/// A successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub config: Config,
    /// Coercion problems and lenient-mode drops sorted by source line,
    /// then validation findings, which carry no line.
    pub diagnostics: Vec<Diagnostic>,
    /// The backup made before reading, if any.
    pub backup: Option<PathBuf>,
}

impl Loaded {
    /// Returns true if any diagnostic came from the validation pass.
    #[must_use]
    pub fn has_validation_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_validation)
    }
}

/// A fatal load failure.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The text is malformed.
    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// Strict mode met an unknown section or key.
    #[error("Schema error: {0}")]
    Map(#[from] MapError),

    /// The pre-load backup failed.
    #[error(transparent)]
    Backup(#[from] BackupError),

    /// The target path could not be resolved.
    #[error(transparent)]
    HomeDir(#[from] HomeDirError),
}

/// Loads the configuration at `target`.
///
/// When the target allows backups, the current file is copied aside before
/// it is parsed.
///
/// # Errors
///
/// Returns [`LoadError`] if the file cannot be read or backed up, is
/// syntactically malformed, or breaks strict mode.
pub fn load(target: &Target, options: LoadOptions, clock: &dyn Clock) -> Result<Loaded, LoadError> {
    let path = &target.path;
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    let backup = if target.backup {
        Some(create_backup(path, clock)?)
    } else {
        None
    };

    let mut loaded = load_str(&text, options)?;
    loaded.backup = backup;

    tracing::info!(
        path = %path.display(),
        entities = loaded.config.entity_count(),
        diagnostics = loaded.diagnostics.len(),
        "configuration loaded"
    );
    Ok(loaded)
}

/// Parses, maps and validates configuration text.
///
/// # Errors
///
/// Returns [`LoadError::Syntax`] or (strict mode) [`LoadError::Map`].
pub fn load_str(text: &str, options: LoadOptions) -> Result<Loaded, LoadError> {
    let doc = parse_with(
        text,
        ParseOptions {
            strict: options.strict,
        },
    )?;
    let mapped = map_document(
        &doc,
        MapOptions {
            strict: options.strict,
            preserve_unknown: options.preserve_unknown,
        },
    )?;

    let mut diagnostics = mapped.diagnostics;
    for err in validate_config(&mapped.config) {
        tracing::warn!(field = err.field.as_str(), "{err}");
        diagnostics.push(Diagnostic::unplaced(DiagnosticKind::Validation(err)));
    }

    Ok(Loaded {
        config: mapped.config,
        diagnostics,
        backup: None,
    })
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
