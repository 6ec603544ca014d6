//! Subcommand execution.
//!
//! Each editing command runs one short session: load the target, apply a
//! validated change, hand a snapshot to the persistence worker and wait
//! for it to land before returning.

use std::io::{self, Write};

use thiserror::Error;

use hyprmax::load::{LoadError, Loaded, load};
use hyprmax::persist::{FileStore, PersistError, PersistHandle, SaveOutcome, Target};
use hyprmax::serialize::serialize;
use hyprmax::session::{MenuItem, Session, describe_bind, menu};
use hyprmax::settings::{Command, Settings};
use hyprmax::time::SystemClock;
use hyprmax::validate::ValidationError;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for command failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The target could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// An edit was rejected by the validator.
    #[error("Rejected: {0}")]
    Rejected(#[from] ValidationError),

    /// The loaded file has validation problems.
    #[error("{count} validation problem(s) found")]
    Invalid { count: usize },

    /// The save did not complete.
    #[error("Failed to save: {0}")]
    Save(#[from] PersistError),

    /// The model could not be encoded as JSON.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing to the output failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl RunError {
    /// Returns true for problems with the configuration itself rather than
    /// with reading or writing it.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Rejected(_) | Self::Invalid { .. })
    }
}

/// Executes one subcommand against the configured target.
///
/// Read-only commands never make a backup. Editing commands back up the
/// file when it is loaded, if the target allows it.
///
/// # Errors
///
/// Returns an error if the target cannot be loaded or saved, an edit is
/// rejected, or `check` finds validation problems.
pub async fn execute(
    settings: &Settings,
    command: Command,
    out: &mut dyn Write,
) -> Result<(), RunError> {
    match command {
        Command::Check => check(settings, out),
        Command::Show { json } => show(settings, json, out),
        Command::Format => format(settings, out).await,
        Command::Menu => print_menu(settings, out).await,
        Command::Get { section, key } => {
            let session = open_session(settings, false)?;
            let value = session.get(&section, &key);
            session.close().await;
            writeln!(out, "{}", value?)?;
            Ok(())
        }
        Command::Set {
            section,
            key,
            value,
        } => {
            let mut session = open_session(settings, true)?;
            let stored = session.edit(&section, &key, &value);
            finish(session, stored.is_ok()).await?;
            writeln!(out, "{section}.{key} = {}", stored?)?;
            Ok(())
        }
        Command::AddBind { spec, description } => {
            let mut session = open_session(settings, true)?;
            let added = session
                .add_bind(&spec, description.as_deref())
                .map(describe_bind);
            finish(session, added.is_ok()).await?;
            writeln!(out, "added bind: {}", added?)?;
            Ok(())
        }
        Command::AddRule { spec } => {
            let mut session = open_session(settings, true)?;
            let added = session
                .add_window_rule(&spec)
                .map(|r| format!("{}, {}, {}", r.rule, r.value, r.target));
            finish(session, added.is_ok()).await?;
            writeln!(out, "added window rule: {}", added?)?;
            Ok(())
        }
        // Handled by main before settings are resolved.
        Command::Init { .. } => Ok(()),
    }
}

fn load_target(settings: &Settings, backup: bool) -> Result<Loaded, LoadError> {
    let target = Target {
        path: settings.target.path.clone(),
        backup: backup && settings.target.backup,
    };
    load(&target, settings.load_options(), &SystemClock)
}

/// The store for writing back a loaded file.
///
/// The load already made a backup if one was due, so the store does not
/// make a second copy of the same bytes.
fn store_for(settings: &Settings, loaded: &Loaded) -> FileStore {
    FileStore::new(Target {
        path: settings.target.path.clone(),
        backup: settings.target.backup && loaded.backup.is_none(),
    })
}

fn open_session(settings: &Settings, backup: bool) -> Result<Session, RunError> {
    let loaded = load_target(settings, backup)?;
    report_diagnostics(&loaded);
    let store = store_for(settings, &loaded);
    Ok(Session::new(loaded.config, PersistHandle::spawn(store)))
}

/// Saves if `changed`, then closes the session.
async fn finish(mut session: Session, changed: bool) -> Result<(), RunError> {
    let result = if changed {
        session.save().wait().await.map(log_saved)
    } else {
        Ok(())
    };
    session.close().await;
    Ok(result?)
}

fn log_saved(outcome: SaveOutcome) {
    tracing::info!(
        path = %outcome.path.display(),
        bytes = outcome.bytes,
        "saved"
    );
}

fn report_diagnostics(loaded: &Loaded) {
    for diagnostic in &loaded.diagnostics {
        tracing::warn!("{diagnostic}");
    }
}

fn check(settings: &Settings, out: &mut dyn Write) -> Result<(), RunError> {
    let loaded = load_target(settings, false)?;
    for diagnostic in &loaded.diagnostics {
        writeln!(out, "{diagnostic}")?;
    }

    let count = loaded
        .diagnostics
        .iter()
        .filter(|d| d.is_validation())
        .count();
    if count > 0 {
        return Err(RunError::Invalid { count });
    }

    writeln!(
        out,
        "{}: ok ({} entities, {} warnings)",
        settings.target.path.display(),
        loaded.config.entity_count(),
        loaded.diagnostics.len()
    )?;
    Ok(())
}

fn show(settings: &Settings, json: bool, out: &mut dyn Write) -> Result<(), RunError> {
    let loaded = load_target(settings, false)?;
    report_diagnostics(&loaded);
    if json {
        serde_json::to_writer_pretty(&mut *out, &loaded.config)?;
        writeln!(out)?;
    } else {
        out.write_all(serialize(&loaded.config).as_bytes())?;
    }
    Ok(())
}

async fn format(settings: &Settings, out: &mut dyn Write) -> Result<(), RunError> {
    let loaded = load_target(settings, true)?;
    report_diagnostics(&loaded);
    let handle = PersistHandle::spawn(store_for(settings, &loaded));

    let result = handle.save(loaded.config).wait().await;
    handle.shutdown().await;
    let outcome = result?;

    writeln!(
        out,
        "wrote {} bytes to {}",
        outcome.bytes,
        outcome.path.display()
    )?;
    if let Some(backup) = loaded.backup.or(outcome.backup) {
        writeln!(out, "backup: {}", backup.display())?;
    }
    Ok(())
}

async fn print_menu(settings: &Settings, out: &mut dyn Write) -> Result<(), RunError> {
    let session = open_session(settings, false)?;
    let written = write_menu(&session, out);
    session.close().await;
    Ok(written?)
}

fn write_menu(session: &Session, out: &mut dyn Write) -> io::Result<()> {
    let config = session.config();
    for (i, entry) in menu().iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, entry.title)?;
        match entry.item {
            MenuItem::Section(id) => {
                for field in session.fields(id).unwrap_or_default() {
                    writeln!(out, "     {} = {}    [{}]", field.key, field.value, field.label)?;
                }
            }
            MenuItem::WindowRules => {
                for rule in &config.window_rules {
                    writeln!(out, "     {}, {}, {}", rule.rule, rule.value, rule.target)?;
                }
            }
            MenuItem::Keybindings => {
                for bind in &config.binds {
                    writeln!(out, "     {}", describe_bind(bind))?;
                }
            }
            MenuItem::SaveAndQuit => {}
        }
    }
    Ok(())
}
