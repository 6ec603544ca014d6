//! Editing session.
//!
//! Holds the one mutable [`Config`] of an editor and gates every change
//! through the validator. Saving hands a snapshot to the persistence
//! worker; the session keeps editing while the write happens.

use crate::model::{Bind, Config, Value, WindowRule};
use crate::persist::{PersistHandle, SaveTicket};
use crate::schema::{self, FieldKind};
use crate::validate::{self, ValidationError, ValidationReason};

/// What a menu entry opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    /// A fixed section, by schema id.
    Section(&'static str),
    WindowRules,
    Keybindings,
    SaveAndQuit,
}

/// One line of the top-level menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: &'static str,
    pub item: MenuItem,
}

const MENU: &[MenuEntry] = &[
    MenuEntry { title: "General", item: MenuItem::Section("general") },
    MenuEntry { title: "Decoration", item: MenuItem::Section("decoration") },
    MenuEntry { title: "Animations", item: MenuItem::Section("animations") },
    MenuEntry { title: "Input", item: MenuItem::Section("input") },
    MenuEntry { title: "Window Rules", item: MenuItem::WindowRules },
    MenuEntry { title: "Keybindings", item: MenuItem::Keybindings },
    MenuEntry { title: "Save & Quit", item: MenuItem::SaveAndQuit },
];

/// The fixed top-level menu, in display order.
#[must_use]
pub const fn menu() -> &'static [MenuEntry] {
    MENU
}

/// An editable field as shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: Value,
}

/// A single editor's state.
#[derive(Debug)]
pub struct Session {
    config: Config,
    persist: PersistHandle,
    dirty: bool,
}

impl Session {
    #[must_use]
    pub const fn new(config: Config, persist: PersistHandle) -> Self {
        Self {
            config,
            persist,
            dirty: false,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Returns true if there are edits not yet handed to the worker.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Lists the editable fields of a section with their current values.
    ///
    /// `section` may be a dotted id, a block name or a menu title.
    /// Returns `None` for an unknown section.
    #[must_use]
    pub fn fields(&self, section: &str) -> Option<Vec<FieldView>> {
        let schema = schema::lookup(section)?;
        Some(
            schema
                .fields
                .iter()
                .map(|f| FieldView {
                    key: f.key,
                    label: f.label,
                    kind: f.kind,
                    value: f.read(&self.config),
                })
                .collect(),
        )
    }

    /// Reads one field.
    ///
    /// # Errors
    ///
    /// [`ValidationReason::UnknownField`] if there is no such field.
    pub fn get(&self, section: &str, key: &str) -> Result<Value, ValidationError> {
        schema::field(section, key)
            .map(|(_, f)| f.read(&self.config))
            .ok_or_else(|| unknown_field(section, key, ""))
    }

    /// Validates `raw` and, only if it passes, stores it.
    ///
    /// Returns the value now stored. On rejection the field keeps its
    /// previous value.
    ///
    /// # Errors
    ///
    /// The [`ValidationError`] that rejected the edit.
    pub fn edit(&mut self, section: &str, key: &str, raw: &str) -> Result<Value, ValidationError> {
        let value = validate::validate_value(section, key, raw).inspect_err(|e| {
            tracing::warn!(section, key, "edit rejected: {e}");
        })?;
        let Some((schema, field)) = schema::field(section, key) else {
            return Err(unknown_field(section, key, raw));
        };
        if !field.write(&mut self.config, value.clone()) {
            return Err(unknown_field(section, key, raw));
        }

        tracing::info!(section = %schema.id(), key, value = %value, "field updated");
        self.dirty = true;
        Ok(value)
    }

    /// Adds a bind from `MODS,KEY,DISPATCHER[,PARAMS]` after validating it.
    ///
    /// The description is written as a comment line and must fit on it.
    ///
    /// # Errors
    ///
    /// The [`ValidationError`] that rejected the bind or its description.
    pub fn add_bind(&mut self, spec: &str, description: Option<&str>) -> Result<&Bind, ValidationError> {
        let mut bind = validate::validate_keybind("bind", spec)?;
        if let Some(description) = description {
            validate::validate_text("bind.description", description)?;
            bind = bind.with_description(description);
        }
        tracing::info!(mods = bind.mods.as_str(), key = bind.key.as_str(), "bind added");
        self.dirty = true;
        self.config.binds.push(bind);
        Ok(&self.config.binds[self.config.binds.len() - 1])
    }

    /// Adds a window rule from `RULE,VALUE,TARGET` after validating it.
    ///
    /// # Errors
    ///
    /// The [`ValidationError`] that rejected the rule.
    pub fn add_window_rule(&mut self, spec: &str) -> Result<&WindowRule, ValidationError> {
        let rule = validate::validate_window_rule("windowrule", spec)?;
        tracing::info!(rule = rule.rule.as_str(), target = rule.target.as_str(), "window rule added");
        self.dirty = true;
        self.config.window_rules.push(rule);
        Ok(&self.config.window_rules[self.config.window_rules.len() - 1])
    }

    /// Hands a snapshot of the current config to the persistence worker.
    pub fn save(&mut self) -> SaveTicket {
        self.dirty = false;
        self.persist.save(self.config.clone())
    }

    /// Ends the session, waiting for queued saves to finish.
    pub async fn close(self) -> Config {
        self.persist.shutdown().await;
        self.config
    }
}

/// One-line summary of a bind for listings.
#[must_use]
pub fn describe_bind(bind: &Bind) -> String {
    let mut text = if bind.mods.is_empty() {
        bind.key.clone()
    } else {
        format!("{} + {}", bind.mods, bind.key)
    };
    text.push_str(" -> ");
    text.push_str(&bind.dispatcher);
    if !bind.params.is_empty() {
        text.push(' ');
        text.push_str(&bind.params);
    }
    if !bind.description.is_empty() {
        text.push_str(&format!("  ({})", bind.description));
    }
    text
}

fn unknown_field(section: &str, key: &str, raw: &str) -> ValidationError {
    ValidationError::new(format!("{section}.{key}"), raw, ValidationReason::UnknownField)
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
