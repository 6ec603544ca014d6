//! Typed configuration model.
//!
//! This module provides:
//! - The aggregate root ([`Config`])
//! - The eleven fixed sections ([`General`], [`Decoration`], ...)
//! - Repeated entities declared by directives ([`Monitor`], [`Bind`], ...)
//! - Tagged setting values ([`Value`])
//!
//! A `Config` is a plain value: cloning it yields an independent snapshot,
//! which is what the persistence worker receives.

mod entities;
mod sections;
mod value;

pub use entities::{Animation, BezierCurve, Bind, LayerRule, Monitor, WindowRule, Workspace};
pub use sections::{
    Animations, Cursor, DebugSettings, Decoration, General, Gestures, Input, Misc, OpenGl,
    Touchpad, XWayland,
};
pub use value::{FieldValue, Value, format_float};

use std::collections::BTreeMap;

use serde::Serialize;

/// A section the schema does not know, kept verbatim.
///
/// Only produced when the loader runs in preserve mode. Values are the raw
/// trimmed strings from the source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RawSection {
    /// Path of the enclosing known section; empty at the root and for
    /// sections nested inside another raw section.
    pub parent: Vec<String>,
    pub name: String,
    pub values: BTreeMap<String, String>,
    pub children: Vec<RawSection>,
}

/// The full configuration model.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Config {
    pub general: General,
    pub decoration: Decoration,
    pub animations: Animations,
    pub input: Input,
    pub touchpad: Touchpad,
    pub gestures: Gestures,
    pub misc: Misc,
    pub debug: DebugSettings,
    pub xwayland: XWayland,
    pub opengl: OpenGl,
    pub cursor: Cursor,

    pub monitors: Vec<Monitor>,
    pub workspaces: Vec<Workspace>,
    pub window_rules: Vec<WindowRule>,
    pub layer_rules: Vec<LayerRule>,
    pub binds: Vec<Bind>,
    pub curves: Vec<BezierCurve>,
    pub animation_entries: Vec<Animation>,

    /// Unknown sections carried through untouched.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub preserved: Vec<RawSection>,
}

impl Config {
    /// Looks up a bezier curve by name.
    #[must_use]
    pub fn curve(&self, name: &str) -> Option<&BezierCurve> {
        self.curves.iter().find(|c| c.name == name)
    }

    /// Total number of repeated entities across all lists.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.monitors.len()
            + self.workspaces.len()
            + self.window_rules.len()
            + self.layer_rules.len()
            + self.binds.len()
            + self.curves.len()
            + self.animation_entries.len()
    }
}
