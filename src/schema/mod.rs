//! Schema-driven mapping from generic blocks to the typed model.
//!
//! This module provides:
//! - Field and section descriptors ([`FieldDescriptor`], [`SectionSchema`])
//! - The static descriptor tables ([`sections`], [`find`], [`lookup`])
//! - Raw string coercion ([`coerce`])
//! - The mapper itself ([`map_document`], [`MapOptions`])
//!
//! # Policies
//!
//! - A value that fails coercion keeps the field's default and produces a
//!   non-fatal diagnostic; the rest of the section still maps.
//! - Unknown keys are dropped in lenient mode and fatal in strict mode.
//! - Unknown sections are discarded (with a diagnostic) or preserved
//!   verbatim in lenient mode, and fatal in strict mode.

mod coerce;
mod descriptor;
mod error;
mod mapper;
mod tables;

#[cfg(test)]
mod mapper_tests;

pub use coerce::{CoercionError, coerce};
pub use descriptor::{FieldDescriptor, FieldKind, Pattern, SectionSchema};
pub use error::MapError;
pub use mapper::{MapOptions, Mapped, map_document};
pub use tables::{LAYOUTS, SCROLL_METHODS};

/// All fixed sections, parents before children.
#[must_use]
pub fn sections() -> &'static [SectionSchema] {
    tables::SECTIONS
}

/// Finds a section by its block path.
#[must_use]
pub fn find<S: AsRef<str>>(path: &[S]) -> Option<&'static SectionSchema> {
    tables::SECTIONS.iter().find(|s| s.matches(path))
}

/// Finds a section by dotted id (`input.touchpad`), innermost name
/// (`touchpad`) or title (`Touchpad`, case-insensitive).
#[must_use]
pub fn lookup(name: &str) -> Option<&'static SectionSchema> {
    let path: Vec<&str> = name.split('.').collect();
    find(&path)
        .or_else(|| tables::SECTIONS.iter().find(|s| s.name() == name))
        .or_else(|| {
            tables::SECTIONS
                .iter()
                .find(|s| s.title.eq_ignore_ascii_case(name))
        })
}

/// Finds a field by section name (see [`lookup`]) and key.
#[must_use]
pub fn field(section: &str, key: &str) -> Option<(&'static SectionSchema, &'static FieldDescriptor)> {
    let schema = lookup(section)?;
    schema.field(key).map(|f| (schema, f))
}
