//! Field and section descriptors.

use crate::model::{Config, Value};

/// Semantic type of a field, with its accepted range or option set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    /// Integer within `min..=max`.
    Int { min: i64, max: i64 },
    /// Float within `min..=max`.
    Float { min: f64, max: f64 },
    /// `true` / `false`.
    Bool,
    /// Free text.
    Str,
    /// One of a closed set of options.
    Enum(&'static [&'static str]),
}

impl FieldKind {
    /// Human-readable type name used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Int { .. } => "integer".to_string(),
            Self::Float { .. } => "float".to_string(),
            Self::Bool => "boolean".to_string(),
            Self::Str => "string".to_string(),
            Self::Enum(options) => format!("one of [{}]", options.join(", ")),
        }
    }
}

/// Extra textual check applied to string fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// `rgba(RRGGBBAA)`, `rgb(RRGGBB)` or `0xAARRGGBB`.
    Color,
    /// One or more colors optionally followed by an angle (`45deg`).
    Gradient,
}

/// Binds a textual key to a typed field of [`Config`].
///
/// `get` and `set` are plain function pointers so the tables can be
/// `static`. `set` returns `false` if the value has the wrong case for
/// the field, leaving the field untouched.
#[derive(Debug, Clone, Copy)]
pub struct FieldDescriptor {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub pattern: Option<Pattern>,
    pub get: fn(&Config) -> Value,
    pub set: fn(&mut Config, Value) -> bool,
}

impl FieldDescriptor {
    /// Reads the field's current value.
    #[must_use]
    pub fn read(&self, config: &Config) -> Value {
        (self.get)(config)
    }

    /// Writes `value` into the field.
    ///
    /// Returns `false` (and changes nothing) if the value's case does not
    /// match the field's type.
    pub fn write(&self, config: &mut Config, value: Value) -> bool {
        (self.set)(config, value)
    }

    /// The value used when the key is absent from the source.
    #[must_use]
    pub fn default_value(&self) -> Value {
        self.read(&Config::default())
    }
}

/// A fixed section: its block path and field table.
#[derive(Debug, Clone, Copy)]
pub struct SectionSchema {
    /// Block names from the root, e.g. `["input", "touchpad"]`.
    pub path: &'static [&'static str],
    /// Display title for the editor.
    pub title: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl SectionSchema {
    /// The innermost block name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.path.last().copied().unwrap_or_default()
    }

    /// Dotted path, e.g. `input.touchpad`.
    #[must_use]
    pub fn id(&self) -> String {
        self.path.join(".")
    }

    /// Looks up a field by key.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }

    /// Returns true if `path` names this section.
    #[must_use]
    pub fn matches<S: AsRef<str>>(&self, path: &[S]) -> bool {
        self.path.len() == path.len()
            && self.path.iter().zip(path).all(|(a, b)| *a == b.as_ref())
    }
}
