//! Non-fatal findings collected during a load.

use std::fmt;

use thiserror::Error;

use crate::validate::ValidationError;

/// What a diagnostic is about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    /// A value that could not be read as its field's type.
    /// The field keeps its default.
    #[error("{section}.{key}: cannot read '{value}' as {expected}, keeping default")]
    TypeCoercion {
        section: String,
        key: String,
        value: String,
        expected: String,
    },

    /// A block not in the descriptor tables (lenient mode).
    #[error("unknown section '{name}' {}", disposition(.preserved))]
    UnknownSection { name: String, preserved: bool },

    /// An assignment outside any block (lenient mode).
    #[error("unhandled top-level assignment '{key}' ignored")]
    UnhandledAssignment { key: String },

    /// A line the lexer could not classify.
    #[error("unrecognized line '{text}'")]
    UnrecognizedLine { text: String },

    /// A semantic constraint violation found by the post-load pass.
    #[error(transparent)]
    Validation(ValidationError),
}

#[allow(clippy::trivially_copy_pass_by_ref)] // thiserror hands fields over by reference
const fn disposition(preserved: &bool) -> &'static str {
    if *preserved {
        "preserved verbatim"
    } else {
        "ignored"
    }
}

/// A non-fatal finding, optionally tied to a source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: Option<usize>,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    #[must_use]
    pub const fn at(line: usize, kind: DiagnosticKind) -> Self {
        Self {
            line: Some(line),
            kind,
        }
    }

    #[must_use]
    pub const fn unplaced(kind: DiagnosticKind) -> Self {
        Self { line: None, kind }
    }

    /// Returns true for post-load validation findings.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Validation(_))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "line {line}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}
