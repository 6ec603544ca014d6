//! Error types for parsing.

use thiserror::Error;

/// A fatal problem in the configuration text.
///
/// Any of these aborts the whole load; no partial `Config` is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// A `}` with no open block.
    #[error("line {line}: unmatched '}}'")]
    UnmatchedClose {
        /// Line of the stray brace
        line: usize,
    },

    /// End of input reached while a block was still open.
    #[error("line {line}: block '{name}' is never closed")]
    UnclosedBlock {
        /// Name of the innermost open block
        name: String,
        /// Line where that block was opened
        line: usize,
    },

    /// A `{` with nothing before it.
    #[error("line {line}: block has no name")]
    MissingBlockName {
        /// Line of the brace
        line: usize,
    },

    /// A directive with fewer (or more) comma-separated tokens than it needs.
    #[error("line {line}: '{keyword}' expects {expected} comma-separated values, found {found}")]
    DirectiveArity {
        /// Directive keyword
        keyword: String,
        /// Line of the directive
        line: usize,
        /// Human-readable expectation, e.g. "at least 4"
        expected: Arity,
        /// Number of tokens present
        found: usize,
    },

    /// A directive token that cannot be read as its declared type.
    #[error("line {line}: invalid '{keyword}' directive: {reason}")]
    InvalidDirective {
        /// Directive keyword
        keyword: String,
        /// Line of the directive
        line: usize,
        /// What was wrong
        reason: String,
    },

    /// A `key = value` outside any block (strict mode only).
    #[error("line {line}: unhandled top-level assignment '{key}'")]
    TopLevelAssignment {
        /// The assigned key
        key: String,
        /// Line of the assignment
        line: usize,
    },
}

impl SyntaxError {
    /// Returns the line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnmatchedClose { line }
            | Self::UnclosedBlock { line, .. }
            | Self::MissingBlockName { line }
            | Self::DirectiveArity { line, .. }
            | Self::InvalidDirective { line, .. }
            | Self::TopLevelAssignment { line, .. } => *line,
        }
    }
}

/// Token count requirement of a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// At least this many tokens.
    AtLeast(usize),
    /// Exactly this many tokens.
    Exactly(usize),
}

impl Arity {
    /// Returns true if `count` satisfies the requirement.
    #[must_use]
    pub const fn accepts(self, count: usize) -> bool {
        match self {
            Self::AtLeast(min) => count >= min,
            Self::Exactly(n) => count == n,
        }
    }
}

impl std::fmt::Display for Arity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtLeast(n) => write!(f, "at least {n}"),
            Self::Exactly(n) => write!(f, "exactly {n}"),
        }
    }
}
