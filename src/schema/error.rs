//! Error types for schema mapping.

use thiserror::Error;

/// A fatal mapping failure (strict mode only).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A block whose path is not in the descriptor tables.
    #[error("line {line}: unknown section '{name}'")]
    UnknownSection {
        /// Dotted block path
        name: String,
        /// Line of the opening brace
        line: usize,
    },

    /// A key that is not in its section's descriptor table.
    #[error("line {line}: unknown key '{key}' in section '{section}'")]
    UnknownKey {
        /// Dotted section path
        section: String,
        /// The key
        key: String,
        /// Line of the assignment
        line: usize,
    },
}
