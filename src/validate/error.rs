//! Error types for validation.

use thiserror::Error;

/// A semantic constraint violation.
///
/// Never fatal to a load. An interactive edit that fails validation is
/// rejected and the prior value kept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {reason} (got: {value})")]
pub struct ValidationError {
    /// Dotted field name, e.g. `general.border_size` or `bind[2].key`.
    pub field: String,
    /// The offending text.
    pub value: String,
    pub reason: ValidationReason,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, value: impl Into<String>, reason: ValidationReason) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            reason,
        }
    }
}

/// Why a value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationReason {
    #[error("must be a number")]
    NotANumber,

    /// Bounds are kept as display text so the reason stays `Eq`.
    #[error("must be between {min} and {max}")]
    OutOfRange { min: String, max: String },

    #[error("must be true or false")]
    NotABoolean,

    #[error("must be {expected}")]
    NotInSet { expected: String },

    #[error("invalid modifier key")]
    InvalidModifier,

    #[error("invalid key name")]
    InvalidKey,

    #[error("invalid dispatcher")]
    InvalidDispatcher,

    #[error("invalid rule type")]
    InvalidRuleKind,

    #[error("must be in format: {expected}")]
    BadFormat { expected: &'static str },

    #[error("must look like {expected}")]
    PatternMismatch { expected: &'static str },

    #[error("must not contain braces or line breaks")]
    UnsafeText,

    #[error("curve is not defined")]
    UnknownCurve,

    #[error("no such field")]
    UnknownField,
}
