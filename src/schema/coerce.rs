//! Strict string-to-value coercion.

use thiserror::Error;

use crate::model::Value;

use super::descriptor::FieldKind;

/// A raw value that cannot be read as its field's type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot read '{value}' as {expected}")]
pub struct CoercionError {
    pub value: String,
    pub expected: String,
}

/// Coerces a raw trimmed string to the field's type.
///
/// Numbers use strict parsing (no trailing text, no `inf`/`NaN`). Booleans
/// accept exactly `true` and `false`, case-sensitive. Strings pass through
/// unchanged. Enumerated values must match an option exactly. Ranges are
/// not checked here; that is the validator's job.
///
/// # Errors
///
/// Returns [`CoercionError`] if the text does not parse as the field type.
pub fn coerce(kind: FieldKind, raw: &str) -> Result<Value, CoercionError> {
    let value = match kind {
        FieldKind::Int { .. } => raw.parse::<i64>().ok().map(Value::Int),
        FieldKind::Float { .. } => raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Value::Float),
        FieldKind::Bool => match raw {
            "true" => Some(Value::Bool(true)),
            "false" => Some(Value::Bool(false)),
            _ => None,
        },
        FieldKind::Str => Some(Value::Str(raw.to_string())),
        FieldKind::Enum(options) => options
            .contains(&raw)
            .then(|| Value::Str(raw.to_string())),
    };

    value.ok_or_else(|| CoercionError {
        value: raw.to_string(),
        expected: kind.describe(),
    })
}
