//! Tagged setting values.

use std::fmt;

use serde::Serialize;

/// A typed setting value.
///
/// One case per semantic field type. Enumerated fields carry their
/// selected option as a [`Value::Str`]; the closed set lives on the
/// field's [`FieldKind`](crate::schema::FieldKind).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Signed integer.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// Free text or an enumerated option.
    Str(String),
}

impl Value {
    /// Returns the name of the value's type, for messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Bool(_) => "boolean",
            Self::Str(_) => "string",
        }
    }
}

/// Renders a float so that it always reads back as a float.
///
/// Whole numbers keep one decimal place (`1.0`, not `1`).
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => f.write_str(&format_float(*v)),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
        }
    }
}

/// Conversion between native field types and [`Value`].
///
/// Implemented for every Rust type a section field may have, so the
/// descriptor tables can read and write fields without knowing their type.
pub trait FieldValue: Sized {
    /// Wraps a copy of the native value.
    fn to_value(&self) -> Value;

    /// Unwraps a value of the matching case, or `None` for any other case.
    fn from_value(value: Value) -> Option<Self>;
}

impl FieldValue for i64 {
    fn to_value(&self) -> Value {
        Value::Int(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(v),
            #[allow(clippy::cast_precision_loss)] // setting ranges are far below 2^52
            Value::Int(v) => Some(v as f64),
            _ => None,
        }
    }
}

impl FieldValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }
}

impl FieldValue for String {
    fn to_value(&self) -> Value {
        Value::Str(self.clone())
    }

    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Str(v) => Some(v),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_keep_a_decimal() {
        assert_eq!(format_float(1.0), "1.0");
        assert_eq!(format_float(0.95), "0.95");
        assert_eq!(format_float(-2.0), "-2.0");
    }

    #[test]
    fn display_matches_config_syntax() {
        assert_eq!(Value::Int(5).to_string(), "5");
        assert_eq!(Value::Bool(false).to_string(), "false");
        assert_eq!(Value::Str("dwindle".into()).to_string(), "dwindle");
        assert_eq!(Value::Float(10.0).to_string(), "10.0");
    }

    #[test]
    fn field_value_rejects_other_cases() {
        assert_eq!(i64::from_value(Value::Bool(true)), None);
        assert_eq!(bool::from_value(Value::Str("true".into())), None);
        assert_eq!(String::from_value(Value::Int(1)), None);
    }

    #[test]
    fn float_accepts_integer_values() {
        assert_eq!(f64::from_value(Value::Int(3)), Some(3.0));
    }
}
