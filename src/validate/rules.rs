//! Single-value checks.

use crate::model::{Bind, Value, WindowRule, format_float};
use crate::schema::{self, FieldDescriptor, FieldKind, SectionSchema};

use super::error::{ValidationError, ValidationReason};
use super::{keys, patterns};

/// Parses `raw` as an integer within `min..=max`.
///
/// # Errors
///
/// [`ValidationReason::NotANumber`] or [`ValidationReason::OutOfRange`].
pub fn validate_int(field: &str, raw: &str, min: i64, max: i64) -> Result<i64, ValidationError> {
    let value = raw
        .trim()
        .parse::<i64>()
        .map_err(|_| ValidationError::new(field, raw, ValidationReason::NotANumber))?;
    check_int(field, value, min, max)?;
    Ok(value)
}

/// Parses `raw` as a finite float within `min..=max`.
///
/// # Errors
///
/// [`ValidationReason::NotANumber`] or [`ValidationReason::OutOfRange`].
pub fn validate_float(field: &str, raw: &str, min: f64, max: f64) -> Result<f64, ValidationError> {
    let value = raw
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ValidationError::new(field, raw, ValidationReason::NotANumber))?;
    check_float(field, value, min, max)?;
    Ok(value)
}

/// Accepts `true` or `false` in any letter case.
///
/// # Errors
///
/// [`ValidationReason::NotABoolean`] for anything else.
pub fn validate_bool(field: &str, raw: &str) -> Result<bool, ValidationError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ValidationError::new(field, raw, ValidationReason::NotABoolean)),
    }
}

/// Characters a value cannot hold without changing the file's structure.
const STRUCTURAL_CHARS: [char; 4] = ['{', '}', '\n', '\r'];

/// Checks that free text can be written back as a single line.
///
/// # Errors
///
/// [`ValidationReason::UnsafeText`] if `raw` holds a brace or a line break.
pub fn validate_text(field: &str, raw: &str) -> Result<(), ValidationError> {
    if raw.contains(STRUCTURAL_CHARS) {
        Err(ValidationError::new(field, raw, ValidationReason::UnsafeText))
    } else {
        Ok(())
    }
}

/// # Errors
///
/// [`ValidationReason::InvalidKey`] if `raw` is not a recognized key name.
pub fn validate_key(field: &str, raw: &str) -> Result<(), ValidationError> {
    if keys::is_key(raw.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new(field, raw, ValidationReason::InvalidKey))
    }
}

/// Checks every `+`- or space-separated token of a modifier field.
///
/// An empty field is allowed (a bind without modifiers).
///
/// # Errors
///
/// [`ValidationReason::InvalidModifier`] naming the first bad token.
pub fn validate_modifiers(field: &str, mods: &str) -> Result<(), ValidationError> {
    mods.split(|c: char| c == '+' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .find(|token| !keys::is_modifier(token))
        .map_or(Ok(()), |token| {
            Err(ValidationError::new(field, token, ValidationReason::InvalidModifier))
        })
}

/// # Errors
///
/// [`ValidationReason::InvalidDispatcher`] if `raw` is not a known dispatcher.
pub fn validate_dispatcher(field: &str, raw: &str) -> Result<(), ValidationError> {
    if keys::is_dispatcher(raw.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new(field, raw, ValidationReason::InvalidDispatcher))
    }
}

/// # Errors
///
/// [`ValidationReason::InvalidRuleKind`] if `raw` is not a window rule kind.
pub fn validate_rule_kind(field: &str, raw: &str) -> Result<(), ValidationError> {
    if keys::is_window_rule_kind(raw.trim()) {
        Ok(())
    } else {
        Err(ValidationError::new(field, raw, ValidationReason::InvalidRuleKind))
    }
}

/// Checks the modifiers, key and dispatcher of a bind.
///
/// # Errors
///
/// The first violation found, in that order.
pub fn validate_bind(field: &str, bind: &Bind) -> Result<(), ValidationError> {
    validate_modifiers(&format!("{field}.mods"), &bind.mods)?;
    validate_key(&format!("{field}.key"), &bind.key)?;
    validate_dispatcher(&format!("{field}.dispatcher"), &bind.dispatcher)
}

/// Parses and checks `MODS,KEY,DISPATCHER[,PARAMS]`.
///
/// Params are the raw remainder and may contain commas.
///
/// # Errors
///
/// [`ValidationReason::UnsafeText`] for a brace or line break anywhere,
/// [`ValidationReason::BadFormat`] for fewer than three parts, otherwise
/// whatever [`validate_bind`] reports.
pub fn validate_keybind(field: &str, raw: &str) -> Result<Bind, ValidationError> {
    validate_text(field, raw)?;
    let parts: Vec<&str> = raw.splitn(4, ',').map(str::trim).collect();
    let [mods, key, dispatcher, rest @ ..] = parts.as_slice() else {
        return Err(ValidationError::new(
            field,
            raw,
            ValidationReason::BadFormat {
                expected: "mods,key,dispatcher[,params]",
            },
        ));
    };
    let bind = Bind::new(*mods, *key, *dispatcher, rest.first().copied().unwrap_or_default());
    validate_bind(field, &bind)?;
    Ok(bind)
}

/// Parses and checks `RULE,VALUE,TARGET`.
///
/// # Errors
///
/// [`ValidationReason::UnsafeText`] for a brace or line break anywhere,
/// [`ValidationReason::BadFormat`] unless there are exactly three parts,
/// [`ValidationReason::InvalidRuleKind`] for an unknown rule.
pub fn validate_window_rule(field: &str, raw: &str) -> Result<WindowRule, ValidationError> {
    validate_text(field, raw)?;
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [rule, value, target] = parts.as_slice() else {
        return Err(ValidationError::new(
            field,
            raw,
            ValidationReason::BadFormat {
                expected: "rule,value,target",
            },
        ));
    };
    validate_rule_kind(&format!("{field}.rule"), rule)?;
    Ok(WindowRule::new(*rule, *value, *target))
}

/// Validates a raw edit for `section.key` and returns the typed value.
///
/// `section` is resolved like [`schema::lookup`].
///
/// # Errors
///
/// [`ValidationReason::UnknownField`] if the field does not exist, or the
/// first constraint the value breaks.
pub fn validate_value(section: &str, key: &str, raw: &str) -> Result<Value, ValidationError> {
    let Some((schema, descriptor)) = schema::field(section, key) else {
        return Err(ValidationError::new(
            format!("{section}.{key}"),
            raw,
            ValidationReason::UnknownField,
        ));
    };
    let field = field_name(schema, descriptor);
    let trimmed = raw.trim();

    let value = match descriptor.kind {
        FieldKind::Int { min, max } => Value::Int(validate_int(&field, trimmed, min, max)?),
        FieldKind::Float { min, max } => Value::Float(validate_float(&field, trimmed, min, max)?),
        FieldKind::Bool => Value::Bool(validate_bool(&field, trimmed)?),
        FieldKind::Str | FieldKind::Enum(_) => {
            validate_text(&field, trimmed)?;
            Value::Str(trimmed.to_string())
        }
    };
    check_value(&field, descriptor, &value)?;
    Ok(value)
}

/// Checks an already typed value against its descriptor.
///
/// # Errors
///
/// The constraint the value breaks. A value of the wrong case is reported
/// as [`ValidationReason::NotInSet`].
pub fn check_value(field: &str, descriptor: &FieldDescriptor, value: &Value) -> Result<(), ValidationError> {
    match (descriptor.kind, value) {
        (FieldKind::Int { min, max }, Value::Int(v)) => check_int(field, *v, min, max),
        (FieldKind::Float { min, max }, Value::Float(v)) => check_float(field, *v, min, max),
        (FieldKind::Float { min, max }, Value::Int(v)) => {
            #[allow(clippy::cast_precision_loss)]
            let v = *v as f64;
            check_float(field, v, min, max)
        }
        (FieldKind::Bool, Value::Bool(_)) => Ok(()),
        (FieldKind::Enum(options), Value::Str(s)) => {
            if options.contains(&s.as_str()) {
                Ok(())
            } else {
                Err(ValidationError::new(
                    field,
                    s.as_str(),
                    ValidationReason::NotInSet {
                        expected: descriptor.kind.describe(),
                    },
                ))
            }
        }
        (FieldKind::Str, Value::Str(s)) => match descriptor.pattern {
            Some(pattern) if !patterns::matches(pattern, s) => Err(ValidationError::new(
                field,
                s.as_str(),
                ValidationReason::PatternMismatch {
                    expected: patterns::describe(pattern),
                },
            )),
            _ => Ok(()),
        },
        (kind, other) => Err(ValidationError::new(
            field,
            other.to_string(),
            ValidationReason::NotInSet {
                expected: format!("of type {}", kind.describe()),
            },
        )),
    }
}

pub(super) fn field_name(schema: &SectionSchema, descriptor: &FieldDescriptor) -> String {
    format!("{}.{}", schema.id(), descriptor.key)
}

fn check_int(field: &str, value: i64, min: i64, max: i64) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            value.to_string(),
            ValidationReason::OutOfRange {
                min: min.to_string(),
                max: max.to_string(),
            },
        ))
    }
}

fn check_float(field: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format_float(value),
            ValidationReason::OutOfRange {
                min: format_float(min),
                max: format_float(max),
            },
        ))
    }
}
