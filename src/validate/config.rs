//! Structural pass over a whole [`Config`].

use crate::model::Config;
use crate::schema;

use super::error::{ValidationError, ValidationReason};
use super::rules::{check_value, field_name, validate_bind, validate_rule_kind};
use super::{keys, patterns};

/// Curve name every animation may use without declaring it.
pub const DEFAULT_CURVE: &str = "default";

/// Checks every field and entity of `config`.
///
/// Never mutates and never stops early: each violation is reported once.
/// Binds report their first problem only.
#[must_use]
pub fn validate_config(config: &Config) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for section in schema::sections() {
        for descriptor in section.fields {
            let value = descriptor.read(config);
            if let Err(err) = check_value(&field_name(section, descriptor), descriptor, &value) {
                errors.push(err);
            }
        }
    }

    check_monitors(config, &mut errors);

    for (i, bind) in config.binds.iter().enumerate() {
        if let Err(err) = validate_bind(&format!("bind[{i}]"), bind) {
            errors.push(err);
        }
    }

    for (i, rule) in config.window_rules.iter().enumerate() {
        if let Err(err) = validate_rule_kind(&format!("windowrule[{i}].rule"), &rule.rule) {
            errors.push(err);
        }
    }

    for (i, rule) in config.layer_rules.iter().enumerate() {
        if !keys::is_layer_rule_kind(&rule.rule) {
            errors.push(ValidationError::new(
                format!("layerrule[{i}].rule"),
                rule.rule.as_str(),
                ValidationReason::InvalidRuleKind,
            ));
        }
    }

    for (i, animation) in config.animation_entries.iter().enumerate() {
        if animation.curve != DEFAULT_CURVE && config.curve(&animation.curve).is_none() {
            errors.push(ValidationError::new(
                format!("animation[{i}].curve"),
                animation.curve.as_str(),
                ValidationReason::UnknownCurve,
            ));
        }
    }

    if !errors.is_empty() {
        tracing::debug!(count = errors.len(), "validation found problems");
    }
    errors
}

fn check_monitors(config: &Config, errors: &mut Vec<ValidationError>) {
    for (i, monitor) in config.monitors.iter().enumerate() {
        let mut check = |part: &str, text: &str, valid: bool, expected: &'static str| {
            if !valid {
                errors.push(ValidationError::new(
                    format!("monitor[{i}].{part}"),
                    text,
                    ValidationReason::PatternMismatch { expected },
                ));
            }
        };
        check(
            "resolution",
            &monitor.resolution,
            patterns::is_resolution(&monitor.resolution),
            "WIDTHxHEIGHT[@RATE] or preferred",
        );
        check(
            "position",
            &monitor.position,
            patterns::is_position(&monitor.position),
            "XxY or auto",
        );
        check(
            "scale",
            &monitor.scale,
            patterns::is_scale(&monitor.scale),
            "a positive number or auto",
        );
    }
}
