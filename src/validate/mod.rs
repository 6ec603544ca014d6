//! Semantic validation.
//!
//! Two entry points share the same rules:
//! - [`validate_value`] checks one raw edit before it is committed
//! - [`validate_config`] walks a loaded [`Config`](crate::model::Config)
//!   and reports every violation without aborting
//!
//! Validation never mutates anything. Booleans are accepted in any letter
//! case here, while the mapper only reads lowercase `true`/`false`.

mod config;
mod error;
mod keys;
mod patterns;
mod rules;


pub use config::{DEFAULT_CURVE, validate_config};
pub use error::{ValidationError, ValidationReason};
pub use keys::{
    DISPATCHERS, LAYER_RULE_KINDS, MODIFIERS, WINDOW_RULE_KINDS, is_dispatcher, is_key,
    is_layer_rule_kind, is_modifier, is_window_rule_kind,
};
pub use patterns::{is_color, is_gradient, is_position, is_resolution, is_scale};
pub use rules::{
    check_value, validate_bind, validate_bool, validate_dispatcher, validate_float, validate_int,
    validate_key, validate_keybind, validate_modifiers, validate_rule_kind, validate_text,
    validate_value, validate_window_rule,
};
