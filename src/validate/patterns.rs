//! Textual value formats.

use std::sync::LazyLock;

use regex::Regex;

use crate::schema::Pattern;

static COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:rgba\([0-9a-fA-F]{8}\)|rgb\([0-9a-fA-F]{6}\)|0x[0-9a-fA-F]{8})$")
        .expect("Invalid color regex")
});

static ANGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}deg$").expect("Invalid angle regex"));

static RESOLUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:preferred|highres|highrr|\d+x\d+(?:@\d+(?:\.\d+)?)?)$")
        .expect("Invalid resolution regex")
});

static POSITION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:auto|auto-(?:left|right|up|down)|-?\d+x-?\d+)$")
        .expect("Invalid position regex")
});

/// `rgba(RRGGBBAA)`, `rgb(RRGGBB)` or `0xAARRGGBB`.
#[must_use]
pub fn is_color(text: &str) -> bool {
    COLOR.is_match(text)
}

/// One or more colors separated by whitespace, optionally followed by an
/// angle such as `45deg`.
#[must_use]
pub fn is_gradient(text: &str) -> bool {
    let mut tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.last().is_some_and(|t| ANGLE.is_match(t)) {
        tokens.pop();
    }
    !tokens.is_empty() && tokens.iter().all(|t| is_color(t))
}

#[must_use]
pub fn is_resolution(text: &str) -> bool {
    RESOLUTION.is_match(text)
}

#[must_use]
pub fn is_position(text: &str) -> bool {
    POSITION.is_match(text)
}

/// `auto` or a positive number.
#[must_use]
pub fn is_scale(text: &str) -> bool {
    text == "auto"
        || text
            .parse::<f64>()
            .is_ok_and(|v| v.is_finite() && v > 0.0)
}

/// Checks `text` against a descriptor pattern.
#[must_use]
pub fn matches(pattern: Pattern, text: &str) -> bool {
    match pattern {
        Pattern::Color => is_color(text),
        Pattern::Gradient => is_gradient(text),
    }
}

/// Human-readable form of a pattern, for error messages.
#[must_use]
pub const fn describe(pattern: Pattern) -> &'static str {
    match pattern {
        Pattern::Color => "a color (rgba(RRGGBBAA), rgb(RRGGBB) or 0xAARRGGBB)",
        Pattern::Gradient => "one or more colors with an optional angle (45deg)",
    }
}
