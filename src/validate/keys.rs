//! Closed name sets: key names, modifiers, dispatchers and rule kinds.
//!
//! All lookups are ASCII case-insensitive.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Modifier tokens allowed in a bind's modifier field.
pub const MODIFIERS: &[&str] = &["SUPER", "ALT", "CTRL", "SHIFT"];

/// Dispatchers a bind may invoke.
pub const DISPATCHERS: &[&str] = &[
    "exec",
    "execr",
    "killactive",
    "exit",
    "workspace",
    "movetoworkspace",
    "movetoworkspacesilent",
    "togglespecialworkspace",
    "togglefloating",
    "fullscreen",
    "pseudo",
    "pin",
    "togglesplit",
    "movefocus",
    "movewindow",
    "swapwindow",
    "resizeactive",
    "resizewindow",
    "centerwindow",
    "cyclenext",
    "focuswindow",
    "focusmonitor",
    "togglegroup",
    "changegroupactive",
    "layoutmsg",
    "dpms",
    "forcerendererreload",
];

/// Rule kinds accepted by `windowrule`.
pub const WINDOW_RULE_KINDS: &[&str] = &[
    "workspace",
    "float",
    "tile",
    "pseudo",
    "size",
    "minsize",
    "maxsize",
    "opacity",
    "move",
    "center",
    "fullscreen",
    "maximize",
    "pin",
    "monitor",
    "rounding",
    "animation",
    "bordercolor",
    "noblur",
    "noborder",
    "noshadow",
    "nofocus",
    "noanim",
    "dimaround",
    "stayfocused",
    "idleinhibit",
    "suppressevent",
];

/// Rule kinds accepted by `layerrule`.
pub const LAYER_RULE_KINDS: &[&str] = &[
    "blur",
    "ignorezero",
    "ignorealpha",
    "noanim",
    "xray",
    "animation",
    "dimaround",
    "order",
    "abovelock",
];

const NAMED_KEYS: &[&str] = &[
    "Return",
    "Space",
    "Tab",
    "Backspace",
    "Escape",
    "Print",
    "Insert",
    "Delete",
    "Home",
    "End",
    "PageUp",
    "PageDown",
    "Prior",
    "Next",
    "Left",
    "Right",
    "Up",
    "Down",
    "comma",
    "period",
    "slash",
    "backslash",
    "semicolon",
    "apostrophe",
    "grave",
    "minus",
    "equal",
    "bracketleft",
    "bracketright",
    "mouse_up",
    "mouse_down",
    "mouse:272",
    "mouse:273",
    "mouse:274",
    "XF86AudioRaiseVolume",
    "XF86AudioLowerVolume",
    "XF86AudioMute",
    "XF86AudioMicMute",
    "XF86AudioPlay",
    "XF86AudioPause",
    "XF86AudioNext",
    "XF86AudioPrev",
    "XF86MonBrightnessUp",
    "XF86MonBrightnessDown",
];

/// Every recognized key name, lowercased.
static KEYS: LazyLock<HashSet<String>> = LazyLock::new(|| {
    let digits = ('0'..='9').map(String::from);
    let letters = ('a'..='z').map(String::from);
    let function = (1..=12).map(|n| format!("f{n}"));
    let named = NAMED_KEYS.iter().map(|k| k.to_ascii_lowercase());
    digits.chain(letters).chain(function).chain(named).collect()
});

fn contains(set: &[&str], name: &str) -> bool {
    set.iter().any(|item| item.eq_ignore_ascii_case(name))
}

#[must_use]
pub fn is_key(name: &str) -> bool {
    KEYS.contains(&name.to_ascii_lowercase())
}

#[must_use]
pub fn is_modifier(name: &str) -> bool {
    contains(MODIFIERS, name)
}

#[must_use]
pub fn is_dispatcher(name: &str) -> bool {
    contains(DISPATCHERS, name)
}

#[must_use]
pub fn is_window_rule_kind(name: &str) -> bool {
    contains(WINDOW_RULE_KINDS, name)
}

#[must_use]
pub fn is_layer_rule_kind(name: &str) -> bool {
    contains(LAYER_RULE_KINDS, name)
}
