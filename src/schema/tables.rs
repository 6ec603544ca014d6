//! Field tables for every fixed section.
//!
//! These tables are the only place that ties key names to struct fields.
//! The mapper, the validator, the serializer and the editor session all
//! read them.

use crate::model::FieldValue;

use super::descriptor::{FieldDescriptor, FieldKind, Pattern, SectionSchema};

macro_rules! field {
    ($section:ident . $field:ident, $key:literal, $label:literal, $kind:expr) => {
        field!($section.$field, $key, $label, $kind, None)
    };
    ($section:ident . $field:ident, $key:literal, $label:literal, $kind:expr, $pattern:expr) => {
        FieldDescriptor {
            key: $key,
            label: $label,
            kind: $kind,
            pattern: $pattern,
            get: |c| FieldValue::to_value(&c.$section.$field),
            set: |c, v| {
                if let Some(x) = FieldValue::from_value(v) {
                    c.$section.$field = x;
                    true
                } else {
                    false
                }
            },
        }
    };
}

const fn int(min: i64, max: i64) -> FieldKind {
    FieldKind::Int { min, max }
}

const fn float(min: f64, max: f64) -> FieldKind {
    FieldKind::Float { min, max }
}

const BOOL: FieldKind = FieldKind::Bool;
const STR: FieldKind = FieldKind::Str;

/// Upper bound for pixel sizes (borders, gaps, blur).
const PIXELS: i64 = 1000;
/// Upper bound for opacity-like multipliers.
const OPACITY_MAX: f64 = 10.0;

pub const LAYOUTS: &[&str] = &["dwindle", "master"];
pub const SCROLL_METHODS: &[&str] = &["2fg", "edge", "on_button_down", "no_scroll"];

static GENERAL: &[FieldDescriptor] = &[
    field!(general.border_size, "border_size", "Border Size", int(0, PIXELS)),
    field!(general.gaps_in, "gaps_in", "Gaps In", int(0, PIXELS)),
    field!(general.gaps_out, "gaps_out", "Gaps Out", int(0, PIXELS)),
    field!(general.cursor_inactive_timeout, "cursor_inactive_timeout", "Cursor Inactive Timeout", int(0, 3600)),
    field!(general.layout, "layout", "Layout", FieldKind::Enum(LAYOUTS)),
    field!(general.no_focus_fallback, "no_focus_fallback", "No Focus Fallback", BOOL),
    field!(general.sensitivity, "sensitivity", "Sensitivity", float(0.0, OPACITY_MAX)),
    field!(general.allow_tearing, "allow_tearing", "Allow Tearing", BOOL),
    field!(general.resize_on_border, "resize_on_border", "Resize On Border", BOOL),
    field!(general.active_border, "col.active_border", "Active Border Color", STR, Some(Pattern::Gradient)),
    field!(general.inactive_border, "col.inactive_border", "Inactive Border Color", STR, Some(Pattern::Gradient)),
];

static DECORATION: &[FieldDescriptor] = &[
    field!(decoration.rounding, "rounding", "Rounding", int(0, PIXELS)),
    field!(decoration.blur_enabled, "blur", "Blur Enabled", BOOL),
    field!(decoration.blur_size, "blur_size", "Blur Size", int(0, PIXELS)),
    field!(decoration.blur_passes, "blur_passes", "Blur Passes", int(0, PIXELS)),
    field!(decoration.opacity, "active_opacity", "Active Opacity", float(0.0, OPACITY_MAX)),
    field!(decoration.inactive_opacity, "inactive_opacity", "Inactive Opacity", float(0.0, OPACITY_MAX)),
    field!(decoration.drop_shadow, "drop_shadow", "Drop Shadow", BOOL),
    field!(decoration.shadow_range, "shadow_range", "Shadow Range", int(0, PIXELS)),
    field!(decoration.shadow_color, "shadow_color", "Shadow Color", STR, Some(Pattern::Color)),
    field!(decoration.dim_inactive, "dim_inactive", "Dim Inactive", BOOL),
];

static ANIMATIONS: &[FieldDescriptor] = &[
    field!(animations.enabled, "enabled", "Enabled", BOOL),
    field!(animations.first_launch_animation, "first_launch_animation", "First Launch Animation", BOOL),
];

static INPUT: &[FieldDescriptor] = &[
    field!(input.kb_model, "kb_model", "Keyboard Model", STR),
    field!(input.kb_layout, "kb_layout", "Keyboard Layout", STR),
    field!(input.kb_variant, "kb_variant", "Keyboard Variant", STR),
    field!(input.kb_options, "kb_options", "Keyboard Options", STR),
    field!(input.numlock_by_default, "numlock_by_default", "NumLock by Default", BOOL),
    field!(input.repeat_rate, "repeat_rate", "Repeat Rate", int(0, PIXELS)),
    field!(input.repeat_delay, "repeat_delay", "Repeat Delay", int(0, 10_000)),
    field!(input.sensitivity, "sensitivity", "Sensitivity", float(-1.0, 1.0)),
    field!(input.natural_scroll, "natural_scroll", "Natural Scroll", BOOL),
    field!(input.scroll_method, "scroll_method", "Scroll Method", FieldKind::Enum(SCROLL_METHODS)),
    field!(input.scroll_button, "scroll_button", "Scroll Button", int(0, PIXELS)),
    field!(input.scroll_factor, "scroll_factor", "Scroll Factor", float(0.0, OPACITY_MAX)),
    field!(input.follow_mouse, "follow_mouse", "Follow Mouse", int(0, 3)),
    field!(input.mouse_refocus, "mouse_refocus", "Mouse Refocus", BOOL),
];

static TOUCHPAD: &[FieldDescriptor] = &[
    field!(touchpad.disable_while_typing, "disable_while_typing", "Disable While Typing", BOOL),
    field!(touchpad.natural_scroll, "natural_scroll", "Natural Scroll", BOOL),
    field!(touchpad.scroll_factor, "scroll_factor", "Scroll Factor", float(0.0, OPACITY_MAX)),
    field!(touchpad.tap_to_click, "tap-to-click", "Tap to Click", BOOL),
    field!(touchpad.clickfinger_behavior, "clickfinger_behavior", "Clickfinger Behavior", BOOL),
    field!(touchpad.drag_lock, "drag_lock", "Drag Lock", BOOL),
    field!(touchpad.middle_button_emulation, "middle_button_emulation", "Middle Button Emulation", BOOL),
];

static GESTURES: &[FieldDescriptor] = &[
    field!(gestures.workspace_swipe, "workspace_swipe", "Workspace Swipe", BOOL),
    field!(gestures.workspace_swipe_fingers, "workspace_swipe_fingers", "Swipe Fingers", int(1, 5)),
    field!(gestures.workspace_swipe_distance, "workspace_swipe_distance", "Swipe Distance", int(0, 5000)),
    field!(gestures.workspace_swipe_invert, "workspace_swipe_invert", "Invert Swipe", BOOL),
    field!(gestures.workspace_swipe_cancel_ratio, "workspace_swipe_cancel_ratio", "Swipe Cancel Ratio", float(0.0, 1.0)),
    field!(gestures.workspace_swipe_forever, "workspace_swipe_forever", "Swipe Forever", BOOL),
];

static MISC: &[FieldDescriptor] = &[
    field!(misc.disable_hyprland_logo, "disable_hyprland_logo", "Disable Logo", BOOL),
    field!(misc.disable_splash_rendering, "disable_splash_rendering", "Disable Splash", BOOL),
    field!(misc.force_default_wallpaper, "force_default_wallpaper", "Force Default Wallpaper", int(-1, 2)),
    field!(misc.vfr, "vfr", "Variable Frame Rate", BOOL),
    field!(misc.vrr, "vrr", "Variable Refresh Rate", int(0, 2)),
    field!(misc.mouse_move_enables_dpms, "mouse_move_enables_dpms", "Mouse Move Wakes Display", BOOL),
    field!(misc.key_press_enables_dpms, "key_press_enables_dpms", "Key Press Wakes Display", BOOL),
    field!(misc.animate_manual_resizes, "animate_manual_resizes", "Animate Manual Resizes", BOOL),
    field!(misc.focus_on_activate, "focus_on_activate", "Focus on Activate", BOOL),
];

static DEBUG: &[FieldDescriptor] = &[
    field!(debug.overlay, "overlay", "Overlay", BOOL),
    field!(debug.damage_blink, "damage_blink", "Damage Blink", BOOL),
    field!(debug.disable_logs, "disable_logs", "Disable Logs", BOOL),
    field!(debug.disable_time, "disable_time", "Disable Time", BOOL),
    field!(debug.damage_tracking, "damage_tracking", "Damage Tracking", int(0, 2)),
    field!(debug.enable_stdout_logs, "enable_stdout_logs", "Stdout Logs", BOOL),
];

static XWAYLAND: &[FieldDescriptor] = &[
    field!(xwayland.enabled, "enabled", "Enabled", BOOL),
    field!(xwayland.use_nearest_neighbor, "use_nearest_neighbor", "Nearest Neighbor Scaling", BOOL),
    field!(xwayland.force_zero_scaling, "force_zero_scaling", "Force Zero Scaling", BOOL),
];

static OPENGL: &[FieldDescriptor] = &[
    field!(opengl.nvidia_anti_flicker, "nvidia_anti_flicker", "NVIDIA Anti Flicker", BOOL),
    field!(opengl.force_introspection, "force_introspection", "Force Introspection", int(0, 2)),
];

static CURSOR: &[FieldDescriptor] = &[
    field!(cursor.no_hardware_cursors, "no_hardware_cursors", "No Hardware Cursors", BOOL),
    field!(cursor.inactive_timeout, "inactive_timeout", "Inactive Timeout", int(0, 3600)),
    field!(cursor.hide_on_key_press, "hide_on_key_press", "Hide on Key Press", BOOL),
    field!(cursor.no_warps, "no_warps", "No Warps", BOOL),
    field!(cursor.enable_hyprcursor, "enable_hyprcursor", "Enable Hyprcursor", BOOL),
    field!(cursor.zoom_factor, "zoom_factor", "Zoom Factor", float(1.0, OPACITY_MAX)),
];

/// All fixed sections, parents before their children.
pub static SECTIONS: &[SectionSchema] = &[
    SectionSchema { path: &["general"], title: "General", fields: GENERAL },
    SectionSchema { path: &["decoration"], title: "Decoration", fields: DECORATION },
    SectionSchema { path: &["animations"], title: "Animations", fields: ANIMATIONS },
    SectionSchema { path: &["input"], title: "Input", fields: INPUT },
    SectionSchema { path: &["input", "touchpad"], title: "Touchpad", fields: TOUCHPAD },
    SectionSchema { path: &["gestures"], title: "Gestures", fields: GESTURES },
    SectionSchema { path: &["misc"], title: "Misc", fields: MISC },
    SectionSchema { path: &["debug"], title: "Debug", fields: DEBUG },
    SectionSchema { path: &["xwayland"], title: "XWayland", fields: XWAYLAND },
    SectionSchema { path: &["opengl"], title: "OpenGL", fields: OPENGL },
    SectionSchema { path: &["cursor"], title: "Cursor", fields: CURSOR },
];
